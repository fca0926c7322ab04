use crate::layout::tabs::TabsController;
use contracts::site::{SiteConfig, SiteSettings};
use leptos::html;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Query parameter carrying the current page slug
const PAGE_PARAM: &str = "page";

/// Site-wide store: catalog, current page and the mounted tabs section.
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub config: StoredValue<SiteConfig>,
    pub page: RwSignal<String>,
    /// Bound to the `.tabs-section` of the current page, if it has one
    pub tabs_section: NodeRef<html::Section>,
    tabs: RwSignal<Option<TabsController>>,
}

impl SiteContext {
    pub fn new(config: SiteConfig) -> Self {
        let home = config.home().slug.clone();
        Self {
            config: StoredValue::new(config),
            page: RwSignal::new(home),
            tabs_section: NodeRef::new(),
            tabs: RwSignal::new(None),
        }
    }

    pub fn settings(&self) -> SiteSettings {
        self.config.with_value(|c| c.settings)
    }

    pub fn site_name(&self) -> String {
        self.config.with_value(|c| c.name.clone())
    }

    /// Reads `?page=` once, then mirrors the current page back into the URL.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(slug) = params.get(PAGE_PARAM) {
            self.navigate(slug);
        }

        let this = *self;
        Effect::new(move |_| {
            let slug = this.page.get();
            let new_url = page_href(&slug);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    /// Switches to the page `slug`; unknown slugs are ignored.
    pub fn navigate(&self, slug: &str) -> bool {
        if !self.config.with_value(|c| c.page(slug).is_some()) {
            log::warn!("navigate: unknown page '{}'", slug);
            return false;
        }
        if self.page.with_untracked(|current| current == slug) {
            return false;
        }
        log::debug!("navigate: '{}'", slug);
        self.page.set(slug.to_string());
        true
    }

    pub fn register_tabs(&self, controller: TabsController) {
        self.tabs.set(Some(controller));
    }

    /// Drops the registration only if `controller` is still the registered one.
    pub fn unregister_tabs(&self, controller: TabsController) {
        self.tabs.maybe_update(|slot| {
            let is_current = slot.is_some_and(|current| current.is_same(&controller));
            if is_current {
                *slot = None;
            }
            is_current
        });
    }

    /// Tabs controller of the current page
    pub fn tabs(&self) -> Option<TabsController> {
        self.tabs.get_untracked()
    }
}

/// Relative link for the page `slug`
pub fn page_href(slug: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([(PAGE_PARAM, slug)])).unwrap_or_default();
    format!("?{}", query)
}

pub fn use_site() -> SiteContext {
    use_context::<SiteContext>().expect("SiteContext context not found")
}
