use crate::layout::global_context::SiteContext;
use crate::layout::Shell;
use contracts::site::SiteConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    match SiteConfig::embedded() {
        Ok(config) => {
            log::info!(
                "site catalog loaded: {} pages, {} slides",
                config.pages.len(),
                config.slides.len()
            );
            // Provide the SiteContext store to the whole app via context.
            let site = SiteContext::new(config);
            provide_context(site);
            site.init_router_integration();

            view! { <Shell /> }.into_any()
        }
        Err(err) => {
            log::error!("site catalog rejected: {err:#}");
            view! {
                <div class="catalog-error" role="alert">
                    "Die Seite konnte nicht geladen werden."
                </div>
            }
            .into_any()
        }
    }
}
