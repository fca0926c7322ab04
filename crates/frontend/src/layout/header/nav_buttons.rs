use crate::layout::global_context::{use_site, SiteContext};
use crate::shared::dom;
use contracts::shortcuts::NavAction;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Scrolls to the tabs section and, after the configured delay, selects the
/// shortcut's tab. Switches to the page declaring that tab first when the
/// current page does not have it.
fn activate_shortcut(site: SiteContext, action: NavAction) {
    let current = site.page.get_untracked();
    let Some(plan) = site.config.with_value(|c| c.plan_shortcut(action, &current)) else {
        log::warn!("shortcut '{}': no page has tab '{}'", action.action(), action.target_tab());
        return;
    };
    if let Some(slug) = &plan.navigate_to {
        site.navigate(slug);
    }
    let target = plan.tab;

    let delay = site.settings().tab_activation_delay_ms;
    spawn_local(async move {
        // next tick, so a page switch has rendered its tabs section
        TimeoutFuture::new(0).await;
        match site.tabs().and(site.tabs_section.get_untracked()) {
            Some(section) => dom::scroll_into_view(&section),
            None => log::debug!("shortcut '{}': no tabs section to scroll to", action.action()),
        }

        TimeoutFuture::new(delay).await;
        if let Some(tabs) = site.tabs() {
            tabs.select(target);
        }
    });
}

/// Header shortcut buttons (`.nav-btn[data-action]`)
#[component]
pub fn NavButtons() -> impl IntoView {
    let site = use_site();
    let shortcuts = site.config.with_value(|c| c.shortcuts.clone());

    view! {
        <nav class="header-nav">
            {shortcuts.into_iter().filter_map(|shortcut| {
                let action = NavAction::from_action(&shortcut.action)?;
                Some(view! {
                    <button
                        class="nav-btn"
                        data-action=shortcut.action
                        on:click=move |_| activate_shortcut(site, action)
                    >
                        {shortcut.label}
                    </button>
                })
            }).collect_view()}
        </nav>
    }
}
