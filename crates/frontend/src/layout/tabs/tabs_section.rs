use crate::layout::global_context::use_site;
use crate::layout::tabs::{MobileTabPicker, TabsController};
use crate::shared::icons::icon;
use contracts::tabs::TabGroup;
use leptos::prelude::*;

#[component]
pub fn TabsSection(group: TabGroup) -> impl IntoView {
    if group.is_empty() {
        return view! { <></> }.into_any();
    }

    let site = use_site();
    let controller = TabsController::new(group);
    site.register_tabs(controller);
    on_cleanup(move || site.unregister_tabs(controller));

    let tabs = controller.tabs();

    view! {
        <section class="tabs-section" id="tabs" node_ref=site.tabs_section>
            <MobileTabPicker controller=controller />
            <nav class="tabs-header" role="tablist">
                {tabs.iter().map(|tab| {
                    let id = tab.id.clone();
                    let id_for_state = tab.id.clone();
                    let is_active = Memo::new(move |_| controller.is_selected(&id_for_state));
                    view! {
                        <button
                            class=format!("tab-btn {}", tab.accent.class())
                            class:active=is_active
                            role="tab"
                            data-tab=tab.id.clone()
                            aria-selected=move || is_active.get().to_string()
                            on:click=move |_| {
                                controller.select(&id);
                            }
                        >
                            {tab.icon.as_deref().map(icon)}
                            <span>{tab.label.clone()}</span>
                        </button>
                    }
                }).collect_view()}
            </nav>
            <div class="tabs-content">
                {tabs.into_iter().map(|tab| {
                    let id_for_state = tab.id.clone();
                    let is_active = Memo::new(move |_| controller.is_selected(&id_for_state));
                    view! {
                        <div
                            class="tab-panel"
                            class:active=is_active
                            role="tabpanel"
                            data-panel=tab.id
                            aria-hidden=move || (!is_active.get()).to_string()
                        >
                            <h3>{tab.label}</h3>
                            {tab.subtitle.map(|s| view! { <p class="tab-panel-subtitle">{s}</p> })}
                            <p>{tab.body}</p>
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
    .into_any()
}
