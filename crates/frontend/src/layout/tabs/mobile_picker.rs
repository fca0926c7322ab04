//! Mobile bottom-sheet picker for a tabs section.
//!
//! The pill and the sheet rows are a memo over the controller's group, so
//! they resync after every selection change, whatever triggered it.

use crate::layout::tabs::TabsController;
use crate::shared::dom;
use crate::shared::icons::icon;
use contracts::picker::{PickerItem, Popup, RowSelection, MIN_TABS};
use leptos::ev;
use leptos::portal::Portal;
use leptos::prelude::*;

const BODY_OPEN_CLASS: &str = "tabs-picker-open";

#[component]
pub fn MobileTabPicker(controller: TabsController) -> impl IntoView {
    if controller.tab_count() < MIN_TABS {
        return view! { <></> }.into_any();
    }

    let view_state = Memo::new(move |_| controller.picker_view());
    let popup = RwSignal::new(Popup::default());
    let is_open = move || popup.with(|p| p.is_open());

    let open = move || {
        popup.maybe_update(|p| p.open());
    };
    let close = move || {
        popup.maybe_update(|p| p.close());
    };

    let select_tab = move |id: String| {
        if controller.select_row(&id, popup) == RowSelection::Unknown {
            log::warn!("picker: no tab '{}'", id);
        }
    };

    Effect::new(move |_| {
        let opened = is_open();
        log::debug!("picker: {}", if opened { "opened" } else { "closed" });
        dom::set_body_class(BODY_OPEN_CLASS, opened);
    });

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            close();
        }
    });
    on_cleanup(move || {
        escape.remove();
        dom::set_body_class(BODY_OPEN_CLASS, false);
    });

    let pill_class = move || {
        view_state.with(|v| {
            v.as_ref()
                .map(|v| format!("tabs-picker-pill {}", v.pill.accent.class()))
                .unwrap_or_else(|| "tabs-picker-pill".to_string())
        })
    };

    view! {
        <div class="tabs-mobile-picker">
            <button
                class=pill_class
                aria-haspopup="dialog"
                aria-expanded=move || is_open().to_string()
                on:click=move |_| open()
            >
                <span class="tabs-picker-pill-icon">
                    {move || view_state.with(|v| v.as_ref().and_then(|v| v.pill.icon.clone())).map(|name| icon(&name))}
                </span>
                <span class="tabs-picker-pill-label">
                    {move || view_state.with(|v| v.as_ref().map(|v| v.pill.label.clone()))}
                </span>
            </button>
            <button class="tabs-picker-more" on:click=move |_| open()>
                {move || view_state.with(|v| v.as_ref().map(|v| format!("+{}", v.remaining)))}
            </button>
        </div>
        <Portal>
            <div
                class="tabs-picker-overlay"
                class:active=is_open
                on:click=move |_| close()
            ></div>
            <div
                class="tabs-picker-sheet"
                class:active=is_open
                role="dialog"
                aria-modal="true"
                aria-hidden=move || (!is_open()).to_string()
            >
                <div class="tabs-picker-sheet-header">
                    <span class="tabs-picker-sheet-title">"Bereich wählen"</span>
                    <button
                        class="tabs-picker-close"
                        aria-label="Schließen"
                        on:click=move |_| close()
                    >
                        {icon("x")}
                    </button>
                </div>
                <ul class="tabs-picker-list">
                    <For
                        each=move || view_state.get().map(|v| v.items).unwrap_or_default()
                        key=|item| (item.id.clone(), item.selected)
                        children=move |item: PickerItem| {
                            let id = item.id.clone();
                            view! {
                                <li>
                                    <button
                                        class=format!("tabs-picker-item {}", item.accent.class())
                                        class:selected=item.selected
                                        data-tab=item.id
                                        aria-selected=item.selected.to_string()
                                        on:click=move |_| select_tab(id.clone())
                                    >
                                        <span class="tabs-picker-item-icon">
                                            {item.icon.as_deref().map(icon)}
                                        </span>
                                        <span class="tabs-picker-item-text">
                                            <span class="tabs-picker-item-label">{item.label}</span>
                                            {item.subtitle.map(|s| view! {
                                                <span class="tabs-picker-item-subtitle">{s}</span>
                                            })}
                                        </span>
                                        <span class="tabs-picker-check">
                                            {item.selected.then(|| icon("check"))}
                                        </span>
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </div>
        </Portal>
    }
    .into_any()
}
