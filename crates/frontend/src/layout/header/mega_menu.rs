use crate::layout::global_context::use_site;
use crate::layout::header::menu_link::MenuLinkItem;
use contracts::menu::MenuState;
use leptos::ev;
use leptos::prelude::*;

/// Full-width "Mehr" panel and its overlay.
///
/// Open state lives in `menu`, owned by the header so the toggle button can
/// share it. Escape and overlay clicks close it.
#[component]
pub fn MegaMenu(menu: RwSignal<MenuState>) -> impl IntoView {
    let site = use_site();
    let sections = site.config.with_value(|c| c.menu.clone());
    let is_open = move || menu.with(|m| m.is_open());

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && menu.try_update(|m| m.escape()).unwrap_or(false) {
            log::debug!("mega menu: closed by Escape");
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <div
            id="megaOverlay"
            class="mega-overlay"
            class:active=is_open
            on:click=move |_| menu.update(MenuState::close)
        ></div>
        <div
            id="megaMenu"
            class="mega-menu"
            class:active=is_open
            aria-hidden=move || (!is_open()).to_string()
        >
            <div class="mega-menu-content">
                {sections.into_iter().map(|section| {
                    view! {
                        <div class="mega-menu-section">
                            <h3 class="mega-menu-title">{section.title}</h3>
                            {section.links.into_iter().map(|link| {
                                view! { <MenuLinkItem link=link menu=menu /> }
                            }).collect_view()}
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
