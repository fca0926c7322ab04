use crate::layout::global_context::use_site;
use crate::layout::header::menu_link::MenuLinkItem;
use crate::shared::dom;
use crate::shared::icons::icon;
use contracts::menu::MenuState;
use leptos::ev;
use leptos::prelude::*;

#[component]
pub fn MobileMenu(menu: RwSignal<MenuState>) -> impl IntoView {
    let site = use_site();
    let sections = site.config.with_value(|c| c.menu.clone());
    let is_open = move || menu.with(|m| m.is_open());

    Effect::new(move |_| {
        let open = is_open();
        if let Some(class) = menu.with_untracked(|m| m.kind().body_class()) {
            dom::set_body_class(class, open);
        }
    });

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && menu.try_update(|m| m.escape()).unwrap_or(false) {
            log::debug!("mobile menu: closed by Escape");
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <div
            id="mobileMenuOverlay"
            class="mobile-menu-overlay"
            class:active=is_open
            on:click=move |_| menu.update(MenuState::close)
        ></div>
        <aside
            id="mobileMenu"
            class="mobile-menu"
            class:active=is_open
            aria-hidden=move || (!is_open()).to_string()
        >
            <div class="mobile-menu-header">
                <span class="mobile-menu-title">"Menü"</span>
                <button
                    id="mobileMenuClose"
                    class="mobile-menu-close"
                    aria-label="Menü schließen"
                    on:click=move |_| menu.update(MenuState::close)
                >
                    {icon("x")}
                </button>
            </div>
            <nav class="mobile-menu-nav">
                {sections.into_iter().map(|section| {
                    view! {
                        <div class="mobile-menu-section">
                            <h3>{section.title}</h3>
                            {section.links.into_iter().map(|link| {
                                view! { <MenuLinkItem link=link menu=menu /> }
                            }).collect_view()}
                        </div>
                    }
                }).collect_view()}
            </nav>
        </aside>
    }
}
