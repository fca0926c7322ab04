use crate::layout::global_context::{page_href, use_site};
use crate::layout::header::{MegaMenu, MobileMenu, NavButtons};
use crate::shared::icons::icon;
use contracts::menu::{MenuKind, MenuState};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let site = use_site();
    let mega = RwSignal::new(MenuState::new(MenuKind::Mega));
    let mobile = RwSignal::new(MenuState::new(MenuKind::Mobile));
    let mega_open = move || mega.with(|m| m.is_open());
    let mobile_open = move || mobile.with(|m| m.is_open());

    let home = site.config.with_value(|c| c.home().slug.clone());
    let home_href = page_href(&home);
    let on_logo = move |ev: MouseEvent| {
        ev.prevent_default();
        site.navigate(&home);
    };

    view! {
        <header class="header" id="top">
            <div class="header-content">
                <a class="logo" href=home_href on:click=on_logo>
                    <span class="logo-icon">{icon("heart")}</span>
                    <span class="logo-text">{site.site_name()}</span>
                </a>
                <NavButtons />
                <button
                    id="mehrBtn"
                    class="mehr-btn"
                    class:active=mega_open
                    aria-controls="megaMenu"
                    aria-expanded=move || mega_open().to_string()
                    on:click=move |_| {
                        mega.update(MenuState::toggle);
                        let opened = mega.with_untracked(|m| m.is_open());
                        log::debug!("mega menu: {}", if opened { "opened" } else { "closed" });
                    }
                >
                    <span>"Mehr"</span>
                    {icon("chevron-down")}
                </button>
                <button
                    class="mobile-menu-btn"
                    aria-label="Menü öffnen"
                    aria-controls="mobileMenu"
                    aria-expanded=move || mobile_open().to_string()
                    on:click=move |_| mobile.update(MenuState::open)
                >
                    {icon("menu")}
                </button>
            </div>
        </header>
        <MegaMenu menu=mega />
        <MobileMenu menu=mobile />
    }
}
