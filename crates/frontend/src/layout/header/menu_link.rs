use crate::layout::global_context::{page_href, use_site};
use contracts::menu::MenuState;
use contracts::site::MenuLink;
use gloo_timers::future::TimeoutFuture;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Closes `menu` after `delay_ms`, letting the click feedback play first.
pub fn close_after(menu: RwSignal<MenuState>, delay_ms: u32) {
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        menu.try_update(MenuState::close);
    });
}

/// Link inside an overlay menu: switches page, then closes the menu.
#[component]
pub fn MenuLinkItem(link: MenuLink, menu: RwSignal<MenuState>) -> impl IntoView {
    let site = use_site();
    let slug = link.page.clone();
    let is_current = {
        let slug = slug.clone();
        move || site.page.with(|p| *p == slug)
    };

    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        site.navigate(&slug);
        close_after(menu, site.settings().menu_close_delay_ms);
    };

    view! {
        <a
            class="menu-link"
            class:current=is_current
            href=page_href(&link.page)
            on:click=on_click
        >
            <span class="menu-link-label">{link.label}</span>
            {link.description.map(|d| view! { <span class="menu-link-description">{d}</span> })}
        </a>
    }
}
