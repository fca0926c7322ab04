use crate::shared::dom;
use contracts::shortcuts::anchor_target;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// In-page link that scrolls smoothly instead of jumping.
#[component]
pub fn SmoothAnchor(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let target = href.clone();
    let on_click = move |ev: MouseEvent| {
        if !target.starts_with('#') {
            return;
        }
        ev.prevent_default();
        if let Some(id) = anchor_target(&target) {
            if !dom::scroll_to_id(id) {
                log::debug!("anchor target '#{}' not on page", id);
            }
        }
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
