//! Thin helpers over the handful of document APIs the components touch.
//!
//! Every helper degrades to a no-op when the element or the window is missing.

use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Adds or removes `class` on `<body>`
pub fn set_body_class(class: &str, on: bool) {
    let Some(body) = document().and_then(|d| d.body()) else {
        return;
    };
    let _ = body.class_list().toggle_with_force(class, on);
}

pub fn scroll_into_view(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smoothly scrolls to the element with `id`; returns false when it does not exist
pub fn scroll_to_id(id: &str) -> bool {
    match document().and_then(|d| d.get_element_by_id(id)) {
        Some(element) => {
            scroll_into_view(&element);
            true
        }
        None => false,
    }
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
