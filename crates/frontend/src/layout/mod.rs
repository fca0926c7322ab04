pub mod footer;
pub mod global_context;
pub mod header;
pub mod tabs;

use crate::pages::PageView;
use leptos::prelude::*;

/// Page shell.
///
/// ```text
/// +------------------------------------------+
/// |  Header (shortcuts, Mehr, mobile button) |
/// +------------------------------------------+
/// |  Current page                            |
/// +------------------------------------------+
/// |  Footer                                  |
/// +------------------------------------------+
/// ```
///
/// Mega menu and mobile drawer are rendered by the header; the mobile tab
/// picker sheet is portaled into `<body>`.
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <header::Header />
        <main class="main-content">
            <PageView />
        </main>
        <footer::Footer />
    }
}
