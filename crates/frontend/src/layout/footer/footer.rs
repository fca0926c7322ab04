use crate::layout::global_context::{page_href, use_site};
use crate::shared::components::SmoothAnchor;
use crate::shared::icons::icon;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let site = use_site();
    let pages = site.config.with_value(|c| {
        c.pages
            .iter()
            .map(|p| (p.slug.clone(), p.title.clone()))
            .collect::<Vec<_>>()
    });

    view! {
        <footer class="footer">
            <nav class="footer-nav">
                {pages.into_iter().map(|(slug, title)| {
                    let href = page_href(&slug);
                    view! {
                        <a
                            href=href
                            on:click=move |ev: MouseEvent| {
                                ev.prevent_default();
                                site.navigate(&slug);
                            }
                        >
                            {title}
                        </a>
                    }
                }).collect_view()}
            </nav>
            <SmoothAnchor href="#top" class="footer-top">
                {icon("arrow-up")}
                <span>"Nach oben"</span>
            </SmoothAnchor>
            <p class="footer-copy">{format!("© {}", site.site_name())}</p>
        </footer>
    }
}
