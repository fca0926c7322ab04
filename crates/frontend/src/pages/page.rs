use crate::layout::global_context::use_site;
use crate::layout::tabs::TabsSection;
use crate::shared::components::{ContactForm, FaqAccordion, HeroSlider, SmoothAnchor};
use contracts::site::PageDef;
use leptos::prelude::*;

/// Renders whichever page is current; switching pages rebuilds every
/// component, so per-page state (slider timer, accordion, tab selection)
/// starts fresh like on a reload.
#[component]
pub fn PageView() -> impl IntoView {
    let site = use_site();

    move || {
        let slug = site.page.get();
        let page = site.config.with_value(|c| {
            c.page(&slug).cloned().unwrap_or_else(|| c.home().clone())
        });
        view! { <Page page=page /> }
    }
}

#[component]
fn Page(page: PageDef) -> impl IntoView {
    let site = use_site();
    let settings = site.settings();
    let slides = if page.hero {
        site.config.with_value(|c| c.slides.clone())
    } else {
        Vec::new()
    };
    let group = page.tab_group();
    let has_faq = !page.faq.is_empty();

    view! {
        <article class="page" data-page=page.slug>
            <HeroSlider slides=slides duration_ms=settings.slide_duration_ms />
            <header class="page-header">
                <h1>{page.title}</h1>
                <p class="page-intro">{page.intro}</p>
                {has_faq.then(|| view! {
                    <SmoothAnchor href="#faq" class="page-faq-link">"Häufige Fragen"</SmoothAnchor>
                })}
            </header>
            <TabsSection group=group />
            {page.contact_form.then(|| view! { <ContactForm /> })}
            <FaqAccordion items=page.faq />
        </article>
    }
}
