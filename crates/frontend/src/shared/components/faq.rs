use crate::shared::icons::icon;
use contracts::accordion::Accordion;
use contracts::site::FaqItem;
use leptos::prelude::*;

#[component]
pub fn FaqAccordion(items: Vec<FaqItem>) -> impl IntoView {
    if items.is_empty() {
        return view! { <></> }.into_any();
    }

    let accordion = RwSignal::new(Accordion::default());

    view! {
        <section class="faq" id="faq">
            <h2>"Häufige Fragen"</h2>
            {items.into_iter().enumerate().map(|(index, item)| {
                let is_open = move || accordion.with(|a| a.is_open(index));
                view! {
                    <div class="faq-item" class:open=is_open class:active=is_open>
                        <button
                            class="faq-question"
                            aria-expanded=move || is_open().to_string()
                            on:click=move |_| accordion.update(|a| a.toggle(index))
                        >
                            <span>{item.question}</span>
                            <span class="faq-icon">{icon("chevron-down")}</span>
                        </button>
                        <div class="faq-answer" aria-hidden=move || (!is_open()).to_string()>
                            <p>{item.answer}</p>
                        </div>
                    </div>
                }
            }).collect_view()}
        </section>
    }
    .into_any()
}
