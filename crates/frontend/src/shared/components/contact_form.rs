use crate::shared::dom;
use contracts::contact::ContactForm as ContactFormState;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Contact form that never leaves the page: submission only shows an acknowledgment.
#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(ContactFormState::default());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(message) = form.try_update(|f| f.submit()) {
            log::info!(
                "contact form submitted ({} this visit)",
                form.with_untracked(|f| f.submissions())
            );
            dom::alert(message);
        }
    };

    view! {
        <form id="contactForm" class="contact-form" on:submit=on_submit>
            <label>
                <span>"Name"</span>
                <input type="text" name="name" required />
            </label>
            <label>
                <span>"E-Mail"</span>
                <input type="email" name="email" required />
            </label>
            <label>
                <span>"Nachricht"</span>
                <textarea name="message" rows="5" required></textarea>
            </label>
            <button type="submit" class="btn-primary">"Nachricht senden"</button>
        </form>
    }
}
