pub mod contact_form;
pub mod faq;
pub mod hero_slider;
pub mod smooth_anchor;

pub use contact_form::ContactForm;
pub use faq::FaqAccordion;
pub use hero_slider::HeroSlider;
pub use smooth_anchor::SmoothAnchor;
