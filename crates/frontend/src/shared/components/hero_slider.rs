use contracts::site::Slide;
use contracts::slider::SliderState;
use gloo_timers::callback::Interval;
use leptos::prelude::*;

/// Hero slider rotating every `duration_ms`; clicking a progress bar jumps
/// to its slide and re-arms the rotation.
#[component]
pub fn HeroSlider(slides: Vec<Slide>, duration_ms: u32) -> impl IntoView {
    if slides.is_empty() {
        return view! { <></> }.into_any();
    }

    let count = slides.len();
    let state = RwSignal::new(SliderState::new(count));
    // Interval is !Send, so it lives in local storage. It is dropped (and
    // cleared) together with the owning component.
    let timer = StoredValue::new_local(None::<Interval>);

    let restart = move || {
        timer.update_value(|slot| {
            // dropping the previous interval clears it
            slot.take();
            *slot = Some(Interval::new(duration_ms, move || {
                state.try_update(SliderState::advance);
            }));
        });
    };

    restart();

    view! {
        <section class="hero">
            <div class="slides">
                {slides.into_iter().enumerate().map(|(index, slide)| {
                    let is_active = move || state.with(|s| s.is_active(index));
                    let style = slide.image.map(|img| format!("background-image: url('{}');", img));
                    view! {
                        <div
                            class="slide"
                            class:active=is_active
                            aria-hidden=move || (!is_active()).to_string()
                            style=style
                        >
                            <div class="slide-content">
                                <h1>{slide.title}</h1>
                                <p>{slide.text}</p>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
            <div class="slider-progress">
                {(0..count).map(|index| {
                    view! {
                        <button
                            class=move || state.with(|s| s.bar_status(index).class())
                            aria-label=format!("Folie {}", index + 1)
                            on:click=move |_| {
                                state.update(|s| {
                                    s.show(index);
                                });
                                restart();
                                log::debug!("slider: jumped to slide {}", index);
                            }
                        >
                            <span class="progress-fill"></span>
                        </button>
                    }
                }).collect_view()}
            </div>
        </section>
    }
    .into_any()
}
