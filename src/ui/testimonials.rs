//! Rotating carousel of student testimonials

use leptos::prelude::*;

use crate::core::Carousel;
use crate::core::carousel::ROTATION_INTERVAL_MS;
use crate::core::content::TESTIMONIALS;
use crate::ui::scroll::use_interval;

#[component]
pub fn Testimonials() -> impl IntoView {
    let (carousel, set_carousel) = signal(Carousel::new(TESTIMONIALS.len()));

    use_interval(ROTATION_INTERVAL_MS, move || {
        set_carousel.update(|carousel| {
            carousel.advance();
        });
        true
    });

    let current = move || {
        let index = carousel.get().current();
        view! {
            <img
                src=TESTIMONIALS[index]
                alt=format!("Depoimento {}", index + 1)
                class="testimonial-image"
            />
        }
    };

    view! {
        <section class="testimonials">
            <h2 class="section-title"><span>"Depoimentos"</span>" de alunas"</h2>
            <div class="testimonial-box">{current}</div>
        </section>
    }
}
