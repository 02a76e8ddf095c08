//! Course module timeline with a scroll-driven progress line
//!
//! The line fills as the timeline scrolls through the viewport, and the
//! stretch next to the bonus module is highlighted. Both are published as CSS
//! custom properties on the `.timeline` element.

use leptos::html;
use leptos::prelude::*;

use crate::core::content::{BONUS_SELECTOR, COURSE_NAME, MODULES, Module};
use crate::core::progress::timeline_style;
use crate::ui::fade_in::FadeInOnScroll;
use crate::ui::scroll::use_scroll_progress;

#[component]
pub fn Timeline() -> impl IntoView {
    let timeline_ref = NodeRef::<html::Div>::new();
    let (progress, band) = use_scroll_progress(timeline_ref, BONUS_SELECTOR);

    view! {
        <div class="timeline-wrapper">
            <h2 class="timeline-title">
                "Vou te mostrar todo o conteúdo que você encontrará no curso "
                <span>{COURSE_NAME}</span>
            </h2>

            <div
                class="timeline"
                node_ref=timeline_ref
                style=move || timeline_style(progress.get(), band.get())
            >
                {MODULES
                    .iter()
                    .map(|module| view! {
                        <FadeInOnScroll>
                            <TimelineItem module=*module />
                        </FadeInOnScroll>
                    })
                    .collect_view()}

                // Line, progress fill and end dots
                <div class="timeline-line"></div>
                <div class="timeline-progress"></div>
                <div class="timeline-dot top"></div>
                <div class="timeline-dot bottom"></div>
            </div>
        </div>
    }
}

#[component]
fn TimelineItem(module: Module) -> impl IntoView {
    view! {
        <div class=module.css_class()>
            <h3>{module.title}</h3>
            {module
                .topics
                .iter()
                .map(|topic| view! { <p>"• "{*topic}</p> })
                .collect_view()}
        </div>
    }
}
