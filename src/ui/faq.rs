//! FAQ accordion; opening a question closes the previous one

use leptos::prelude::*;

use crate::core::Accordion;
use crate::core::content::{FAQS, Faq};

#[component]
pub fn FaqSection() -> impl IntoView {
    let (accordion, set_accordion) = signal(Accordion::new());

    view! {
        <section class="faq-section">
            <h2 class="section-title">"Perguntas "<span>"Frequentes"</span></h2>
            <div class="faq-container">
                {FAQS
                    .iter()
                    .enumerate()
                    .map(|(index, faq)| view! {
                        <FaqItem
                            faq=*faq
                            index=index
                            accordion=accordion
                            on_toggle=Callback::new(move |_| {
                                set_accordion.update(|accordion| accordion.toggle(index))
                            })
                        />
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn FaqItem(
    faq: Faq,
    index: usize,
    accordion: ReadSignal<Accordion>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    let is_open = move || accordion.get().is_open(index);

    view! {
        <div
            class="faq-item"
            class:active=is_open
            on:click=move |_| on_toggle.run(())
        >
            <button class="faq-question" aria-expanded=move || is_open().to_string()>
                <span class="faq-question-text">{faq.question}</span>
                <span class="faq-icon">{move || accordion.get().icon(index)}</span>
            </button>
            <Show when=is_open>
                <div class="faq-answer">
                    <p>{faq.answer}</p>
                </div>
            </Show>
        </div>
    }
}
