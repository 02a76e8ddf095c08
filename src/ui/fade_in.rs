//! Fade-in wrapper revealed once when scrolled into view

use leptos::html;
use leptos::prelude::*;

use crate::core::Threshold;
use crate::core::reveal::FADE_IN_THRESHOLD;
use crate::ui::scroll::use_reveal;

/// Wraps its children in a block that fades in the first time at least
/// `threshold` of it is visible.
#[component]
pub fn FadeInOnScroll(
    /// Visible fraction required to reveal the block
    #[prop(default = FADE_IN_THRESHOLD)]
    threshold: f64,
    /// Extra CSS classes for the wrapper
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let state = use_reveal(node_ref, Threshold::new(threshold));

    view! {
        <div
            node_ref=node_ref
            class=format!("fade-on-scroll {class}")
            class:visible=move || state.get().is_revealed()
        >
            {children()}
        </div>
    }
}
