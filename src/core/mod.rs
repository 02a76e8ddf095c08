//! Page state and content, independent of the browser
//!
//! Everything here is plain Rust so it can be unit tested natively; the
//! `ui` module binds these types to DOM events and timers.

pub mod accordion;
pub mod carousel;
#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod countdown;
pub mod progress;
pub mod reveal;
pub mod subscription;
#[cfg(test)]
mod tests;

pub use accordion::Accordion;
pub use carousel::Carousel;
pub use countdown::Countdown;
pub use progress::{
    BandSpan, LayoutEvent, Percent, ProgressTracker, RegionRect, SubElement, TimelineLayout,
    TimelineMeter, TimelineUpdate,
};
pub use reveal::{RevealState, RevealTracker, RevealTransition, Threshold};
pub use subscription::{DisposeGuard, Release, Ticker, Unobserve};
