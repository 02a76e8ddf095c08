//! One-shot reveal state for fade-in-on-scroll blocks
//!
//! Every observed block starts `Pending` and moves to `Revealed` the first
//! time the viewport reports a visible fraction at or above its threshold.
//! `Revealed` is terminal: later notifications, including ones reporting the
//! block has scrolled away again, never change it.
//!
//! # Example
//!
//! ```rust
//! use moldef1::core::reveal::{RevealTracker, RevealTransition, Threshold};
//!
//! let mut tracker = RevealTracker::new(Threshold::new(0.1));
//!
//! assert_eq!(tracker.observe(0.05), RevealTransition::Unchanged);
//! assert_eq!(tracker.observe(0.2), RevealTransition::Revealed);
//! assert_eq!(tracker.observe(0.0), RevealTransition::Unchanged);
//! assert!(tracker.is_revealed());
//! ```

use crate::core::subscription::Unobserve;

/// Threshold used by the generic fade-in wrapper
pub const FADE_IN_THRESHOLD: f64 = 0.1;

/// Threshold used by the image content sections
pub const SECTION_THRESHOLD: f64 = 0.15;

/// Visible fraction of an element (0.0 - 1.0) required to reveal it
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

impl Threshold {
    /// Create a threshold, clamped to `[0, 1]`. Non-finite values become 0.
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self(0.0)
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Whether a reported intersection ratio satisfies this threshold
    pub fn is_met_by(&self, ratio: f64) -> bool {
        ratio.is_finite() && ratio >= self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(FADE_IN_THRESHOLD)
    }
}

/// Reveal state of an observed element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    /// Waiting for the element to enter the viewport
    #[default]
    Pending,
    /// Element has been shown; terminal
    Revealed,
}

impl RevealState {
    /// Extra CSS class applied to the wrapper in this state
    pub fn css_class(&self) -> &'static str {
        match self {
            RevealState::Pending => "",
            RevealState::Revealed => "visible",
        }
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealState::Revealed)
    }
}

/// Result of feeding one intersection notification into a tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealTransition {
    /// Nothing changed; keep observing (or already revealed)
    Unchanged,
    /// The element was just revealed; the caller should stop observing it
    Revealed,
}

/// Per-element reveal state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealTracker {
    threshold: Threshold,
    state: RevealState,
}

impl RevealTracker {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            state: RevealState::Pending,
        }
    }

    /// Feed one intersection ratio reported for this element.
    ///
    /// Returns `RevealTransition::Revealed` exactly once, on the first ratio
    /// that meets the threshold.
    pub fn observe(&mut self, ratio: f64) -> RevealTransition {
        match self.state {
            RevealState::Revealed => RevealTransition::Unchanged,
            RevealState::Pending if self.threshold.is_met_by(ratio) => {
                self.state = RevealState::Revealed;
                RevealTransition::Revealed
            }
            RevealState::Pending => RevealTransition::Unchanged,
        }
    }

    /// Feed one notification batch, entries in the order reported.
    ///
    /// The target that reveals is unobserved at once, so the observer stops
    /// reporting it. Returns `Revealed` if this batch revealed the element.
    pub fn observe_batch<T>(
        &mut self,
        entries: impl IntoIterator<Item = (T, f64)>,
        observer: &impl Unobserve<T>,
    ) -> RevealTransition {
        let mut transition = RevealTransition::Unchanged;
        for (target, ratio) in entries {
            if self.observe(ratio) == RevealTransition::Revealed {
                observer.unobserve(&target);
                transition = RevealTransition::Revealed;
            }
        }
        transition
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state.is_revealed()
    }
}

impl Default for RevealTracker {
    fn default() -> Self {
        Self::new(Threshold::default())
    }
}
