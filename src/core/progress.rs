//! Timeline scroll progress and bonus band geometry
//!
//! Two pure computations drive the timeline indicator:
//!
//! - [`compute_progress`]: how much of the timeline has scrolled into view,
//!   from the viewport height and the timeline's bounding rectangle.
//! - [`compute_bonus_span`]: where the highlighted "bonus" module sits inside
//!   the timeline, as a `(start, end)` pair of percentages.
//!
//! Both are published to the page as CSS custom properties.
//!
//! # Example
//!
//! ```rust
//! use moldef1::core::progress::{ProgressTracker, RegionRect, SubElement, compute_bonus_span};
//!
//! let mut tracker = ProgressTracker::new();
//! let progress = tracker.update(800.0, RegionRect::new(400.0, 1000.0));
//! assert_eq!(progress.percent(), 40.0);
//!
//! let band = compute_bonus_span(2000.0, Some(SubElement::new(1600.0, 200.0)));
//! assert_eq!((band.start().percent(), band.end().percent()), (80.0, 90.0));
//! ```

use derive_more::Display;

/// CSS variable holding the filled part of the timeline line
pub const PROGRESS_VAR: &str = "--line-progress";

/// CSS variables holding the bonus band limits
pub const BONUS_START_VAR: &str = "--bonus-start";
pub const BONUS_END_VAR: &str = "--bonus-end";

/// A percentage in `[0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Display)]
#[display("{_0}%")]
pub struct Percent(f64);

impl Percent {
    pub const ZERO: Percent = Percent(0.0);
    pub const FULL: Percent = Percent(100.0);

    /// Build from a percentage value, clamped to `[0, 100]`
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 100.0))
        } else {
            Self::ZERO
        }
    }

    /// Build from a fraction, clamped to `[0, 1]` before scaling
    pub fn from_fraction(fraction: f64) -> Self {
        if fraction.is_finite() {
            Self(fraction.clamp(0.0, 1.0) * 100.0)
        } else {
            Self::ZERO
        }
    }

    pub fn percent(&self) -> f64 {
        self.0
    }
}

/// Bounding rectangle of the tracked region, relative to the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionRect {
    /// Distance from the viewport top to the region top (negative once scrolled past)
    pub top: f64,
    /// Rendered height of the region
    pub height: f64,
}

impl RegionRect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

/// Position of the bonus item inside the tracked region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubElement {
    pub offset_top: f64,
    pub offset_height: f64,
}

impl SubElement {
    pub fn new(offset_top: f64, offset_height: f64) -> Self {
        Self {
            offset_top,
            offset_height,
        }
    }

    /// Position from page offsets of the item and its container.
    ///
    /// Offsets summed up the `offsetParent` chain do not depend on which
    /// ancestor happens to be the item's direct offset parent.
    pub fn from_page_offsets(item_top: f64, container_top: f64, height: f64) -> Self {
        Self::new(item_top - container_top, height)
    }
}

/// Compute the scroll progress of a region.
///
/// Returns `None` while the region top is still below the viewport
/// (`rect.top >= viewport_height`); callers keep their previous value in that
/// case. A region with no height (or non-finite geometry) reports 0%.
pub fn compute_progress(viewport_height: f64, rect: RegionRect) -> Option<Percent> {
    if !(rect.top < viewport_height) {
        return None;
    }

    if !(rect.height > 0.0) || !rect.height.is_finite() {
        return Some(Percent::ZERO);
    }

    let visible_height = viewport_height - rect.top;
    Some(Percent::from_fraction(visible_height / rect.height))
}

/// Last published progress of one timeline
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgressTracker {
    current: Percent,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute from current geometry; keeps the last value when the region
    /// has not been reached yet.
    pub fn update(&mut self, viewport_height: f64, rect: RegionRect) -> Percent {
        if let Some(progress) = compute_progress(viewport_height, rect) {
            self.current = progress;
        }
        self.current
    }

    pub fn current(&self) -> Percent {
        self.current
    }
}

/// Highlighted band inside the timeline
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BandSpan {
    start: Percent,
    end: Percent,
}

impl BandSpan {
    pub const EMPTY: BandSpan = BandSpan {
        start: Percent::ZERO,
        end: Percent::ZERO,
    };

    pub fn start(&self) -> Percent {
        self.start
    }

    pub fn end(&self) -> Percent {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Compute the bonus band from the region height and the bonus item position.
///
/// A missing bonus item yields an empty `(0%, 0%)` band. A zero total height
/// is treated as 1px so the division stays defined.
pub fn compute_bonus_span(total_height: f64, bonus: Option<SubElement>) -> BandSpan {
    let Some(bonus) = bonus else {
        return BandSpan::EMPTY;
    };

    let total = if total_height.is_finite() && total_height > 0.0 {
        total_height
    } else {
        1.0
    };

    let start = Percent::new(bonus.offset_top / total * 100.0);
    let end = Percent::new((bonus.offset_top + bonus.offset_height) / total * 100.0);

    BandSpan {
        start,
        end: if end < start { start } else { end },
    }
}

/// Page events the timeline reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutEvent {
    Mount,
    Scroll,
    Resize,
    Load,
}

impl LayoutEvent {
    pub const ALL: [LayoutEvent; 4] = [
        LayoutEvent::Mount,
        LayoutEvent::Scroll,
        LayoutEvent::Resize,
        LayoutEvent::Load,
    ];

    pub fn recomputes_progress(self) -> bool {
        matches!(self, LayoutEvent::Mount | LayoutEvent::Scroll | LayoutEvent::Resize)
    }

    /// Layout of the modules only moves on mount, resize and once images load
    pub fn recomputes_band(self) -> bool {
        matches!(self, LayoutEvent::Mount | LayoutEvent::Resize | LayoutEvent::Load)
    }
}

/// Geometry readings of a mounted timeline
pub trait TimelineLayout {
    fn viewport_height(&self) -> Option<f64>;

    /// Bounding rectangle relative to the viewport
    fn region(&self) -> Option<RegionRect>;

    fn total_height(&self) -> Option<f64>;

    fn bonus(&self) -> Option<SubElement>;
}

/// Values that changed after one event
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimelineUpdate {
    pub progress: Option<Percent>,
    pub band: Option<BandSpan>,
}

/// Progress and band of one timeline, recomputed per [`LayoutEvent`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimelineMeter {
    progress: ProgressTracker,
    band: BandSpan,
}

impl TimelineMeter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute what `event` affects, reading only the geometry it needs.
    pub fn handle(&mut self, event: LayoutEvent, layout: &impl TimelineLayout) -> TimelineUpdate {
        let mut update = TimelineUpdate::default();

        if event.recomputes_progress()
            && let (Some(viewport_height), Some(rect)) = (layout.viewport_height(), layout.region())
        {
            let before = self.progress.current();
            let progress = self.progress.update(viewport_height, rect);
            if progress != before {
                update.progress = Some(progress);
            }
        }

        if event.recomputes_band()
            && let Some(total_height) = layout.total_height()
        {
            let band = compute_bonus_span(total_height, layout.bonus());
            if band != self.band {
                self.band = band;
                update.band = Some(band);
            }
        }

        update
    }

    pub fn progress(&self) -> Percent {
        self.progress.current()
    }

    pub fn band(&self) -> BandSpan {
        self.band
    }
}

/// Inline style publishing progress and band as CSS custom properties
pub fn timeline_style(progress: Percent, band: BandSpan) -> String {
    format!(
        "{PROGRESS_VAR}: {progress}; {BONUS_START_VAR}: {}; {BONUS_END_VAR}: {};",
        band.start, band.end
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_percent_display() {
        assert_eq!(Percent::new(40.0).to_string(), "40%");
        assert_eq!(Percent::new(12.5).to_string(), "12.5%");
        assert_eq!(Percent::ZERO.to_string(), "0%");
    }

    #[test]
    fn test_percent_clamps() {
        assert_eq!(Percent::new(-3.0), Percent::ZERO);
        assert_eq!(Percent::new(250.0), Percent::FULL);
        assert_eq!(Percent::from_fraction(1.7), Percent::FULL);
        assert_eq!(Percent::from_fraction(f64::NAN), Percent::ZERO);
    }

    #[test]
    fn test_progress_partial() {
        let progress = compute_progress(800.0, RegionRect::new(400.0, 1000.0));
        assert_eq!(progress, Some(Percent::new(40.0)));
    }

    #[test]
    fn test_progress_scrolled_past_is_full() {
        let progress = compute_progress(800.0, RegionRect::new(-200.0, 1000.0));
        assert_eq!(progress, Some(Percent::FULL));
    }

    #[test]
    fn test_progress_far_past_region_stays_full() {
        let progress = compute_progress(800.0, RegionRect::new(-5000.0, 1000.0));
        assert_eq!(progress, Some(Percent::FULL));
    }

    #[test]
    fn test_progress_not_reached() {
        assert_eq!(compute_progress(800.0, RegionRect::new(800.0, 1000.0)), None);
        assert_eq!(compute_progress(800.0, RegionRect::new(1200.0, 1000.0)), None);
    }

    #[test]
    fn test_progress_zero_height_is_zero() {
        let progress = compute_progress(800.0, RegionRect::new(100.0, 0.0));
        assert_eq!(progress, Some(Percent::ZERO));
    }

    #[test]
    fn test_progress_negative_height_is_zero() {
        let progress = compute_progress(800.0, RegionRect::new(100.0, -20.0));
        assert_eq!(progress, Some(Percent::ZERO));
    }

    #[test]
    fn test_progress_nan_top_is_ignored() {
        assert_eq!(compute_progress(800.0, RegionRect::new(f64::NAN, 1000.0)), None);
    }

    #[test]
    fn test_progress_matches_formula() {
        let viewport: f64 = 900.0;
        for top in [-300.0, 0.0, 150.0, 450.0, 899.0] {
            for height in [1.0, 300.0, 1200.0] {
                let expected = ((viewport - top) / height).clamp(0.0, 1.0) * 100.0;
                let progress = compute_progress(viewport, RegionRect::new(top, height))
                    .map(|p| p.percent());
                assert_eq!(progress, Some(expected), "top={top} height={height}");
            }
        }
    }

    #[test]
    fn test_tracker_keeps_last_value_when_not_reached() {
        let mut tracker = ProgressTracker::new();
        tracker.update(800.0, RegionRect::new(400.0, 1000.0));

        let progress = tracker.update(800.0, RegionRect::new(900.0, 1000.0));
        assert_eq!(progress, Percent::new(40.0));
        assert_eq!(tracker.current(), Percent::new(40.0));
    }

    #[test]
    fn test_tracker_starts_at_zero() {
        let mut tracker = ProgressTracker::new();
        assert_eq!(tracker.current(), Percent::ZERO);
        assert_eq!(
            tracker.update(800.0, RegionRect::new(2000.0, 500.0)),
            Percent::ZERO
        );
    }

    #[test]
    fn test_tracker_is_idempotent() {
        let mut tracker = ProgressTracker::new();
        let rect = RegionRect::new(250.0, 700.0);
        let first = tracker.update(800.0, rect);
        let second = tracker.update(800.0, rect);
        assert_eq!(first, second);
    }

    #[test]
    fn test_bonus_span_without_bonus_item() {
        let band = compute_bonus_span(2000.0, None);
        assert_eq!(band, BandSpan::EMPTY);
        assert!(band.is_empty());
    }

    #[test]
    fn test_bonus_span_inside_region() {
        let band = compute_bonus_span(2000.0, Some(SubElement::new(1600.0, 200.0)));
        assert_eq!(band.start(), Percent::new(80.0));
        assert_eq!(band.end(), Percent::new(90.0));
        assert!(!band.is_empty());
    }

    #[test]
    fn test_bonus_span_overflowing_region_is_clamped() {
        let band = compute_bonus_span(1000.0, Some(SubElement::new(900.0, 400.0)));
        assert_eq!(band.start(), Percent::new(90.0));
        assert_eq!(band.end(), Percent::FULL);
    }

    #[test]
    fn test_bonus_span_zero_total_height() {
        let band = compute_bonus_span(0.0, Some(SubElement::new(0.0, 0.0)));
        assert_eq!(band, BandSpan::EMPTY);

        let band = compute_bonus_span(0.0, Some(SubElement::new(10.0, 5.0)));
        assert_eq!(band.start(), Percent::FULL);
        assert_eq!(band.end(), Percent::FULL);
    }

    #[test]
    fn test_bonus_span_ordering_holds() {
        for (top, height) in [(-50.0, 20.0), (0.0, 0.0), (300.0, -100.0), (1900.0, 500.0)] {
            let band = compute_bonus_span(2000.0, Some(SubElement::new(top, height)));
            assert!(band.start() <= band.end(), "top={top} height={height}");
            assert!(band.start() >= Percent::ZERO);
            assert!(band.end() <= Percent::FULL);
        }
    }

    #[test]
    fn test_timeline_style() {
        let band = compute_bonus_span(2000.0, Some(SubElement::new(1600.0, 200.0)));
        assert_eq!(
            timeline_style(Percent::new(40.0), band),
            "--line-progress: 40%; --bonus-start: 80%; --bonus-end: 90%;"
        );
    }

    #[test]
    fn test_sub_element_from_page_offsets() {
        // Bonus item 2800px down the page, timeline starting at 1200px
        let bonus = SubElement::from_page_offsets(2800.0, 1200.0, 200.0);
        assert_eq!(bonus, SubElement::new(1600.0, 200.0));

        let band = compute_bonus_span(2000.0, Some(bonus));
        assert_eq!((band.start().percent(), band.end().percent()), (80.0, 90.0));
    }

    /// Mounted timeline that counts which readings were taken
    struct CountingLayout {
        region: RegionRect,
        bonus: Option<SubElement>,
        region_reads: Cell<u32>,
        band_reads: Cell<u32>,
    }

    impl CountingLayout {
        fn new(top: f64) -> Self {
            Self {
                region: RegionRect::new(top, 1000.0),
                bonus: Some(SubElement::new(1600.0, 200.0)),
                region_reads: Cell::new(0),
                band_reads: Cell::new(0),
            }
        }
    }

    impl TimelineLayout for CountingLayout {
        fn viewport_height(&self) -> Option<f64> {
            Some(800.0)
        }

        fn region(&self) -> Option<RegionRect> {
            self.region_reads.set(self.region_reads.get() + 1);
            Some(self.region)
        }

        fn total_height(&self) -> Option<f64> {
            self.band_reads.set(self.band_reads.get() + 1);
            Some(2000.0)
        }

        fn bonus(&self) -> Option<SubElement> {
            self.bonus
        }
    }

    /// Timeline whose element is not attached yet
    struct DetachedLayout;

    impl TimelineLayout for DetachedLayout {
        fn viewport_height(&self) -> Option<f64> {
            Some(800.0)
        }

        fn region(&self) -> Option<RegionRect> {
            None
        }

        fn total_height(&self) -> Option<f64> {
            None
        }

        fn bonus(&self) -> Option<SubElement> {
            None
        }
    }

    #[test]
    fn test_event_recompute_table() {
        let expected = [
            (LayoutEvent::Mount, true, true),
            (LayoutEvent::Scroll, true, false),
            (LayoutEvent::Resize, true, true),
            (LayoutEvent::Load, false, true),
        ];

        for (event, progress, band) in expected {
            let mut meter = TimelineMeter::new();
            let layout = CountingLayout::new(400.0);

            let update = meter.handle(event, &layout);

            assert_eq!(event.recomputes_progress(), progress, "{event:?}");
            assert_eq!(event.recomputes_band(), band, "{event:?}");
            assert_eq!(layout.region_reads.get(), u32::from(progress), "{event:?}");
            assert_eq!(layout.band_reads.get(), u32::from(band), "{event:?}");
            assert_eq!(update.progress.is_some(), progress, "{event:?}");
            assert_eq!(update.band.is_some(), band, "{event:?}");
        }
        assert_eq!(LayoutEvent::ALL.len(), expected.len());
    }

    #[test]
    fn test_meter_mount_publishes_both() {
        let mut meter = TimelineMeter::new();
        let update = meter.handle(LayoutEvent::Mount, &CountingLayout::new(400.0));

        assert_eq!(update.progress, Some(Percent::new(40.0)));
        assert_eq!(
            update.band,
            Some(compute_bonus_span(2000.0, Some(SubElement::new(1600.0, 200.0))))
        );
        assert_eq!(meter.progress().percent(), 40.0);
        assert_eq!(meter.band().end().percent(), 90.0);
    }

    #[test]
    fn test_meter_reports_only_changes() {
        let mut meter = TimelineMeter::new();
        let layout = CountingLayout::new(400.0);
        meter.handle(LayoutEvent::Mount, &layout);

        assert_eq!(meter.handle(LayoutEvent::Resize, &layout), TimelineUpdate::default());
    }

    #[test]
    fn test_scroll_leaves_band_until_load() {
        let mut meter = TimelineMeter::new();
        meter.handle(LayoutEvent::Mount, &CountingLayout::new(400.0));

        // Images finished loading and pushed the bonus item down
        let mut layout = CountingLayout::new(200.0);
        layout.bonus = Some(SubElement::new(1800.0, 200.0));

        let update = meter.handle(LayoutEvent::Scroll, &layout);
        assert_eq!(update.progress, Some(Percent::new(60.0)));
        assert_eq!(update.band, None);
        assert_eq!(meter.band().start().percent(), 80.0);

        let update = meter.handle(LayoutEvent::Load, &layout);
        assert_eq!(update.progress, None);
        assert_eq!(meter.band().start().percent(), 90.0);
        assert_eq!(meter.band().end().percent(), 100.0);
    }

    #[test]
    fn test_detached_timeline_is_noop() {
        let mut meter = TimelineMeter::new();
        for event in LayoutEvent::ALL {
            assert_eq!(meter.handle(event, &DetachedLayout), TimelineUpdate::default());
        }
        assert_eq!(meter, TimelineMeter::new());
    }
}
