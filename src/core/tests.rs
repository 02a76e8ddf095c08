#[cfg(test)]
mod tests {
    use crate::core::content::{MODULES, TESTIMONIALS};
    use crate::core::progress::{compute_bonus_span, compute_progress, timeline_style};
    use crate::core::reveal::{FADE_IN_THRESHOLD, SECTION_THRESHOLD};
    use crate::core::{
        Accordion, BandSpan, Carousel, Countdown, DisposeGuard, Percent, ProgressTracker,
        RegionRect, Release, RevealState, RevealTracker, RevealTransition, SubElement, Threshold,
        Ticker,
    };
    use std::cell::Cell;
    use std::rc::Rc;

    /// Timer stub counting how often it was cancelled
    struct FakeInterval(Rc<Cell<u32>>);

    impl Release for FakeInterval {
        fn release(self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn test_timeline_partially_scrolled() {
        let mut tracker = ProgressTracker::new();
        let progress = tracker.update(800.0, RegionRect::new(400.0, 1000.0));

        assert_eq!(progress.percent(), 40.0);
        assert_eq!(progress.to_string(), "40%");
    }

    #[test]
    fn test_timeline_scrolled_past() {
        let mut tracker = ProgressTracker::new();
        let progress = tracker.update(800.0, RegionRect::new(-200.0, 1000.0));

        assert_eq!(progress, Percent::FULL);
    }

    #[test]
    fn test_bonus_band_at_end_of_timeline() {
        let band = compute_bonus_span(2000.0, Some(SubElement::new(1600.0, 200.0)));

        assert_eq!(band.start().percent(), 80.0);
        assert_eq!(band.end().percent(), 90.0);
    }

    #[test]
    fn test_fade_in_reveals_on_second_notification() {
        let mut tracker = RevealTracker::new(Threshold::new(0.1));

        assert_eq!(tracker.observe(0.05), RevealTransition::Unchanged);
        assert_eq!(tracker.state(), RevealState::Pending);

        assert_eq!(tracker.observe(0.2), RevealTransition::Revealed);
        assert_eq!(tracker.state(), RevealState::Revealed);

        assert_eq!(tracker.observe(0.0), RevealTransition::Unchanged);
        assert_eq!(tracker.state(), RevealState::Revealed);
    }

    #[test]
    fn test_batch_entries_are_independent() {
        // One notification batch reporting three blocks
        let batch = [0.3, 0.02, 0.15];
        let mut trackers = [
            RevealTracker::new(Threshold::new(FADE_IN_THRESHOLD)),
            RevealTracker::new(Threshold::new(FADE_IN_THRESHOLD)),
            RevealTracker::new(Threshold::new(SECTION_THRESHOLD)),
        ];

        let transitions: Vec<_> = trackers
            .iter_mut()
            .zip(batch)
            .map(|(tracker, ratio)| tracker.observe(ratio))
            .collect();

        assert_eq!(
            transitions,
            vec![
                RevealTransition::Revealed,
                RevealTransition::Unchanged,
                RevealTransition::Revealed,
            ]
        );
    }

    #[test]
    fn test_scroll_session_over_timeline() {
        // Viewport of 800px, timeline 1000px tall starting 1200px down the page
        let viewport = 800.0;
        let height = 1000.0;
        let mut tracker = ProgressTracker::new();

        let published: Vec<f64> = [0.0, 300.0, 500.0, 900.0, 1200.0, 2500.0, 700.0]
            .into_iter()
            .map(|scroll_y| {
                let rect = RegionRect::new(1200.0 - scroll_y, height);
                tracker.update(viewport, rect).percent()
            })
            .collect();

        // Region not reached until the top crosses the viewport bottom
        assert_eq!(published[0], 0.0);
        assert_eq!(published[1], 0.0);
        assert_eq!(published[2], 10.0);
        assert_eq!(published[3], 50.0);
        assert_eq!(published[4], 80.0);
        assert_eq!(published[5], 100.0);
        // Scrolling back up lowers the progress again
        assert_eq!(published[6], 30.0);
    }

    #[test]
    fn test_progress_and_band_invariants() {
        for top in [-2000.0, -1.0, 0.0, 400.0, 799.0, 800.0, 5000.0] {
            for height in [0.0, 1.0, 1000.0] {
                if let Some(progress) = compute_progress(800.0, RegionRect::new(top, height)) {
                    assert!(progress >= Percent::ZERO && progress <= Percent::FULL);
                }
            }
        }

        for offset in [0.0, 500.0, 1999.0, 2500.0] {
            let band = compute_bonus_span(2000.0, Some(SubElement::new(offset, 300.0)));
            assert!(Percent::ZERO <= band.start());
            assert!(band.start() <= band.end());
            assert!(band.end() <= Percent::FULL);
        }
    }

    #[test]
    fn test_timeline_style_before_layout() {
        let style = timeline_style(ProgressTracker::new().current(), BandSpan::EMPTY);
        assert_eq!(
            style,
            "--line-progress: 0%; --bonus-start: 0%; --bonus-end: 0%;"
        );
    }

    #[test]
    fn test_testimonial_rotation_covers_all_slides() {
        let mut carousel = Carousel::new(TESTIMONIALS.len());
        let mut seen = vec![carousel.current()];
        for _ in 1..TESTIMONIALS.len() {
            seen.push(carousel.advance());
        }

        assert_eq!(seen, (0..TESTIMONIALS.len()).collect::<Vec<_>>());
        assert_eq!(carousel.advance(), 0);
    }

    #[test]
    fn test_countdown_runs_out() {
        let mut countdown = Countdown::default();
        let mut ticks = 0;
        while countdown.tick() {
            ticks += 1;
        }

        assert_eq!(ticks, 15 * 60);
        assert!(countdown.is_expired());
    }

    #[test]
    fn test_countdown_interval_released_at_expiry() {
        let releases = Rc::new(Cell::new(0));
        let mut interval = DisposeGuard::new(FakeInterval(releases.clone()));
        let mut countdown = Countdown::default();
        let mut ticker = Ticker::new(|| countdown.tick());

        let mut periods = 0;
        while interval.is_active() {
            periods += 1;
            if ticker.fire() {
                interval.release();
            }
        }
        drop(ticker);

        assert_eq!(periods, 15 * 60 + 1);
        assert!(countdown.is_expired());
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn test_faq_single_open_item() {
        let mut accordion = Accordion::new();
        accordion.toggle(1);
        accordion.toggle(4);

        let open: Vec<_> = (0..6).filter(|&i| accordion.is_open(i)).collect();
        assert_eq!(open, vec![4]);
    }

    #[test]
    fn test_bonus_module_present_for_band() {
        assert!(MODULES.iter().any(|module| module.bonus));
    }
}
