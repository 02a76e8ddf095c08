//! Browser bindings for the reveal and timeline engines
//!
//! Each hook keeps its subscriptions in a `DisposeGuard` and releases them
//! when the owning component is cleaned up:
//! - `use_reveal` holds an `IntersectionObserver` that disconnects on release
//! - `use_scroll_progress` holds window `scroll`/`resize`/`load` listeners
//! - `use_interval` holds a `gloo_timers` interval
//!
//! On the server the hooks only create their signals, so the first render
//! shows every block in its initial state.

use leptos::html;
use leptos::prelude::*;

use crate::core::{BandSpan, Percent, RevealState, Threshold};

#[cfg(not(feature = "ssr"))]
use crate::core::{
    DisposeGuard, LayoutEvent, RegionRect, Release, RevealTracker, RevealTransition, SubElement,
    TimelineLayout, TimelineMeter, Unobserve,
};
#[cfg(not(feature = "ssr"))]
use leptos::web_sys;
#[cfg(not(feature = "ssr"))]
use wasm_bindgen::JsCast;
#[cfg(not(feature = "ssr"))]
use wasm_bindgen::closure::Closure;

#[cfg(not(feature = "ssr"))]
impl Unobserve<web_sys::Element> for web_sys::IntersectionObserver {
    fn unobserve(&self, target: &web_sys::Element) {
        web_sys::IntersectionObserver::unobserve(self, target);
    }
}

#[cfg(not(feature = "ssr"))]
impl Release for WindowListenerHandle {
    fn release(self) {
        self.remove();
    }
}

#[cfg(not(feature = "ssr"))]
impl Release for gloo_timers::callback::Interval {
    fn release(self) {
        drop(self.cancel());
    }
}

/// Observer watching one element, with the callback it keeps alive
#[cfg(not(feature = "ssr"))]
struct RevealObserver {
    observer: web_sys::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(not(feature = "ssr"))]
impl RevealObserver {
    fn install(
        element: &web_sys::Element,
        threshold: Threshold,
        set_state: WriteSignal<RevealState>,
    ) -> Result<Self, wasm_bindgen::JsValue> {
        let mut tracker = RevealTracker::new(threshold);

        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                let batch = entries.iter().map(|entry| {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    let ratio = if entry.is_intersecting() {
                        entry.intersection_ratio()
                    } else {
                        0.0
                    };
                    (entry.target(), ratio)
                });

                if tracker.observe_batch(batch, &observer) == RevealTransition::Revealed {
                    set_state.set(tracker.state());
                }
            },
        );

        let options = web_sys::IntersectionObserverInit::new();
        options.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold.value()));

        let observer = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        observer.observe(element);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

#[cfg(not(feature = "ssr"))]
impl Release for RevealObserver {
    fn release(self) {
        self.observer.disconnect();
    }
}

/// Reveal the referenced element the first time it enters the viewport.
///
/// The returned signal moves from `Pending` to `Revealed` once and never back.
/// Nothing happens until the element is mounted.
pub fn use_reveal(node_ref: NodeRef<html::Div>, threshold: Threshold) -> ReadSignal<RevealState> {
    let (state, set_state) = signal(RevealState::Pending);

    #[cfg(not(feature = "ssr"))]
    {
        let guard = StoredValue::new_local(DisposeGuard::<RevealObserver>::empty());

        Effect::new(move |_| {
            let element = node_ref.get();
            if state.get_untracked().is_revealed() {
                return;
            }

            let attached = guard.try_update_value(|slot| {
                slot.attach(element, |element| {
                    RevealObserver::install(&element, threshold, set_state)
                })
            });

            if let Some(Err(e)) = attached {
                leptos::logging::warn!("IntersectionObserver unavailable: {:?}", e);
                set_state.set(RevealState::Revealed);
            }
        });

        on_cleanup(move || {
            guard.try_update_value(|slot| slot.release());
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (node_ref, threshold, set_state);
    }

    state
}

/// Offset of an element from the top of the page, summed up its
/// `offsetParent` chain
#[cfg(not(feature = "ssr"))]
fn page_offset_top(element: &web_sys::HtmlElement) -> f64 {
    let mut top = f64::from(element.offset_top());
    let mut parent = element.offset_parent();

    while let Some(node) = parent {
        let Ok(node) = node.dyn_into::<web_sys::HtmlElement>() else {
            break;
        };
        top += f64::from(node.offset_top());
        parent = node.offset_parent();
    }

    top
}

/// Live geometry of a mounted timeline element
#[cfg(not(feature = "ssr"))]
struct DomTimeline<'a> {
    element: &'a web_sys::HtmlElement,
    bonus_selector: &'a str,
}

#[cfg(not(feature = "ssr"))]
impl TimelineLayout for DomTimeline<'_> {
    fn viewport_height(&self) -> Option<f64> {
        web_sys::window()?.inner_height().ok()?.as_f64()
    }

    fn region(&self) -> Option<RegionRect> {
        let rect = self.element.get_bounding_client_rect();
        Some(RegionRect::new(rect.top(), rect.height()))
    }

    fn total_height(&self) -> Option<f64> {
        Some(f64::from(self.element.offset_height()))
    }

    fn bonus(&self) -> Option<SubElement> {
        let bonus = self
            .element
            .query_selector(self.bonus_selector)
            .ok()??
            .dyn_into::<web_sys::HtmlElement>()
            .ok()?;

        // Items sit inside fade-in wrappers, so measure both against the page
        Some(SubElement::from_page_offsets(
            page_offset_top(&bonus),
            page_offset_top(self.element),
            f64::from(bonus.offset_height()),
        ))
    }
}

/// Track how far the referenced element has scrolled into view, and where
/// the item matching `bonus_selector` sits inside it.
///
/// Progress is recomputed on every `scroll` and `resize`; the band on
/// `resize` and window `load`. Both are computed once as soon as the element
/// is mounted.
pub fn use_scroll_progress(
    node_ref: NodeRef<html::Div>,
    bonus_selector: &'static str,
) -> (ReadSignal<Percent>, ReadSignal<BandSpan>) {
    let (progress, set_progress) = signal(Percent::ZERO);
    let (band, set_band) = signal(BandSpan::EMPTY);

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::ev::{load, resize, scroll};

        let meter = StoredValue::new(TimelineMeter::new());

        let dispatch = move |event: LayoutEvent| {
            let Some(element) = node_ref.get_untracked() else {
                return;
            };
            let layout = DomTimeline {
                element: &element,
                bonus_selector,
            };

            let Some(update) = meter.try_update_value(|meter| meter.handle(event, &layout)) else {
                return;
            };
            if let Some(value) = update.progress {
                set_progress.set(value);
            }
            if let Some(value) = update.band {
                set_band.set(value);
            }
        };

        // Eager pass so the first paint after hydration is correct
        Effect::new(move |_| {
            if node_ref.get().is_some() {
                dispatch(LayoutEvent::Mount);
            }
        });

        let listeners = StoredValue::new_local([
            DisposeGuard::new(window_event_listener(scroll, move |_| {
                dispatch(LayoutEvent::Scroll)
            })),
            DisposeGuard::new(window_event_listener(resize, move |_| {
                dispatch(LayoutEvent::Resize)
            })),
            DisposeGuard::new(window_event_listener(load, move |_| {
                dispatch(LayoutEvent::Load)
            })),
        ]);

        on_cleanup(move || {
            listeners.try_update_value(|guards| {
                for guard in guards.iter_mut() {
                    guard.release();
                }
            });
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (node_ref, bonus_selector, set_progress, set_band);
    }

    (progress, band)
}

/// Run `tick` every `period_ms` milliseconds while the calling component
/// lives, until `tick` returns `false`.
pub fn use_interval(period_ms: u32, tick: impl FnMut() -> bool + 'static) {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::Ticker;
        use gloo_timers::callback::Interval;
        use std::time::Duration;

        let interval = StoredValue::new_local(DisposeGuard::<Interval>::empty());
        let mut ticker = Ticker::new(tick);

        interval.update_value(|slot| {
            slot.replace(Interval::new(period_ms, move || {
                if ticker.fire() {
                    // The running callback is owned by the interval, so cancel it afterwards
                    set_timeout(
                        move || {
                            interval.try_update_value(|slot| slot.release());
                        },
                        Duration::ZERO,
                    );
                }
            }));
        });

        on_cleanup(move || {
            interval.try_update_value(|slot| slot.release());
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = (period_ms, tick);
    }
}
