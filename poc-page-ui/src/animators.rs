//! Visibility-triggered animations: counters, progress fills, fade/slide reveals.
//!
//! Every trigger fires once per element. Counters additionally go through an
//! `AnimationRegistry` keyed by `(group, index)`, which owns each running
//! interval; finishing or cancelling an animation drops its interval.

use std::cell::RefCell;
use std::rc::Rc;

use poc_core::chrome::{self, ProgressFill, Reveal};
use poc_core::counter::{CounterAnimation, SuffixRule};
use poc_core::registry::AnimationRegistry;
use poc_core::settings::*;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, IntersectionObserver};

use crate::dom::{self, Interval};

/// Identity of an animated element: its counter group and position in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementKey {
    pub group: &'static str,
    pub index: usize,
}

type Registry = Rc<RefCell<AnimationRegistry<ElementKey, Interval>>>;

/// One class of counters sharing a timer profile and suffix rule.
struct CounterGroup {
    name: &'static str,
    /// Elements whose text is animated.
    targets: Vec<HtmlElement>,
    /// Elements watched for visibility, index-aligned with `targets`.
    observed: Vec<HtmlElement>,
    observer: Option<IntersectionObserver>,
}

/// All animations wired on the page.
pub struct PageAnimators {
    registry: Registry,
    counters: Vec<CounterGroup>,
}

impl PageAnimators {
    /// Wire every animation whose elements exist in `document`.
    pub fn install(document: &Document) -> Rc<Self> {
        install_reveal(document, FADE_IN_SELECTOR, FADE_IN_OBSERVER, Reveal::FadeIn);
        install_reveal(document, SLIDE_IN_SELECTOR, SLIDE_IN_OBSERVER, Reveal::SlideInFromLeft);
        install_progress_fill(document);

        let registry: Registry = Rc::new(RefCell::new(AnimationRegistry::new()));

        // Score circles are observed, but the nested `.score` is what counts up.
        let (score_circles, scores): (Vec<_>, Vec<_>) = dom::query_all(document, SCORE_CIRCLE_SELECTOR)
            .into_iter()
            .filter_map(|circle| dom::query_within(&circle, SCORE_SELECTOR).map(|score| (circle, score)))
            .unzip();
        let metrics = dom::query_all(document, METRIC_VALUE_SELECTOR);
        let stats = dom::query_all(document, STAT_NUMBER_SELECTOR);

        let counters = vec![
            counter_group(&registry, "score", score_circles, scores, SCORE_COUNTER, SuffixRule::Bare),
            counter_group(&registry, "metric", metrics.clone(), metrics, METRIC_COUNTER, SuffixRule::Units),
            counter_group(&registry, "stat", stats.clone(), stats, STAT_COUNTER, SuffixRule::PlusMarker),
        ];

        Rc::new(Self { registry, counters })
    }

    /// Number of counters currently ticking.
    pub fn running_counters(&self) -> usize {
        self.registry.borrow().active_count()
    }

    /// Put every counter back to `0`, remembering its original text in
    /// `data-original`, and re-arm its visibility trigger. Counters with no
    /// digits are left untouched.
    pub fn reset_counters(&self) {
        for group in &self.counters {
            for (index, target) in group.targets.iter().enumerate() {
                let key = ElementKey {
                    group: group.name,
                    index,
                };
                let stored = target.get_attribute(ORIGINAL_TEXT_ATTR);
                let Some(reset) = chrome::reset_counter(&dom::text(target), stored.as_deref()) else {
                    continue;
                };
                if let Err(e) = target.set_attribute(ORIGINAL_TEXT_ATTR, &reset.original) {
                    log::warn!("Failed to store original counter text: {:?}", e);
                }

                {
                    let mut registry = self.registry.borrow_mut();
                    drop(registry.cancel(&key));
                    registry.reset(&key);
                }
                dom::set_text(target, reset.display);

                if let Some(observer) = &group.observer {
                    observer.observe(&group.observed[index]);
                }
            }
        }
        log::info!("Counters reset");
    }

    /// Expose `reset_counters` as `window.resetCounters()` for debugging.
    pub fn expose_reset_hook(self: &Rc<Self>) {
        let Some(window) = dom::window() else {
            return;
        };
        let animators = Rc::clone(self);
        let hook = Closure::<dyn FnMut()>::new(move || animators.reset_counters());
        if let Err(e) = js_sys::Reflect::set(&window, &JsValue::from_str("resetCounters"), hook.as_ref()) {
            log::warn!("Failed to expose resetCounters: {:?}", e);
        }
        hook.forget();
    }
}

fn counter_group(
    registry: &Registry,
    name: &'static str,
    observed: Vec<HtmlElement>,
    targets: Vec<HtmlElement>,
    profile: CounterProfile,
    rule: SuffixRule,
) -> CounterGroup {
    let registry = registry.clone();
    let watch = observed.clone();
    let animate = targets.clone();

    let observer = dom::observe_once(&observed, HALF_VISIBLE_OBSERVER, move |el| {
        let Some(index) = watch.iter().position(|candidate| candidate == el) else {
            return;
        };
        start_counter(&registry, ElementKey { group: name, index }, &animate[index], profile, rule);
    });

    CounterGroup {
        name,
        targets,
        observed,
        observer,
    }
}

/// Start counting `target` up, unless it has nothing to count or is already
/// running/done.
fn start_counter(
    registry: &Registry,
    key: ElementKey,
    target: &HtmlElement,
    profile: CounterProfile,
    rule: SuffixRule,
) {
    let stored = target.get_attribute(ORIGINAL_TEXT_ATTR);
    let current = dom::text(target);
    let source = chrome::counter_source(&current, stored.as_deref());
    let Some(mut counter) = CounterAnimation::new(source, profile, rule) else {
        return;
    };
    if !registry.borrow_mut().try_begin(&key) {
        return;
    }
    // Frames overwrite the text; the attribute keeps the original.
    if stored.is_none() {
        if let Err(e) = target.set_attribute(ORIGINAL_TEXT_ATTR, source) {
            log::warn!("Failed to store original counter text: {:?}", e);
        }
    }

    let el = target.clone();
    let tick_registry = registry.clone();
    let interval = Interval::start(profile.interval_ms, move || {
        let tick = counter.tick();
        dom::set_text(&el, tick.text());
        if tick.is_done() {
            // Releasing the handle clears this interval.
            drop(tick_registry.borrow_mut().finish(&key));
        }
    });

    let mut registry = registry.borrow_mut();
    match interval {
        Some(handle) => drop(registry.attach(&key, handle)),
        None => drop(registry.cancel(&key)),
    }
}

fn install_reveal(document: &Document, selector: &str, profile: ObserverProfile, reveal: Reveal) {
    let elements = dom::query_all(document, selector);
    if let Some(initial) = reveal.initial() {
        for el in &elements {
            dom::apply_styles(el, &[initial]);
        }
    }
    dom::observe_once(&elements, profile, move |el| {
        dom::apply_styles(el, &reveal.visible());
    });
}

fn install_progress_fill(document: &Document) {
    let bars = dom::query_all(document, PROGRESS_SELECTOR);
    dom::observe_once(&bars, HALF_VISIBLE_OBSERVER, |bar| {
        let fill = ProgressFill::capture(dom::style_value(bar, "width"));
        dom::set_style(bar, "width", fill.empty_width());
        let bar = bar.clone();
        dom::set_timeout(PROGRESS_RESTORE_DELAY_MS, move || {
            dom::set_style(&bar, "width", fill.restored_width());
        });
    });
}
