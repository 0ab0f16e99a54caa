//! Page chrome: navigation state, anchor scrolling, navbar styling and the
//! one-shot reveal/progress effects.

use crate::counter::parse_target;
use crate::hover::StyleRule;
use crate::settings::{
    HEADER_OFFSET_PX, NAVBAR_BACKGROUND_SCROLLED, NAVBAR_BACKGROUND_TOP,
    NAVBAR_SCROLL_THRESHOLD_PX,
};

/// Navigation links pointing off-site keep the browser's default handling.
pub fn is_external_href(href: &str) -> bool {
    href.contains("http")
}

/// Active flags for a nav group after `clicked` was selected.
///
/// Exactly one entry is true when `clicked` is in range.
pub fn nav_active_flags(len: usize, clicked: usize) -> Vec<bool> {
    (0..len).map(|i| i == clicked).collect()
}

/// Element id referenced by an in-page anchor (`#section` → `section`).
///
/// `None` for a bare `#` or a non-fragment href.
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position that brings a section just below the fixed header.
pub fn scroll_target_top(offset_top: f64) -> f64 {
    offset_top - HEADER_OFFSET_PX
}

/// Navbar background for the current vertical scroll offset.
pub fn navbar_background(scroll_y: f64) -> &'static str {
    if scroll_y > NAVBAR_SCROLL_THRESHOLD_PX {
        NAVBAR_BACKGROUND_SCROLLED
    } else {
        NAVBAR_BACKGROUND_TOP
    }
}

/// Entrance effect applied once an element becomes visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    FadeIn,
    SlideInFromLeft,
}

impl Reveal {
    /// Style set before the element is first seen.
    pub fn initial(self) -> Option<StyleRule> {
        match self {
            Reveal::FadeIn => Some(StyleRule::new("opacity", "0")),
            Reveal::SlideInFromLeft => None,
        }
    }

    /// Style set when the element crosses its visibility threshold.
    pub fn visible(self) -> Vec<StyleRule> {
        match self {
            Reveal::FadeIn => vec![
                StyleRule::new("animation", "fadeIn 0.6s ease-out forwards"),
                StyleRule::new("opacity", "1"),
            ],
            Reveal::SlideInFromLeft => vec![StyleRule::new(
                "animation",
                "slideInFromLeft 0.6s ease-out forwards",
            )],
        }
    }
}

/// Width reset-then-restore that makes a progress bar fill on view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressFill {
    width: String,
}

impl ProgressFill {
    pub const EMPTY_WIDTH: &'static str = "0%";

    /// Capture the bar's current inline width.
    pub fn capture(width: impl Into<String>) -> Self {
        Self {
            width: width.into(),
        }
    }

    pub fn empty_width(&self) -> &'static str {
        Self::EMPTY_WIDTH
    }

    pub fn restored_width(&self) -> &str {
        &self.width
    }
}

/// Text swap performed by the `resetCounters` debug hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterReset {
    /// Value to keep in the original-text attribute.
    pub original: String,
    /// Text shown until the counter runs again.
    pub display: &'static str,
}

/// Text a counter counts up to: the recorded original if any, else what the
/// element shows now.
pub fn counter_source<'a>(current_text: &'a str, stored_original: Option<&'a str>) -> &'a str {
    stored_original.unwrap_or(current_text)
}

/// Reset a counter, keeping the first original ever recorded. `None` when
/// that text has no digits, so it never counted and stays as it is.
pub fn reset_counter(current_text: &str, stored_original: Option<&str>) -> Option<CounterReset> {
    let original = counter_source(current_text, stored_original);
    parse_target(original)?;
    Some(CounterReset {
        original: original.to_string(),
        display: "0",
    })
}

/// When to log the page load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTiming {
    /// `load` already fired; log on the next turn.
    LogNow,
    /// Wait for the window's `load` event.
    AwaitLoad,
}

impl LoadTiming {
    pub fn for_ready_state(complete: bool) -> Self {
        if complete {
            LoadTiming::LogNow
        } else {
            LoadTiming::AwaitLoad
        }
    }
}

/// Page load duration from navigation timing, in milliseconds.
pub fn load_duration_ms(load_event_start: f64, load_event_end: f64) -> f64 {
    load_event_end - load_event_start
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicking_any_link_leaves_exactly_one_active() {
        for clicked in 0..5 {
            let flags = nav_active_flags(5, clicked);
            assert_eq!(flags.iter().filter(|&&f| f).count(), 1);
            assert!(flags[clicked]);
        }
    }

    #[test]
    fn external_links_are_detected_by_marker() {
        assert!(is_external_href("https://example.com/"));
        assert!(is_external_href("http://example.com/"));
        assert!(!is_external_href("#overview"));
        assert!(!is_external_href("poc-report.html"));
    }

    #[test]
    fn anchor_ids_strip_the_hash() {
        assert_eq!(anchor_target_id("#roi"), Some("roi"));
        assert_eq!(anchor_target_id("#"), None);
        assert_eq!(anchor_target_id("page.html#roi"), None);
    }

    #[test]
    fn scroll_target_accounts_for_header() {
        assert_eq!(scroll_target_top(500.0), 430.0);
        assert_eq!(scroll_target_top(20.0), -50.0);
    }

    #[test]
    fn navbar_turns_opaque_past_threshold() {
        assert_eq!(navbar_background(0.0), "rgba(255, 255, 255, 0.95)");
        assert_eq!(navbar_background(50.0), "rgba(255, 255, 255, 0.95)");
        assert_eq!(navbar_background(50.5), "rgba(255, 255, 255, 0.98)");
    }

    #[test]
    fn progress_fill_restores_captured_width() {
        let fill = ProgressFill::capture("72%");
        assert_eq!(fill.empty_width(), "0%");
        assert_eq!(fill.restored_width(), "72%");

        let unset = ProgressFill::capture("");
        assert_eq!(unset.restored_width(), "");
    }

    #[test]
    fn fade_in_hides_first_then_shows() {
        assert_eq!(Reveal::FadeIn.initial(), Some(StyleRule::new("opacity", "0")));
        assert!(Reveal::FadeIn.visible().contains(&StyleRule::new("opacity", "1")));
        assert_eq!(Reveal::SlideInFromLeft.initial(), None);
        assert_eq!(
            Reveal::SlideInFromLeft.visible()[0].value,
            "slideInFromLeft 0.6s ease-out forwards"
        );
    }

    #[test]
    fn reset_keeps_first_recorded_original() {
        let first = reset_counter("98%", None).unwrap();
        assert_eq!(first.original, "98%");
        assert_eq!(first.display, "0");

        let again = reset_counter("0", Some(&first.original)).unwrap();
        assert_eq!(again.original, "98%");
    }

    #[test]
    fn reset_mid_animation_restores_the_stamped_original() {
        use crate::counter::CounterAnimation;
        use crate::counter::SuffixRule;
        use crate::settings::METRIC_COUNTER;

        // A started counter has its source stamped before the first frame.
        let stamped = counter_source("98%", None).to_string();
        let mut counter = CounterAnimation::new(&stamped, METRIC_COUNTER, SuffixRule::Units).unwrap();
        let mut shown = String::new();
        for _ in 0..METRIC_COUNTER.steps / 2 {
            shown = counter.tick().text().to_string();
        }
        assert_ne!(shown, "98%", "still mid-animation");

        let reset = reset_counter(&shown, Some(&stamped)).unwrap();
        assert_eq!(reset.original, "98%");
        assert_eq!(counter_source(&reset.display, Some(&reset.original)), "98%");
    }

    #[test]
    fn counters_without_digits_are_not_reset() {
        assert_eq!(reset_counter("N/A", None), None);
        assert_eq!(reset_counter("0", Some("未定")), None);
        assert!(reset_counter("N/A", Some("120件")).is_some());
    }

    #[test]
    fn load_time_is_logged_even_after_load_fired() {
        assert_eq!(LoadTiming::for_ready_state(true), LoadTiming::LogNow);
        assert_eq!(LoadTiming::for_ready_state(false), LoadTiming::AwaitLoad);
    }

    #[test]
    fn load_duration_is_end_minus_start() {
        assert_eq!(load_duration_ms(1200.0, 1234.5), 34.5);
    }
}
