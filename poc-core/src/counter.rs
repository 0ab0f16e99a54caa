//! Counter animation: count a displayed number up from zero to the value
//! already written in the element, then put the original text back.
//!
//! The target is every ASCII digit in the text read as one integer, so
//! `"1,234件"` animates to 1234 and `"98%"` to 98. Intermediate frames show the
//! floored running value with a unit suffix picked from the original text.

use crate::settings::CounterProfile;

/// How intermediate frames pick their suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuffixRule {
    /// Bare numbers (score circles).
    Bare,
    /// Keep the first of `%`, `件`, `分` found in the original (case metrics).
    Units,
    /// Keep a `+` marker if present (headline stats).
    PlusMarker,
}

const UNIT_SUFFIXES: [&str; 3] = ["%", "件", "分"];

impl SuffixRule {
    /// Suffix to append to intermediate frames for `original`.
    pub fn suffix_for(self, original: &str) -> &'static str {
        match self {
            SuffixRule::Bare => "",
            SuffixRule::Units => UNIT_SUFFIXES
                .iter()
                .copied()
                .find(|unit| original.contains(unit))
                .unwrap_or(""),
            SuffixRule::PlusMarker => {
                if original.contains('+') {
                    "+"
                } else {
                    ""
                }
            }
        }
    }
}

/// Extract the animation target from element text.
///
/// Returns `None` when the text has no digits, or when the digits do not fit
/// in a `u64`; either way the element is left alone.
pub fn parse_target(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Result of advancing a counter by one timer tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// Text to show for this frame; keep ticking.
    Frame(String),
    /// Final text (always the original); stop the timer.
    Done(String),
}

impl Tick {
    pub fn text(&self) -> &str {
        match self {
            Tick::Frame(text) | Tick::Done(text) => text,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Tick::Done(_))
    }
}

/// State of one running counter. Owned by exactly one timer task.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    current: f64,
    target: f64,
    increment: f64,
    original: String,
    suffix: &'static str,
    finished: bool,
}

impl CounterAnimation {
    /// Build a counter for `original`, or `None` if it has nothing to count.
    pub fn new(original: &str, profile: CounterProfile, rule: SuffixRule) -> Option<Self> {
        let target = parse_target(original)? as f64;
        let steps = f64::from(profile.steps.max(1));
        Some(Self {
            current: 0.0,
            target,
            increment: target / steps,
            original: original.to_string(),
            suffix: rule.suffix_for(original),
            finished: false,
        })
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Advance one tick.
    pub fn tick(&mut self) -> Tick {
        if self.finished {
            return Tick::Done(self.original.clone());
        }
        self.current += self.increment;
        if self.current >= self.target {
            self.finished = true;
            Tick::Done(self.original.clone())
        } else {
            Tick::Frame(format!("{}{}", self.current.floor() as u64, self.suffix))
        }
    }
}
