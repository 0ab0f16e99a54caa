//! Page constants: DOM selectors, observer thresholds, timer profiles and paths.

/// Chart mount point ids.
pub const TIME_COMPARISON_CHART_ID: &str = "timeComparisonChart";
pub const ROI_PROJECTION_CHART_ID: &str = "roiProjectionChart";

/// Interaction selectors.
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const ANCHOR_LINK_SELECTOR: &str = "a[href^=\"#\"]";
pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const TECH_ITEM_SELECTOR: &str = ".tech-item";
pub const WORKFLOW_STEP_SELECTOR: &str = ".workflow-step";
pub const ASSESSMENT_CATEGORY_SELECTOR: &str = ".assessment-category";

/// Animation selectors.
pub const FADE_IN_SELECTOR: &str = ".workflow-step, .feature-card, .tech-item, .status-card";
pub const SLIDE_IN_SELECTOR: &str = ".case-metric";
pub const PROGRESS_SELECTOR: &str = ".progress";
pub const SCORE_CIRCLE_SELECTOR: &str = ".score-circle";
pub const SCORE_SELECTOR: &str = ".score";
pub const METRIC_VALUE_SELECTOR: &str = ".metric-value";
pub const STAT_NUMBER_SELECTOR: &str = ".stat-number";

/// Shared content container and resource.
pub const SHARED_CONTENT_SELECTOR: &str = "[data-shared-content]";
pub const SHARED_CONTENT_PATH: &str = "assets/content/ai-seo-flow.txt";
pub const SHARED_CONTENT_ERROR_PREFIX: &str = "[コンテンツ読み込みエラー] ";

/// Attribute holding a counter's pre-reset text.
pub const ORIGINAL_TEXT_ATTR: &str = "data-original";

/// Class toggled on the clicked navigation link.
pub const ACTIVE_CLASS: &str = "active";

/// Fixed navbar height subtracted from anchor scroll targets.
pub const HEADER_OFFSET_PX: f64 = 70.0;

/// Scroll position past which the navbar turns opaque.
pub const NAVBAR_SCROLL_THRESHOLD_PX: f64 = 50.0;
pub const NAVBAR_BACKGROUND_TOP: &str = "rgba(255, 255, 255, 0.95)";
pub const NAVBAR_BACKGROUND_SCROLLED: &str = "rgba(255, 255, 255, 0.98)";

/// Delay before a progress bar's width is restored.
pub const PROGRESS_RESTORE_DELAY_MS: i32 = 500;

/// Chart library readiness polling.
pub const CHART_LIBRARY_POLL_MS: i32 = 100;
pub const CHART_LIBRARY_MAX_POLLS: u32 = 50;

/// IntersectionObserver parameters for one group of elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverProfile {
    pub threshold: f64,
    pub root_margin: Option<&'static str>,
}

pub const FADE_IN_OBSERVER: ObserverProfile = ObserverProfile {
    threshold: 0.1,
    root_margin: Some("0px 0px -50px 0px"),
};

pub const SLIDE_IN_OBSERVER: ObserverProfile = ObserverProfile {
    threshold: 0.3,
    root_margin: None,
};

pub const HALF_VISIBLE_OBSERVER: ObserverProfile = ObserverProfile {
    threshold: 0.5,
    root_margin: None,
};

/// Tick count and period of a counter animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterProfile {
    pub steps: u32,
    pub interval_ms: i32,
}

/// `.score` values inside score circles.
pub const SCORE_COUNTER: CounterProfile = CounterProfile {
    steps: 60,
    interval_ms: 30,
};

/// `.metric-value` case-study metrics.
pub const METRIC_COUNTER: CounterProfile = CounterProfile {
    steps: 50,
    interval_ms: 40,
};

/// `.stat-number` headline statistics.
pub const STAT_COUNTER: CounterProfile = CounterProfile {
    steps: 30,
    interval_ms: 50,
};
