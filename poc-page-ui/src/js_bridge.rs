//! Chart.js access via `js_sys::eval()`, plus the page's animation stylesheet.
//!
//! Chart.js is loaded by the host page as a classic script and exposes a global
//! `Chart` constructor. Configs are serialized from `poc_core::chart` and
//! inlined into a small script; tick label callbacks are attached in JS from
//! the config's axis → suffix map. Live instances are kept in
//! `window.__pocCharts[mountId]` so a handle can destroy its chart later.

use std::cell::RefCell;
use std::rc::Rc;

use poc_core::chart::{ChartConfig, ChartHandle, ChartRenderer, MountLookup, MountedCharts};
use poc_core::settings::{CHART_LIBRARY_MAX_POLLS, CHART_LIBRARY_POLL_MS};
use poc_core::ChartError;
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::dom::{self, Interval};

thread_local! {
    static MOUNTED_CHARTS: RefCell<MountedCharts<ChartJsHandle>> = RefCell::new(MountedCharts::default());
}

// Embed the keyframes stylesheet at compile time
static REPORT_ANIMATIONS_CSS: &str = include_str!("../assets/css/report-animations.css");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('PoC JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Whether the global `Chart` constructor exists yet.
pub fn chart_library_loaded() -> bool {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("Chart"))
        .map(|value| !value.is_undefined())
        .unwrap_or(false)
}

/// Run `on_ready` once Chart.js is available.
///
/// Polls every `CHART_LIBRARY_POLL_MS` for up to `CHART_LIBRARY_MAX_POLLS`
/// attempts, then gives up with a warning.
pub fn when_chart_library_ready<F>(on_ready: F)
where
    F: FnOnce() + 'static,
{
    if chart_library_loaded() {
        on_ready();
        return;
    }

    let slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let poll_slot = slot.clone();
    let mut on_ready = Some(on_ready);
    let mut polls = 0u32;

    let interval = Interval::start(CHART_LIBRARY_POLL_MS, move || {
        polls += 1;
        if chart_library_loaded() {
            poll_slot.borrow_mut().take();
            if let Some(f) = on_ready.take() {
                f();
            }
        } else if polls >= CHART_LIBRARY_MAX_POLLS {
            poll_slot.borrow_mut().take();
            log::warn!("Chart library did not load after {} polls; charts skipped", polls);
        }
    });
    *slot.borrow_mut() = interval;
}

/// Inject the report's keyframes and chart container styles into `<head>`.
pub fn inject_animation_styles(document: &Document) {
    let Some(head) = document.head() else {
        return;
    };
    match document.create_element("style") {
        Ok(style) => {
            style.set_text_content(Some(REPORT_ANIMATIONS_CSS));
            if let Err(e) = head.append_child(&style) {
                log::warn!("Failed to append animation styles: {:?}", e);
            }
        }
        Err(e) => log::warn!("Failed to create style element: {:?}", e),
    }
}

/// Mount-point lookup against the live document.
pub struct DocumentMounts<'a>(pub &'a Document);

impl MountLookup for DocumentMounts<'_> {
    fn has_mount(&self, id: &str) -> bool {
        self.0.get_element_by_id(id).is_some()
    }
}

/// A Chart.js instance registered under its mount id.
#[derive(Debug)]
pub struct ChartJsHandle {
    mount_id: String,
}

impl ChartHandle for ChartJsHandle {
    fn mount_id(&self) -> &str {
        &self.mount_id
    }

    fn destroy(self) {
        let key = serde_json::to_string(&self.mount_id).unwrap_or_default();
        call_js(&format!(
            "var charts = window.__pocCharts || {{}}; \
             if (charts[{key}]) {{ charts[{key}].destroy(); delete charts[{key}]; }}"
        ));
    }
}

/// Renders `ChartConfig`s with the page's global Chart.js.
pub struct ChartJsRenderer<'a> {
    document: &'a Document,
}

impl<'a> ChartJsRenderer<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }
}

impl ChartRenderer for ChartJsRenderer<'_> {
    type Handle = ChartJsHandle;

    fn render(&self, mount_id: &str, config: &ChartConfig) -> Result<ChartJsHandle, ChartError> {
        if self.document.get_element_by_id(mount_id).is_none() {
            return Err(ChartError::MountMissing(mount_id.to_string()));
        }
        if !chart_library_loaded() {
            return Err(ChartError::LibraryMissing);
        }

        let script = render_script(
            &serde_json::to_string(mount_id)?,
            &config.to_json()?,
            &serde_json::to_string(&config.tick_suffixes())?,
        );
        let created = js_sys::eval(&script)
            .map_err(|e| ChartError::Construct(format!("{:?}", e)))?;
        if created.as_bool() != Some(true) {
            return Err(ChartError::Construct(format!("Chart({mount_id}) returned nothing")));
        }

        log::info!("Rendered {:?} chart into #{}", config.kind, mount_id);
        Ok(ChartJsHandle {
            mount_id: mount_id.to_string(),
        })
    }
}

/// Build the constructor script. Arguments are JSON literals.
fn render_script(mount_json: &str, config_json: &str, suffixes_json: &str) -> String {
    format!(
        r#"
        (function() {{
            var el = document.getElementById({mount_json});
            if (!el || typeof Chart === 'undefined') {{ return false; }}
            var config = {config_json};
            var suffixes = {suffixes_json};
            Object.keys(suffixes).forEach(function(axis) {{
                var scale = config.options.scales[axis];
                if (!scale) {{ return; }}
                scale.ticks = scale.ticks || {{}};
                scale.ticks.callback = function(value) {{ return value + suffixes[axis]; }};
            }});
            window.__pocCharts = window.__pocCharts || {{}};
            window.__pocCharts[{mount_json}] = new Chart(el, config);
            return true;
        }})()
        "#
    )
}

/// Mount every report chart present on the page, once Chart.js is loaded.
/// Charts from an earlier call are destroyed first.
pub fn init_report_charts() {
    when_chart_library_ready(|| {
        let Some(document) = dom::document() else {
            return;
        };
        let renderer = ChartJsRenderer::new(&document);
        let handles = poc_core::chart::mount_charts(
            &DocumentMounts(&document),
            &renderer,
            &poc_core::chart::REPORT_CHARTS,
        );
        log::info!("Mounted {} report chart(s)", handles.len());
        MOUNTED_CHARTS.with(|charts| charts.borrow_mut().replace(handles));
    });
}

