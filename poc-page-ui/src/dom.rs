//! Thin web-sys helpers shared by the page wiring.
//!
//! Every lookup returns an `Option`/empty `Vec` instead of failing: a missing
//! element just means the feature does not apply to this page.
//!
//! Closures registered for the lifetime of the page (listeners, observers)
//! are leaked with `forget()`. Timer callbacks are handed to JS with
//! `into_js_value()` so a handle can clear its timer from inside its own tick.

use poc_core::hover::StyleRule;
use poc_core::settings::ObserverProfile;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, Window,
};

pub fn window() -> Option<Window> {
    web_sys::window()
}

pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// All elements matching `selector`, in document order.
pub fn query_all(root: &Document, selector: &str) -> Vec<HtmlElement> {
    let list = match root.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("Bad selector {}: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// First descendant of `parent` matching `selector`.
pub fn query_within(parent: &Element, selector: &str) -> Option<HtmlElement> {
    parent
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("Failed to set {}: {:?}", property, e);
    }
}

pub fn apply_styles(el: &HtmlElement, rules: &[StyleRule]) {
    for rule in rules {
        set_style(el, rule.property, rule.value);
    }
}

pub fn style_value(el: &HtmlElement, property: &str) -> String {
    el.style().get_property_value(property).unwrap_or_default()
}

pub fn text(el: &Element) -> String {
    el.text_content().unwrap_or_default()
}

pub fn set_text(el: &Element, value: &str) {
    el.set_text_content(Some(value));
}

/// Register `handler` for `event` on `target` for the rest of the page's life.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("Failed to listen for {}: {:?}", event, e);
    }
    closure.forget();
}

/// Run `f` once the DOM is parsed: immediately if it already is, otherwise on
/// `DOMContentLoaded`.
pub fn on_ready<F>(document: &Document, f: F)
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let callback = Closure::once_into_js(f);
    if let Err(e) =
        document.add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
    {
        log::error!("Failed to wait for DOMContentLoaded: {:?}", e);
    }
}

/// Run `f` once after `delay_ms`.
pub fn set_timeout<F>(delay_ms: i32, f: F)
where
    F: FnOnce() + 'static,
{
    let Some(window) = window() else {
        return;
    };
    let callback = Closure::once_into_js(f);
    if let Err(e) = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)
    {
        log::warn!("setTimeout failed: {:?}", e);
    }
}

/// A repeating timer. Dropping the handle clears it.
#[derive(Debug)]
pub struct Interval {
    id: i32,
}

impl Interval {
    pub fn start<F>(period_ms: i32, tick: F) -> Option<Self>
    where
        F: FnMut() + 'static,
    {
        let window = window()?;
        let callback = Closure::<dyn FnMut()>::new(tick).into_js_value();
        match window
            .set_interval_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), period_ms)
        {
            Ok(id) => Some(Self { id }),
            Err(e) => {
                log::warn!("setInterval failed: {:?}", e);
                None
            }
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(window) = window() {
            window.clear_interval_with_handle(self.id);
        }
    }
}

/// Watch `elements` and call `on_visible` the first time each one crosses the
/// profile's threshold. The element is unobserved before the handler runs, so
/// it fires at most once until observed again.
pub fn observe_once<F>(
    elements: &[HtmlElement],
    profile: ObserverProfile,
    mut on_visible: F,
) -> Option<IntersectionObserver>
where
    F: FnMut(&HtmlElement) + 'static,
{
    if elements.is_empty() {
        return None;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                observer.unobserve(&target);
                if let Ok(el) = target.dyn_into::<HtmlElement>() {
                    on_visible(&el);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(profile.threshold));
    if let Some(margin) = profile.root_margin {
        init.set_root_margin(margin);
    }

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
        Ok(observer) => observer,
        Err(e) => {
            log::warn!("IntersectionObserver unavailable: {:?}", e);
            return None;
        }
    };
    callback.forget();

    for el in elements {
        observer.observe(el);
    }
    Some(observer)
}
