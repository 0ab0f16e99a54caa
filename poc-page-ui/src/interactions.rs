//! Page chrome wiring: nav highlighting, smooth anchor scroll, navbar
//! background, hover styling and the load-time log line.

use std::cell::RefCell;
use std::rc::Rc;

use poc_core::chrome::{self, LoadTiming};
use poc_core::hover::{self, HoverState};
use poc_core::settings::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, HtmlElement, PerformanceNavigationTiming, ScrollBehavior, ScrollToOptions,
};

use crate::dom;

/// Wire every interaction whose elements exist in `document`.
pub fn install(document: &Document) {
    install_nav_links(document);
    install_anchor_scroll(document);
    install_navbar_background(document);
    install_tech_item_hover(document);
    install_workflow_step_hover(document);
    install_score_circle_hover(document);
    install_load_timing(document);
}

fn install_nav_links(document: &Document) {
    let links = Rc::new(dom::query_all(document, NAV_LINK_SELECTOR));
    for (index, link) in links.iter().enumerate() {
        let group = Rc::clone(&links);
        let this = link.clone();
        dom::listen(link, "click", move |_| {
            let href = this.get_attribute("href").unwrap_or_default();
            if chrome::is_external_href(&href) {
                return;
            }
            let flags = chrome::nav_active_flags(group.len(), index);
            for (link, active) in group.iter().zip(flags) {
                let classes = link.class_list();
                let result = if active {
                    classes.add_1(ACTIVE_CLASS)
                } else {
                    classes.remove_1(ACTIVE_CLASS)
                };
                if let Err(e) = result {
                    log::warn!("Failed to update nav link class: {:?}", e);
                }
            }
        });
    }
}

fn install_anchor_scroll(document: &Document) {
    for link in dom::query_all(document, ANCHOR_LINK_SELECTOR) {
        let doc = document.clone();
        let this = link.clone();
        dom::listen(&link, "click", move |event| {
            event.prevent_default();
            let href = this.get_attribute("href").unwrap_or_default();
            let Some(target) = chrome::anchor_target_id(&href)
                .and_then(|id| doc.get_element_by_id(id))
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                return;
            };
            let Some(window) = dom::window() else {
                return;
            };
            let options = ScrollToOptions::new();
            options.set_top(chrome::scroll_target_top(f64::from(target.offset_top())));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        });
    }
}

fn install_navbar_background(document: &Document) {
    let Some(window) = dom::window() else {
        return;
    };
    let doc = document.clone();
    let win = window.clone();
    dom::listen(&window, "scroll", move |_| {
        let Some(navbar) = doc
            .query_selector(NAVBAR_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        dom::set_style(&navbar, "background", chrome::navbar_background(scroll_y));
    });
}

fn install_tech_item_hover(document: &Document) {
    for item in dom::query_all(document, TECH_ITEM_SELECTOR) {
        for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let this = item.clone();
            dom::listen(&item, event, move |_| {
                dom::apply_styles(&this, &hover::tech_item_style(hovered));
            });
        }
    }
}

fn render_workflow_steps(steps: &[HtmlElement], state: HoverState) {
    for (index, step) in steps.iter().enumerate() {
        dom::apply_styles(step, &[hover::workflow_step_opacity(index, state)]);
    }
}

fn install_workflow_step_hover(document: &Document) {
    let steps = Rc::new(dom::query_all(document, WORKFLOW_STEP_SELECTOR));
    let state = Rc::new(RefCell::new(HoverState::default()));

    for (index, step) in steps.iter().enumerate() {
        for (event, entering) in [("mouseenter", true), ("mouseleave", false)] {
            let steps = Rc::clone(&steps);
            let state = Rc::clone(&state);
            dom::listen(step, event, move |_| {
                let snapshot = {
                    let mut state = state.borrow_mut();
                    if entering {
                        state.enter(index);
                    } else {
                        state.leave(index);
                    }
                    *state
                };
                render_workflow_steps(&steps, snapshot);
            });
        }
    }
}

fn install_score_circle_hover(document: &Document) {
    for category in dom::query_all(document, ASSESSMENT_CATEGORY_SELECTOR) {
        for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let this = category.clone();
            dom::listen(&category, event, move |_| {
                if let Some(circle) = dom::query_within(&this, SCORE_CIRCLE_SELECTOR) {
                    dom::apply_styles(&circle, &hover::score_circle_style(hovered));
                }
            });
        }
    }
}

fn install_load_timing(document: &Document) {
    let Some(window) = dom::window() else {
        return;
    };
    if window.performance().is_none() {
        return;
    }
    let complete = document.ready_state() == "complete";
    match LoadTiming::for_ready_state(complete) {
        // Deferred so loadEventEnd is populated.
        LoadTiming::LogNow => dom::set_timeout(0, log_load_time),
        LoadTiming::AwaitLoad => dom::listen(&window, "load", |_| {
            dom::set_timeout(0, log_load_time);
        }),
    }
}

fn log_load_time() {
    let Some(performance) = dom::window().and_then(|w| w.performance()) else {
        return;
    };
    let entry = performance.get_entries_by_type("navigation").get(0);
    let Ok(timing) = entry.dyn_into::<PerformanceNavigationTiming>() else {
        return;
    };
    let duration = chrome::load_duration_ms(timing.load_event_start(), timing.load_event_end());
    log::info!("Page Load Time: {} ms", duration);
}
