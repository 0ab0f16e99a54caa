//! AI SEO PoC report page
//!
//! Progressive enhancement for the static report HTML. Nothing here owns the
//! page; every behavior looks its elements up and stays inert when they are
//! missing.
//!
//! Startup, once the DOM is parsed:
//! 1. Inject the keyframes stylesheet.
//! 2. Mount the two Chart.js charts (after the library global appears).
//! 3. Wire nav/scroll/hover interactions and the visibility animators,
//!    exposing `window.resetCounters()`.
//! 4. Launch the shared-content component on `[data-shared-content]`.

use poc_page_ui::animators::PageAnimators;
use poc_page_ui::components::SharedContentRoot;
use poc_page_ui::{dom, interactions, js_bridge, shared_content};
use web_sys::Document;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");

    let Some(document) = dom::document() else {
        log::error!("No document; report scripts not started");
        return;
    };
    let doc = document.clone();
    dom::on_ready(&document, move || start(&doc));
}

fn start(document: &Document) {
    js_bridge::inject_animation_styles(document);
    js_bridge::init_report_charts();

    interactions::install(document);
    let animators = PageAnimators::install(document);
    animators.expose_reset_hook();

    launch_shared_content(document);
}

/// Replace the container's placeholder with the Dioxus-rendered content.
fn launch_shared_content(document: &Document) {
    let Some(container) = shared_content::find_container(document) else {
        return;
    };
    container.set_text_content(None);
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootelement(container))
        .launch(SharedContentRoot);
}
