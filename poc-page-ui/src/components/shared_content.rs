//! Shared content text, loaded once on mount.

use dioxus::prelude::*;
use poc_core::content;
use poc_core::settings::SHARED_CONTENT_PATH;

use crate::shared_content::fetch_shared_text;

#[derive(Props, Clone, PartialEq)]
pub struct SharedContentProps {
    /// Relative URL of the text resource.
    #[props(default = SHARED_CONTENT_PATH.to_string())]
    pub path: String,
}

/// Renders the fetched text as a single text node, or the inline error
/// message if the fetch fails. Nothing is rendered while loading.
#[component]
pub fn SharedContent(props: SharedContentProps) -> Element {
    let path = props.path.clone();
    let loaded = use_resource(move || {
        let path = path.clone();
        async move {
            let outcome = fetch_shared_text(&path).await;
            if let Err(e) = &outcome {
                log::error!("Shared content load failed: {}", e);
            }
            content::container_text(&outcome)
        }
    });

    let text = loaded.read().clone();
    match text {
        Some(text) => rsx! { "{text}" },
        None => rsx! {},
    }
}

/// Root component launched on the `[data-shared-content]` element.
#[component]
pub fn SharedContentRoot() -> Element {
    rsx! {
        SharedContent { path: SHARED_CONTENT_PATH.to_string() }
    }
}
