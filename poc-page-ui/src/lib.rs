//! Browser side of the PoC report page.
//!
//! This crate provides:
//! - `dom`: small web-sys helpers (queries, styles, listeners, timers, observers)
//! - `js_bridge`: Chart.js access via `js_sys::eval()` and stylesheet injection
//! - `animators`: visibility-triggered counters, progress fills and reveals
//! - `interactions`: navigation, smooth scroll, navbar, hover, load timing
//! - `shared_content`: the one-shot text fetch
//! - `components`: Dioxus component that renders the shared content

pub mod dom;
pub mod js_bridge;
pub mod animators;
pub mod interactions;
pub mod shared_content;
pub mod components;
