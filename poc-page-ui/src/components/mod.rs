//! Dioxus components mounted into the static report page.

mod shared_content;

pub use shared_content::{SharedContent, SharedContentRoot};
