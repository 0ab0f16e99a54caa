//! Pure presentation logic for the PoC report page.
//!
//! Nothing in this crate touches the DOM. The WASM wiring in `poc-page-ui`
//! feeds element text and hover/scroll state in, and writes the returned
//! strings back out, so everything here runs under plain `cargo test`.
//!
//! - `settings`: selectors, thresholds, timings and asset paths
//! - `counter`: digit extraction, suffix inference and the tick loop
//! - `registry`: arena of running animations keyed by element identity
//! - `chart`: typed chart configs, the two report presets and the renderer seam
//! - `hover`, `chrome`: style values derived from hover/scroll/click state
//! - `content`: shared-content fetch outcome and its inline error text

pub mod settings;
pub mod counter;
pub mod registry;
pub mod chart;
pub mod hover;
pub mod chrome;
pub mod content;
pub mod error;

pub use error::{ChartError, ContentError};
