//! Workflow document integration.
//!
//! The shared content served to the report page is a long plain-text workflow
//! document, numbered in steps 0-12. This crate turns that text into HTML
//! sections and splices them into the report's HTML template:
//!
//! 1. [`parse::parse_processes`] splits the text at the step markers.
//! 2. [`sections::extract_section`] and [`prompts::extract_prompts`] pull the
//!    purpose/work/comparison/supplement blocks and per-model prompts out of a
//!    step.
//! 3. [`html`] renders them; [`integrate::integrate`] replaces the template's
//!    content area and navigation list.
//!
//! # Usage
//!
//! ```rust
//! use poc_workflow::integrate::integrate;
//!
//! let text = "0. キーワード選定\n目的と内容\n検索意図を整理する。\n作業内容\n候補を洗い出す。\n決定事項\n";
//! let template = "<style></style><nav><ul></ul></nav><div class=\"content\"></div>\n</div>\n</body>";
//! let result = integrate(text, template);
//! assert_eq!(result.sections, 1);
//! assert!(result.html.contains("id=\"process-0\""));
//! ```

pub mod steps;
pub mod parse;
pub mod sections;
pub mod prompts;
pub mod html;
pub mod integrate;

pub use integrate::{integrate, Integration};
pub use steps::{ProcessStep, PROCESS_STEPS};
