//! Rustoc turns the flat headline list of an HTML document into a
//! hierarchical outline and renders it as nested list markup for
//! navigation.
//!
//! The core is a pure pipeline: extract headlines (or supply your own),
//! build the outline tree, render it.
//!
//! ```
//! use rustoc::toc::{generate_toc_html, Headline, ListType};
//!
//! let headlines = vec![
//!     Headline::new(1, "Intro", "intro"),
//!     Headline::new(2, "Setup", "setup"),
//! ];
//! let html = generate_toc_html(&headlines, ListType::Unordered).unwrap();
//! assert!(html.starts_with("<ul>"));
//! ```

pub mod cli;
pub mod config;
pub mod source;
pub mod toc;
pub mod utils;

pub use config::TocConfig;
pub use source::extract_headlines;
pub use toc::{generate_toc_html, Headline, ListType, OutlineTree};
pub use utils::error::{BoxResult, RustocError};
