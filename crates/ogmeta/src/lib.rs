//! Length-bounded titles and descriptions for page metadata.
//!
//! Search engines and link previews cut `<title>`, `<meta name="description">` and Open Graph
//! values at fairly predictable lengths. This library shortens those values up front, marking
//! anything that was cut with an ellipsis.
//!
//! # Example
//! ```rust
//! use ogmeta::format::{format_desc_length, format_title_length};
//!
//! let title = format_title_length("A Short Title", None);
//! assert_eq!(title, "A Short Title");
//!
//! let desc = format_desc_length("Notes on Rust", Some(&["rust", "notes"]));
//! assert_eq!(desc.as_deref(), Some("Notes on Rustrust, notes"));
//!
//! assert_eq!(format_desc_length("", None::<&[&str]>), None);
//! ```

#![warn(missing_docs, clippy::missing_docs_in_private_items)]
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};
#[cfg(test)] use tracing_test::traced_test;

pub mod config;
pub mod errors;
pub mod format;
pub mod meta;

pub use config::FormatConfig;
pub use errors::OgMetaError;
pub use format::{format_desc_length, format_title_length, Formatter};
pub use meta::PageMeta;
