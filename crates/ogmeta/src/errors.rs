//! Error types for the ogmeta library.
//!
//! Formatting itself never fails: every title and description maps to some output. Errors only
//! arise around configuration, namely:
//! - Reading or writing a config file
//! - Parsing or serializing config JSON
//! - Rejecting limits too small to hold an ellipsis
//!
//! # Examples
//!
//! ```no_run
//! use ogmeta::{errors::OgMetaError, FormatConfig};
//!
//! match FormatConfig::load("ogmeta.json") {
//!   Err(OgMetaError::InvalidLimit { field, value, .. }) =>
//!     println!("{field} is too small: {value}"),
//!   Err(OgMetaError::Json(e)) => println!("Malformed config: {e}"),
//!   Err(e) => println!("Other error: {e}"),
//!   Ok(config) => println!("Loaded {config:?}"),
//! }
//! ```

use thiserror::Error;

/// Errors that can occur when loading, validating or saving a [`FormatConfig`].
///
/// [`FormatConfig`]: crate::config::FormatConfig
#[derive(Error, Debug)]
pub enum OgMetaError {
  /// A file system operation failed.
  ///
  /// This occurs when:
  /// - The config file cannot be read
  /// - The config directory cannot be created
  /// - Writing the config file fails
  #[error(transparent)]
  Io(#[from] std::io::Error),

  /// The config file isn't valid JSON or doesn't match the expected shape.
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// A configured length limit can't fit the ellipsis marker.
  #[error("`{field}` must be at least {minimum}, got {value}")]
  InvalidLimit {
    /// Name of the offending config field
    field:   &'static str,
    /// The value found in the config
    value:   usize,
    /// Smallest accepted value
    minimum: usize,
  },
}
