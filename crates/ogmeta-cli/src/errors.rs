//! Error types for the ogmeta CLI application.
//!
//! The CLI only fails when its configuration can't be read or written, or when output can't be
//! serialized. Errors are transparent so the underlying message reaches the user unchanged.

use thiserror::Error;

/// Errors that can occur during CLI operations.
#[derive(Error, Debug)]
pub enum OgMetaCliErrors {
  /// Errors from the underlying ogmeta library
  #[error(transparent)]
  OgMeta(#[from] ogmeta::OgMetaError),

  /// Failure serializing `--json` output
  #[error(transparent)]
  Json(#[from] serde_json::Error),
}
