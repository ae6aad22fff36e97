//! Length limits used by the [`Formatter`](crate::format::Formatter).
//!
//! The defaults follow common search-engine cut-offs: 60 characters for titles and 160 for
//! descriptions. Both can be overridden through a small JSON file:
//!
//! ```json
//! {
//!   "title_max_length": 70,
//!   "desc_max_length": 155
//! }
//! ```
//!
//! Fields left out of the file keep their defaults.
//!
//! # Examples
//!
//! ```no_run
//! use ogmeta::{FormatConfig, Formatter};
//!
//! # fn example() -> Result<(), ogmeta::OgMetaError> {
//! let config = FormatConfig::load_or_default(FormatConfig::default_path())?;
//! let formatter = Formatter::new(config);
//! println!("{}", formatter.title("Some page title", None));
//! # Ok(())
//! # }
//! ```

use super::*;
use crate::format::{ellipsis_length, DESC_MAX_LENGTH, TITLE_MAX_LENGTH};

/// Configurable limits for title and description formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
  /// Maximum number of characters in a formatted title
  pub title_max_length: usize,
  /// Maximum number of characters in a formatted description
  pub desc_max_length:  usize,
}

impl Default for FormatConfig {
  fn default() -> Self {
    Self { title_max_length: TITLE_MAX_LENGTH, desc_max_length: DESC_MAX_LENGTH }
  }
}

impl FormatConfig {
  /// Check that every limit leaves room for at least the ellipsis marker.
  pub fn validate(&self) -> Result<(), OgMetaError> {
    let minimum = ellipsis_length();
    for (field, value) in
      [("title_max_length", self.title_max_length), ("desc_max_length", self.desc_max_length)]
    {
      if value < minimum {
        return Err(OgMetaError::InvalidLimit { field, value, minimum });
      }
    }
    Ok(())
  }

  /// Read and validate a config from a JSON file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self, OgMetaError> {
    let path = path.as_ref();
    debug!("Loading config from {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    let config: Self = serde_json::from_str(&contents)?;
    config.validate()?;
    trace!("Loaded config: {:?}", config);
    Ok(config)
  }

  /// Like [`FormatConfig::load`], but a missing file yields the defaults.
  pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, OgMetaError> {
    let path = path.as_ref();
    match Self::load(path) {
      Err(OgMetaError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
        debug!("No config at {}, using defaults", path.display());
        Ok(Self::default())
      },
      result => result,
    }
  }

  /// Write the config as pretty-printed JSON, creating parent directories as needed.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<(), OgMetaError> {
    self.validate()?;
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(self)?)?;
    info!("Saved config to {}", path.display());
    Ok(())
  }

  /// Get default config path in the user's config directory
  pub fn default_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("ogmeta").join("config.json")
  }
}
