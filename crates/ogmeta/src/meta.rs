//! Formatted title and description for a single page.

use super::*;

/// A page's title and description, each bounded by a [`Formatter`].
///
/// Serializes to JSON with the description left out when absent:
///
/// ```
/// use ogmeta::Formatter;
///
/// let meta = Formatter::default().page_meta("Home", None, "", None::<&[&str]>);
/// assert_eq!(serde_json::to_string(&meta).unwrap(), r#"{"title":"Home"}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
  /// The bounded page title
  pub title:       String,
  /// The bounded description, `None` when there is nothing to describe
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

impl Formatter {
  /// Format a title and a description (with optional tags) in one go.
  ///
  /// Equivalent to calling [`Formatter::title`] and [`Formatter::description`] separately.
  pub fn page_meta<I>(
    &self,
    title: &str,
    add_on_length: Option<usize>,
    desc: &str,
    tags: Option<I>,
  ) -> PageMeta
  where
    I: IntoIterator,
    I::Item: AsRef<str>,
  {
    PageMeta { title: self.title(title, add_on_length), description: self.description(desc, tags) }
  }
}
