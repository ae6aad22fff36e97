//! Length limiting for page titles and descriptions.
//!
//! Titles and descriptions that exceed their limit are cut at a plain character count (not at
//! a word boundary) and marked with a trailing [`ELLIPSIS`]. Lengths are counted in `char`s, so
//! multi-byte text is never split inside a character.
//!
//! Descriptions may carry tags, which are rendered as a `", "`-separated list and appended
//! directly after the description text.
//!
//! # Examples
//!
//! ```
//! use ogmeta::format;
//!
//! let title = "This is a very long title that should be truncated because it exceeds 60 characters";
//!
//! // Default limit of 60 characters
//! let formatted = format::format_title_length(title, None);
//! assert_eq!(formatted, "This is a very long title that should be truncated becaus...");
//!
//! // Reserve room for a " | Site Name" suffix
//! let formatted = format::format_title_length(title, Some(12));
//! assert_eq!(formatted.chars().count(), 48);
//! ```

use super::*;

/// Default maximum title length, in characters.
pub const TITLE_MAX_LENGTH: usize = 60;

/// Default maximum description length, in characters.
pub const DESC_MAX_LENGTH: usize = 160;

/// Marker appended to anything that was cut short.
pub const ELLIPSIS: &str = "...";

/// Separator placed between rendered tags.
const TAG_SEPARATOR: &str = ", ";

/// Applies the limits of a [`FormatConfig`] to titles and descriptions.
///
/// The free functions [`format_title_length`] and [`format_desc_length`] use a default
/// `Formatter`; build one from a loaded config to use other limits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Formatter {
  /// Limits applied by this formatter
  config: FormatConfig,
}

impl Formatter {
  /// Create a formatter using the given limits.
  pub fn new(config: FormatConfig) -> Self { Self { config } }

  /// The limits this formatter applies.
  pub fn config(&self) -> &FormatConfig { &self.config }

  /// Bound a title to the configured title length.
  ///
  /// `add_on_length` reserves characters for text the caller will attach later (a site name
  /// suffix, for instance), lowering the effective limit to `title_max_length - add_on_length`.
  /// A title within the effective limit is returned unchanged. A longer one keeps its first
  /// `limit - 3` characters followed by `"..."`, for exactly `limit` characters in total.
  ///
  /// # Examples
  ///
  /// ```
  /// use ogmeta::{FormatConfig, Formatter};
  ///
  /// let formatter = Formatter::new(FormatConfig { title_max_length: 10, ..Default::default() });
  /// assert_eq!(formatter.title("Tiny", None), "Tiny");
  /// assert_eq!(formatter.title("Hello, World", None), "Hello, ...");
  /// assert_eq!(formatter.title("Hello, World", Some(4)), "Hel...");
  /// ```
  pub fn title(&self, title: &str, add_on_length: Option<usize>) -> String {
    let limit = self.config.title_max_length.saturating_sub(add_on_length.unwrap_or(0));

    let length = title.chars().count();
    if length <= limit {
      trace!("Title fits within {} characters", limit);
      return title.to_owned();
    }

    debug!("Truncating title from {} to {} characters", length, limit);
    truncate(title, limit)
  }

  /// Bound a description, with optional tags appended, to the configured description length.
  ///
  /// Returns `None` for an empty description, meaning the description should be left out of
  /// the page metadata altogether.
  ///
  /// Otherwise the tags are joined with `", "` and appended straight after the description:
  /// - If the combined text fits, it is returned as is.
  /// - If the description alone is too long, it is cut to `desc_max_length - 3` characters plus
  ///   `"..."` and the tags are dropped.
  /// - If only the tags overflow, the tag text is cut to whatever room remains after the
  ///   description and an ellipsis, given its own `"..."`, and the result is marked truncated
  ///   with a further `"..."`.
  ///
  /// # Examples
  ///
  /// ```
  /// use ogmeta::Formatter;
  ///
  /// let formatter = Formatter::default();
  /// assert_eq!(formatter.description("", Some(&["tag"])), None);
  /// assert_eq!(
  ///   formatter.description("Description with tags", Some(&["tag1", "tag2", "tag3"])).as_deref(),
  ///   Some("Description with tagstag1, tag2, tag3")
  /// );
  ///
  /// let desc = "A".repeat(155);
  /// assert_eq!(
  ///   formatter.description(&desc, Some(&["tag1", "tag2"])),
  ///   Some(format!("{desc}ta......"))
  /// );
  /// ```
  pub fn description<I>(&self, desc: &str, tags: Option<I>) -> Option<String>
  where
    I: IntoIterator,
    I::Item: AsRef<str>,
  {
    if desc.is_empty() {
      trace!("Empty description, omitting it");
      return None;
    }

    let limit = self.config.desc_max_length;
    let tags = tags.map(render_tags).unwrap_or_default();

    let desc_length = desc.chars().count();
    let length = desc_length + tags.chars().count();
    if length <= limit {
      trace!("Description fits within {} characters", limit);
      return Some(format!("{desc}{tags}"));
    }

    if desc_length > limit {
      debug!("Truncating description from {} to {} characters", desc_length, limit);
      return Some(truncate(desc, limit));
    }

    let room = limit.saturating_sub(desc_length + ellipsis_length());
    debug!("Tags overflow description limit of {}, keeping {} tag characters", limit, room);
    Some(format!("{desc}{}{ELLIPSIS}{ELLIPSIS}", take_chars(&tags, room)))
  }
}

/// Bound a title to 60 characters, less `add_on_length`.
///
/// See [`Formatter::title`] for the exact rules.
///
/// # Examples
///
/// ```
/// use ogmeta::format_title_length;
///
/// assert_eq!(format_title_length("Short Title", None), "Short Title");
/// assert_eq!(
///   format_title_length(
///     "This is a title that needs to be truncated with additional length parameter",
///     Some(10)
///   ),
///   "This is a title that needs to be truncated with..."
/// );
/// ```
pub fn format_title_length(title: &str, add_on_length: Option<usize>) -> String {
  Formatter::default().title(title, add_on_length)
}

/// Bound a description plus optional tags to 160 characters.
///
/// See [`Formatter::description`] for the exact rules.
///
/// # Examples
///
/// ```
/// use ogmeta::format_desc_length;
///
/// assert_eq!(format_desc_length("", None::<&[&str]>), None);
/// assert_eq!(format_desc_length("Short description", None::<&[&str]>).as_deref(), Some("Short description"));
/// ```
pub fn format_desc_length<I>(desc: &str, tags: Option<I>) -> Option<String>
where
  I: IntoIterator,
  I::Item: AsRef<str>,
{
  Formatter::default().description(desc, tags)
}

/// Join tags with `", "`, without a trailing separator.
fn render_tags<I>(tags: I) -> String
where
  I: IntoIterator,
  I::Item: AsRef<str>,
{
  tags.into_iter().map(|tag| tag.as_ref().to_owned()).collect::<Vec<String>>().join(TAG_SEPARATOR)
}

/// Length of [`ELLIPSIS`] in characters.
pub(crate) fn ellipsis_length() -> usize { ELLIPSIS.chars().count() }

/// The longest prefix of `text` holding at most `count` characters.
fn take_chars(text: &str, count: usize) -> &str {
  match text.char_indices().nth(count) {
    Some((index, _)) => &text[..index],
    None => text,
  }
}

/// Cut `text` so that it plus the ellipsis spans exactly `limit` characters.
///
/// Limits shorter than the ellipsis itself get a clipped ellipsis.
fn truncate(text: &str, limit: usize) -> String {
  match limit.checked_sub(ellipsis_length()) {
    Some(keep) => format!("{}{ELLIPSIS}", take_chars(text, keep)),
    None => take_chars(ELLIPSIS, limit).to_owned(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Stand-in for an absent tag list.
  const NO_TAGS: Option<&[&str]> = None;

  #[test]
  fn test_title_unchanged_within_limit() {
    assert_eq!(format_title_length("Short Title", None), "Short Title");
    assert_eq!(format_title_length("", None), "");

    let exact = "x".repeat(60);
    assert_eq!(format_title_length(&exact, None), exact);
  }

  #[test]
  fn test_title_truncated() {
    assert_eq!(
      format_title_length(
        "This is a very long title that should be truncated because it exceeds 60 characters",
        None
      ),
      "This is a very long title that should be truncated becaus..."
    );

    let formatted = format_title_length(&"x".repeat(61), None);
    assert_eq!(formatted.chars().count(), 60);
    assert!(formatted.ends_with("..."));
  }

  #[test]
  fn test_title_add_on_length() {
    let title = "This is a title that needs to be truncated with additional length parameter";
    assert_eq!(format_title_length(title, Some(10)), "This is a title that needs to be truncated with...");

    for add_on in [0, 5, 20, 45, 57] {
      let formatted = format_title_length(title, Some(add_on));
      assert_eq!(formatted.chars().count(), 60 - add_on);
    }
  }

  #[test]
  fn test_title_add_on_exceeds_limit() {
    assert_eq!(format_title_length("Anything", Some(60)), "");
    assert_eq!(format_title_length("Anything", Some(100)), "");
    assert_eq!(format_title_length("Anything", Some(58)), "..");
    assert_eq!(format_title_length("", Some(100)), "");
  }

  #[test]
  fn test_title_multibyte() {
    let title = "日本語のタイトル".repeat(10);
    let formatted = format_title_length(&title, None);
    assert_eq!(formatted.chars().count(), 60);
    assert!(formatted.starts_with("日本語のタイトル"));
    assert!(formatted.ends_with("..."));
  }

  #[test]
  fn test_desc_empty() {
    assert_eq!(format_desc_length("", NO_TAGS), None);
    assert_eq!(format_desc_length("", Some(&["tag1", "tag2"])), None);
  }

  #[test]
  fn test_desc_unchanged_within_limit() {
    assert_eq!(format_desc_length("Short description", NO_TAGS).as_deref(), Some("Short description"));

    let exact = "A".repeat(160);
    assert_eq!(format_desc_length(&exact, NO_TAGS), Some(exact));
  }

  #[test]
  fn test_desc_truncated() {
    let desc = "This is a very long description that needs to be truncated because it exceeds the \
                maximum length of 160 characters. We need to make sure it gets properly truncated \
                with ellipsis at the end.";
    assert_eq!(
      format_desc_length(desc, NO_TAGS).as_deref(),
      Some(
        "This is a very long description that needs to be truncated because it exceeds the \
         maximum length of 160 characters. We need to make sure it gets properly tru..."
      )
    );

    let formatted = format_desc_length(&"A".repeat(161), NO_TAGS).unwrap();
    assert_eq!(formatted, format!("{}...", "A".repeat(157)));
  }

  #[test]
  fn test_desc_with_tags() {
    assert_eq!(
      format_desc_length("Description with tags", Some(&["tag1", "tag2", "tag3"])).as_deref(),
      Some("Description with tagstag1, tag2, tag3")
    );

    let tags = ["verylongtag1", "verylongtag2", "verylongtag3", "verylongtag4", "verylongtag5"];
    assert_eq!(
      format_desc_length("Description with very long tags", Some(&tags)).as_deref(),
      Some(
        "Description with very long tagsverylongtag1, verylongtag2, verylongtag3, verylongtag4, \
         verylongtag5"
      )
    );

    let owned = vec![String::from("rust"), String::from("seo")];
    assert_eq!(format_desc_length("Tags as Strings ", Some(&owned)).as_deref(), Some("Tags as Strings rust, seo"));
  }

  #[test]
  fn test_desc_empty_tags() {
    let empty: [&str; 0] = [];
    assert_eq!(
      format_desc_length("Description with empty tags", Some(&empty)).as_deref(),
      Some("Description with empty tags")
    );
    assert_eq!(
      format_desc_length("Description with no tags", NO_TAGS).as_deref(),
      Some("Description with no tags")
    );
  }

  #[test]
  fn test_desc_tags_overflow() {
    let desc = "A".repeat(155);
    assert_eq!(format_desc_length(&desc, Some(&["tag1", "tag2"])), Some(format!("{desc}ta......")));

    // No room left for any tag text
    let desc = "A".repeat(158);
    assert_eq!(format_desc_length(&desc, Some(&["tag"])), Some(format!("{desc}......")));
  }

  #[test]
  fn test_desc_too_long_drops_tags() {
    let desc = "B".repeat(200);
    assert_eq!(format_desc_length(&desc, Some(&["tag1"])), Some(format!("{}...", "B".repeat(157))));
  }

  #[test]
  fn test_desc_multibyte() {
    let desc = "é".repeat(200);
    let formatted = format_desc_length(&desc, NO_TAGS).unwrap();
    assert_eq!(formatted.chars().count(), 160);
    assert_eq!(formatted, format!("{}...", "é".repeat(157)));
  }

  #[test]
  fn test_truncate_spans_limit_in_chars() {
    let text = "ñandú ".repeat(5);
    for limit in 0..=12 {
      let truncated = truncate(&text, limit);
      assert_eq!(truncated.chars().count(), limit);
      if limit >= ellipsis_length() {
        assert!(truncated.ends_with(ELLIPSIS));
      }
    }
    assert_eq!(ellipsis_length(), 3);
  }

  #[test]
  fn test_tags_overflow_room_in_chars() {
    let formatter = Formatter::new(FormatConfig { title_max_length: 60, desc_max_length: 10 });
    assert_eq!(formatter.description("ñandú", Some(&["éé", "üü"])).as_deref(), Some("ñandúéé......"));
  }

  #[test]
  fn test_custom_limits() {
    let formatter = Formatter::new(FormatConfig { title_max_length: 10, desc_max_length: 12 });
    assert_eq!(formatter.title("Hello, World", None), "Hello, ...");
    assert_eq!(formatter.description("Hello there", Some(&["a"])).as_deref(), Some("Hello therea"));
    assert_eq!(formatter.description("Hello there!!", NO_TAGS).as_deref(), Some("Hello the..."));
    assert_eq!(formatter.config().desc_max_length, 12);
  }

  #[traced_test]
  #[test]
  fn test_truncation_is_logged() {
    format_title_length(&"x".repeat(80), None);
    assert!(logs_contain("Truncating title from 80 to 60 characters"));

    format_desc_length(&"A".repeat(155), Some(&["tag1", "tag2"]));
    assert!(logs_contain("Tags overflow description limit of 160"));
  }
}
