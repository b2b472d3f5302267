//! Marker syntax recognition.
//!
//! A marker is the last word of a paragraph or definition term:
//!
//! ```text
//! marker   := levels '#' (prefix ':')? name?
//! escaped  := levels '#' '#' (prefix ':')? name?
//! levels   := ('-.')* ('+.')*
//! ```
//!
//! The `+.` groups give the number of sectioning levels the counter is
//! scoped to; the `-.` groups give how many of those leading levels are
//! hidden from the displayed number. `-.+.+.#` in section 2.3 is counted per
//! section and displayed as `3.1`, `3.2`, ...
use std::sync::LazyLock;

use regex::Regex;

use crate::utils::compile;

const LEVELS: &str = r"(?P<hidden>(?:-\.)*)(?P<shown>(?:\+\.)*)";
const NUMBER: &str =
  r"#(?:(?P<prefix>[a-zA-Z][\w.-]*):)?(?P<name>[a-zA-Z][\w:.-]*)?";

static MARKER_RE: LazyLock<Regex> =
  LazyLock::new(|| compile("MARKER_RE", &format!("^{LEVELS}{NUMBER}$")));

static ESCAPED_RE: LazyLock<Regex> =
  LazyLock::new(|| compile("ESCAPED_RE", &format!("^{LEVELS}#{NUMBER}$")));

static SECTIONING_RE: LazyLock<Regex> =
  LazyLock::new(|| compile("SECTIONING_RE", &format!("^{LEVELS}$")));

/// Fields of a recognized numbering marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
  /// Number of `-.` groups: the first section level shown in local numbers.
  pub first_level: usize,
  /// Number of `+.` groups: the last section level used by the counter.
  pub last_level:  usize,
  /// Explicit category, overriding the one derived from the description.
  pub prefix:      Option<String>,
  /// Explicit name, making the tag `category:name`.
  pub name:        Option<String>,
}

impl Marker {
  /// Whether the marker carries explicit sectioning levels.
  #[must_use]
  pub const fn has_levels(&self) -> bool {
    self.first_level != 0 || self.last_level != 0
  }
}

/// Result of matching the last word of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerMatch {
  /// A numbering marker.
  Numbered(Marker),
  /// A doubled `##`: the author wanted a literal `#`.
  Escaped,
}

/// Recognize the marker syntax in `text`.
///
/// The escaped form is only considered when the primary form fails. Returns
/// `None` for ordinary prose.
#[must_use]
pub fn parse(text: &str) -> Option<MarkerMatch> {
  if let Some(caps) = MARKER_RE.captures(text) {
    let (first_level, last_level) = level_counts(&caps);
    return Some(MarkerMatch::Numbered(Marker {
      first_level,
      last_level,
      prefix: caps.name("prefix").map(|m| m.as_str().to_string()),
      name: caps.name("name").map(|m| m.as_str().to_string()),
    }));
  }
  ESCAPED_RE.is_match(text).then_some(MarkerMatch::Escaped)
}

/// Parse a sectioning string such as `-.+.` into `(first, last)`.
#[must_use]
pub fn parse_sectioning(text: &str) -> Option<(usize, usize)> {
  SECTIONING_RE.captures(text).map(|caps| level_counts(&caps))
}

/// Replace the first `##` of an escaped marker by a single `#`.
#[must_use]
pub fn unescape(text: &str) -> String {
  text.replacen("##", "#", 1)
}

fn level_counts(caps: &regex::Captures<'_>) -> (usize, usize) {
  let group_len = |name: &str| caps.name(name).map_or(0, |m| m.as_str().len());
  (group_len("hidden") / 2, group_len("shown") / 2)
}
