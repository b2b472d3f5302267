//! Identifier normalization.
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::{
  UnicodeNormalization,
  char::canonical_combining_class,
};

use crate::utils::compile;

static INVALID_RUN_RE: LazyLock<Regex> =
  LazyLock::new(|| compile("INVALID_RUN_RE", r"[^0-9a-zA-Z_-]+"));

static LEADING_NON_LETTERS_RE: LazyLock<Regex> =
  LazyLock::new(|| compile("LEADING_NON_LETTERS_RE", r"^[^a-zA-Z]+"));

/// Convert arbitrary text into an identifier-safe slug.
///
/// Accents are stripped through NFKD decomposition, the text is lowercased,
/// every run of characters outside `[0-9a-zA-Z_-]` becomes a single dash and
/// anything before the first letter is removed. The result is either empty
/// or starts with a lowercase ASCII letter, so applying the function twice
/// gives the same result as applying it once.
#[must_use]
pub fn identifier(text: &str) -> String {
  let decomposed: String = text
    .nfkd()
    .filter(|c| canonical_combining_class(*c) == 0)
    .collect::<String>()
    .to_lowercase();
  let dashed = INVALID_RUN_RE.replace_all(&decomposed, "-");
  LEADING_NON_LETTERS_RE.replace(&dashed, "").into_owned()
}

/// Identifier pandoc would generate for a heading with this text.
///
/// Keeps alphanumerics, `_`, `-` and `.`, turns whitespace into dashes,
/// lowercases and drops everything before the first letter. Falls back to
/// `section` when nothing is left.
#[must_use]
pub fn auto_identifier(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  for c in text.chars() {
    if c.is_alphanumeric() || matches!(c, '_' | '-' | '.') {
      out.extend(c.to_lowercase());
    } else if c.is_whitespace() {
      out.push('-');
    }
  }
  let start = out.find(char::is_alphabetic).unwrap_or(out.len());
  let trimmed = &out[start..];
  if trimmed.is_empty() {
    "section".to_string()
  } else {
    trimmed.to_string()
  }
}

/// Name usable as a LaTeX list name: lowercase ASCII letters only.
#[must_use]
pub fn latex_category(category: &str) -> String {
  category.chars().filter(char::is_ascii_lowercase).collect()
}
