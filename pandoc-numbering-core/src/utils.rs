use regex::Regex;

/// Create a regex that never matches anything.
///
/// Used as the fallback when one of the static patterns fails to compile, so
/// that a broken pattern degrades into "no marker found" instead of a panic.
#[must_use]
pub fn never_matching_regex() -> Regex {
  Regex::new(r"[^\s\S]").unwrap_or_else(|_| {
    #[allow(
      clippy::expect_used,
      reason = "This pattern is guaranteed to be valid"
    )]
    Regex::new(r"^\b$").expect("regex pattern ^\\b$ should always compile")
  })
}

/// Compile a static pattern, logging and falling back to
/// [`never_matching_regex`] on failure.
pub(crate) fn compile(name: &str, pattern: &str) -> Regex {
  Regex::new(pattern).unwrap_or_else(|e| {
    log::error!(
      "Failed to compile {name} regex: {e}\n Falling back to never matching \
       regex."
    );
    never_matching_regex()
  })
}
