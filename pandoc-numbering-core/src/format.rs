use std::fmt;

/// Output target selected by the host.
///
/// Only the distinction between LaTeX-like targets and everything else
/// matters: it selects the `latex` or `standard` metadata scope, page
/// references, the phantom-section anchors and the listing mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
  Latex,
  #[default]
  Standard,
}

impl OutputFormat {
  /// Classify a pandoc output format name (`latex`, `html5`, `docx`, ...).
  #[must_use]
  pub fn from_name(name: &str) -> Self {
    match name.trim().to_ascii_lowercase().as_str() {
      "tex" | "latex" | "beamer" => Self::Latex,
      _ => Self::Standard,
    }
  }

  #[must_use]
  pub const fn is_latex(&self) -> bool {
    matches!(self, Self::Latex)
  }

  /// Name of the metadata scope holding target-specific settings.
  #[must_use]
  pub const fn scope(&self) -> &'static str {
    match self {
      Self::Latex => "latex",
      Self::Standard => "standard",
    }
  }
}

impl fmt::Display for OutputFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.scope())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_name() {
    assert_eq!(OutputFormat::from_name("latex"), OutputFormat::Latex);
    assert_eq!(OutputFormat::from_name("tex"), OutputFormat::Latex);
    assert_eq!(OutputFormat::from_name("LaTeX "), OutputFormat::Latex);
    assert_eq!(OutputFormat::from_name("html5"), OutputFormat::Standard);
    assert_eq!(OutputFormat::from_name(""), OutputFormat::Standard);
  }
}
