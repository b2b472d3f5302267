//! Non-fatal findings collected while processing a document.
use std::fmt;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
  /// A category setting from the document metadata was rejected.
  InvalidSetting {
    category: String,
    error:    ConfigError,
  },
  /// A link or citation shortcut points to a tag nobody defined.
  UnresolvedReference { tag: String },
  /// Two elements were given the same explicit name; the later one wins.
  DuplicateTag { tag: String },
}

impl fmt::Display for Diagnostic {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidSetting { category, error } => {
        write!(f, "{error} for category {category}")
      },
      Self::UnresolvedReference { tag } => {
        write!(f, "reference to unknown tag {tag}")
      },
      Self::DuplicateTag { tag } => write!(f, "tag {tag} is defined twice"),
    }
  }
}
