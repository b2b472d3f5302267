use std::io;

use thiserror::Error;

/// Error type for filter-level failures.
///
/// Numbering itself never fails: malformed markers and dangling references
/// are left alone. Only reading or writing the document can go wrong.
#[derive(Debug, Error)]
pub enum NumberingError {
  #[error("I/O error: {0}")]
  Io(#[from] io::Error),

  #[error("Invalid pandoc JSON: {0}")]
  Json(#[from] serde_json::Error),

  #[error(
    "Unsupported pandoc API version {found}, expected {expected} or later"
  )]
  ApiVersion { found: String, expected: String },
}

/// Result type for filter-level operations.
pub type NumberingResult<T> = Result<T, NumberingError>;

/// A rejected per-category setting.
///
/// These are reported as warnings; the setting keeps its previous value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
  #[error("{key} is not correct: expected {expected}, found {found}")]
  WrongShape {
    key:      String,
    expected: &'static str,
    found:    &'static str,
  },

  #[error("{key} is not correct: {value:?} is not a number")]
  NotANumber { key: String, value: String },

  #[error("{key} must be positive")]
  NotPositive { key: String },

  #[error("{key} must be between {min} and {max}, found {value}")]
  OutOfRange {
    key:   String,
    value: i64,
    min:   i64,
    max:   i64,
  },

  #[error("sectioning-levels is not correct: {0:?}")]
  Sectioning(String),

  #[error(
    "first-section-level ({first}) is greater than last-section-level ({last})"
  )]
  InvertedLevels { first: usize, last: usize },
}
