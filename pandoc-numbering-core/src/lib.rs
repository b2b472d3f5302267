//! # pandoc-numbering-core
//!
//! Numbering, cross-referencing and listing of labeled paragraphs in a
//! pandoc document.
//!
//! A paragraph or definition term ending with a marker such as `#`,
//! `-.+.#` or `#ex:first` is numbered within its category, optionally per
//! section:
//!
//! ```text
//! Exercise #                    ->  Exercise 1
//! Theorem (Fermat) #thm:fermat  ->  Theorem 1 (Fermat)
//! [](#thm:fermat)               ->  Theorem 1 (Fermat)
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use pandoc_numbering_ast::{Block, Inline, Meta, Pandoc};
//! use pandoc_numbering_core::{NumberingFilter, OutputFormat};
//!
//! let mut document =
//!   Pandoc::new(Meta::new(), vec![Block::Para(Inline::words("Exercise #"))]);
//! let report = NumberingFilter::new(OutputFormat::Standard).apply(&mut document);
//!
//! assert_eq!(report.numbered, 1);
//! assert!(report.diagnostics.is_empty());
//! ```
//!
//! Per-category behavior is configured through the `pandoc-numbering`
//! metadata field, see [`config::meta`].
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod entry;
pub mod error;
pub mod filter;
pub mod format;
pub mod identifier;
pub mod latex;
pub mod listing;
pub mod marker;
pub mod numbering;
pub mod reference;
pub mod sections;
pub mod template;
pub mod utils;

pub use crate::{
  config::{CategoryDefinition, ListingIdentifier, Registry},
  context::NumberingContext,
  diagnostics::Diagnostic,
  entry::NumberedEntry,
  error::{ConfigError, NumberingError, NumberingResult},
  filter::{FilterReport, NumberingFilter},
  format::OutputFormat,
};
