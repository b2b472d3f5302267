//! Per-document numbering state.
use std::collections::HashMap;

use indexmap::IndexMap;
use pandoc_numbering_ast::Meta;

use crate::{
  config::Registry,
  diagnostics::Diagnostic,
  entry::NumberedEntry,
  format::OutputFormat,
  sections::SectionTracker,
};

/// State shared by the numbering, referencing and listing passes.
///
/// Built once per document from its metadata and dropped afterwards;
/// nothing is kept between documents.
#[derive(Debug, Clone, Default)]
pub struct NumberingContext {
  pub(crate) registry:    Registry,
  pub(crate) sections:    SectionTracker,
  /// Counter key to running count.
  pub(crate) counts:      IndexMap<String, usize>,
  /// Tag to entry.
  pub(crate) entries:     HashMap<String, NumberedEntry>,
  /// Category to tags, in document order.
  pub(crate) collections: IndexMap<String, Vec<String>>,
  pub(crate) diagnostics: Vec<Diagnostic>,
}

impl NumberingContext {
  #[must_use]
  pub fn new(format: OutputFormat) -> Self {
    Self {
      registry: Registry::new(format),
      ..Self::default()
    }
  }

  /// Context for a document with the given metadata.
  #[must_use]
  pub fn from_metadata(meta: &Meta, format: OutputFormat) -> Self {
    let mut context = Self::new(format);
    let diagnostics = context.registry.configure(meta);
    context.diagnostics.extend(diagnostics);
    context
  }

  #[must_use]
  pub const fn format(&self) -> &OutputFormat {
    self.registry.format()
  }

  #[must_use]
  pub const fn registry(&self) -> &Registry {
    &self.registry
  }

  #[must_use]
  pub fn entry(&self, tag: &str) -> Option<&NumberedEntry> {
    self.entries.get(tag)
  }

  /// Current count of a counter, `0` when it was never used.
  #[must_use]
  pub fn count(&self, counter: &str) -> usize {
    self.counts.get(counter).copied().unwrap_or_default()
  }

  /// Tags numbered in `category`, in document order.
  #[must_use]
  pub fn collection(&self, category: &str) -> &[String] {
    self.collections.get(category).map_or(&[], Vec::as_slice)
  }

  #[must_use]
  pub fn diagnostics(&self) -> &[Diagnostic] {
    &self.diagnostics
  }

  pub(crate) fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
    std::mem::take(&mut self.diagnostics)
  }

  /// Store a freshly numbered entry and append it to its collection.
  ///
  /// A reused tag replaces the stored entry but keeps its single place in
  /// the collection.
  pub(crate) fn record(&mut self, entry: NumberedEntry) {
    let tag = entry.tag.clone();
    let category = entry.category.clone();
    if let Some(previous) = self.entries.insert(tag.clone(), entry) {
      let diagnostic = Diagnostic::DuplicateTag { tag: previous.tag };
      log::warn!("pandoc-numbering: {diagnostic}");
      self.diagnostics.push(diagnostic);
    } else {
      self.collections.entry(category).or_default().push(tag);
    }
  }
}
