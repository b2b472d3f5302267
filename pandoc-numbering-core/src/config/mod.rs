//! Per-category settings.
//!
//! A [`CategoryDefinition`] is created with defaults the first time a
//! category is seen, either from the document metadata or from a marker.
//! Metadata overrides are merged in [`meta`].
pub mod meta;

use indexmap::IndexMap;
use pandoc_numbering_ast::Inline;

use crate::format::OutputFormat;

/// Default indentation of listing entries, in `em`.
pub const DEFAULT_ENTRY_TAB: f64 = 1.5;

/// Default width reserved for listing entry numbers, in `em`.
pub const DEFAULT_ENTRY_SPACE: f64 = 2.3;

/// A classic/titled pair of templates.
#[derive(Debug, Clone, PartialEq)]
pub struct Templates<T> {
  /// Used when the element has no title.
  pub classic: T,
  /// Used when the element has a `(title)` before its marker.
  pub title:   T,
}

impl<T> Templates<T> {
  #[must_use]
  pub const fn select(&self, titled: bool) -> &T {
    if titled { &self.title } else { &self.classic }
  }
}

/// How the identifier of a listing heading is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListingIdentifier {
  /// Derived from the listing title.
  #[default]
  Auto,
  /// No identifier.
  Disabled,
  /// An explicit identifier.
  Explicit(String),
}

/// Listing ("list of ...") settings of a category.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingSettings {
  /// Heading of the listing; no listing is produced when `None`.
  pub title:      Option<Vec<Inline>>,
  /// Mark the listing heading `unnumbered`.
  pub unnumbered: bool,
  /// Mark the listing heading `unlisted`.
  pub unlisted:   bool,
  pub identifier: ListingIdentifier,
}

impl Default for ListingSettings {
  fn default() -> Self {
    Self {
      title:      None,
      unnumbered: true,
      unlisted:   true,
      identifier: ListingIdentifier::Auto,
    }
  }
}

/// Spacing of LaTeX listing entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntryLayout {
  pub tab:      f64,
  pub space:    f64,
  /// Set once either value comes from the metadata; otherwise the listing
  /// reuses the figure list spacing of the document class.
  pub explicit: bool,
}

impl Default for EntryLayout {
  fn default() -> Self {
    Self {
      tab:      DEFAULT_ENTRY_TAB,
      space:    DEFAULT_ENTRY_SPACE,
      explicit: false,
    }
  }
}

/// Formatting and behavior settings of one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryDefinition {
  /// Number of leading section levels hidden from local numbers.
  pub first_section_level: usize,
  /// Number of section levels the counter is scoped to.
  pub last_section_level:  usize,
  /// Replacement content of the numbered element.
  pub text:                Templates<Vec<Inline>>,
  /// Default text of links to the element.
  pub link:                Templates<Vec<Inline>>,
  /// Plain-text caption, used as link title.
  pub caption:             Templates<String>,
  /// Text of the element in listings.
  pub entry:               Templates<Vec<Inline>>,
  pub classes:             Vec<String>,
  /// Whether `@category:name` citations become links.
  pub cite_shortcut:       bool,
  pub listing:             ListingSettings,
  pub entry_layout:        EntryLayout,
}

impl CategoryDefinition {
  /// Defaults for `category` on the given output target.
  #[must_use]
  pub fn new(category: &str, format: &OutputFormat) -> Self {
    let number = || vec![Inline::str("%D"), Inline::Space, Inline::str("%n")];

    let entry_classic = if format.is_latex() {
      vec![Inline::str("%D")]
    } else {
      vec![Inline::str("%D"), Inline::Space, Inline::str("%g")]
    };

    Self {
      first_section_level: 0,
      last_section_level:  0,
      text:                Templates {
        classic: vec![Inline::Strong(number())],
        title:   vec![
          Inline::Strong(number()),
          Inline::Space,
          Inline::Emph(vec![Inline::str("(%T)")]),
        ],
      },
      link:                Templates {
        classic: number(),
        title:   [number(), vec![Inline::Space, Inline::str("(%T)")]].concat(),
      },
      caption:             Templates {
        classic: "%D %n".to_string(),
        title:   "%D %n (%T)".to_string(),
      },
      entry:               Templates {
        classic: entry_classic,
        title:   vec![Inline::str("%T")],
      },
      classes:             vec![category.to_string()],
      cite_shortcut:       true,
      listing:             ListingSettings::default(),
      entry_layout:        EntryLayout::default(),
    }
  }
}

/// All category definitions of a document, in definition order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
  format:      OutputFormat,
  definitions: IndexMap<String, CategoryDefinition>,
}

impl Registry {
  #[must_use]
  pub fn new(format: OutputFormat) -> Self {
    Self {
      format,
      definitions: IndexMap::new(),
    }
  }

  #[must_use]
  pub const fn format(&self) -> &OutputFormat {
    &self.format
  }

  /// Get the definition of `category`, creating it with defaults if needed.
  ///
  /// Existing definitions are returned untouched, so overrides applied
  /// earlier survive.
  pub fn define(&mut self, category: &str) -> &mut CategoryDefinition {
    let format = &self.format;
    self
      .definitions
      .entry(category.to_string())
      .or_insert_with(|| CategoryDefinition::new(category, format))
  }

  #[must_use]
  pub fn get(&self, category: &str) -> Option<&CategoryDefinition> {
    self.definitions.get(category)
  }

  #[must_use]
  pub fn contains(&self, category: &str) -> bool {
    self.definitions.contains_key(category)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryDefinition)> {
    self
      .definitions
      .iter()
      .map(|(name, definition)| (name.as_str(), definition))
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.definitions.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.definitions.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults() {
    let definition = CategoryDefinition::new("exercise", &OutputFormat::Standard);
    assert_eq!(definition.classes, ["exercise"]);
    assert!(definition.cite_shortcut);
    assert_eq!(definition.listing.title, None);
    assert!(definition.listing.unnumbered);
    assert_eq!(definition.caption.select(true), "%D %n (%T)");
    assert_eq!(definition.entry.classic, vec![
      Inline::str("%D"),
      Inline::Space,
      Inline::str("%g"),
    ]);

    let latex = CategoryDefinition::new("exercise", &OutputFormat::Latex);
    assert_eq!(latex.entry.classic, vec![Inline::str("%D")]);
  }

  #[test]
  fn test_define_is_idempotent() {
    let mut registry = Registry::new(OutputFormat::Standard);
    registry.define("exercise").cite_shortcut = false;
    registry.define("exercise");
    registry.define("theorem");

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get("exercise").map(|d| d.cite_shortcut), Some(false));
    let names: Vec<&str> = registry.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["exercise", "theorem"]);
  }
}
