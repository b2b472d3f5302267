//! Reading category settings from the `pandoc-numbering` metadata field.
//!
//! ```yaml
//! pandoc-numbering:
//!   exercise:
//!     general:
//!       listing-title: List of exercises
//!       sectioning-levels: -.+.+.
//!     standard:
//!       format-link-classic: Ex. %n
//!     latex:
//!       entry-space: 3
//! ```
//!
//! Settings that fail validation are reported and otherwise ignored; the
//! category keeps its previous value for that key.
use indexmap::IndexMap;
use log::{debug, warn};
use pandoc_numbering_ast::{Inline, Meta, MetaValue, stringify::stringify};

use super::{CategoryDefinition, ListingIdentifier, Registry};
use crate::{diagnostics::Diagnostic, error::ConfigError, marker};

/// Name of the metadata field holding all category settings.
pub const METADATA_KEY: &str = "pandoc-numbering";

/// Deepest sectioning level a category can be scoped to.
pub const MAX_SECTION_LEVEL: i64 = 6;

type Settings = IndexMap<String, MetaValue>;

impl Registry {
  /// Define every category found in the document metadata and apply its
  /// settings.
  ///
  /// Rejected settings are logged and returned as diagnostics.
  pub fn configure(&mut self, meta: &Meta) -> Vec<Diagnostic> {
    let Some(value) = meta.get(METADATA_KEY) else {
      return Vec::new();
    };
    let Some(categories) = value.as_map() else {
      warn!(
        "{METADATA_KEY}: expected a map of categories, found {}",
        value.kind()
      );
      return Vec::new();
    };

    let mut diagnostics = Vec::new();
    for (category, definition) in categories {
      let Some(settings) = definition.as_map() else {
        debug!("Skipping category {category}: settings are not a map");
        continue;
      };
      let errors = self.configure_category(category, settings);
      for error in errors {
        let diagnostic = Diagnostic::InvalidSetting {
          category: category.clone(),
          error,
        };
        warn!("{METADATA_KEY}: {diagnostic}");
        diagnostics.push(diagnostic);
      }
    }
    diagnostics
  }

  /// Define `category` and apply the `general` scope and the scope of the
  /// current output target.
  pub fn configure_category(
    &mut self,
    category: &str,
    settings: &Settings,
  ) -> Vec<ConfigError> {
    let scope = self.format().scope();
    let latex = self.format().is_latex();
    let definition = self.define(category);
    let mut errors = Vec::new();

    if let Some(general) = scoped(settings, "general", &mut errors) {
      apply_general(definition, general, &mut errors);
    }
    if let Some(target) = scoped(settings, scope, &mut errors) {
      apply_formats(definition, target, &mut errors);
      if latex {
        apply_entry_layout(definition, target, &mut errors);
      }
    }
    errors
  }
}

fn scoped<'a>(
  settings: &'a Settings,
  scope: &str,
  errors: &mut Vec<ConfigError>,
) -> Option<&'a Settings> {
  let value = settings.get(scope)?;
  let map = value.as_map();
  if map.is_none() {
    errors.push(wrong_shape(scope, "a map", value));
  }
  map
}

/// Read `key` with `read` and hand the value to `set` when it is valid.
fn apply<T>(
  settings: &Settings,
  key: &str,
  errors: &mut Vec<ConfigError>,
  read: fn(&str, &MetaValue) -> Result<T, ConfigError>,
  set: impl FnOnce(T),
) {
  if let Some(value) = settings.get(key) {
    match read(key, value) {
      Ok(value) => set(value),
      Err(error) => errors.push(error),
    }
  }
}

fn apply_general(
  definition: &mut CategoryDefinition,
  settings: &Settings,
  errors: &mut Vec<ConfigError>,
) {
  apply(settings, "cite-shortcut", errors, read_bool, |value| {
    definition.cite_shortcut = value;
  });
  apply(settings, "listing-title", errors, read_inlines, |value| {
    definition.listing.title = Some(value);
  });
  apply(settings, "listing-unnumbered", errors, read_bool, |value| {
    definition.listing.unnumbered = value;
  });
  apply(settings, "listing-unlisted", errors, read_bool, |value| {
    definition.listing.unlisted = value;
  });
  apply(
    settings,
    "listing-identifier",
    errors,
    read_listing_identifier,
    |value| definition.listing.identifier = value,
  );
  apply(settings, "classes", errors, read_classes, |value| {
    definition.classes = value;
  });
  apply_levels(definition, settings, errors);
}

/// Levels are validated as a pair: an inverted result is rejected as a
/// whole and the previous pair is kept.
fn apply_levels(
  definition: &mut CategoryDefinition,
  settings: &Settings,
  errors: &mut Vec<ConfigError>,
) {
  let mut first = definition.first_section_level;
  let mut last = definition.last_section_level;

  apply(settings, "sectioning-levels", errors, read_sectioning, |levels| {
    (first, last) = levels;
  });
  apply(settings, "first-section-level", errors, read_first_level, |level| {
    first = level;
  });
  apply(settings, "last-section-level", errors, read_last_level, |level| {
    last = level;
  });

  if first > last {
    errors.push(ConfigError::InvertedLevels { first, last });
  } else {
    definition.first_section_level = first;
    definition.last_section_level = last;
  }
}

fn apply_formats(
  definition: &mut CategoryDefinition,
  settings: &Settings,
  errors: &mut Vec<ConfigError>,
) {
  apply(settings, "format-text-classic", errors, read_inlines, |value| {
    definition.text.classic = value;
  });
  apply(settings, "format-text-title", errors, read_inlines, |value| {
    definition.text.title = value;
  });
  apply(settings, "format-link-classic", errors, read_inlines, |value| {
    definition.link.classic = value;
  });
  apply(settings, "format-link-title", errors, read_inlines, |value| {
    definition.link.title = value;
  });
  apply(settings, "format-caption-classic", errors, read_text, |value| {
    definition.caption.classic = value;
  });
  apply(settings, "format-caption-title", errors, read_text, |value| {
    definition.caption.title = value;
  });
  apply(settings, "format-entry-classic", errors, read_inlines, |value| {
    definition.entry.classic = value;
  });
  apply(settings, "format-entry-title", errors, read_inlines, |value| {
    definition.entry.title = value;
  });
}

fn apply_entry_layout(
  definition: &mut CategoryDefinition,
  settings: &Settings,
  errors: &mut Vec<ConfigError>,
) {
  let layout = &mut definition.entry_layout;
  apply(settings, "entry-tab", errors, read_positive, |value| {
    layout.tab = value;
    layout.explicit = true;
  });
  apply(settings, "entry-space", errors, read_positive, |value| {
    layout.space = value;
    layout.explicit = true;
  });
}

fn wrong_shape(
  key: &str,
  expected: &'static str,
  found: &MetaValue,
) -> ConfigError {
  ConfigError::WrongShape {
    key: key.to_string(),
    expected,
    found: found.kind(),
  }
}

fn read_bool(key: &str, value: &MetaValue) -> Result<bool, ConfigError> {
  match value {
    MetaValue::MetaBool(flag) => Ok(*flag),
    other => Err(wrong_shape(key, "a boolean", other)),
  }
}

fn read_inlines(
  key: &str,
  value: &MetaValue,
) -> Result<Vec<Inline>, ConfigError> {
  match value {
    MetaValue::MetaInlines(inlines) => Ok(inlines.clone()),
    MetaValue::MetaString(text) => Ok(Inline::words(text)),
    other => Err(wrong_shape(key, "inline text", other)),
  }
}

fn read_text(key: &str, value: &MetaValue) -> Result<String, ConfigError> {
  match value {
    MetaValue::MetaInlines(inlines) => Ok(stringify(inlines)),
    MetaValue::MetaString(text) => Ok(text.clone()),
    other => Err(wrong_shape(key, "inline text", other)),
  }
}

/// A single word, written either as a YAML scalar or as one `Str`.
fn read_word(key: &str, value: &MetaValue) -> Result<String, ConfigError> {
  match value {
    MetaValue::MetaString(text) => Ok(text.clone()),
    MetaValue::MetaInlines(inlines) => {
      match inlines.as_slice() {
        [Inline::Str(text)] => Ok(text.clone()),
        _ => Err(wrong_shape(key, "a single word", value)),
      }
    },
    other => Err(wrong_shape(key, "a single word", other)),
  }
}

fn read_listing_identifier(
  key: &str,
  value: &MetaValue,
) -> Result<ListingIdentifier, ConfigError> {
  match value {
    MetaValue::MetaBool(true) => Ok(ListingIdentifier::Auto),
    MetaValue::MetaBool(false) => Ok(ListingIdentifier::Disabled),
    other => read_word(key, other).map(ListingIdentifier::Explicit),
  }
}

fn read_classes(
  key: &str,
  value: &MetaValue,
) -> Result<Vec<String>, ConfigError> {
  let MetaValue::MetaList(items) = value else {
    return Err(wrong_shape(key, "a list", value));
  };
  items
    .iter()
    .map(|item| read_text(key, item))
    .collect()
}

fn read_sectioning(
  key: &str,
  value: &MetaValue,
) -> Result<(usize, usize), ConfigError> {
  let text = read_word(key, value)?;
  marker::parse_sectioning(&text).ok_or(ConfigError::Sectioning(text))
}

fn read_integer(key: &str, value: &MetaValue) -> Result<i64, ConfigError> {
  let text = read_word(key, value)?;
  text.trim().parse().map_err(|_| {
    ConfigError::NotANumber {
      key: key.to_string(),
      value: text,
    }
  })
}

fn read_level(key: &str, level: i64) -> Result<usize, ConfigError> {
  usize::try_from(level)
    .ok()
    .filter(|_| level <= MAX_SECTION_LEVEL)
    .ok_or_else(|| {
      ConfigError::OutOfRange {
        key:   key.to_string(),
        value: level,
        min:   0,
        max:   MAX_SECTION_LEVEL,
      }
    })
}

/// `first-section-level` is written one-based: `1` shows every level.
fn read_first_level(
  key: &str,
  value: &MetaValue,
) -> Result<usize, ConfigError> {
  let level = read_integer(key, value)?;
  read_level(key, level.saturating_sub(1))
}

fn read_last_level(key: &str, value: &MetaValue) -> Result<usize, ConfigError> {
  let level = read_integer(key, value)?;
  read_level(key, level)
}

fn read_positive(key: &str, value: &MetaValue) -> Result<f64, ConfigError> {
  let text = read_word(key, value)?;
  let number: f64 = text.trim().parse().map_err(|_| {
    ConfigError::NotANumber {
      key:   key.to_string(),
      value: text.clone(),
    }
  })?;
  if number > 0.0 {
    Ok(number)
  } else {
    Err(ConfigError::NotPositive {
      key: key.to_string(),
    })
  }
}
