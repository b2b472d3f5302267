//! Numbered entries and their placeholder values.
use pandoc_numbering_ast::{Inline, stringify::stringify, visit::map_str};

use crate::template::{Placeholder, Values};

/// Everything known about one numbered element.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberedEntry {
  /// Unique key, `category:name` or counter key followed by the count.
  pub tag:            String,
  /// Secondary anchor built from section aliases and the title or count.
  pub alias:          String,
  /// Key of the counter this element was counted in, e.g. `exercise:2.`.
  pub counter:        String,
  /// Category, without any section prefix.
  pub category:       String,
  pub title:          Vec<Inline>,
  pub description:    Vec<Inline>,
  pub section_number: String,
  /// Section number followed by a dot, empty for unsectioned counters.
  pub leading:        String,
  pub count:          usize,
  pub local_number:   String,
  pub global_number:  String,
  /// Default link text, a `pandoc-numbering-link` span.
  pub link:           Inline,
  /// Listing entry, a `pandoc-numbering-entry` span.
  pub entry:          Inline,
  /// Plain-text caption, used as link title.
  pub caption:        String,
}

impl NumberedEntry {
  #[must_use]
  pub fn has_title(&self) -> bool {
    !self.title.is_empty()
  }

  /// Placeholder values of this entry.
  ///
  /// `count` is the final count of the entry's counter, known only once the
  /// whole document has been numbered. `page_ref` enables `%p`.
  #[must_use]
  pub const fn values(
    &self,
    count: Option<usize>,
    page_ref: bool,
  ) -> EntryValues<'_> {
    EntryValues {
      entry: self,
      count,
      page_ref,
    }
  }
}

/// [`Values`] view over a [`NumberedEntry`].
#[derive(Debug, Clone, Copy)]
pub struct EntryValues<'a> {
  entry:    &'a NumberedEntry,
  count:    Option<usize>,
  page_ref: bool,
}

impl EntryValues<'_> {
  fn page_ref(&self) -> Option<String> {
    self
      .page_ref
      .then(|| format!("\\pageref{{{}}}", self.entry.tag))
  }
}

impl Values for EntryValues<'_> {
  fn text(&self, placeholder: Placeholder) -> Option<String> {
    let entry = self.entry;
    match placeholder {
      Placeholder::Description => Some(stringify(&entry.description)),
      Placeholder::DescriptionLower => {
        Some(stringify(&entry.description).to_lowercase())
      },
      Placeholder::Title => Some(stringify(&entry.title)),
      Placeholder::TitleLower => Some(stringify(&entry.title).to_lowercase()),
      Placeholder::SectionNumber => Some(entry.section_number.clone()),
      Placeholder::GlobalNumber => Some(entry.global_number.clone()),
      Placeholder::LocalNumber => Some(entry.local_number.clone()),
      Placeholder::Count => self.count.map(|count| count.to_string()),
      Placeholder::PageRef => self.page_ref(),
    }
  }

  fn inlines(&self, placeholder: Placeholder) -> Option<Vec<Inline>> {
    let entry = self.entry;
    match placeholder {
      Placeholder::Description => Some(entry.description.clone()),
      Placeholder::DescriptionLower => Some(lowered(&entry.description)),
      Placeholder::Title => Some(entry.title.clone()),
      Placeholder::TitleLower => Some(lowered(&entry.title)),
      Placeholder::PageRef => {
        self.page_ref().map(|text| vec![Inline::raw_tex(text)])
      },
      _ => {
        self.text(placeholder).map(|text| {
          if text.is_empty() {
            Vec::new()
          } else {
            vec![Inline::Str(text)]
          }
        })
      },
    }
  }
}

fn lowered(inlines: &[Inline]) -> Vec<Inline> {
  let mut copy = inlines.to_vec();
  map_str(&mut copy, |text| *text = text.to_lowercase());
  copy
}

#[cfg(test)]
mod tests {
  use pandoc_numbering_ast::Attr;

  use super::*;
  use crate::template::{render, substitute};

  fn entry() -> NumberedEntry {
    NumberedEntry {
      tag:            "exercise:2.1".into(),
      alias:          "exercise:intro.1".into(),
      counter:        "exercise:2.".into(),
      category:       "exercise".into(),
      title:          vec![Inline::Emph(vec![Inline::str("Hard")]), Inline::Space, Inline::str("One")],
      description:    vec![Inline::str("Exercise")],
      section_number: "2".into(),
      leading:        "2.".into(),
      count:          1,
      local_number:   "1".into(),
      global_number:  "2.1".into(),
      link:           Inline::Span(Attr::default(), vec![]),
      entry:          Inline::Span(Attr::default(), vec![]),
      caption:        String::new(),
    }
  }

  #[test]
  fn test_text_values() {
    let entry = entry();
    assert_eq!(
      render("%D %d %t %s/%g/%n %c %p", &entry.values(None, false)),
      "Exercise exercise hard one 2/2.1/1 %c %p"
    );
    assert_eq!(
      render("%c %p", &entry.values(Some(3), true)),
      "3 \\pageref{exercise:2.1}"
    );
  }

  #[test]
  fn test_inline_values_keep_formatting() {
    let entry = entry();
    let mut inlines = vec![Inline::str("[%t]%p")];
    substitute(&mut inlines, &entry.values(None, true));
    assert_eq!(inlines, vec![
      Inline::str("["),
      Inline::Emph(vec![Inline::str("hard")]),
      Inline::Space,
      Inline::str("one"),
      Inline::str("]"),
      Inline::raw_tex("\\pageref{exercise:2.1}"),
    ]);
  }
}
