//! Placeholder substitution.
//!
//! Templates, link texts, link titles and captions may contain the tokens
//! below. Substitution is a single left-to-right scan: text inserted for a
//! token is never scanned again, and tokens without a value are kept
//! verbatim so a later pass can fill them in.
//!
//! | Token       | Value                                 |
//! |-------------|---------------------------------------|
//! | `%D` / `%d` | description / lowercased description  |
//! | `%T` / `%t` | title / lowercased title              |
//! | `%s`        | section number                        |
//! | `%g`        | global number                         |
//! | `%n` / `#`  | local number                          |
//! | `%c`        | final count of the counter            |
//! | `%p`        | page reference (LaTeX-like targets)   |
use pandoc_numbering_ast::{
  Inline,
  visit::{MutVisitor, walk_inlines},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
  Description,
  DescriptionLower,
  Title,
  TitleLower,
  SectionNumber,
  GlobalNumber,
  LocalNumber,
  Count,
  PageRef,
}

impl Placeholder {
  const fn from_code(code: char) -> Option<Self> {
    match code {
      'D' => Some(Self::Description),
      'd' => Some(Self::DescriptionLower),
      'T' => Some(Self::Title),
      't' => Some(Self::TitleLower),
      's' => Some(Self::SectionNumber),
      'g' => Some(Self::GlobalNumber),
      'n' => Some(Self::LocalNumber),
      'c' => Some(Self::Count),
      'p' => Some(Self::PageRef),
      _ => None,
    }
  }
}

/// A piece of scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
  Literal(&'a str),
  /// A token and the raw text it was written as.
  Token(Placeholder, &'a str),
}

/// Split `text` into literal runs and placeholder tokens.
#[must_use]
pub fn segments(text: &str) -> Vec<Segment<'_>> {
  let mut out = Vec::new();
  let mut literal_start = 0;
  let mut chars = text.char_indices().peekable();

  while let Some((index, c)) = chars.next() {
    let token = match c {
      '#' => Some((Placeholder::LocalNumber, c.len_utf8())),
      '%' => chars
        .peek()
        .and_then(|&(_, code)| Placeholder::from_code(code))
        .map(|placeholder| (placeholder, 2)),
      _ => None,
    };
    if let Some((placeholder, len)) = token {
      if literal_start < index {
        out.push(Segment::Literal(&text[literal_start..index]));
      }
      out.push(Segment::Token(placeholder, &text[index..index + len]));
      if len == 2 {
        chars.next();
      }
      literal_start = index + len;
    }
  }
  if literal_start < text.len() {
    out.push(Segment::Literal(&text[literal_start..]));
  }
  out
}

/// Source of placeholder values.
pub trait Values {
  /// Plain-text value, `None` when the token must stay unresolved.
  fn text(&self, placeholder: Placeholder) -> Option<String>;

  /// Inline value; defaults to the plain text as a single `Str`.
  fn inlines(&self, placeholder: Placeholder) -> Option<Vec<Inline>> {
    self.text(placeholder).map(|text| {
      if text.is_empty() {
        Vec::new()
      } else {
        vec![Inline::Str(text)]
      }
    })
  }
}

/// Resolves only `%c`, leaving every other token in place.
#[derive(Debug, Clone, Copy)]
pub struct CountValue(pub usize);

impl Values for CountValue {
  fn text(&self, placeholder: Placeholder) -> Option<String> {
    (placeholder == Placeholder::Count).then(|| self.0.to_string())
  }
}

/// Substitute placeholders in a plain string.
#[must_use]
pub fn render(template: &str, values: &impl Values) -> String {
  let mut out = String::with_capacity(template.len());
  for segment in segments(template) {
    match segment {
      Segment::Literal(text) => out.push_str(text),
      Segment::Token(placeholder, raw) => {
        match values.text(placeholder) {
          Some(value) => out.push_str(&value),
          None => out.push_str(raw),
        }
      },
    }
  }
  out
}

/// Substitute placeholders inside every `Str` below `inlines`.
pub fn substitute(inlines: &mut Vec<Inline>, values: &impl Values) {
  Substituter { values }.visit_inlines(inlines);
}

struct Substituter<'v, V> {
  values: &'v V,
}

impl<V: Values> MutVisitor for Substituter<'_, V> {
  fn visit_inlines(&mut self, inlines: &mut Vec<Inline>) {
    walk_inlines(self, inlines);

    let needs_expansion = inlines.iter().any(|inline| match inline {
      Inline::Str(text) => has_resolvable_token(text, self.values),
      _ => false,
    });
    if !needs_expansion {
      return;
    }

    let mut expanded = Vec::with_capacity(inlines.len());
    for inline in inlines.drain(..) {
      match inline {
        Inline::Str(text) => expand_str(&text, self.values, &mut expanded),
        other => expanded.push(other),
      }
    }
    *inlines = expanded;
  }
}

fn has_resolvable_token(text: &str, values: &impl Values) -> bool {
  segments(text).iter().any(|segment| match segment {
    Segment::Token(placeholder, _) => values.text(*placeholder).is_some(),
    Segment::Literal(_) => false,
  })
}

fn expand_str(text: &str, values: &impl Values, out: &mut Vec<Inline>) {
  let mut pending = String::new();
  for segment in segments(text) {
    match segment {
      Segment::Literal(literal) => pending.push_str(literal),
      Segment::Token(placeholder, raw) => {
        match values.inlines(placeholder) {
          Some(value) => {
            if !pending.is_empty() {
              out.push(Inline::Str(std::mem::take(&mut pending)));
            }
            out.extend(value);
          },
          None => pending.push_str(raw),
        }
      },
    }
  }
  if !pending.is_empty() {
    out.push(Inline::Str(pending));
  }
}
