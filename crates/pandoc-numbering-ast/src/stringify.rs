//! Flatten inline content to plain text.
//!
//! Formatting is dropped, spaces and breaks become a single space, quotes are
//! rendered with typographic quote marks and footnotes disappear, following
//! pandoc's own `stringify`.
use crate::types::{Inline, MathType, QuoteType};

/// Plain text of a list of inlines.
#[must_use]
pub fn stringify(inlines: &[Inline]) -> String {
  let mut out = String::new();
  push_inlines(&mut out, inlines);
  out
}

fn push_inlines(out: &mut String, inlines: &[Inline]) {
  for inline in inlines {
    push_inline(out, inline);
  }
}

fn push_inline(out: &mut String, inline: &Inline) {
  match inline {
    Inline::Str(text) | Inline::Code(_, text) => out.push_str(text),
    Inline::Math(MathType::InlineMath | MathType::DisplayMath, text) => {
      out.push_str(text);
    },
    Inline::Space | Inline::SoftBreak | Inline::LineBreak => out.push(' '),
    Inline::Quoted(QuoteType::SingleQuote, content) => {
      out.push('\u{2018}');
      push_inlines(out, content);
      out.push('\u{2019}');
    },
    Inline::Quoted(QuoteType::DoubleQuote, content) => {
      out.push('\u{201C}');
      push_inlines(out, content);
      out.push('\u{201D}');
    },
    Inline::Emph(content)
    | Inline::Underline(content)
    | Inline::Strong(content)
    | Inline::Strikeout(content)
    | Inline::Superscript(content)
    | Inline::Subscript(content)
    | Inline::SmallCaps(content)
    | Inline::Cite(_, content)
    | Inline::Link(_, content, _)
    | Inline::Image(_, content, _)
    | Inline::Span(_, content) => push_inlines(out, content),
    Inline::RawInline(..) | Inline::Note(_) => {},
  }
}
