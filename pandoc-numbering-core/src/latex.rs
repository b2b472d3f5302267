//! Minimal LaTeX writer for the inline fragments the filter emits itself.
//!
//! Only what listing titles and listing entries need: text escaping and the
//! usual inline formatting. Notes, citations, images, raw inlines and line
//! breaks are dropped since they cannot live inside `\addcontentsline`.
use pandoc_numbering_ast::{Inline, MathType, QuoteType};

/// Render inline content as LaTeX.
#[must_use]
pub fn to_latex(inlines: &[Inline]) -> String {
  let mut out = String::new();
  write_inlines(&mut out, inlines);
  out
}

/// Escape LaTeX special characters in plain text.
#[must_use]
pub fn escape(text: &str) -> String {
  let mut out = String::with_capacity(text.len());
  for c in text.chars() {
    match c {
      '\\' => out.push_str("\\textbackslash{}"),
      '{' | '}' | '$' | '&' | '%' | '#' | '_' => {
        out.push('\\');
        out.push(c);
      },
      '^' => out.push_str("\\^{}"),
      '~' => out.push_str("\\textasciitilde{}"),
      _ => out.push(c),
    }
  }
  out
}

fn write_inlines(out: &mut String, inlines: &[Inline]) {
  for inline in inlines {
    write_inline(out, inline);
  }
}

fn command(out: &mut String, name: &str, inlines: &[Inline]) {
  out.push('\\');
  out.push_str(name);
  out.push('{');
  write_inlines(out, inlines);
  out.push('}');
}

fn write_inline(out: &mut String, inline: &Inline) {
  match inline {
    Inline::Str(text) => out.push_str(&escape(text)),
    Inline::Space => out.push(' '),
    Inline::Emph(inlines) => command(out, "emph", inlines),
    Inline::Strong(inlines) => command(out, "textbf", inlines),
    Inline::Underline(inlines) => command(out, "underline", inlines),
    Inline::Strikeout(inlines) => command(out, "st", inlines),
    Inline::Superscript(inlines) => command(out, "textsuperscript", inlines),
    Inline::Subscript(inlines) => command(out, "textsubscript", inlines),
    Inline::SmallCaps(inlines) => command(out, "textsc", inlines),
    Inline::Quoted(QuoteType::DoubleQuote, inlines) => {
      out.push_str("``");
      write_inlines(out, inlines);
      out.push_str("''");
    },
    Inline::Quoted(QuoteType::SingleQuote, inlines) => {
      out.push('`');
      write_inlines(out, inlines);
      out.push('\'');
    },
    Inline::Code(_, code) => {
      out.push_str("\\texttt{");
      out.push_str(&escape(code));
      out.push('}');
    },
    Inline::Math(MathType::InlineMath, math) => {
      out.push_str("\\(");
      out.push_str(math);
      out.push_str("\\)");
    },
    Inline::Math(MathType::DisplayMath, math) => {
      out.push_str("\\[");
      out.push_str(math);
      out.push_str("\\]");
    },
    Inline::Link(_, inlines, target) => {
      if let Some(anchor) = target.0.strip_prefix('#') {
        out.push_str("\\hyperlink{");
        out.push_str(anchor);
      } else {
        out.push_str("\\href{");
        out.push_str(&target.0);
      }
      out.push_str("}{");
      write_inlines(out, inlines);
      out.push('}');
    },
    Inline::Span(_, inlines) => {
      out.push('{');
      write_inlines(out, inlines);
      out.push('}');
    },
    Inline::Note(_)
    | Inline::Cite(..)
    | Inline::Image(..)
    | Inline::RawInline(..)
    | Inline::LineBreak
    | Inline::SoftBreak => {},
  }
}
