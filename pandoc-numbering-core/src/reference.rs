//! The referencing pass.
//!
//! Runs once the whole document is numbered, so every count is final:
//! links to `#tag` get their placeholders filled in, `@category:name`
//! citations become links and `%c` is resolved everywhere.
use std::sync::LazyLock;

use log::debug;
use pandoc_numbering_ast::{
  Attr,
  Inline,
  Target,
  visit::{MutVisitor, walk_inline},
};
use regex::Regex;

use crate::{
  context::NumberingContext,
  diagnostics::Diagnostic,
  template::{CountValue, render, substitute},
  utils::compile,
};

static LINK_TARGET_RE: LazyLock<Regex> =
  LazyLock::new(|| compile("LINK_TARGET_RE", r"^#(?P<tag>[a-zA-Z][\w:.-]*)$"));

static CITE_SHORTCUT_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile(
    "CITE_SHORTCUT_RE",
    r"^@(?P<tag>(?P<category>[a-zA-Z][\w.-]*):(?:[a-zA-Z][\w.-]*|\d*(?:\.\d*)*))$",
  )
});

impl NumberingContext {
  /// Fill in `%c` in the stored link, entry and caption of every entry.
  pub(crate) fn resolve_counts(&mut self) {
    let counts = &self.counts;
    for entry in self.entries.values_mut() {
      let count = counts.get(&entry.counter).copied().unwrap_or_default();
      let values = CountValue(count);
      for fragment in [&mut entry.link, &mut entry.entry] {
        if let Inline::Span(_, content) = fragment {
          substitute(content, &values);
        }
      }
      entry.caption = render(&entry.caption, &values);
    }
  }
}

/// Visitor resolving references against a fully numbered context.
pub struct ReferencePass<'a> {
  context: &'a mut NumberingContext,
}

impl<'a> ReferencePass<'a> {
  pub const fn new(context: &'a mut NumberingContext) -> Self {
    Self { context }
  }

  fn unresolved(&mut self, tag: &str) {
    debug!("Leaving reference to unknown tag {tag} untouched");
    self.context.diagnostics.push(Diagnostic::UnresolvedReference {
      tag: tag.to_string(),
    });
  }

  fn resolve_link(&mut self, text: &mut Vec<Inline>, target: &mut Target) {
    let Some(tag) = LINK_TARGET_RE
      .captures(&target.0)
      .and_then(|caps| caps.name("tag"))
      .map(|tag| tag.as_str().to_string())
    else {
      return;
    };
    let Some(entry) = self.context.entry(&tag) else {
      self.unresolved(&tag);
      return;
    };

    let page_ref = self.context.format().is_latex();
    let count = self.context.count(&entry.counter);
    let values = entry.values(Some(count), page_ref);

    if text.is_empty() {
      text.push(entry.link.clone());
      if target.1.is_empty() {
        target.1.clone_from(&entry.caption);
        return;
      }
    } else {
      substitute(text, &values);
    }
    target.1 = render(&target.1, &values);
  }

  fn cite_link(&mut self, content: &[Inline]) -> Option<Inline> {
    let [Inline::Str(text)] = content else {
      return None;
    };
    let caps = CITE_SHORTCUT_RE.captures(text)?;
    let category = caps.name("category")?.as_str();
    let tag = caps.name("tag")?.as_str();

    let enabled = self
      .context
      .registry
      .get(category)
      .is_some_and(|definition| definition.cite_shortcut);
    if !enabled {
      return None;
    }
    let Some(entry) = self.context.entry(tag) else {
      self.unresolved(tag);
      return None;
    };

    Some(Inline::Link(
      Attr::default(),
      vec![entry.link.clone()],
      Target(format!("#{tag}"), entry.caption.clone()),
    ))
  }
}

impl MutVisitor for ReferencePass<'_> {
  fn visit_inline(&mut self, inline: &mut Inline) {
    walk_inline(self, inline);

    match inline {
      Inline::Link(_, text, target) => self.resolve_link(text, target),
      Inline::Cite(_, content) => {
        if let Some(link) = self.cite_link(content) {
          *inline = link;
        }
      },
      Inline::Span(attr, content) => {
        if let Some(entry) = self.context.entry(attr.identifier()) {
          let count = self.context.count(&entry.counter);
          substitute(content, &CountValue(count));
        }
      },
      _ => {},
    }
  }
}
