//! The numbering pass.
//!
//! Walks the document in order, feeding headers to the section tracker and
//! turning every paragraph or definition term that ends with a marker into
//! a numbered element.
use std::slice;

use log::{debug, trace};
use pandoc_numbering_ast::{
  Attr,
  Block,
  Inline,
  stringify::stringify,
  visit::{MutVisitor, walk_block, walk_definition_item},
};

use crate::{
  context::NumberingContext,
  entry::NumberedEntry,
  identifier::{identifier, latex_category},
  latex::to_latex,
  marker::{self, Marker, MarkerMatch},
  template::{render, substitute},
};

/// Class of the span holding the rendered text of a numbered element.
pub const TEXT_CLASS: &str = "pandoc-numbering-text";

/// Class of the default link text span.
pub const LINK_CLASS: &str = "pandoc-numbering-link";

/// Class of the listing entry span.
pub const ENTRY_CLASS: &str = "pandoc-numbering-entry";

/// Visitor numbering a whole document against a [`NumberingContext`].
pub struct NumberingPass<'a> {
  context: &'a mut NumberingContext,
}

impl<'a> NumberingPass<'a> {
  pub const fn new(context: &'a mut NumberingContext) -> Self {
    Self { context }
  }
}

impl MutVisitor for NumberingPass<'_> {
  fn visit_block(&mut self, block: &mut Block) {
    match block {
      Block::Header(level, attr, _) => {
        self
          .context
          .sections
          .update(*level, attr.identifier(), attr.classes());
      },
      Block::Para(content) => {
        self.context.number(content);
      },
      _ => {},
    }
    walk_block(self, block);
  }

  fn visit_definition_item(
    &mut self,
    term: &mut Vec<Inline>,
    definitions: &mut Vec<Vec<Block>>,
  ) {
    self.context.number(term);
    walk_definition_item(self, term, definitions);
  }
}

impl NumberingContext {
  /// Number `content` if its last inline is a marker.
  ///
  /// Returns the tag of the new entry. Escaped markers are unescaped in
  /// place and produce no entry; anything else is left untouched.
  pub fn number(&mut self, content: &mut Vec<Inline>) -> Option<String> {
    let Some(Inline::Str(last)) = content.last_mut() else {
      return None;
    };
    match marker::parse(last)? {
      MarkerMatch::Escaped => {
        trace!("Unescaping marker {last:?}");
        *last = marker::unescape(last);
        None
      },
      MarkerMatch::Numbered(marker) => {
        Some(self.number_marked(content, &marker))
      },
    }
  }

  fn number_marked(
    &mut self,
    content: &mut Vec<Inline>,
    marker: &Marker,
  ) -> String {
    let latex = self.registry.format().is_latex();
    let title = take_title(content);
    let description = content[..content.len().saturating_sub(2)].to_vec();

    let category = marker
      .prefix
      .clone()
      .unwrap_or_else(|| identifier(&stringify(&description)));
    let definition = self.registry.define(&category);

    let (first, last) = if marker.has_levels() {
      (marker.first_level, marker.last_level)
    } else {
      (definition.first_section_level, definition.last_section_level)
    };

    let section_number = self.sections.number(last);
    let section_alias = self.sections.alias(last);
    let leading = if last == 0 {
      String::new()
    } else {
      format!("{section_number}.")
    };

    let counter = format!("{category}:{leading}");
    let count = {
      let count = self.counts.entry(counter.clone()).or_insert(0);
      *count += 1;
      *count
    };

    let mut stem = counter.replace([':', '.'], "-");
    stem.pop();
    let mut element_classes = vec![format!("{stem}-{count}")];
    let tag = match &marker.name {
      Some(name) => {
        element_classes.push(format!("{category}-{name}"));
        format!("{category}:{name}")
      },
      None => format!("{counter}{count}"),
    };

    let suffix = if title.is_empty() {
      count.to_string()
    } else {
      identifier(&stringify(&title))
    };
    let alias = if section_alias.is_empty() {
      format!("{category}:{suffix}")
    } else {
      format!("{category}:{section_alias}.{suffix}")
    };

    let global_number = if section_number.is_empty() {
      count.to_string()
    } else {
      format!("{section_number}.{count}")
    };

    let mut entry = NumberedEntry {
      tag: tag.clone(),
      alias,
      counter,
      category,
      title,
      description,
      local_number: self.sections.local(first, last, count),
      section_number,
      leading,
      count,
      global_number,
      link: Inline::Span(Attr::default(), Vec::new()),
      entry: Inline::Span(Attr::default(), Vec::new()),
      caption: String::new(),
    };

    let titled = entry.has_title();
    let mut text = definition.text.select(titled).clone();
    substitute(&mut text, &entry.values(None, false));
    let mut link = definition.link.select(titled).clone();
    substitute(&mut link, &entry.values(None, latex));
    let mut listed = definition.entry.select(titled).clone();
    substitute(&mut listed, &entry.values(None, false));

    entry.caption =
      render(definition.caption.select(titled), &entry.values(None, latex));
    entry.link = Inline::span(
      Attr::new("", with_classes(LINK_CLASS, &definition.classes, &[])),
      link,
    );
    entry.entry = Inline::span(
      Attr::new("", with_classes(ENTRY_CLASS, &definition.classes, &[])),
      listed,
    );

    let anchor = if entry.alias == entry.tag {
      Attr::default()
    } else {
      Attr::new(entry.alias.clone(), Vec::new())
    };
    let text_classes =
      with_classes(TEXT_CLASS, &definition.classes, &element_classes);
    *content = vec![
      Inline::span(anchor, Vec::new()),
      Inline::span(Attr::new(tag.clone(), text_classes), text),
    ];
    if latex {
      content.insert(0, Inline::raw_tex(contents_line(&entry)));
    }

    debug!("Numbered {tag} as {}", entry.local_number);
    self.record(entry);
    tag
  }
}

fn with_classes(
  first: &str,
  classes: &[String],
  extra: &[String],
) -> Vec<String> {
  let mut all = Vec::with_capacity(1 + classes.len() + extra.len());
  all.push(first.to_string());
  all.extend_from_slice(classes);
  all.extend_from_slice(extra);
  all
}

/// Cut the parenthesized title that directly precedes the marker out of
/// `content` and return it without its parentheses.
///
/// The title must end on the inline right before the separator and start at
/// the first `Str` opening with `(`. The separator in front of the title is
/// removed with it.
fn take_title(content: &mut Vec<Inline>) -> Vec<Inline> {
  let len = content.len();
  let closes = |inline: &Inline| {
    matches!(inline, Inline::Str(text) if text.ends_with(')'))
  };
  let opens = |inline: &Inline| {
    matches!(inline, Inline::Str(text) if text.starts_with('('))
  };
  if len < 3 || !closes(&content[len - 3]) {
    return Vec::new();
  }
  let Some(start) = content[..len - 2].iter().position(opens) else {
    return Vec::new();
  };

  let mut title = content[start..len - 2].to_vec();
  if let Some(Inline::Str(text)) = title.first_mut() {
    text.remove(0);
  }
  if let Some(Inline::Str(text)) = title.last_mut() {
    text.pop();
  }
  content.drain(start.saturating_sub(1)..len - 2);
  title
}

/// `\addcontentsline` command registering the entry in its LaTeX list.
fn contents_line(entry: &NumberedEntry) -> String {
  let list = latex_category(&entry.category);
  format!(
    "\\phantomsection\\addcontentsline{{{list}}}{{{list}}}{{\\protect\\numberline \
     {{{}{}}}{{\\ignorespaces {}}}}}",
    entry.leading,
    entry.count,
    to_latex(slice::from_ref(&entry.entry)),
  )
}
