//! Mutable traversal of a pandoc document.
//!
//! Implementors override the hooks they care about and call the matching
//! `walk_*` function to keep descending. Every container is visited in
//! document order, depth first.
use crate::types::{Block, Caption, Inline, Row};

/// Visitor over blocks and inlines.
pub trait MutVisitor {
  fn visit_blocks(&mut self, blocks: &mut Vec<Block>) {
    walk_blocks(self, blocks);
  }

  fn visit_block(&mut self, block: &mut Block) {
    walk_block(self, block);
  }

  /// One item of a definition list: its term and definitions.
  fn visit_definition_item(
    &mut self,
    term: &mut Vec<Inline>,
    definitions: &mut Vec<Vec<Block>>,
  ) {
    walk_definition_item(self, term, definitions);
  }

  fn visit_inlines(&mut self, inlines: &mut Vec<Inline>) {
    walk_inlines(self, inlines);
  }

  fn visit_inline(&mut self, inline: &mut Inline) {
    walk_inline(self, inline);
  }
}

pub fn walk_blocks<V: MutVisitor + ?Sized>(
  visitor: &mut V,
  blocks: &mut [Block],
) {
  for block in blocks {
    visitor.visit_block(block);
  }
}

pub fn walk_block<V: MutVisitor + ?Sized>(visitor: &mut V, block: &mut Block) {
  match block {
    Block::Plain(inlines)
    | Block::Para(inlines)
    | Block::Header(_, _, inlines) => visitor.visit_inlines(inlines),
    Block::LineBlock(lines) => {
      for line in lines {
        visitor.visit_inlines(line);
      }
    },
    Block::BlockQuote(blocks) | Block::Div(_, blocks) => {
      visitor.visit_blocks(blocks);
    },
    Block::OrderedList(_, items) | Block::BulletList(items) => {
      for item in items {
        visitor.visit_blocks(item);
      }
    },
    Block::DefinitionList(items) => {
      for (term, definitions) in items {
        visitor.visit_definition_item(term, definitions);
      }
    },
    Block::Table(_, caption, _, head, bodies, foot) => {
      walk_caption(visitor, caption);
      walk_rows(visitor, &mut head.1);
      for body in bodies {
        walk_rows(visitor, &mut body.2);
        walk_rows(visitor, &mut body.3);
      }
      walk_rows(visitor, &mut foot.1);
    },
    Block::Figure(_, caption, blocks) => {
      walk_caption(visitor, caption);
      visitor.visit_blocks(blocks);
    },
    Block::CodeBlock(..) | Block::RawBlock(..) | Block::HorizontalRule => {},
  }
}

pub fn walk_definition_item<V: MutVisitor + ?Sized>(
  visitor: &mut V,
  term: &mut Vec<Inline>,
  definitions: &mut Vec<Vec<Block>>,
) {
  visitor.visit_inlines(term);
  for definition in definitions {
    visitor.visit_blocks(definition);
  }
}

fn walk_caption<V: MutVisitor + ?Sized>(visitor: &mut V, caption: &mut Caption) {
  if let Some(short) = caption.0.as_mut() {
    visitor.visit_inlines(short);
  }
  visitor.visit_blocks(&mut caption.1);
}

fn walk_rows<V: MutVisitor + ?Sized>(visitor: &mut V, rows: &mut [Row]) {
  for row in rows {
    for cell in &mut row.1 {
      visitor.visit_blocks(&mut cell.4);
    }
  }
}

pub fn walk_inlines<V: MutVisitor + ?Sized>(
  visitor: &mut V,
  inlines: &mut [Inline],
) {
  for inline in inlines {
    visitor.visit_inline(inline);
  }
}

pub fn walk_inline<V: MutVisitor + ?Sized>(
  visitor: &mut V,
  inline: &mut Inline,
) {
  match inline {
    Inline::Emph(content)
    | Inline::Underline(content)
    | Inline::Strong(content)
    | Inline::Strikeout(content)
    | Inline::Superscript(content)
    | Inline::Subscript(content)
    | Inline::SmallCaps(content)
    | Inline::Quoted(_, content)
    | Inline::Link(_, content, _)
    | Inline::Image(_, content, _)
    | Inline::Span(_, content) => visitor.visit_inlines(content),
    Inline::Cite(citations, content) => {
      for citation in citations {
        visitor.visit_inlines(&mut citation.citation_prefix);
        visitor.visit_inlines(&mut citation.citation_suffix);
      }
      visitor.visit_inlines(content);
    },
    Inline::Note(blocks) => visitor.visit_blocks(blocks),
    Inline::Str(_)
    | Inline::Code(..)
    | Inline::Space
    | Inline::SoftBreak
    | Inline::LineBreak
    | Inline::Math(..)
    | Inline::RawInline(..) => {},
  }
}

/// Apply `f` to the text of every `Str` below `inlines`.
pub fn map_str(inlines: &mut Vec<Inline>, f: impl FnMut(&mut String)) {
  struct StrMapper<F>(F);

  impl<F: FnMut(&mut String)> MutVisitor for StrMapper<F> {
    fn visit_inline(&mut self, inline: &mut Inline) {
      if let Inline::Str(text) = inline {
        (self.0)(text);
      } else {
        walk_inline(self, inline);
      }
    }
  }

  StrMapper(f).visit_inlines(inlines);
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::Attr;

  struct Counter {
    blocks:  usize,
    strings: Vec<String>,
  }

  impl MutVisitor for Counter {
    fn visit_block(&mut self, block: &mut Block) {
      self.blocks += 1;
      walk_block(self, block);
    }

    fn visit_inline(&mut self, inline: &mut Inline) {
      if let Inline::Str(text) = inline {
        self.strings.push(text.clone());
      }
      walk_inline(self, inline);
    }
  }

  #[test]
  fn test_walk_visits_in_document_order() {
    let mut blocks = vec![
      Block::Para(vec![Inline::str("one")]),
      Block::Div(Attr::default(), vec![Block::BulletList(vec![vec![
        Block::Plain(vec![Inline::Emph(vec![Inline::str("two")])]),
      ]])]),
      Block::DefinitionList(vec![(vec![Inline::str("three")], vec![vec![
        Block::Para(vec![Inline::Note(vec![Block::Plain(vec![
          Inline::str("four"),
        ])])]),
      ]])]),
    ];
    let mut counter = Counter {
      blocks:  0,
      strings: Vec::new(),
    };
    counter.visit_blocks(&mut blocks);
    assert_eq!(counter.strings, ["one", "two", "three", "four"]);
    assert_eq!(counter.blocks, 7);
  }

  #[test]
  fn test_map_str_reaches_nested_content() {
    let mut inlines = vec![
      Inline::str("Hello"),
      Inline::Strong(vec![Inline::Span(Attr::default(), vec![
        Inline::str("World"),
      ])]),
    ];
    map_str(&mut inlines, |text| *text = text.to_lowercase());
    assert_eq!(inlines, vec![
      Inline::str("hello"),
      Inline::Strong(vec![Inline::Span(Attr::default(), vec![
        Inline::str("world"),
      ])]),
    ]);
  }
}
