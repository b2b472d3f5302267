#![allow(dead_code, reason = "Not every test binary uses every helper")]
use pandoc_numbering_ast::{
  Attr,
  Block,
  Citation,
  CitationMode,
  Inline,
  Meta,
  MetaValue,
  Pandoc,
  Target,
};
use pandoc_numbering_core::{
  FilterReport,
  NumberingFilter,
  OutputFormat,
  numbering::TEXT_CLASS,
};

/// A paragraph of plain words.
pub fn para(text: &str) -> Block {
  Block::Para(Inline::words(text))
}

pub fn header(level: usize, id: &str, text: &str) -> Block {
  Block::Header(level, Attr::new(id, vec![]), Inline::words(text))
}

/// A one-word metadata value, as pandoc reads `key: word`.
pub fn word(text: &str) -> MetaValue {
  MetaValue::MetaInlines(vec![Inline::str(text)])
}

pub fn inlines(text: &str) -> MetaValue {
  MetaValue::MetaInlines(Inline::words(text))
}

pub fn map(entries: &[(&str, MetaValue)]) -> MetaValue {
  MetaValue::MetaMap(
    entries
      .iter()
      .map(|(key, value)| ((*key).to_string(), value.clone()))
      .collect(),
  )
}

/// Metadata configuring a single category.
pub fn numbering_meta(category: &str, scopes: &[(&str, MetaValue)]) -> Meta {
  let mut meta = Meta::new();
  meta.insert("pandoc-numbering".into(), map(&[(category, map(scopes))]));
  meta
}

/// Run the filter over `blocks` and return the resulting document.
pub fn run(
  meta: Meta,
  blocks: Vec<Block>,
  format: OutputFormat,
) -> (Pandoc, FilterReport) {
  let mut document = Pandoc::new(meta, blocks);
  let report = NumberingFilter::new(format).apply(&mut document);
  (document, report)
}

pub fn run_standard(blocks: Vec<Block>) -> (Pandoc, FilterReport) {
  run(Meta::new(), blocks, OutputFormat::Standard)
}

/// Inline content of a paragraph, plain block or definition term.
pub fn content(block: &Block) -> &[Inline] {
  match block {
    Block::Para(inlines) | Block::Plain(inlines) => inlines,
    Block::DefinitionList(items) => items.first().map_or(&[], |(term, _)| term),
    _ => &[],
  }
}

/// The `pandoc-numbering-text` span of a numbered element.
pub fn text_span(block: &Block) -> Option<(&Attr, &[Inline])> {
  content(block).iter().find_map(|inline| {
    match inline {
      Inline::Span(attr, inlines) if attr.has_class(TEXT_CLASS) => {
        Some((attr, inlines.as_slice()))
      },
      _ => None,
    }
  })
}

/// Identifier of the text span, i.e. the element's tag.
pub fn tag(block: &Block) -> Option<&str> {
  text_span(block).map(|(attr, _)| attr.identifier())
}

pub fn link(text: Vec<Inline>, url: &str, title: &str) -> Inline {
  Inline::Link(Attr::default(), text, Target(url.into(), title.into()))
}

/// A citation the way pandoc reads `@key`.
pub fn cite(key: &str) -> Inline {
  Inline::Cite(
    vec![Citation {
      citation_id:       key.into(),
      citation_prefix:   vec![],
      citation_suffix:   vec![],
      citation_mode:     CitationMode::AuthorInText,
      citation_note_num: 1,
      citation_hash:     0,
    }],
    vec![Inline::str(format!("@{key}"))],
  )
}
