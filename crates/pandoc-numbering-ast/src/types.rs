//! Pandoc document types.
//!
//! Every element mirrors the JSON produced by `pandoc -t json`: enums are
//! adjacently tagged (`{"t": "Para", "c": [...]}`), tuples and tuple structs
//! are JSON arrays, and the metadata map keeps its key order.
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// API version written by pandoc 3.x.
pub const PANDOC_API_VERSION: [u32; 3] = [1, 23, 1];

/// Document metadata, in source order.
pub type Meta = IndexMap<String, MetaValue>;

/// A complete pandoc document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pandoc {
  #[serde(rename = "pandoc-api-version")]
  pub api_version: Vec<u32>,
  pub meta:        Meta,
  pub blocks:      Vec<Block>,
}

impl Pandoc {
  /// Create an empty document carrying the current API version.
  #[must_use]
  pub fn new(meta: Meta, blocks: Vec<Block>) -> Self {
    Self {
      api_version: PANDOC_API_VERSION.to_vec(),
      meta,
      blocks,
    }
  }

  /// Parse a document from pandoc's JSON output.
  ///
  /// # Errors
  ///
  /// Returns an error if the input is not a well-formed pandoc JSON document.
  pub fn from_json(json: &str) -> serde_json::Result<Self> {
    serde_json::from_str(json)
  }

  /// Serialize the document back to pandoc JSON.
  ///
  /// # Errors
  ///
  /// Returns an error if serialization fails.
  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string(self)
  }
}

impl Default for Pandoc {
  fn default() -> Self {
    Self::new(Meta::new(), Vec::new())
  }
}

/// Metadata values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum MetaValue {
  MetaMap(IndexMap<String, MetaValue>),
  MetaList(Vec<MetaValue>),
  MetaBool(bool),
  MetaString(String),
  MetaInlines(Vec<Inline>),
  MetaBlocks(Vec<Block>),
}

impl MetaValue {
  /// Short name of the variant, used in diagnostics.
  #[must_use]
  pub const fn kind(&self) -> &'static str {
    match self {
      Self::MetaMap(_) => "MetaMap",
      Self::MetaList(_) => "MetaList",
      Self::MetaBool(_) => "MetaBool",
      Self::MetaString(_) => "MetaString",
      Self::MetaInlines(_) => "MetaInlines",
      Self::MetaBlocks(_) => "MetaBlocks",
    }
  }

  #[must_use]
  pub const fn as_map(&self) -> Option<&IndexMap<String, Self>> {
    match self {
      Self::MetaMap(map) => Some(map),
      _ => None,
    }
  }
}

/// Identifier, classes and key-value attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attr(pub String, pub Vec<String>, pub Vec<(String, String)>);

impl Attr {
  #[must_use]
  pub fn new(identifier: impl Into<String>, classes: Vec<String>) -> Self {
    Self(identifier.into(), classes, Vec::new())
  }

  #[must_use]
  pub fn identifier(&self) -> &str {
    &self.0
  }

  #[must_use]
  pub fn classes(&self) -> &[String] {
    &self.1
  }

  #[must_use]
  pub fn has_class(&self, class: &str) -> bool {
    self.1.iter().any(|c| c == class)
  }
}

/// Link or image target: URL and title.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target(pub String, pub String);

/// Raw content format (`tex`, `html`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Format(pub String);

impl Format {
  #[must_use]
  pub fn tex() -> Self {
    Self("tex".to_string())
  }
}

/// Block elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum Block {
  Plain(Vec<Inline>),
  Para(Vec<Inline>),
  LineBlock(Vec<Vec<Inline>>),
  CodeBlock(Attr, String),
  RawBlock(Format, String),
  BlockQuote(Vec<Block>),
  OrderedList(ListAttributes, Vec<Vec<Block>>),
  BulletList(Vec<Vec<Block>>),
  DefinitionList(Vec<(Vec<Inline>, Vec<Vec<Block>>)>),
  Header(usize, Attr, Vec<Inline>),
  HorizontalRule,
  Table(Attr, Caption, Vec<ColSpec>, TableHead, Vec<TableBody>, TableFoot),
  Figure(Attr, Caption, Vec<Block>),
  Div(Attr, Vec<Block>),
}

impl Block {
  /// Inline content of a `Plain` or `Para` block.
  #[must_use]
  pub fn inlines(&self) -> Option<&[Inline]> {
    match self {
      Self::Plain(inlines) | Self::Para(inlines) => Some(inlines),
      _ => None,
    }
  }
}

/// Inline elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum Inline {
  Str(String),
  Emph(Vec<Inline>),
  Underline(Vec<Inline>),
  Strong(Vec<Inline>),
  Strikeout(Vec<Inline>),
  Superscript(Vec<Inline>),
  Subscript(Vec<Inline>),
  SmallCaps(Vec<Inline>),
  Quoted(QuoteType, Vec<Inline>),
  Cite(Vec<Citation>, Vec<Inline>),
  Code(Attr, String),
  Space,
  SoftBreak,
  LineBreak,
  Math(MathType, String),
  RawInline(Format, String),
  Link(Attr, Vec<Inline>, Target),
  Image(Attr, Vec<Inline>, Target),
  Note(Vec<Block>),
  Span(Attr, Vec<Inline>),
}

impl Inline {
  #[must_use]
  pub fn str(text: impl Into<String>) -> Self {
    Self::Str(text.into())
  }

  #[must_use]
  pub fn span(attr: Attr, content: Vec<Self>) -> Self {
    Self::Span(attr, content)
  }

  #[must_use]
  pub fn raw_tex(text: impl Into<String>) -> Self {
    Self::RawInline(Format::tex(), text.into())
  }

  /// Split `text` on single spaces into `Str`/`Space` inlines, the way a
  /// reader would tokenize plain prose.
  #[must_use]
  pub fn words(text: &str) -> Vec<Self> {
    let mut inlines = Vec::new();
    for (index, word) in text.split(' ').enumerate() {
      if index > 0 {
        inlines.push(Self::Space);
      }
      if !word.is_empty() {
        inlines.push(Self::str(word));
      }
    }
    inlines
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum QuoteType {
  SingleQuote,
  DoubleQuote,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum MathType {
  DisplayMath,
  InlineMath,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
  pub citation_id:       String,
  pub citation_prefix:   Vec<Inline>,
  pub citation_suffix:   Vec<Inline>,
  pub citation_mode:     CitationMode,
  pub citation_note_num: i64,
  pub citation_hash:     i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum CitationMode {
  AuthorInText,
  SuppressAuthor,
  NormalCitation,
}

/// Start number, numbering style and delimiter of an ordered list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListAttributes(pub i64, pub ListNumberStyle, pub ListNumberDelim);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum ListNumberStyle {
  DefaultStyle,
  Example,
  Decimal,
  LowerRoman,
  UpperRoman,
  LowerAlpha,
  UpperAlpha,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum ListNumberDelim {
  DefaultDelim,
  Period,
  OneParen,
  TwoParens,
}

/// Optional short caption and the caption body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Caption(pub Option<Vec<Inline>>, pub Vec<Block>);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColSpec(pub Alignment, pub ColWidth);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum Alignment {
  AlignLeft,
  AlignRight,
  AlignCenter,
  AlignDefault,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum ColWidth {
  ColWidth(f64),
  ColWidthDefault,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableHead(pub Attr, pub Vec<Row>);

/// Attributes, row head column count, intermediate head rows and body rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableBody(pub Attr, pub i64, pub Vec<Row>, pub Vec<Row>);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableFoot(pub Attr, pub Vec<Row>);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row(pub Attr, pub Vec<Cell>);

/// Attributes, alignment, row span, column span and content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell(pub Attr, pub Alignment, pub i64, pub i64, pub Vec<Block>);
