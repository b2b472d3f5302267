//! # pandoc-numbering-ast
//!
//! A serde model of the pandoc JSON document format (API 1.23) together with
//! the few tree utilities a filter needs:
//!
//! - [`types`]: blocks, inlines, metadata and the [`Pandoc`] document itself
//! - [`visit`]: a mutable visitor with overridable hooks for every container
//! - [`stringify`]: flatten inline content to plain text, dropping formatting
//!
//! ```
//! use pandoc_numbering_ast::{Pandoc, stringify::stringify};
//!
//! let json = r#"{"pandoc-api-version":[1,23,1],"meta":{},
//!   "blocks":[{"t":"Para","c":[{"t":"Str","c":"Hello"},{"t":"Space"},
//!   {"t":"Str","c":"world"}]}]}"#;
//! let doc: Pandoc = serde_json::from_str(json).unwrap();
//! assert_eq!(stringify(doc.blocks[0].inlines().unwrap()), "Hello world");
//! ```
pub mod stringify;
pub mod types;
pub mod visit;

pub use crate::types::{
  Alignment,
  Attr,
  Block,
  Caption,
  Cell,
  Citation,
  CitationMode,
  ColSpec,
  ColWidth,
  Format,
  Inline,
  ListAttributes,
  ListNumberDelim,
  ListNumberStyle,
  MathType,
  Meta,
  MetaValue,
  Pandoc,
  QuoteType,
  Row,
  TableBody,
  TableFoot,
  TableHead,
  Target,
};
