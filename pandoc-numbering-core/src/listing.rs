//! Listings of numbered elements ("List of exercises").
//!
//! Standard targets get a heading and a bullet list of links per listed
//! category, prepended to the body. LaTeX targets get `tocloft` lists
//! declared in `header-includes` and printed before `\mainmatter`.
use log::debug;
use pandoc_numbering_ast::{
  Attr,
  Block,
  Inline,
  Meta,
  MetaValue,
  Pandoc,
  Target,
  stringify::stringify,
};

use crate::{
  config::{CategoryDefinition, ListingIdentifier},
  context::NumberingContext,
  identifier::{auto_identifier, identifier, latex_category},
  latex::to_latex,
};

/// Class of generated listing headings.
pub const LISTING_CLASS: &str = "pandoc-numbering-listing";

/// Metadata field extended with the LaTeX preamble.
pub const HEADER_INCLUDES: &str = "header-includes";

const TOCLOFT_PREAMBLE: &str = r"
\makeatletter
\@ifpackageloaded{subfig}{
    \usepackage[subfigure]{tocloft}
}{
    \usepackage{tocloft}
}
\makeatother
";

const ETOOLBOX: &str = r"\usepackage{etoolbox}";

impl NumberingContext {
  /// Insert the listings of every category with a listing title.
  pub(crate) fn build_listings(&self, document: &mut Pandoc) {
    let listed: Vec<(&str, &CategoryDefinition, &[Inline])> = self
      .registry
      .iter()
      .filter_map(|(category, definition)| {
        let title = definition.listing.title.as_deref()?;
        Some((category, definition, title))
      })
      .collect();
    if listed.is_empty() {
      return;
    }
    debug!("Building {} listing(s)", listed.len());

    if self.format().is_latex() {
      self.latex_listings(document, &listed);
    } else {
      self.standard_listings(document, &listed);
    }
  }

  fn standard_listings(
    &self,
    document: &mut Pandoc,
    listed: &[(&str, &CategoryDefinition, &[Inline])],
  ) {
    let mut blocks = Vec::with_capacity(listed.len() * 2);
    for &(category, definition, title) in listed {
      let listing = &definition.listing;
      let mut classes = vec![LISTING_CLASS.to_string()];
      classes.extend_from_slice(&definition.classes);
      if listing.unnumbered {
        classes.push("unnumbered".to_string());
      }
      if listing.unlisted {
        classes.push("unlisted".to_string());
      }
      let id = match &listing.identifier {
        ListingIdentifier::Auto => auto_identifier(&stringify(title)),
        ListingIdentifier::Disabled => String::new(),
        ListingIdentifier::Explicit(id) => id.clone(),
      };
      blocks.push(Block::Header(1, Attr::new(id, classes), title.to_vec()));

      let tags = self.collection(category);
      if !tags.is_empty() {
        blocks.push(Block::BulletList(
          tags
            .iter()
            .filter_map(|tag| self.entry(tag))
            .map(|entry| {
              vec![Block::Plain(vec![Inline::Link(
                Attr::default(),
                vec![entry.entry.clone()],
                Target(format!("#{}", entry.tag), String::new()),
              )])]
            })
            .collect(),
        ));
      }
    }
    document.blocks.splice(0..0, blocks);
  }

  fn latex_listings(
    &self,
    document: &mut Pandoc,
    listed: &[(&str, &CategoryDefinition, &[Inline])],
  ) {
    let mut includes = vec![raw_meta(TOCLOFT_PREAMBLE), raw_meta(ETOOLBOX)];
    let mut listof = Vec::with_capacity(listed.len());

    for &(category, definition, title) in listed {
      let list = latex_category(category);
      let text = to_latex(title);
      let layout = definition.entry_layout;
      let (numwidth, indent) = if layout.explicit {
        (format!("{}em", layout.space), format!("{}em", layout.tab))
      } else {
        (r"\cftfignumwidth".to_string(), r"\cftfigindent".to_string())
      };
      includes.push(raw_meta(&format!(
        "\\newlistof{{{list}}}{{{list}}}{{{text}}}\
         \\renewcommand{{\\cft{list}titlefont}}{{\\cfttoctitlefont}}\
         \\setlength{{\\cft{list}numwidth}}{{{numwidth}}}\
         \\setlength{{\\cft{list}indent}}{{{indent}}}"
      )));

      listof.push(match &definition.listing.identifier {
        ListingIdentifier::Disabled => format!("\\listof{list}"),
        ListingIdentifier::Auto => {
          let id = identifier(&text);
          format!("\\phantomsection\\label{{{id}}}\\listof{list}")
        },
        ListingIdentifier::Explicit(id) => {
          format!("\\phantomsection\\label{{{id}}}\\listof{list}")
        },
      });
    }

    let listof = listof.join("\n");
    includes.push(raw_meta(&format!(
      "\\ifdef{{\\mainmatter}}{{\\let\\oldmainmatter\\mainmatter\
       \\renewcommand{{\\mainmatter}}[0]{{{listof}\\oldmainmatter}}}}{{}}"
    )));
    extend_header_includes(&mut document.meta, includes);

    document.blocks.insert(
      0,
      Block::Plain(vec![Inline::raw_tex(format!(
        "\\ifdef{{\\mainmatter}}{{}}{{{listof}}}"
      ))]),
    );
  }
}

fn raw_meta(tex: &str) -> MetaValue {
  MetaValue::MetaInlines(vec![Inline::raw_tex(tex)])
}

/// Append to `header-includes`, creating it when missing and wrapping a
/// single value into a list.
fn extend_header_includes(meta: &mut Meta, includes: Vec<MetaValue>) {
  let slot = meta
    .entry(HEADER_INCLUDES.to_string())
    .or_insert_with(|| MetaValue::MetaList(Vec::new()));
  let previous = std::mem::replace(slot, MetaValue::MetaList(Vec::new()));
  let mut list = match previous {
    MetaValue::MetaList(list) => list,
    single => vec![single],
  };
  list.extend(includes);
  *slot = MetaValue::MetaList(list);
}
