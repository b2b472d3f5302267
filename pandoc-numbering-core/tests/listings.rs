#![allow(clippy::panic, reason = "Fine in tests")]
mod common;

use common::{inlines, map, numbering_meta, para, run, word};
use pandoc_numbering_ast::{Attr, Block, Inline, Meta, MetaValue, Target};
use pandoc_numbering_core::{
  Diagnostic,
  OutputFormat,
  listing::{HEADER_INCLUDES, LISTING_CLASS},
  numbering::ENTRY_CLASS,
};

fn listing_meta(extra: &[(&str, MetaValue)]) -> Meta {
  let mut general = vec![("listing-title", inlines("List of exercises"))];
  general.extend(extra.iter().cloned());
  numbering_meta("exercise", &[("general", map(&general))])
}

fn listing_header(id: &str, extra_classes: &[&str]) -> Block {
  let mut classes = vec![LISTING_CLASS.to_string(), "exercise".to_string()];
  classes.extend(extra_classes.iter().map(ToString::to_string));
  Block::Header(1, Attr::new(id, classes), Inline::words("List of exercises"))
}

fn item(number: usize) -> Vec<Block> {
  vec![Block::Plain(vec![Inline::Link(
    Attr::default(),
    vec![Inline::span(
      Attr::new("", vec![ENTRY_CLASS.into(), "exercise".into()]),
      Inline::words(&format!("Exercise {number}")),
    )],
    Target(format!("#exercise:{number}"), String::new()),
  )])]
}

#[test]
fn test_listing_aggregates_in_order() {
  let (document, report) = run(
    listing_meta(&[]),
    vec![
      para("Exercise #"),
      para("Theorem #"),
      para("Exercise #"),
      para("Exercise #"),
    ],
    OutputFormat::Standard,
  );

  assert_eq!(report.numbered, 4);
  assert_eq!(document.blocks.len(), 6);
  assert_eq!(
    document.blocks[0],
    listing_header("list-of-exercises", &["unnumbered", "unlisted"])
  );
  assert_eq!(
    document.blocks[1],
    Block::BulletList(vec![item(1), item(2), item(3)])
  );
}

#[test]
fn test_reused_name_is_listed_once() {
  let (document, report) = run(
    listing_meta(&[]),
    vec![para("Exercise #a"), para("Exercise #a")],
    OutputFormat::Standard,
  );

  assert_eq!(report.numbered, 2);
  assert_eq!(report.diagnostics, vec![Diagnostic::DuplicateTag {
    tag: "exercise:a".into(),
  }]);
  assert_eq!(document.blocks.len(), 4);
  assert_eq!(
    document.blocks[1],
    Block::BulletList(vec![vec![Block::Plain(vec![Inline::Link(
      Attr::default(),
      vec![Inline::span(
        Attr::new("", vec![ENTRY_CLASS.into(), "exercise".into()]),
        Inline::words("Exercise 2"),
      )],
      Target("#exercise:a".into(), String::new()),
    )])]])
  );
}

#[test]
fn test_listing_identifier_and_flags() {
  let (disabled, _) = run(
    listing_meta(&[
      ("listing-identifier", MetaValue::MetaBool(false)),
      ("listing-unnumbered", MetaValue::MetaBool(false)),
    ]),
    vec![para("Exercise #")],
    OutputFormat::Standard,
  );
  assert_eq!(disabled.blocks[0], listing_header("", &["unlisted"]));

  let (explicit, _) = run(
    listing_meta(&[
      ("listing-identifier", word("exercises")),
      ("listing-unlisted", MetaValue::MetaBool(false)),
    ]),
    vec![para("Exercise #")],
    OutputFormat::Standard,
  );
  assert_eq!(explicit.blocks[0], listing_header("exercises", &["unnumbered"]));
}

#[test]
fn test_empty_listing_has_no_list() {
  let (document, _) = run(
    listing_meta(&[]),
    vec![para("Nothing numbered here.")],
    OutputFormat::Standard,
  );

  assert_eq!(document.blocks, vec![
    listing_header("list-of-exercises", &["unnumbered", "unlisted"]),
    para("Nothing numbered here."),
  ]);
}

#[test]
fn test_no_listing_without_title() {
  let (document, _) = run(
    Meta::new(),
    vec![para("Exercise #")],
    OutputFormat::Standard,
  );

  assert_eq!(document.blocks.len(), 1);
  assert!(!document.meta.contains_key(HEADER_INCLUDES));
}

#[test]
fn test_count_in_listing_entries() {
  let meta = numbering_meta("exercise", &[
    ("general", map(&[("listing-title", inlines("List of exercises"))])),
    ("standard", map(&[("format-entry-classic", inlines("%n/%c"))])),
  ]);
  let (document, _) = run(
    meta,
    vec![para("Exercise #"), para("Exercise #")],
    OutputFormat::Standard,
  );

  let Block::BulletList(items) = &document.blocks[1] else {
    panic!("bullet list expected");
  };
  let Some(Block::Plain(plain)) = items[1].first() else {
    panic!("plain item expected");
  };
  let Some(Inline::Link(_, text, _)) = plain.first() else {
    panic!("link expected");
  };
  assert_eq!(text, &vec![Inline::span(
    Attr::new("", vec![ENTRY_CLASS.into(), "exercise".into()]),
    vec![Inline::str("2"), Inline::str("/"), Inline::str("2")],
  )]);
}

#[test]
fn test_latex_listing() {
  let mut meta = listing_meta(&[]);
  meta.insert(HEADER_INCLUDES.into(), inlines("\\usepackage{amsmath}"));
  let (document, _) = run(
    meta,
    vec![para("Exercise #")],
    OutputFormat::Latex,
  );

  let Some(MetaValue::MetaList(includes)) = document.meta.get(HEADER_INCLUDES)
  else {
    panic!("header-includes should be a list");
  };
  assert_eq!(includes.len(), 5);
  assert_eq!(includes[0], inlines("\\usepackage{amsmath}"));
  assert_eq!(
    includes[2],
    MetaValue::MetaInlines(vec![Inline::raw_tex("\\usepackage{etoolbox}")])
  );
  assert_eq!(
    includes[3],
    MetaValue::MetaInlines(vec![Inline::raw_tex(
      "\\newlistof{exercise}{exercise}{List of exercises}\
       \\renewcommand{\\cftexercisetitlefont}{\\cfttoctitlefont}\
       \\setlength{\\cftexercisenumwidth}{\\cftfignumwidth}\
       \\setlength{\\cftexerciseindent}{\\cftfigindent}"
    )])
  );
  assert_eq!(
    includes[4],
    MetaValue::MetaInlines(vec![Inline::raw_tex(
      "\\ifdef{\\mainmatter}{\\let\\oldmainmatter\\mainmatter\
       \\renewcommand{\\mainmatter}[0]{\\phantomsection\\label{list-of-exercises}\
       \\listofexercise\\oldmainmatter}}{}"
    )])
  );
  assert_eq!(
    document.blocks[0],
    Block::Plain(vec![Inline::raw_tex(
      "\\ifdef{\\mainmatter}{}{\\phantomsection\\label{list-of-exercises}\
       \\listofexercise}"
    )])
  );
}

#[test]
fn test_latex_listing_explicit_spacing() {
  let meta = numbering_meta("exercise", &[
    ("general", map(&[
      ("listing-title", inlines("Exercises")),
      ("listing-identifier", MetaValue::MetaBool(false)),
    ])),
    ("latex", map(&[("entry-space", word("3.5"))])),
  ]);
  let (document, _) = run(meta, vec![para("Exercise #")], OutputFormat::Latex);

  let Some(MetaValue::MetaList(includes)) = document.meta.get(HEADER_INCLUDES)
  else {
    panic!("header-includes should be a list");
  };
  assert_eq!(
    includes[2],
    MetaValue::MetaInlines(vec![Inline::raw_tex(
      "\\newlistof{exercise}{exercise}{Exercises}\
       \\renewcommand{\\cftexercisetitlefont}{\\cfttoctitlefont}\
       \\setlength{\\cftexercisenumwidth}{3.5em}\
       \\setlength{\\cftexerciseindent}{1.5em}"
    )])
  );
  assert_eq!(
    document.blocks[0],
    Block::Plain(vec![Inline::raw_tex("\\ifdef{\\mainmatter}{}{\\listofexercise}")])
  );
}
