#![allow(clippy::expect_used, clippy::panic, reason = "Fine in tests")]
use pandoc_numbering_ast::{
  Block,
  Inline,
  MetaValue,
  Pandoc,
  stringify::stringify,
  visit::{MutVisitor, walk_inline},
};
use serde_json::{Value, json};

/// Output of `pandoc -t json` for a small document exercising tables,
/// figures, citations and nested metadata.
fn pandoc_output() -> Value {
  json!({
    "pandoc-api-version": [1, 23, 1],
    "meta": {
      "pandoc-numbering": {"t": "MetaMap", "c": {
        "exercise": {"t": "MetaMap", "c": {
          "general": {"t": "MetaMap", "c": {
            "listing-title": {"t": "MetaInlines", "c": [
              {"t": "Str", "c": "List"},
              {"t": "Space"},
              {"t": "Str", "c": "of"},
              {"t": "Space"},
              {"t": "Str", "c": "exercises"}
            ]},
            "cite-shortcut": {"t": "MetaBool", "c": false},
            "classes": {"t": "MetaList", "c": [
              {"t": "MetaInlines", "c": [{"t": "Str", "c": "box"}]}
            ]}
          }}
        }}
      }}
    },
    "blocks": [
      {"t": "Header", "c": [1, ["intro", [], []], [{"t": "Str", "c": "Intro"}]]},
      {"t": "Para", "c": [
        {"t": "Str", "c": "Exercise"},
        {"t": "Space"},
        {"t": "Str", "c": "#"}
      ]},
      {"t": "Table", "c": [
        ["", [], []],
        [null, []],
        [[{"t": "AlignDefault"}, {"t": "ColWidth", "c": 0.5}],
         [{"t": "AlignLeft"}, {"t": "ColWidthDefault"}]],
        [["", [], []], []],
        [[["", [], []], 0, [], [
          [["", [], []], [
            [["", [], []], {"t": "AlignDefault"}, 1, 1, [
              {"t": "Plain", "c": [{"t": "Str", "c": "Theorem"}, {"t": "Space"}, {"t": "Str", "c": "#"}]}
            ]],
            [["", [], []], {"t": "AlignDefault"}, 1, 1, []]
          ]]
        ]]],
        [["", [], []], []]
      ]},
      {"t": "Figure", "c": [
        ["fig", [], []],
        [null, [{"t": "Plain", "c": [{"t": "Str", "c": "Caption"}]}]],
        [{"t": "Plain", "c": [
          {"t": "Image", "c": [["", [], []], [], ["plot.png", ""]]}
        ]}]
      ]},
      {"t": "Para", "c": [
        {"t": "Cite", "c": [
          [{
            "citationId": "exercise:1",
            "citationPrefix": [],
            "citationSuffix": [],
            "citationMode": {"t": "NormalCitation"},
            "citationNoteNum": 1,
            "citationHash": 0
          }],
          [{"t": "Str", "c": "@exercise:1"}]
        ]},
        {"t": "Space"},
        {"t": "Quoted", "c": [{"t": "DoubleQuote"}, [{"t": "Str", "c": "quoted"}]]},
        {"t": "Math", "c": [{"t": "InlineMath"}, "x^2"]},
        {"t": "RawInline", "c": ["html", "<br>"]}
      ]},
      {"t": "OrderedList", "c": [
        [3, {"t": "Decimal"}, {"t": "Period"}],
        [[{"t": "Plain", "c": [{"t": "Str", "c": "three"}]}]]
      ]},
      {"t": "HorizontalRule"}
    ]
  })
}

fn parse() -> Pandoc {
  Pandoc::from_json(&pandoc_output().to_string())
    .expect("pandoc output should parse")
}

#[test]
fn test_pandoc_output_round_trip() {
  let document = parse();
  let json = document.to_json().expect("document should serialize");
  let value: Value = serde_json::from_str(&json).expect("output is JSON");

  assert_eq!(value, pandoc_output());
}

#[test]
fn test_metadata_keeps_key_order() {
  let document = parse();
  let Some(MetaValue::MetaMap(categories)) = document.meta.get("pandoc-numbering")
  else {
    panic!("expected a metadata map");
  };
  let general = categories["exercise"]
    .as_map()
    .and_then(|scopes| scopes.get("general"))
    .and_then(MetaValue::as_map)
    .expect("general scope");

  let keys: Vec<&str> = general.keys().map(String::as_str).collect();
  assert_eq!(keys, ["listing-title", "cite-shortcut", "classes"]);
}

#[test]
fn test_citation_content() {
  let document = parse();
  let Block::Para(inlines) = &document.blocks[4] else {
    panic!("expected a paragraph");
  };
  let Inline::Cite(citations, content) = &inlines[0] else {
    panic!("expected a citation");
  };

  assert_eq!(citations[0].citation_id, "exercise:1");
  assert_eq!(stringify(content), "@exercise:1");
  assert_eq!(stringify(inlines), "@exercise:1 \u{201c}quoted\u{201d}x^2");
}

#[test]
fn test_visitor_reaches_table_cells() {
  struct Markers(Vec<String>);

  impl MutVisitor for Markers {
    fn visit_inline(&mut self, inline: &mut Inline) {
      if let Inline::Str(text) = inline
        && text == "#"
      {
        self.0.push(text.clone());
        *text = "1".to_string();
      }
      walk_inline(self, inline);
    }
  }

  let mut document = parse();
  let mut markers = Markers(Vec::new());
  markers.visit_blocks(&mut document.blocks);

  assert_eq!(markers.0.len(), 2);
  let json = document.to_json().expect("document should serialize");
  assert!(!json.contains(r##""c":"#""##));
}
