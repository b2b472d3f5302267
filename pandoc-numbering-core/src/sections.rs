//! Running section numbers and section aliases.

/// Number of sectioning levels tracked.
pub const SECTION_LEVELS: usize = 6;

/// Class that keeps a header out of the section numbering.
pub const UNNUMBERED_CLASS: &str = "unnumbered";

/// Current position in the document's section hierarchy.
///
/// Level `n` headers (1-based) bump `numbers[n - 1]` and reset every deeper
/// level. Aliases mirror the numbers with the header identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionTracker {
  numbers: [usize; SECTION_LEVELS],
  aliases: [String; SECTION_LEVELS],
}

impl SectionTracker {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Register a header of `level` with the given identifier and classes.
  ///
  /// Unnumbered headers and headers deeper than the tracked levels leave
  /// the state untouched.
  pub fn update(&mut self, level: usize, identifier: &str, classes: &[String]) {
    if !(1..=SECTION_LEVELS).contains(&level)
      || classes.iter().any(|class| class == UNNUMBERED_CLASS)
    {
      return;
    }
    let index = level - 1;

    self.numbers[index] += 1;
    self.numbers[level..].fill(0);

    self.aliases[index] = identifier.to_string();
    for alias in &mut self.aliases[level..] {
      alias.clear();
    }
  }

  /// Dotted section number of the first `last` levels, e.g. `2.1`.
  #[must_use]
  pub fn number(&self, last: usize) -> String {
    join(self.numbers[..last.min(SECTION_LEVELS)].iter())
  }

  /// Dotted section alias of the first `last` levels; sections without an
  /// identifier are written `0`.
  #[must_use]
  pub fn alias(&self, last: usize) -> String {
    self.aliases[..last.min(SECTION_LEVELS)]
      .iter()
      .map(|alias| if alias.is_empty() { "0" } else { alias.as_str() })
      .collect::<Vec<_>>()
      .join(".")
  }

  /// Local number of the `count`-th element: section levels `first..last`
  /// followed by the count.
  #[must_use]
  pub fn local(&self, first: usize, last: usize, count: usize) -> String {
    let last = last.min(SECTION_LEVELS);
    let shown = if first < last {
      &self.numbers[first..last]
    } else {
      &[]
    };
    join(shown.iter().chain(std::iter::once(&count)))
  }
}

fn join<'a>(numbers: impl Iterator<Item = &'a usize>) -> String {
  numbers
    .map(ToString::to_string)
    .collect::<Vec<_>>()
    .join(".")
}
