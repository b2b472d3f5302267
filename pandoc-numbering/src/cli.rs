use std::path::PathBuf;

use clap::Parser;

/// Command line interface for pandoc-numbering
///
/// Pandoc runs filters as `FILTER FORMAT` with the JSON document on stdin,
/// so the positional format is the only argument pandoc itself passes.
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "Number labeled elements, resolve references and build listings"
)]
pub struct Cli {
  /// Target output format, as given by pandoc (e.g. html, latex, beamer)
  #[arg(default_value = "html")]
  pub format: String,

  /// Read the JSON document from this file instead of stdin
  #[arg(short, long)]
  pub input: Option<PathBuf>,

  /// Write the JSON document to this file instead of stdout
  #[arg(short, long)]
  pub output: Option<PathBuf>,

  /// Pretty-print the JSON output
  #[arg(long)]
  pub pretty: bool,

  /// Enable verbose debug logging
  #[arg(short, long)]
  pub verbose: bool,
}

impl Cli {
  /// Parse command line arguments
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
