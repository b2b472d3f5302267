use std::{
  fs::File,
  io::{self, BufReader, BufWriter, Read, Write},
};

use color_eyre::eyre::{Context, Result};
use log::{LevelFilter, info, warn};

mod cli;

use cli::Cli;

fn main() -> Result<()> {
  color_eyre::install()?;

  let cli = Cli::parse_args();

  // stdout carries the document, so logs go to stderr
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Warn
    })
    .target(env_logger::Target::Stderr)
    .init();

  let reader: Box<dyn Read> = match &cli.input {
    Some(path) => {
      Box::new(BufReader::new(File::open(path).wrap_err_with(|| {
        format!("Failed to open input file: {}", path.display())
      })?))
    },
    None => Box::new(io::stdin().lock()),
  };

  let writer: Box<dyn Write> = match &cli.output {
    Some(path) => {
      Box::new(BufWriter::new(File::create(path).wrap_err_with(|| {
        format!("Failed to create output file: {}", path.display())
      })?))
    },
    None => Box::new(BufWriter::new(io::stdout().lock())),
  };

  let report = pandoc_numbering::run(reader, writer, &cli.format, cli.pretty)
    .wrap_err_with(|| format!("Failed to filter document for {}", cli.format))?;

  for diagnostic in &report.diagnostics {
    warn!("{diagnostic}");
  }
  info!("Numbered {} element(s)", report.numbered);

  Ok(())
}
