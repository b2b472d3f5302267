//! Stream plumbing for the `pandoc-numbering` executable.
//!
//! The numbering itself lives in [`pandoc_numbering_core`]; this crate only
//! moves a pandoc JSON document from a reader, through the filter, to a
//! writer.
use std::io::{Read, Write};

pub use pandoc_numbering_core::{FilterReport, NumberingError, OutputFormat};
use pandoc_numbering_core::{NumberingFilter, NumberingResult};

/// Filter the JSON document read from `reader` for the output format named
/// `format` and write the result to `writer`.
///
/// # Errors
///
/// Returns an error if reading or writing fails, or if the input is not a
/// supported pandoc JSON document.
pub fn run<R: Read, W: Write>(
  mut reader: R,
  mut writer: W,
  format: &str,
  pretty: bool,
) -> NumberingResult<FilterReport> {
  let mut input = String::new();
  reader.read_to_string(&mut input)?;

  let filter = NumberingFilter::new(OutputFormat::from_name(format));
  let (output, report) = filter.apply_json(&input)?;

  if pretty {
    let value: serde_json::Value = serde_json::from_str(&output)?;
    serde_json::to_writer_pretty(&mut writer, &value)?;
  } else {
    writer.write_all(output.as_bytes())?;
  }
  writer.flush()?;

  Ok(report)
}
