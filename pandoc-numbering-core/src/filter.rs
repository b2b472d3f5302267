//! The complete filter: configure, number, reference, list.
use log::{debug, trace};
use pandoc_numbering_ast::{
  Pandoc,
  visit::MutVisitor,
};

use crate::{
  context::NumberingContext,
  diagnostics::Diagnostic,
  error::{NumberingError, NumberingResult},
  format::OutputFormat,
  numbering::NumberingPass,
  reference::ReferencePass,
};

/// Oldest pandoc API version whose JSON layout matches the document model.
pub const MIN_API_VERSION: [u32; 2] = [1, 23];

/// Findings of one filter run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterReport {
  /// Number of elements that received a number.
  pub numbered:    usize,
  pub diagnostics: Vec<Diagnostic>,
}

/// The pandoc-numbering filter for one output target.
#[derive(Debug, Clone, Default)]
pub struct NumberingFilter {
  format: OutputFormat,
}

impl NumberingFilter {
  #[must_use]
  pub const fn new(format: OutputFormat) -> Self {
    Self { format }
  }

  #[must_use]
  pub const fn format(&self) -> &OutputFormat {
    &self.format
  }

  /// Number, cross-reference and list every marked element of `document`.
  pub fn apply(&self, document: &mut Pandoc) -> FilterReport {
    let mut context = self.prepare(document);
    self.run(&mut context, document)
  }

  /// Run the filter on a JSON document and return the JSON result.
  ///
  /// # Errors
  ///
  /// Returns an error if the input is not a pandoc JSON document of a
  /// supported API version, or if serialization fails.
  pub fn apply_json(
    &self,
    json: &str,
  ) -> NumberingResult<(String, FilterReport)> {
    // The version is checked before decoding: older layouts do not fit the
    // document model.
    let value: serde_json::Value = serde_json::from_str(json)?;
    check_api_version(&api_version(&value))?;
    let mut document: Pandoc = serde_json::from_value(value)?;
    let report = self.apply(&mut document);
    Ok((document.to_json()?, report))
  }

  /// Build the per-document context from the metadata.
  #[must_use]
  pub fn prepare(&self, document: &Pandoc) -> NumberingContext {
    trace!("Preparing numbering for {} target", self.format);
    NumberingContext::from_metadata(&document.meta, self.format)
  }

  /// Run the numbering, referencing and listing passes with `context`.
  pub fn run(
    &self,
    context: &mut NumberingContext,
    document: &mut Pandoc,
  ) -> FilterReport {
    NumberingPass::new(context).visit_blocks(&mut document.blocks);
    let numbered = context.counts.values().sum();
    debug!("Numbered {numbered} element(s)");

    context.resolve_counts();
    ReferencePass::new(context).visit_blocks(&mut document.blocks);
    context.build_listings(document);

    FilterReport {
      numbered,
      diagnostics: context.take_diagnostics(),
    }
  }
}

fn api_version(value: &serde_json::Value) -> Vec<u32> {
  value
    .get("pandoc-api-version")
    .and_then(serde_json::Value::as_array)
    .map(|parts| {
      parts
        .iter()
        .filter_map(serde_json::Value::as_u64)
        .filter_map(|part| u32::try_from(part).ok())
        .collect()
    })
    .unwrap_or_default()
}

fn check_api_version(version: &[u32]) -> NumberingResult<()> {
  let supported = matches!(version, [major, minor, ..]
    if *major == MIN_API_VERSION[0] && *minor >= MIN_API_VERSION[1]);
  if supported {
    Ok(())
  } else {
    Err(NumberingError::ApiVersion {
      found:    join(version),
      expected: join(&MIN_API_VERSION),
    })
  }
}

fn join(version: &[u32]) -> String {
  version
    .iter()
    .map(ToString::to_string)
    .collect::<Vec<_>>()
    .join(".")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_api_version() {
    assert!(check_api_version(&[1, 23, 1]).is_ok());
    assert!(check_api_version(&[1, 23]).is_ok());
    assert!(check_api_version(&[1, 24, 0]).is_ok());
    assert!(check_api_version(&[2, 0]).is_err());
    assert!(matches!(
      check_api_version(&[1, 22, 1]),
      Err(NumberingError::ApiVersion { found, expected })
        if found == "1.22.1" && expected == "1.23"
    ));
    assert!(check_api_version(&[]).is_err());
  }

  #[test]
  fn test_old_layout_is_rejected_by_version() {
    let json = r#"{"pandoc-api-version":[1,22,2],"meta":{},
      "blocks":[{"t":"Null"}]}"#;
    let result = NumberingFilter::default().apply_json(json);
    assert!(matches!(result, Err(NumberingError::ApiVersion { .. })));
  }
}
