//! Data models

use serde::{Deserialize, Serialize};

use crate::validation::char_length;

/// Accepted summarize request
///
/// Produced by [`crate::validation::validate_text`]; `text` is trimmed,
/// non-empty and within the configured bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizeRequest {
  /// Text to summarize
  pub text: String,
}

/// Summarize result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeResult {
  /// Summary produced by the model
  pub summary: String,
  /// Length of the trimmed input (characters)
  pub original_length: usize,
  /// Length of the summary (characters)
  pub summary_length: usize,
}

impl SummarizeResult {
  /// Builds a result from the validated input and the provider output.
  #[must_use]
  pub fn new(original: &str, summary: String) -> Self {
    Self {
      original_length: char_length(original),
      summary_length: char_length(&summary),
      summary,
    }
  }
}
