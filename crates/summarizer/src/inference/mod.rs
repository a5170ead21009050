//! Inference provider abstraction.
//!
//! The summarization model is a black box behind [`InferenceProvider`]. The
//! production implementation is [`HuggingFaceProvider`]; tests swap in stubs.

mod huggingface;

use async_trait::async_trait;

use crate::errors::InferenceError;
use crate::length_budget::LengthBudget;

pub use huggingface::{
  DEFAULT_INFERENCE_ENDPOINT, DEFAULT_INFERENCE_TIMEOUT, HuggingFaceProvider, InferenceConfig,
};

/// Generation parameters for a single summarization call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationParams {
  /// Maximum summary length
  pub max_length: usize,
  /// Minimum summary length
  pub min_length: usize,
  /// Disable sampling so identical input yields identical output
  pub deterministic: bool,
}

impl GenerationParams {
  /// Deterministic generation within the given budget.
  #[must_use]
  pub fn deterministic(budget: LengthBudget) -> Self {
    Self {
      max_length: budget.max_length,
      min_length: budget.min_length,
      deterministic: true,
    }
  }
}

/// Common interface of summarization backends
///
/// Implementations are shared read-only across requests, so they must be
/// `Send + Sync` and must not require `&mut self`.
#[async_trait]
pub trait InferenceProvider: Send + Sync {
  /// Summarizes `text` within the given parameters.
  ///
  /// # Errors
  /// Any backend failure (transport, model error, malformed output).
  async fn summarize(&self, text: &str, params: &GenerationParams) -> Result<String, InferenceError>;

  /// Identifier of the model served by this provider
  fn model_name(&self) -> &str;
}
