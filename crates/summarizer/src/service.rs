// crates/summarizer/src/service.rs

//! SummarizerService: the summarization facade.
//!
//! - input validation (validation)
//! - length budget derivation (length_budget)
//! - a single call to the inference provider (inference)
//!
//! The HTTP layer only needs this struct.

use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use tracing::{debug, error, info};

use crate::config::SummarizerConfig;
use crate::errors::{SummarizerError, SummarizerResult};
use crate::inference::{GenerationParams, InferenceProvider};
use crate::length_budget::derive_length_budget;
use crate::models::SummarizeResult;
use crate::validation::{char_length, validate_text};

/// Validates requests and delegates summarization to an inference provider.
///
/// Holds only immutable state, so one instance is shared across all requests.
pub struct SummarizerService {
  config: SummarizerConfig,
  provider: Arc<dyn InferenceProvider>,
}

impl SummarizerService {
  /// Creates the service.
  ///
  /// # Errors
  /// Returns [`SummarizerError::Config`] if the configuration is invalid.
  pub fn new(
    config: SummarizerConfig,
    provider: Arc<dyn InferenceProvider>,
  ) -> SummarizerResult<Self> {
    config.validate()?;
    Ok(Self { config, provider })
  }

  /// Active configuration
  #[must_use]
  pub fn config(&self) -> &SummarizerConfig {
    &self.config
  }

  /// Model served by the underlying provider
  #[must_use]
  pub fn model_name(&self) -> &str {
    self.provider.model_name()
  }

  /// Runs the whole pipeline on a raw request body.
  ///
  /// # Arguments
  /// * `body` - Parsed JSON body, `None` when the body was absent or unparseable
  ///
  /// # Errors
  /// - [`SummarizerError::Validation`] before any inference call
  /// - [`SummarizerError::Inference`] if the provider fails
  pub async fn summarize_body(&self, body: Option<&Value>) -> SummarizerResult<SummarizeResult> {
    let request = validate_text(body, &self.config.text_bounds)?;
    self.summarize_text(&request.text).await
  }

  /// Summarizes an already validated, trimmed text.
  ///
  /// # Errors
  /// Returns [`SummarizerError::Inference`] if the provider fails.
  pub async fn summarize_text(&self, text: &str) -> SummarizerResult<SummarizeResult> {
    let budget = derive_length_budget(text, &self.config.summary_limits);
    let params = GenerationParams::deterministic(budget);

    debug!(
      text_len = char_length(text),
      max_length = budget.max_length,
      min_length = budget.min_length,
      "summarize request accepted"
    );

    let start = Instant::now();
    let summary = self.provider.summarize(text, &params).await.map_err(|e| {
      error!(error = %e, "inference failed");
      SummarizerError::Inference(e)
    })?;

    let result = SummarizeResult::new(text, summary);

    info!(
      original_length = result.original_length,
      summary_length = result.summary_length,
      elapsed_ms = start.elapsed().as_millis() as u64,
      "summarization complete"
    );

    Ok(result)
  }
}
