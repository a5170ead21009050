//! API State Definition

use std::sync::Arc;

use summarizer::SummarizerService;

use crate::config::Config;

/// Application State
///
/// State shared across the entire server.
/// Both members are read-only after startup.
#[derive(Clone)]
pub struct AppState {
  /// Configuration
  pub config: Arc<Config>,
  /// Summarization Service
  ///
  /// - Production: backed by `HuggingFaceProvider`
  /// - Test: backed by a stub `InferenceProvider`
  pub service: Arc<SummarizerService>,
}

impl AppState {
  /// Creates a new AppState
  #[must_use]
  pub fn new(config: Config, service: Arc<SummarizerService>) -> Self {
    Self {
      config: Arc::new(config),
      service,
    }
  }
}
