//! Hugging Face Inference API provider.
//!
//! Sends `POST {endpoint}/models/{model}` with the summarization pipeline
//! payload and reads back `[{"summary_text": "..."}]`. Any server speaking
//! the same protocol (self-hosted inference endpoints, TGI gateways) works.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{GenerationParams, InferenceProvider};
use crate::config::DEFAULT_MODEL_NAME;
use crate::errors::{ConfigError, InferenceError};

/// Default inference endpoint
pub const DEFAULT_INFERENCE_ENDPOINT: &str = "https://api-inference.huggingface.co";

/// Default per-request timeout
pub const DEFAULT_INFERENCE_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection settings of [`HuggingFaceProvider`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferenceConfig {
  /// Base URL of the inference API
  pub endpoint: String,
  /// Model identifier
  pub model_name: String,
  /// Optional bearer token
  pub api_token: Option<String>,
  /// Per-request timeout
  pub timeout: Duration,
}

impl Default for InferenceConfig {
  fn default() -> Self {
    Self {
      endpoint: DEFAULT_INFERENCE_ENDPOINT.to_string(),
      model_name: DEFAULT_MODEL_NAME.to_string(),
      api_token: None,
      timeout: DEFAULT_INFERENCE_TIMEOUT,
    }
  }
}

/// Request payload of the summarization pipeline
#[derive(Debug, Serialize)]
struct SummarizationPayload<'a> {
  inputs: &'a str,
  parameters: PipelineParameters,
  options: PipelineOptions,
}

#[derive(Debug, Serialize)]
struct PipelineParameters {
  max_length: usize,
  min_length: usize,
  do_sample: bool,
}

#[derive(Debug, Serialize)]
struct PipelineOptions {
  wait_for_model: bool,
}

/// One element of the pipeline output array
#[derive(Debug, Deserialize)]
struct SummaryOutput {
  #[serde(alias = "generated_text")]
  summary_text: String,
}

/// Error body returned by the API on failure
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
  error: String,
}

/// Summarization backend calling a Hugging Face compatible HTTP API
///
/// The HTTP client (and its connection pool) is created once and shared by
/// every request.
#[derive(Debug, Clone)]
pub struct HuggingFaceProvider {
  client: Client,
  url: String,
  model_name: String,
  api_token: Option<String>,
}

impl HuggingFaceProvider {
  /// Builds the provider.
  ///
  /// # Errors
  /// Returns [`ConfigError::InvalidProviderSetting`] if the endpoint or
  /// model is empty, or the HTTP client cannot be built.
  pub fn new(config: &InferenceConfig) -> Result<Self, ConfigError> {
    let endpoint = config.endpoint.trim().trim_end_matches('/');
    if endpoint.is_empty() {
      return Err(ConfigError::InvalidProviderSetting {
        reason: "inference endpoint must not be empty".to_string(),
      });
    }

    if config.model_name.trim().is_empty() {
      return Err(ConfigError::EmptyModelName);
    }

    let client = Client::builder().timeout(config.timeout).build().map_err(|e| {
      ConfigError::InvalidProviderSetting {
        reason: format!("failed to build HTTP client: {e}"),
      }
    })?;

    Ok(Self {
      client,
      url: format!("{endpoint}/models/{}", config.model_name),
      model_name: config.model_name.clone(),
      api_token: config.api_token.clone().filter(|t| !t.is_empty()),
    })
  }

  /// Full URL the provider posts to
  #[must_use]
  pub fn url(&self) -> &str {
    &self.url
  }
}

/// Extracts the summary from a successful response body.
fn parse_summary(body: &str) -> Result<String, InferenceError> {
  let outputs: Vec<SummaryOutput> =
    serde_json::from_str(body).map_err(|e| InferenceError::MalformedResponse {
      message: e.to_string(),
    })?;

  outputs
    .into_iter()
    .next()
    .map(|output| output.summary_text.trim().to_string())
    .ok_or(InferenceError::EmptyOutput)
}

/// Extracts a readable message from a failed response body.
fn parse_error_message(body: &str) -> String {
  serde_json::from_str::<ApiErrorBody>(body).map_or_else(|_| body.trim().to_string(), |b| b.error)
}

#[async_trait]
impl InferenceProvider for HuggingFaceProvider {
  async fn summarize(&self, text: &str, params: &GenerationParams) -> Result<String, InferenceError> {
    let payload = SummarizationPayload {
      inputs: text,
      parameters: PipelineParameters {
        max_length: params.max_length,
        min_length: params.min_length,
        do_sample: !params.deterministic,
      },
      options: PipelineOptions {
        wait_for_model: true,
      },
    };

    debug!(
      url = %self.url,
      max_length = params.max_length,
      min_length = params.min_length,
      "sending inference request"
    );

    let mut request = self.client.post(&self.url).json(&payload);
    if let Some(token) = &self.api_token {
      request = request.bearer_auth(token);
    }

    let response = request.send().await.map_err(|e| InferenceError::Transport {
      message: e.to_string(),
    })?;

    let status = response.status();
    let body = response.text().await.map_err(|e| InferenceError::Transport {
      message: e.to_string(),
    })?;

    if !status.is_success() {
      let message = parse_error_message(&body);
      warn!(status = status.as_u16(), error = %message, "inference provider returned an error");
      return Err(InferenceError::Status {
        status: status.as_u16(),
        message,
      });
    }

    parse_summary(&body)
  }

  fn model_name(&self) -> &str {
    &self.model_name
  }
}
