//! Error definitions

use thiserror::Error;

/// Rejection reasons for a summarize request body.
///
/// Every variant is a deterministic client error: the request is never
/// forwarded to the inference provider.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
  /// No body, or a body that is not a JSON object
  #[error("No JSON body provided")]
  MissingBody,

  /// The body has no usable string field with the given name
  #[error("Missing required field: '{field}'")]
  MissingField {
    /// Name of the missing field
    field: &'static str,
  },

  /// Text is empty after trimming
  #[error("Text cannot be empty")]
  EmptyText,

  /// Trimmed text is shorter than the configured minimum
  #[error("Text must be at least {min} characters long")]
  TooShort {
    /// Configured minimum text length (characters)
    min: usize,
  },

  /// Trimmed text is longer than the configured maximum
  #[error("Text must not exceed {max} characters")]
  TooLong {
    /// Configured maximum text length (characters)
    max: usize,
  },
}

impl ValidationError {
  /// Machine readable reason tag
  #[must_use]
  pub fn reason(&self) -> &'static str {
    match self {
      Self::MissingBody => "missing_body",
      Self::MissingField { .. } => "missing_field",
      Self::EmptyText => "empty_text",
      Self::TooShort { .. } => "too_short",
      Self::TooLong { .. } => "too_long",
    }
  }

  /// Threshold that was violated, if the rule has one
  #[must_use]
  pub fn threshold(&self) -> Option<usize> {
    match self {
      Self::TooShort { min } => Some(*min),
      Self::TooLong { max } => Some(*max),
      _ => None,
    }
  }
}

/// Failures surfaced by an inference provider
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InferenceError {
  /// The request never produced an HTTP response (connect error, timeout, ...)
  #[error("request to inference provider failed: {message}")]
  Transport {
    /// Underlying transport error
    message: String,
  },

  /// The provider answered with a non-success status
  #[error("inference provider returned status {status}: {message}")]
  Status {
    /// HTTP status code
    status: u16,
    /// Error message reported by the provider, or the raw body
    message: String,
  },

  /// The response body could not be interpreted as a summary
  #[error("malformed response from inference provider: {message}")]
  MalformedResponse {
    /// Parse failure detail
    message: String,
  },

  /// The provider answered successfully but returned no summary
  #[error("inference provider returned no summary")]
  EmptyOutput,

  /// Any other provider specific failure
  #[error("{message}")]
  Provider {
    /// Provider supplied message
    message: String,
  },
}

impl InferenceError {
  /// Creates a provider specific error
  #[must_use]
  pub fn provider(message: impl Into<String>) -> Self {
    Self::Provider {
      message: message.into(),
    }
  }
}

/// Configuration (SummarizerConfig / InferenceConfig) errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
  /// model_name is empty
  #[error("model_name must not be empty")]
  EmptyModelName,

  /// min_text_length == 0
  #[error("min_text_length must be at least 1")]
  ZeroMinTextLength,

  /// min_text_length > max_text_length
  #[error(
    "min_text_length must not exceed max_text_length: \
     min_text_length={min_text_length}, max_text_length={max_text_length}"
  )]
  InvalidTextBounds {
    /// Configured minimum
    min_text_length: usize,
    /// Configured maximum
    max_text_length: usize,
  },

  /// max_summary_length == 0
  #[error("max_summary_length must be at least 1")]
  ZeroMaxSummaryLength,

  /// min_summary_length == 0
  #[error("min_summary_length must be at least 1")]
  ZeroMinSummaryLength,

  /// The inference provider could not be built from its settings
  #[error("invalid inference provider setting: {reason}")]
  InvalidProviderSetting {
    /// Failure detail
    reason: String,
  },
}

/// Top level error of the summarizer crate
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SummarizerError {
  /// Request rejected before inference
  #[error(transparent)]
  Validation(#[from] ValidationError),

  /// Inference provider failure
  #[error("Summarization failed: {0}")]
  Inference(#[from] InferenceError),

  /// Invalid configuration
  #[error("config error: {0}")]
  Config(#[from] ConfigError),
}

/// Result type alias for the summarizer crate
pub type SummarizerResult<T> = std::result::Result<T, SummarizerError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn validation_reason_tags() {
    assert_eq!(ValidationError::MissingBody.reason(), "missing_body");
    assert_eq!(
      ValidationError::MissingField { field: "text" }.reason(),
      "missing_field"
    );
    assert_eq!(ValidationError::EmptyText.reason(), "empty_text");
    assert_eq!(ValidationError::TooShort { min: 50 }.reason(), "too_short");
    assert_eq!(ValidationError::TooLong { max: 10 }.reason(), "too_long");
  }

  #[test]
  fn validation_messages_cite_thresholds() {
    let err = ValidationError::TooShort { min: 50 };
    assert_eq!(err.threshold(), Some(50));
    assert!(err.to_string().contains("50"));

    let err = ValidationError::TooLong { max: 10000 };
    assert_eq!(err.threshold(), Some(10000));
    assert!(err.to_string().contains("10000"));

    assert_eq!(ValidationError::EmptyText.threshold(), None);
  }

  #[test]
  fn missing_field_message_names_field() {
    let err = ValidationError::MissingField { field: "text" };
    assert!(err.to_string().contains("'text'"));
  }

  #[test]
  fn inference_error_is_prefixed() {
    let err: SummarizerError = InferenceError::provider("model exploded").into();
    assert_eq!(err.to_string(), "Summarization failed: model exploded");
  }

  #[test]
  fn validation_error_is_transparent() {
    let err: SummarizerError = ValidationError::EmptyText.into();
    assert_eq!(err.to_string(), "Text cannot be empty");
  }
}
