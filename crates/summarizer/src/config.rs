// crates/summarizer/src/config.rs

use serde::Deserialize;

use crate::errors::ConfigError;

/// Default model identifier (Hugging Face hub id).
pub const DEFAULT_MODEL_NAME: &str = "t5-small";

/// Default minimum accepted text length (characters).
pub const DEFAULT_MIN_TEXT_LENGTH: usize = 50;

/// Default maximum accepted text length (characters).
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 10_000;

/// Default absolute cap on `max_length` passed to the model.
pub const DEFAULT_MAX_SUMMARY_LENGTH: usize = 150;

/// Default cap on `min_length` passed to the model.
pub const DEFAULT_MIN_SUMMARY_LENGTH: usize = 30;

/// Character-length bounds an input text must satisfy after trimming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TextBounds {
  /// Minimum length (inclusive)
  pub min_text_length: usize,
  /// Maximum length (inclusive)
  pub max_text_length: usize,
}

impl Default for TextBounds {
  fn default() -> Self {
    Self {
      min_text_length: DEFAULT_MIN_TEXT_LENGTH,
      max_text_length: DEFAULT_MAX_TEXT_LENGTH,
    }
  }
}

/// Limits applied when deriving the summary length budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SummaryLimits {
  /// Upper bound for `max_length`
  pub max_summary_length: usize,
  /// Upper bound for `min_length`
  pub min_summary_length: usize,
}

impl Default for SummaryLimits {
  fn default() -> Self {
    Self {
      max_summary_length: DEFAULT_MAX_SUMMARY_LENGTH,
      min_summary_length: DEFAULT_MIN_SUMMARY_LENGTH,
    }
  }
}

/// Settings of the summarization core.
///
/// Built once at process start and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SummarizerConfig {
  /// Model identifier handed to the inference provider
  pub model_name: String,
  /// Input validation bounds
  pub text_bounds: TextBounds,
  /// Length budget limits
  pub summary_limits: SummaryLimits,
}

impl Default for SummarizerConfig {
  fn default() -> Self {
    Self {
      model_name: DEFAULT_MODEL_NAME.to_string(),
      text_bounds: TextBounds::default(),
      summary_limits: SummaryLimits::default(),
    }
  }
}

impl SummarizerConfig {
  /// Validates the settings.
  ///
  /// # Errors
  /// - model_name is empty
  /// - min_text_length is 0 or greater than max_text_length
  /// - max_summary_length or min_summary_length is 0
  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.model_name.trim().is_empty() {
      return Err(ConfigError::EmptyModelName);
    }

    // a zero minimum would let empty_text and too_short overlap
    if self.text_bounds.min_text_length == 0 {
      return Err(ConfigError::ZeroMinTextLength);
    }

    if self.text_bounds.min_text_length > self.text_bounds.max_text_length {
      return Err(ConfigError::InvalidTextBounds {
        min_text_length: self.text_bounds.min_text_length,
        max_text_length: self.text_bounds.max_text_length,
      });
    }

    if self.summary_limits.max_summary_length == 0 {
      return Err(ConfigError::ZeroMaxSummaryLength);
    }

    if self.summary_limits.min_summary_length == 0 {
      return Err(ConfigError::ZeroMinSummaryLength);
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_match_documented_values() {
    let config = SummarizerConfig::default();
    assert_eq!(config.model_name, "t5-small");
    assert_eq!(config.text_bounds.min_text_length, 50);
    assert_eq!(config.text_bounds.max_text_length, 10_000);
    assert_eq!(config.summary_limits.max_summary_length, 150);
    assert_eq!(config.summary_limits.min_summary_length, 30);
  }

  #[test]
  fn validate_accepts_defaults() {
    assert!(SummarizerConfig::default().validate().is_ok());
  }

  #[test]
  fn validate_rejects_empty_model_name() {
    let config = SummarizerConfig {
      model_name: "  ".to_string(),
      ..SummarizerConfig::default()
    };
    assert_eq!(config.validate(), Err(ConfigError::EmptyModelName));
  }

  #[test]
  fn validate_rejects_zero_min_text_length() {
    let mut config = SummarizerConfig::default();
    config.text_bounds.min_text_length = 0;
    assert_eq!(config.validate(), Err(ConfigError::ZeroMinTextLength));
  }

  #[test]
  fn validate_rejects_inverted_text_bounds() {
    let mut config = SummarizerConfig::default();
    config.text_bounds = TextBounds {
      min_text_length: 200,
      max_text_length: 100,
    };
    assert_eq!(
      config.validate(),
      Err(ConfigError::InvalidTextBounds {
        min_text_length: 200,
        max_text_length: 100,
      })
    );
  }

  #[test]
  fn validate_accepts_equal_text_bounds() {
    let mut config = SummarizerConfig::default();
    config.text_bounds = TextBounds {
      min_text_length: 100,
      max_text_length: 100,
    };
    assert!(config.validate().is_ok());
  }

  #[test]
  fn validate_rejects_zero_summary_limits() {
    let mut config = SummarizerConfig::default();
    config.summary_limits.max_summary_length = 0;
    assert_eq!(config.validate(), Err(ConfigError::ZeroMaxSummaryLength));

    let mut config = SummarizerConfig::default();
    config.summary_limits.min_summary_length = 0;
    assert_eq!(config.validate(), Err(ConfigError::ZeroMinSummaryLength));
  }
}
