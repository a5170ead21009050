//! Config loading from environment variables

use std::str::FromStr;
use std::time::Duration;

use axum::http::HeaderValue;
use summarizer::SummarizerConfig;
use summarizer::config::{
  DEFAULT_MAX_SUMMARY_LENGTH, DEFAULT_MAX_TEXT_LENGTH, DEFAULT_MIN_SUMMARY_LENGTH,
  DEFAULT_MIN_TEXT_LENGTH, DEFAULT_MODEL_NAME, SummaryLimits, TextBounds,
};
use summarizer::inference::{DEFAULT_INFERENCE_ENDPOINT, DEFAULT_INFERENCE_TIMEOUT, InferenceConfig};

use super::constants::{DEFAULT_ALLOWED_ORIGINS, DEFAULT_DEBUG, DEFAULT_HOST, DEFAULT_PORT};
use crate::errors::ApiError;

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind host (e.g. "0.0.0.0")
  pub host: String,
  /// Bind port
  pub port: u16,
  /// Debug mode (raises the default log level)
  pub debug: bool,
  /// Origins allowed to call `/api/*` cross-origin
  pub allowed_origins: Vec<HeaderValue>,
  /// Validation and length budget settings
  pub summarizer: SummarizerConfig,
  /// Inference provider connection settings
  pub inference: InferenceConfig,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      host: DEFAULT_HOST.to_string(),
      port: DEFAULT_PORT,
      debug: DEFAULT_DEBUG,
      allowed_origins: DEFAULT_ALLOWED_ORIGINS.split(',').map(HeaderValue::from_static).collect(),
      summarizer: SummarizerConfig::default(),
      inference: InferenceConfig::default(),
    }
  }
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// # Errors
  /// Returns an error if environment variable values are invalid
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary key lookup
  ///
  /// Unset keys fall back to their defaults.
  ///
  /// # Errors
  /// Returns an error if a value cannot be parsed or the origins are not valid header values
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
    let debug = lookup("DEBUG")
      .or_else(|| lookup("FLASK_DEBUG"))
      .map_or(DEFAULT_DEBUG, |v| v.trim().eq_ignore_ascii_case("true"));

    let model_name = lookup("MODEL_NAME").unwrap_or_else(|| DEFAULT_MODEL_NAME.to_string());

    let summarizer = SummarizerConfig {
      model_name: model_name.clone(),
      text_bounds: TextBounds {
        min_text_length: parse_or(&lookup, "MIN_TEXT_LENGTH", DEFAULT_MIN_TEXT_LENGTH)?,
        max_text_length: parse_or(&lookup, "MAX_TEXT_LENGTH", DEFAULT_MAX_TEXT_LENGTH)?,
      },
      summary_limits: SummaryLimits {
        max_summary_length: parse_or(&lookup, "MAX_SUMMARY_LENGTH", DEFAULT_MAX_SUMMARY_LENGTH)?,
        min_summary_length: parse_or(&lookup, "MIN_SUMMARY_LENGTH", DEFAULT_MIN_SUMMARY_LENGTH)?,
      },
    };

    let timeout_secs =
      parse_or(&lookup, "INFERENCE_TIMEOUT_SECS", DEFAULT_INFERENCE_TIMEOUT.as_secs())?;
    let inference = InferenceConfig {
      endpoint: lookup("INFERENCE_API_URL").unwrap_or_else(|| DEFAULT_INFERENCE_ENDPOINT.to_string()),
      model_name,
      api_token: lookup("INFERENCE_API_TOKEN").filter(|t| !t.trim().is_empty()),
      timeout: Duration::from_secs(timeout_secs),
    };

    let origins = lookup("ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string());
    let allowed_origins = parse_origins(&origins)?;

    Ok(Self {
      host,
      port,
      debug,
      allowed_origins,
      summarizer,
      inference,
    })
  }

  /// Bind address (e.g. "0.0.0.0:5000")
  #[must_use]
  pub fn bind_addr(&self) -> String {
    format!("{}:{}", self.host, self.port)
  }
}

/// Parses `key` with `FromStr`, falling back to `default` when unset.
fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> crate::errors::Result<T>
where
  F: Fn(&str) -> Option<String>,
  T: FromStr,
  T::Err: std::fmt::Display,
{
  match lookup(key) {
    Some(raw) => raw
      .trim()
      .parse()
      .map_err(|e| ApiError::config(format!("{key}: invalid value {raw:?}: {e}"))),
    None => Ok(default),
  }
}

/// Splits a comma separated origin list, skipping blank entries.
fn parse_origins(raw: &str) -> crate::errors::Result<Vec<HeaderValue>> {
  raw
    .split(',')
    .map(str::trim)
    .filter(|origin| !origin.is_empty())
    .map(|origin| {
      HeaderValue::from_str(origin)
        .map_err(|e| ApiError::config(format!("ALLOWED_ORIGINS: invalid origin {origin:?}: {e}")))
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use super::*;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> =
      pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| vars.get(key).cloned()
  }

  #[test]
  fn defaults_when_unset() {
    let config = Config::from_lookup(|_| None).unwrap();

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 5000);
    assert!(config.debug);
    assert_eq!(config.bind_addr(), "0.0.0.0:5000");
    assert_eq!(config.summarizer, SummarizerConfig::default());
    assert_eq!(config.inference, InferenceConfig::default());
    assert_eq!(
      config.allowed_origins,
      vec![
        HeaderValue::from_static("http://localhost:3000"),
        HeaderValue::from_static("http://localhost:5173"),
      ]
    );
  }

  #[test]
  fn overrides_from_lookup() {
    let config = Config::from_lookup(lookup_from(&[
      ("HOST", "127.0.0.1"),
      ("PORT", "8080"),
      ("DEBUG", "False"),
      ("MODEL_NAME", "facebook/bart-large-cnn"),
      ("MIN_TEXT_LENGTH", "10"),
      ("MAX_TEXT_LENGTH", "500"),
      ("MAX_SUMMARY_LENGTH", "80"),
      ("MIN_SUMMARY_LENGTH", "20"),
      ("ALLOWED_ORIGINS", "https://app.example.com, ,https://admin.example.com"),
      ("INFERENCE_API_URL", "http://localhost:8081"),
      ("INFERENCE_API_TOKEN", "hf_token"),
      ("INFERENCE_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();

    assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    assert!(!config.debug);
    assert_eq!(config.summarizer.model_name, "facebook/bart-large-cnn");
    assert_eq!(config.summarizer.text_bounds.min_text_length, 10);
    assert_eq!(config.summarizer.text_bounds.max_text_length, 500);
    assert_eq!(config.summarizer.summary_limits.max_summary_length, 80);
    assert_eq!(config.summarizer.summary_limits.min_summary_length, 20);
    assert_eq!(config.allowed_origins.len(), 2);
    assert_eq!(config.inference.endpoint, "http://localhost:8081");
    assert_eq!(config.inference.model_name, "facebook/bart-large-cnn");
    assert_eq!(config.inference.api_token.as_deref(), Some("hf_token"));
    assert_eq!(config.inference.timeout, Duration::from_secs(5));
  }

  #[test]
  fn invalid_number_is_config_error() {
    let err = Config::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();
    assert_eq!(err.code(), "config_error");
    assert!(err.to_string().contains("PORT"));

    let err = Config::from_lookup(lookup_from(&[("MAX_TEXT_LENGTH", "-1")])).unwrap_err();
    assert!(err.to_string().contains("MAX_TEXT_LENGTH"));
  }

  #[test]
  fn invalid_origin_is_config_error() {
    let err =
      Config::from_lookup(lookup_from(&[("ALLOWED_ORIGINS", "http://ok.example,bad\norigin")]))
        .unwrap_err();
    assert_eq!(err.code(), "config_error");
  }

  #[test]
  fn blank_token_is_ignored() {
    let config = Config::from_lookup(lookup_from(&[("INFERENCE_API_TOKEN", "  ")])).unwrap();
    assert!(config.inference.api_token.is_none());
  }

  #[test]
  fn flask_debug_is_a_fallback_for_debug() {
    let config = Config::from_lookup(lookup_from(&[("FLASK_DEBUG", "false")])).unwrap();
    assert!(!config.debug);

    let config =
      Config::from_lookup(lookup_from(&[("DEBUG", "true"), ("FLASK_DEBUG", "false")])).unwrap();
    assert!(config.debug);
  }

  #[test]
  fn wildcard_origin_is_accepted() {
    let config = Config::from_lookup(lookup_from(&[("ALLOWED_ORIGINS", "*")])).unwrap();
    assert_eq!(config.allowed_origins, vec![HeaderValue::from_static("*")]);
  }
}
