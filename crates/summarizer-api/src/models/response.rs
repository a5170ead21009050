//! Response Model Definition

use serde::Serialize;

use crate::config::{SERVICE_DESCRIPTION, SERVICE_NAME};

/// Health check status string
pub const HEALTHY: &str = "healthy";

/// `GET /` response
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
  /// Service name
  pub name: &'static str,
  /// Service version (crate version)
  pub version: &'static str,
  /// Short description
  pub description: &'static str,
}

impl ServiceInfo {
  /// Metadata of this build
  #[must_use]
  pub fn current() -> Self {
    Self {
      name: SERVICE_NAME,
      version: env!("CARGO_PKG_VERSION"),
      description: SERVICE_DESCRIPTION,
    }
  }
}

/// `GET /api/health` response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
  /// Always "healthy" while the process serves requests
  pub status: &'static str,
  /// Human readable status message
  pub message: String,
  /// Model served by the inference provider
  pub model: String,
}

impl HealthResponse {
  /// Healthy response for the given model
  #[must_use]
  pub fn healthy(model: impl Into<String>) -> Self {
    Self {
      status: HEALTHY,
      message: format!("{SERVICE_NAME} is running"),
      model: model.into(),
    }
  }
}
