//! summarizer-api crate
//!
//! Web server exposing the summarizer library as an HTTP API.
//!
//! ## Endpoints
//! - `GET /` - Service metadata
//! - `GET /api/health` - Health Check
//! - `POST /api/summarize` - Summarize text
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:5000/api/summarize \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "The quick brown fox jumps over the lazy dog, again and again, all day long."}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{HealthResponse, ServiceInfo, SummarizeResult};
