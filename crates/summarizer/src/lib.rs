//! summarizer text summarization core
//!
//! Validates raw summarize requests, derives the summary length budget and
//! delegates generation to a pretrained sequence-to-sequence model behind an
//! [`inference::InferenceProvider`].

/// Config module - SummarizerConfig, TextBounds, SummaryLimits
pub mod config;

/// Error module - ValidationError, InferenceError, SummarizerError, etc.
pub mod errors;

/// Inference module - InferenceProvider trait and the Hugging Face HTTP provider
pub mod inference;

/// Length budget module - derives (min_length, max_length) from the input text
pub mod length_budget;

/// Data model module - SummarizeRequest, SummarizeResult
pub mod models;

/// Service module - SummarizerService orchestrating validation and inference
pub mod service;

/// Validation module - checks raw request bodies against the configured text bounds
pub mod validation;

/// Re-exports
pub use config::{SummarizerConfig, SummaryLimits, TextBounds};
pub use errors::{SummarizerError, SummarizerResult};
pub use service::SummarizerService;
