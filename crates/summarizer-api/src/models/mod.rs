//! モデルモジュール

mod response;

pub use response::{HealthResponse, ServiceInfo};
pub use summarizer::models::SummarizeResult;
