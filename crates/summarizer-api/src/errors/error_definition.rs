//! APIエラー定義

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

// summarizer クレートのエラー型をインポート
use summarizer::errors::{InferenceError, SummarizerError, ValidationError};

/// エラーの種類
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// 入力値が無効
  InvalidInput,
  /// 要約モデルの呼び出しに失敗
  InferenceFailure,
  /// 内部エラー
  Internal,
  /// 設定エラー
  Config,
}

impl ApiErrorKind {
  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidInput => "invalid_input",
      Self::InferenceFailure => "inference_failure",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidInput => StatusCode::BAD_REQUEST,
      Self::InferenceFailure | Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// APIエラー
#[derive(Debug, Error)]
pub enum ApiError {
  /// 入力値が無効
  #[error(transparent)]
  InvalidInput(ValidationError),

  /// 要約モデルの呼び出しに失敗
  #[error("Summarization failed: {0}")]
  InferenceFailure(InferenceError),

  /// 内部エラー
  #[error("Internal error: {0}")]
  Internal(String),

  /// 設定エラー
  #[error("Config error: {0}")]
  Config(String),
}

impl ApiError {
  /// エラーの種類を取得
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::InvalidInput(_) => ApiErrorKind::InvalidInput,
      Self::InferenceFailure(_) => ApiErrorKind::InferenceFailure,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// エラーコードを取得
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTPステータスコードを取得
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// 内部エラーを作成
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// 設定エラーを作成
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// エラーレスポンスのJSON構造
///
/// `{ "error": "..." }`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
  /// 人間が読めるエラーメッセージ
  pub error: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = ErrorResponse {
      error: self.to_string(),
    };

    (status, Json(body)).into_response()
  }
}

/// SummarizerError から ApiError への変換
///
/// ドメイン層のエラーを API 層のエラーにマッピングする。
impl From<SummarizerError> for ApiError {
  fn from(err: SummarizerError) -> Self {
    match err {
      SummarizerError::Validation(err) => ApiError::InvalidInput(err),
      SummarizerError::Inference(err) => ApiError::InferenceFailure(err),
      SummarizerError::Config(err) => ApiError::config(err.to_string()),
      // #[non_exhaustive] な enum のため、将来追加されるバリアントに対応
      _ => ApiError::internal(err.to_string()),
    }
  }
}

/// Result 型エイリアス
pub type Result<T> = std::result::Result<T, ApiError>;
