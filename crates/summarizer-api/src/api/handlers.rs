//! HTTPハンドラー定義

use axum::{
  Json,
  body::Bytes,
  extract::{State, rejection::BytesRejection},
  http::StatusCode,
};
use serde_json::Value;
use summarizer::errors::ValidationError;
use tracing::{debug, info, warn};

use crate::errors::ApiError;
use crate::models::{HealthResponse, ServiceInfo, SummarizeResult};

use super::state::AppState;

/// GET / エンドポイント
///
/// サービス名・バージョン・説明を返す。
pub async fn index() -> Json<ServiceInfo> {
  Json(ServiceInfo::current())
}

/// GET /api/health エンドポイント
///
/// サーバーが稼働しているかを確認する。
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
  Json(HealthResponse::healthy(state.service.model_name()))
}

/// POST /api/summarize エンドポイント
///
/// テキストを検証し、要約モデルで要約する。
///
/// # Request Body
/// ```json
/// { "text": "要約対象のテキスト" }
/// ```
///
/// ボディは Content-Type に関係なく JSON として解釈する。
/// 空・不正な JSON・オブジェクト以外は `missing_body` として扱う。
/// ボディサイズ上限を超えた場合は 413 ではなく文字数超過の 400 を返す。
///
/// # Response
/// - 200 OK: `{ summary, original_length, summary_length }`
/// - 400 Bad Request: 入力エラー（ボディ欠落、text 欠落、空テキスト、長さ不足・超過）
/// - 500 Internal Server Error: 要約モデルの呼び出し失敗
pub async fn post_summarize(
  State(state): State<AppState>,
  body: Result<Bytes, BytesRejection>,
) -> Result<Json<SummarizeResult>, ApiError> {
  let body = body.map_err(|rejection| {
    let err = body_rejection(&state, &rejection);
    warn!(code = err.code(), rejection = %rejection, "リクエストボディの読み込みに失敗");
    err
  })?;

  let parsed = serde_json::from_slice::<Value>(&body).ok();
  debug!(
    body_bytes = body.len(),
    parsed = parsed.is_some(),
    "要約リクエストを受信"
  );

  let result = state.service.summarize_body(parsed.as_ref()).await.map_err(|e| {
    let err = ApiError::from(e);
    warn!(code = err.code(), error = %err, "要約リクエストを拒否");
    err
  })?;

  info!(
    original_length = result.original_length,
    summary_length = result.summary_length,
    "要約完了"
  );

  Ok(Json(result))
}

/// ボディ読み込み失敗を入力エラーに変換する
fn body_rejection(state: &AppState, rejection: &BytesRejection) -> ApiError {
  if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
    let max = state.service.config().text_bounds.max_text_length;
    ApiError::InvalidInput(ValidationError::TooLong { max })
  } else {
    ApiError::InvalidInput(ValidationError::MissingBody)
  }
}
