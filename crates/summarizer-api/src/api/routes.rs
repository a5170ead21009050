//! ルーター定義

use axum::{
  Router,
  extract::DefaultBodyLimit,
  http::{HeaderValue, Method, header},
  routing::{get, post},
};
use summarizer::TextBounds;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{health_check, index, post_summarize};
use super::state::AppState;
use crate::errors::ApiError;

/// ワイルドカードオリジン
const ANY_ORIGIN: &str = "*";

/// JSON エスケープ後の 1 文字あたりの最大バイト数（`\uXXXX` のサロゲートペア）
const MAX_ESCAPED_CHAR_BYTES: usize = 12;

/// `text` 以外のフィールドや空白に許容する余裕
const BODY_LIMIT_SLACK: usize = 64 * 1024;

/// `/api/*` 用の CORS レイヤーを作成する
///
/// 許可メソッドは GET / POST / OPTIONS、許可ヘッダーは Content-Type のみ。
/// `*` が含まれる場合は全オリジンを許可する。
#[must_use]
pub fn cors_layer(allowed_origins: &[HeaderValue]) -> CorsLayer {
  let allow_origin = if allowed_origins.iter().any(|origin| origin == ANY_ORIGIN) {
    AllowOrigin::any()
  } else {
    AllowOrigin::list(allowed_origins.iter().cloned())
  };

  CorsLayer::new()
    .allow_origin(allow_origin)
    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
    .allow_headers([header::CONTENT_TYPE])
}

/// `POST /api/summarize` のボディサイズ上限（バイト）
///
/// 最大文字数のテキストを最悪のエスケープで送っても収まる大きさ。
/// 超過したボディは文字数超過として扱われる。
#[must_use]
pub fn request_body_limit(bounds: &TextBounds) -> usize {
  bounds
    .max_text_length
    .saturating_mul(MAX_ESCAPED_CHAR_BYTES)
    .saturating_add(BODY_LIMIT_SLACK)
}

/// APIルーターを作成する
///
/// CORS は `/api` 配下にのみ適用する。
/// 要約エンドポイントのボディ上限は [`request_body_limit`] で決まる。
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Returns
/// 設定済みの Router
pub fn create_router(state: AppState) -> Router {
  let body_limit = request_body_limit(&state.config.summarizer.text_bounds);

  let api = Router::new()
    .route("/health", get(health_check))
    .route(
      "/summarize",
      post(post_summarize).layer(DefaultBodyLimit::max(body_limit)),
    )
    .layer(cors_layer(&state.config.allowed_origins));

  Router::new()
    .route("/", get(index))
    .nest("/api", api)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// サーバーを起動する
///
/// # Arguments
/// * `state` - アプリケーション状態
///
/// # Errors
/// サーバーの起動に失敗した場合にエラーを返す
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("バインドに失敗しました: {}", e)))?;

  tracing::info!("サーバーを起動します: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("サーバーエラー: {}", e)))?;

  Ok(())
}
