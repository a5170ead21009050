//! summarizer-api サーバーエントリーポイント

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use summarizer::SummarizerService;
use summarizer::inference::HuggingFaceProvider;
use summarizer_api::ApiError;
use summarizer_api::api::AppState;
use summarizer_api::api::run_server;
use summarizer_api::config::Config;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // 設定の読み込み（推論プロバイダー初期化より前に一度だけ）
  let config = Config::from_env()?;

  // ロギングの初期化（RUST_LOG 優先、なければ DEBUG フラグに従う）
  let default_level = if config.debug { "debug" } else { "info" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::registry().with(filter).with(tracing_subscriber::fmt::layer()).init();

  tracing::info!(
    model = %config.summarizer.model_name,
    endpoint = %config.inference.endpoint,
    debug = config.debug,
    "設定を読み込みました"
  );

  // 推論プロバイダーとサービスの初期化
  let provider =
    HuggingFaceProvider::new(&config.inference).map_err(|e| ApiError::config(e.to_string()))?;
  let service = Arc::new(SummarizerService::new(config.summarizer.clone(), Arc::new(provider))?);
  tracing::info!(model = service.model_name(), "要約サービスを初期化しました");

  // アプリケーション状態の作成
  let state = AppState::new(config, service);

  // サーバー起動
  run_server(state).await
}
