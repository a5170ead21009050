//! API設定の定数定義

/// Service name reported by `GET /`
pub const SERVICE_NAME: &str = "Text Summarizer API";

/// Service description reported by `GET /`
pub const SERVICE_DESCRIPTION: &str = "AI-powered text summarization service";

/// Default bind host
///
/// Listens on all interfaces so the frontend dev server can reach it.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port
pub const DEFAULT_PORT: u16 = 5000;

/// Default debug flag
pub const DEFAULT_DEBUG: bool = true;

/// Default CORS origins (comma separated)
///
/// The usual React (3000) and Vite (5173) dev servers.
pub const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";
