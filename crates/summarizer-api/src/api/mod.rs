//! API module

mod handlers;
mod routes;
mod state;

pub use handlers::{health_check, index, post_summarize};
pub use routes::{create_router, cors_layer, run_server};
pub use state::AppState;
