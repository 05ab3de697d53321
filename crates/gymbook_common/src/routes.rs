// --- File: crates/gymbook_common/src/routes.rs ---

use axum::{routing::get, Router};

use crate::handlers::health_handler;

/// Routes mounted at the server root, outside `/api`.
pub fn routes() -> Router {
    Router::new().route("/health", get(health_handler))
}
