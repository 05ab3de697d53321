// --- File: crates/gymbook_users/src/routes.rs ---

use crate::handlers::{create_user_handler, get_user_handler, update_user_handler, UsersState};
use axum::{
    routing::{get, post},
    Router,
};
use gymbook_config::AppConfig;
use gymbook_store::{JsonRepositoryFactory, JsonStore, RepositoryFactory};
use std::sync::Arc;

/// Creates a router containing all routes for the user feature.
/// Paths are relative to `/api`.
pub fn routes(config: Arc<AppConfig>, store: Arc<JsonStore>) -> Router {
    let users_state = Arc::new(UsersState {
        config,
        users: JsonRepositoryFactory::new().create_repository(store),
    });

    Router::new()
        .route("/users", post(create_user_handler))
        .route("/users/{id}", get(get_user_handler).put(update_user_handler))
        .with_state(users_state)
}
