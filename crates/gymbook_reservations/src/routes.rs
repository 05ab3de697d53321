// --- File: crates/gymbook_reservations/src/routes.rs ---

use crate::handlers::{
    cancel_reservation_handler, create_reservation_handler, get_time_slots_handler,
    list_reservations_handler, ReservationsState,
};
use axum::{
    routing::{delete, get},
    Router,
};
use gymbook_config::AppConfig;
use gymbook_store::{JsonRepositoryFactory, JsonStore, RepositoryFactory};
use std::sync::Arc;

/// Creates a router containing all routes for the reservation feature.
/// Paths are relative to `/api`.
pub fn routes(config: Arc<AppConfig>, store: Arc<JsonStore>) -> Router {
    let factory = JsonRepositoryFactory::new();
    let reservations_state = Arc::new(ReservationsState {
        config,
        users: factory.create_repository(store.clone()),
        reservations: factory.create_repository(store),
    });

    Router::new()
        .route("/time-slots/{date}", get(get_time_slots_handler))
        .route(
            "/reservations",
            get(list_reservations_handler).post(create_reservation_handler),
        )
        .route("/reservations/{id}", delete(cancel_reservation_handler))
        .with_state(reservations_state)
}
