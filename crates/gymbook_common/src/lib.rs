// --- File: crates/gymbook_common/src/lib.rs ---

// Declare modules within this crate
pub mod error; // Error handling
pub mod handlers; // Health check
pub mod http; // Error to response mapping
pub mod logging; // Subscriber setup
pub mod models; // Shared domain records
pub mod routes; // Root level routes

// Re-export the routes function to be used by the main backend service
pub use routes::routes;

// Re-export error types and utilities for easier access
pub use error::{
    conflict, forbidden, internal_error, not_found, unavailable, validation_error, Context,
    GymbookError, HttpStatusCode,
};

pub use http::IntoHttpResponse;

pub use models::{now_timestamp, Reservation, ReservationStatus, Role, TimeSlot, User};
