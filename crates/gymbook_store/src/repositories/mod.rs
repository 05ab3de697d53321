//! Repository traits and their JSON document implementations

pub mod reservations;
pub mod reservations_json;
pub mod users;
pub mod users_json;

pub use reservations::{ReservationRepository, StatusChange, SLOT_TAKEN};
pub use reservations_json::JsonReservationRepository;
pub use users::{UserPatch, UserRepository, EMAIL_TAKEN};
pub use users_json::JsonUserRepository;
