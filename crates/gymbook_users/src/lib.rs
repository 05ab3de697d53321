// --- File: crates/gymbook_users/src/lib.rs ---
// Declare modules within this crate
pub mod doc;
pub mod handlers;
pub mod routes;
