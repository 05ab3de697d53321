//! Repository for reservations

use crate::error::StoreError;

pub use gymbook_common::models::{Reservation, ReservationStatus};

/// Message used when an active reservation already holds the slot.
pub const SLOT_TAKEN: &str = "This time slot is already booked";

/// Outcome of a status change.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusChange {
    /// The reservation as stored after the call
    pub reservation: Reservation,
    /// `false` when the reservation already had the requested status
    pub changed: bool,
}

/// Storage operations on reservations.
///
/// At most one active reservation exists per `(date, timeSlot)`. Cancelled
/// records stay in the document and never block a slot.
pub trait ReservationRepository {
    /// All reservations in document order, including cancelled ones
    fn list(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Reservation>, StoreError>> + Send;

    /// Look a reservation up by id
    fn find(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Option<Reservation>, StoreError>> + Send;

    /// Append a new reservation
    ///
    /// The slot check and the write happen under the store lock, so two
    /// concurrent bookings of the same slot cannot both succeed. Fails with
    /// [`StoreError::UniqueViolation`] when the slot is held.
    fn insert(
        &self,
        reservation: Reservation,
    ) -> impl std::future::Future<Output = Result<Reservation, StoreError>> + Send;

    /// Set the status of a reservation and stamp `updatedAt`
    ///
    /// Setting the status it already has leaves the record untouched.
    fn set_status(
        &self,
        id: &str,
        status: ReservationStatus,
    ) -> impl std::future::Future<Output = Result<StatusChange, StoreError>> + Send;
}
