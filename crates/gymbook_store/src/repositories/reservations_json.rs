//! JSON document implementation of the reservation repository

use std::sync::Arc;

use gymbook_common::now_timestamp;
use tracing::info;

use crate::client::JsonStore;
use crate::error::StoreError;
use crate::repositories::reservations::{
    Reservation, ReservationRepository, ReservationStatus, StatusChange, SLOT_TAKEN,
};

/// Reservation repository over the `reservations` document of a [`JsonStore`]
#[derive(Debug, Clone)]
pub struct JsonReservationRepository {
    store: Arc<JsonStore>,
}

impl JsonReservationRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }
}

impl ReservationRepository for JsonReservationRepository {
    async fn list(&self) -> Result<Vec<Reservation>, StoreError> {
        let _guard = self.store.lock().await;
        Ok(self.store.load_reservations().await)
    }

    async fn find(&self, id: &str) -> Result<Option<Reservation>, StoreError> {
        let _guard = self.store.lock().await;
        let reservations = self.store.load_reservations().await;
        Ok(reservations.into_iter().find(|r| r.id == id))
    }

    async fn insert(&self, reservation: Reservation) -> Result<Reservation, StoreError> {
        let _guard = self.store.lock().await;
        let mut reservations = self.store.load_reservations().await;

        if reservations
            .iter()
            .any(|r| r.occupies(&reservation.date, &reservation.time_slot))
        {
            return Err(StoreError::UniqueViolation(SLOT_TAKEN.to_string()));
        }

        reservations.push(reservation.clone());
        self.store.save_reservations(&reservations).await?;
        info!(
            "Booked {} {} for user {}",
            reservation.date, reservation.time_slot, reservation.user_id
        );
        Ok(reservation)
    }

    async fn set_status(
        &self,
        id: &str,
        status: ReservationStatus,
    ) -> Result<StatusChange, StoreError> {
        let _guard = self.store.lock().await;
        let mut reservations = self.store.load_reservations().await;

        let reservation = reservations
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound("Reservation not found".to_string()))?;

        if reservation.status == status {
            return Ok(StatusChange {
                reservation: reservation.clone(),
                changed: false,
            });
        }

        reservation.status = status;
        reservation.updated_at = Some(now_timestamp());
        let updated = reservation.clone();

        self.store.save_reservations(&reservations).await?;
        info!("Reservation {} is now {:?}", updated.id, updated.status);
        Ok(StatusChange {
            reservation: updated,
            changed: true,
        })
    }
}
