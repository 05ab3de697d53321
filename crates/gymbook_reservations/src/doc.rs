// File: crates/gymbook_reservations/src/doc.rs

#![cfg(feature = "openapi")]
use gymbook_common::{Reservation, ReservationStatus};
use utoipa::OpenApi;

use crate::logic::{
    CancellationResponse, CreateReservationRequest, ReservationsResponse, SlotAvailability,
    TimeSlotsResponse, UserQuery,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::get_time_slots_handler,
        crate::handlers::create_reservation_handler,
        crate::handlers::list_reservations_handler,
        crate::handlers::cancel_reservation_handler
    ),
    components(
        schemas(
            Reservation,
            ReservationStatus,
            UserQuery,
            SlotAvailability,
            TimeSlotsResponse,
            CreateReservationRequest,
            ReservationsResponse,
            CancellationResponse
        )
    ),
    tags(
        (name = "Reservations", description = "Time slot booking API")
    ),
    servers(
        (url = "/api", description = "Gymbook API server")
    )
)]
pub struct ReservationsApiDoc;
