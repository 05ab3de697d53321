// File: crates/gymbook_reservations/src/handlers.rs
use crate::logic::{
    active_reservations, compute_availability, deadline_passed, generate_time_slots,
    is_bookable_slot, is_past, parse_date, today_in, CancellationResponse,
    CreateReservationRequest, ReservationsResponse, TimeSlotsResponse, UserQuery,
};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::NaiveDate;
use gymbook_common::{
    forbidden, not_found, unavailable, validation_error, GymbookError, Reservation,
    ReservationStatus, Role,
};
use gymbook_config::AppConfig;
use gymbook_store::{
    new_id, JsonReservationRepository, JsonUserRepository, ReservationRepository,
    UserRepository,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const PAST_DATE: &str = "Past dates cannot be booked";

// Shared state needed by the reservation handlers
#[derive(Clone)]
pub struct ReservationsState {
    pub config: Arc<AppConfig>,
    pub users: JsonUserRepository,
    pub reservations: JsonReservationRepository,
}

impl ReservationsState {
    fn ensure_enabled(&self) -> Result<(), GymbookError> {
        if self.config.use_reservations {
            Ok(())
        } else {
            Err(unavailable("Reservation service is disabled."))
        }
    }

    fn today(&self) -> NaiveDate {
        today_in(self.config.booking.tz())
    }
}

fn require_date(value: &str) -> Result<NaiveDate, GymbookError> {
    parse_date(value).ok_or_else(|| validation_error("Invalid date format (YYYY-MM-DD)"))
}

fn required(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Handler to list every slot of a day with its availability.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/time-slots/{date}",
    params(
        ("date" = String, Path, description = "Day in YYYY-MM-DD format", example = "2030-01-15", format = "date"),
        UserQuery
    ),
    responses(
        (status = 200, description = "Slots of the day, empty for past dates", body = TimeSlotsResponse),
        (status = 400, description = "Invalid date format")
    ),
    tag = "Reservations"
))]
pub async fn get_time_slots_handler(
    State(state): State<Arc<ReservationsState>>,
    Path(date): Path<String>,
    Query(query): Query<UserQuery>,
) -> Result<Json<TimeSlotsResponse>, GymbookError> {
    state.ensure_enabled()?;
    let day = require_date(&date)?;

    if is_past(day, state.today()) {
        debug!("Time slots requested for past date {}", date);
        return Ok(Json(TimeSlotsResponse {
            time_slots: Vec::new(),
            message: Some(PAST_DATE.to_string()),
        }));
    }

    let booking = &state.config.booking;
    let slots = generate_time_slots(booking.open_hour, booking.close_hour);
    let reservations = state.reservations.list().await?;

    Ok(Json(TimeSlotsResponse {
        time_slots: compute_availability(&slots, &reservations, &date, query.user_id()),
        message: None,
    }))
}

/// Handler to book a slot.
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/reservations",
    request_body(content = CreateReservationRequest, example = json!({
        "userId": "5f0c6a1e-2b7d-4a43-9a55-0c1f3c1d2e4b",
        "date": "2030-01-15",
        "timeSlot": "10:00-11:00"
    })),
    responses(
        (status = 201, description = "Reservation created", body = Reservation),
        (status = 400, description = "Missing field, invalid date or slot, past date or deadline passed"),
        (status = 404, description = "Unknown user"),
        (status = 409, description = "Slot already booked")
    ),
    tag = "Reservations"
))]
pub async fn create_reservation_handler(
    State(state): State<Arc<ReservationsState>>,
    payload: Result<Json<CreateReservationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Reservation>), GymbookError> {
    state.ensure_enabled()?;
    let Json(request) = payload?;

    let (Some(user_id), Some(date), Some(time_slot)) = (
        required(request.user_id),
        required(request.date),
        required(request.time_slot),
    ) else {
        warn!("Rejected reservation with missing fields");
        return Err(validation_error("userId, date and timeSlot are required"));
    };

    let day = require_date(&date)?;
    let booking = &state.config.booking;
    if !is_bookable_slot(&time_slot, booking.open_hour, booking.close_hour) {
        return Err(validation_error("Invalid time slot"));
    }

    let user = state
        .users
        .find(&user_id)
        .await?
        .ok_or_else(|| not_found("User not found"))?;

    let today = state.today();
    if is_past(day, today) {
        return Err(validation_error(PAST_DATE));
    }
    if booking.enforce_deadline && deadline_passed(day, today) {
        warn!("Booking deadline passed for {} {}", date, time_slot);
        return Err(validation_error(
            "Reservations must be made by 23:59 of the previous day",
        ));
    }

    let reservation = Reservation::new(new_id(), &user, date, time_slot);
    let reservation = state.reservations.insert(reservation).await?;
    info!("Created reservation {}", reservation.id);

    Ok((StatusCode::CREATED, Json(reservation)))
}

/// Handler to list active reservations, optionally for one user.
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/reservations",
    params(UserQuery),
    responses((status = 200, description = "Active reservations", body = ReservationsResponse)),
    tag = "Reservations"
))]
pub async fn list_reservations_handler(
    State(state): State<Arc<ReservationsState>>,
    Query(query): Query<UserQuery>,
) -> Result<Json<ReservationsResponse>, GymbookError> {
    state.ensure_enabled()?;

    let reservations = state.reservations.list().await?;
    Ok(Json(ReservationsResponse {
        reservations: active_reservations(reservations, query.user_id()),
    }))
}

/// Handler to cancel a reservation. The record is kept with status `cancelled`.
#[cfg_attr(feature = "openapi", utoipa::path(
    delete,
    path = "/reservations/{id}",
    params(
        ("id" = String, Path, description = "Reservation id"),
        UserQuery
    ),
    responses(
        (status = 200, description = "Reservation cancelled or already cancelled", body = CancellationResponse),
        (status = 400, description = "Cancellation deadline passed"),
        (status = 403, description = "Reservation belongs to another user"),
        (status = 404, description = "Unknown reservation")
    ),
    tag = "Reservations"
))]
pub async fn cancel_reservation_handler(
    State(state): State<Arc<ReservationsState>>,
    Path(id): Path<String>,
    Query(query): Query<UserQuery>,
) -> Result<Json<CancellationResponse>, GymbookError> {
    state.ensure_enabled()?;

    let reservation = state
        .reservations
        .find(&id)
        .await?
        .ok_or_else(|| not_found("Reservation not found"))?;

    if let Some(user_id) = query.user_id() {
        if user_id != reservation.user_id {
            let is_trainer = state
                .users
                .find(user_id)
                .await?
                .is_some_and(|u| u.role == Role::Trainer);
            if !is_trainer {
                warn!("User {} may not cancel reservation {}", user_id, id);
                return Err(forbidden("You can only cancel your own reservations"));
            }
        }
    }

    if state.config.booking.enforce_deadline {
        let passed = parse_date(&reservation.date)
            .map(|day| deadline_passed(day, state.today()))
            .unwrap_or(false);
        if passed {
            return Err(validation_error(
                "Reservations can only be cancelled until 23:59 of the previous day",
            ));
        }
    }

    let change = state
        .reservations
        .set_status(&id, ReservationStatus::Cancelled)
        .await?;

    let message = if change.changed {
        info!("Cancelled reservation {}", id);
        "Reservation cancelled"
    } else {
        "Reservation was already cancelled"
    };

    Ok(Json(CancellationResponse {
        message: message.to_string(),
        reservation: change.reservation,
    }))
}
