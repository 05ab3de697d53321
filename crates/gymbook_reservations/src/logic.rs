// --- File: crates/gymbook_reservations/src/logic.rs ---

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use gymbook_common::{Reservation, TimeSlot};
use serde::{Deserialize, Serialize};

// --- Request / Response types ---

/// Query string shared by the listing and cancel endpoints.
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub user_id: Option<String>,
}

impl UserQuery {
    /// The user id, treating `?userId=` as absent.
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref().filter(|id| !id.is_empty())
    }
}

/// State of one slot on the requested day.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotAvailability {
    pub slot: String,
    pub available: bool,
    pub reservation_id: Option<String>,
    pub is_my_reservation: bool,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotsResponse {
    pub time_slots: Vec<SlotAvailability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Booking form. Fields are optional here so that a missing one yields a
/// readable 400 instead of a body rejection.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateReservationRequest {
    pub user_id: Option<String>,
    pub date: Option<String>,
    pub time_slot: Option<String>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize)]
pub struct ReservationsResponse {
    pub reservations: Vec<Reservation>,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Serialize)]
pub struct CancellationResponse {
    pub message: String,
    pub reservation: Reservation,
}

// --- Rules ---

/// Hourly slots covering `[open_hour, close_hour)`.
///
/// An empty range (or one starting past 23:00) yields no slots.
pub fn generate_time_slots(open_hour: u32, close_hour: u32) -> Vec<TimeSlot> {
    (open_hour..close_hour.min(24))
        .filter_map(TimeSlot::starting_at)
        .collect()
}

/// Parse a strict `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Whether `label` names one of the bookable slots.
pub fn is_bookable_slot(label: &str, open_hour: u32, close_hour: u32) -> bool {
    label
        .parse::<TimeSlot>()
        .map(|slot| slot.start_hour() >= open_hour && slot.end_hour() <= close_hour)
        .unwrap_or(false)
}

/// The current calendar date in `tz`.
pub fn today_in(tz: Tz) -> NaiveDate {
    Utc::now().with_timezone(&tz).date_naive()
}

pub fn is_past(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

/// Bookings and cancellations close at 23:59:59 on the day before `date`.
pub fn deadline_passed(date: NaiveDate, today: NaiveDate) -> bool {
    today >= date
}

/// Availability of every slot on `date`.
///
/// A slot is taken iff an active reservation holds it. `is_my_reservation`
/// is only ever true when `user_id` is given.
pub fn compute_availability(
    slots: &[TimeSlot],
    reservations: &[Reservation],
    date: &str,
    user_id: Option<&str>,
) -> Vec<SlotAvailability> {
    slots
        .iter()
        .map(|slot| {
            let label = slot.to_string();
            let holder = reservations.iter().find(|r| r.occupies(date, &label));
            SlotAvailability {
                available: holder.is_none(),
                reservation_id: holder.map(|r| r.id.clone()),
                is_my_reservation: matches!(
                    (holder, user_id),
                    (Some(r), Some(uid)) if r.user_id == uid
                ),
                slot: label,
            }
        })
        .collect()
}

/// Active reservations in document order, optionally only those of `user_id`.
pub fn active_reservations(
    reservations: Vec<Reservation>,
    user_id: Option<&str>,
) -> Vec<Reservation> {
    reservations
        .into_iter()
        .filter(|r| r.is_active())
        .filter(|r| user_id.map_or(true, |uid| r.user_id == uid))
        .collect()
}
