// --- File: crates/gymbook_common/src/models.rs ---

// Domain records shared by the store and the feature crates. Field names are
// camelCase on the wire and in the JSON documents on disk.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Current instant as an RFC 3339 string with millisecond precision and a `Z`
/// suffix, e.g. `2025-05-05T09:30:00.123Z`.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// The role of a registered user.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Trainee,
    Trainer,
}

/// A registered user profile.
///
/// The `id` is the opaque identifier the web client keeps in local storage.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Documents written before roles existed carry no role and read as trainee.
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl User {
    /// Create a new user with both timestamps set to now.
    pub fn new(id: String, name: String, email: String, phone: String, role: Role) -> Self {
        let now = now_timestamp();
        Self {
            id,
            name,
            email,
            phone,
            role,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

/// Lifecycle of a reservation. Cancellation never removes the record.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Active,
    Cancelled,
}

/// A booking of one hourly slot on one date.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    pub user_id: String,
    /// Display name copied from the user at booking time.
    #[serde(default)]
    pub name: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Slot label, `HH:00-HH:00`.
    pub time_slot: String,
    pub created_at: String,
    pub status: ReservationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Reservation {
    /// Create an active reservation stamped with the current time.
    pub fn new(id: String, user: &User, date: String, time_slot: String) -> Self {
        Self {
            id,
            user_id: user.id.clone(),
            name: user.name.clone(),
            date,
            time_slot,
            created_at: now_timestamp(),
            status: ReservationStatus::Active,
            updated_at: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == ReservationStatus::Active
    }

    /// Whether this reservation holds `(date, time_slot)`.
    pub fn occupies(&self, date: &str, time_slot: &str) -> bool {
        self.is_active() && self.date == date && self.time_slot == time_slot
    }
}

/// One hourly bucket, identified by its starting hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot {
    start_hour: u32,
}

/// Error returned when a slot label is not of the form `HH:00-HH:00` with
/// consecutive hours.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time slot: {0}")]
pub struct ParseTimeSlotError(pub String);

impl TimeSlot {
    /// The slot starting at `start_hour`. Returns `None` past 23:00.
    pub fn starting_at(start_hour: u32) -> Option<Self> {
        (start_hour < 24).then_some(Self { start_hour })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.start_hour + 1
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00-{:02}:00", self.start_hour, self.end_hour())
    }
}

impl FromStr for TimeSlot {
    type Err = ParseTimeSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseTimeSlotError(s.to_string());

        let (start, end) = s.split_once('-').ok_or_else(invalid)?;
        let parse_hour = |part: &str| -> Option<u32> {
            let hour = part.strip_suffix(":00")?;
            if hour.len() != 2 || !hour.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            hour.parse().ok()
        };

        let start_hour = parse_hour(start).ok_or_else(invalid)?;
        let end_hour = parse_hour(end).ok_or_else(invalid)?;
        if end_hour != start_hour + 1 {
            return Err(invalid());
        }
        TimeSlot::starting_at(start_hour).ok_or_else(invalid)
    }
}
