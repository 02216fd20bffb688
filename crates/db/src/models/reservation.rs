//! Reservation entity model and DTOs.
//!
//! The wire format names the stay dates `check_in` / `check_out` and the
//! free-text note `message`; the bare column names are accepted as aliases
//! on input.

use hotel_core::booking::{ReservationStatus, DEFAULT_ADULTS, DEFAULT_ROOMS};
use hotel_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A reservation row from the `reservations` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reservation {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub adults: i32,
    pub children: i32,
    #[serde(rename = "check_in")]
    pub checkin: Date,
    #[serde(rename = "check_out")]
    pub checkout: Date,
    pub room_type: String,
    pub rooms: i32,
    #[serde(rename = "message")]
    pub notes: String,
    #[sqlx(try_from = "String")]
    pub status: ReservationStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

fn default_adults() -> i32 {
    DEFAULT_ADULTS
}

fn default_rooms() -> i32 {
    DEFAULT_ROOMS
}

/// DTO for a guest-submitted reservation.
///
/// There is no `status` field: every new reservation starts as Pending.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReservation {
    #[validate(length(min = 1, max = 200, message = "Ensure this field is not blank and has at most 200 characters."))]
    pub name: String,
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 20, message = "Ensure this field has at most 20 characters."))]
    pub phone: String,
    #[serde(default = "default_adults")]
    #[validate(range(min = 0, message = "Ensure this value is greater than or equal to 0."))]
    pub adults: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "Ensure this value is greater than or equal to 0."))]
    pub children: i32,
    #[serde(rename = "check_in", alias = "checkin")]
    pub checkin: Date,
    #[serde(rename = "check_out", alias = "checkout")]
    pub checkout: Date,
    #[serde(default)]
    #[validate(length(max = 100, message = "Ensure this field has at most 100 characters."))]
    pub room_type: String,
    #[serde(default = "default_rooms")]
    #[validate(range(min = 1, message = "Ensure this value is greater than or equal to 1."))]
    pub rooms: i32,
    #[serde(default, rename = "message", alias = "notes")]
    pub notes: String,
}

/// DTO for a full replacement (`PUT`). Same fields as a create, plus `status`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ReplaceReservation {
    #[validate(length(min = 1, max = 200, message = "Ensure this field is not blank and has at most 200 characters."))]
    pub name: String,
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 20, message = "Ensure this field has at most 20 characters."))]
    pub phone: String,
    #[serde(default = "default_adults")]
    #[validate(range(min = 0, message = "Ensure this value is greater than or equal to 0."))]
    pub adults: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "Ensure this value is greater than or equal to 0."))]
    pub children: i32,
    #[serde(rename = "check_in", alias = "checkin")]
    pub checkin: Date,
    #[serde(rename = "check_out", alias = "checkout")]
    pub checkout: Date,
    #[serde(default)]
    #[validate(length(max = 100, message = "Ensure this field has at most 100 characters."))]
    pub room_type: String,
    #[serde(default = "default_rooms")]
    #[validate(range(min = 1, message = "Ensure this value is greater than or equal to 1."))]
    pub rooms: i32,
    #[serde(default, rename = "message", alias = "notes")]
    pub notes: String,
    pub status: Option<ReservationStatus>,
}

/// DTO for updating an existing reservation (`PATCH`). All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateReservation {
    #[validate(length(min = 1, max = 200, message = "Ensure this field is not blank and has at most 200 characters."))]
    pub name: Option<String>,
    #[validate(email(message = "Enter a valid email address."))]
    pub email: Option<String>,
    #[validate(length(max = 20, message = "Ensure this field has at most 20 characters."))]
    pub phone: Option<String>,
    #[validate(range(min = 0, message = "Ensure this value is greater than or equal to 0."))]
    pub adults: Option<i32>,
    #[validate(range(min = 0, message = "Ensure this value is greater than or equal to 0."))]
    pub children: Option<i32>,
    #[serde(rename = "check_in", alias = "checkin")]
    pub checkin: Option<Date>,
    #[serde(rename = "check_out", alias = "checkout")]
    pub checkout: Option<Date>,
    #[validate(length(max = 100, message = "Ensure this field has at most 100 characters."))]
    pub room_type: Option<String>,
    #[validate(range(min = 1, message = "Ensure this value is greater than or equal to 1."))]
    pub rooms: Option<i32>,
    #[serde(rename = "message", alias = "notes")]
    pub notes: Option<String>,
    pub status: Option<ReservationStatus>,
}

impl From<ReplaceReservation> for UpdateReservation {
    fn from(r: ReplaceReservation) -> Self {
        Self {
            name: Some(r.name),
            email: Some(r.email),
            phone: Some(r.phone),
            adults: Some(r.adults),
            children: Some(r.children),
            checkin: Some(r.checkin),
            checkout: Some(r.checkout),
            room_type: Some(r.room_type),
            rooms: Some(r.rooms),
            notes: Some(r.notes),
            status: r.status,
        }
    }
}

impl UpdateReservation {
    /// The stay dates this update would leave on `current`.
    pub fn merged_stay(&self, current: &Reservation) -> (Date, Date) {
        (
            self.checkin.unwrap_or(current.checkin),
            self.checkout.unwrap_or(current.checkout),
        )
    }

    /// Whether the update touches either stay date.
    pub fn changes_stay(&self) -> bool {
        self.checkin.is_some() || self.checkout.is_some()
    }
}
