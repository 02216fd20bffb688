//! Booking validation and reservation status.
//!
//! A reservation is accepted when its stay covers at least one night. No
//! availability, overlap or capacity rule is applied: any number of
//! reservations may share the same dates and room type.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize};

use crate::error::CoreError;
use crate::types::Date;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Request field that date-range errors are reported against.
pub const CHECKOUT_FIELD: &str = "checkout";

/// Default party size for a new reservation.
pub const DEFAULT_ADULTS: i32 = 1;

/// Default number of rooms for a new reservation.
pub const DEFAULT_ROOMS: i32 = 1;

// ---------------------------------------------------------------------------
// Date range
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    /// Check-out falls on or before check-in.
    #[error("checkout must be after checkin")]
    InvalidRange { checkin: Date, checkout: Date },
}

impl From<BookingError> for CoreError {
    fn from(err: BookingError) -> Self {
        CoreError::validation(CHECKOUT_FIELD, err.to_string())
    }
}

/// Accept a stay only when `checkout` is strictly after `checkin`.
pub fn validate_stay(checkin: Date, checkout: Date) -> Result<(), BookingError> {
    if checkout <= checkin {
        return Err(BookingError::InvalidRange { checkin, checkout });
    }
    Ok(())
}

/// Number of nights between two dates, or `None` for an invalid range.
pub fn nights(checkin: Date, checkout: Date) -> Option<i64> {
    validate_stay(checkin, checkout).ok()?;
    Some((checkout - checkin).num_days())
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Coarse reservation lifecycle tag.
///
/// Operators may move a reservation between any two statuses; there is no
/// transition guard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    pub const ALL: [ReservationStatus; 3] = [Self::Pending, Self::Confirmed, Self::Cancelled];

    /// The value stored in `reservations.status` and sent over the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Confirmed => "Confirmed",
            Self::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive parse, used by the `?status=` list filter and request bodies.
impl FromStr for ReservationStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                CoreError::validation(
                    "status",
                    format!(
                        "\"{trimmed}\" is not a valid choice. \
                         Must be one of: Pending, Confirmed, Cancelled"
                    ),
                )
            })
    }
}

impl<'de> Deserialize<'de> for ReservationStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<ReservationStatus>().map_err(|e| match e {
            CoreError::Validation { message, .. } => de::Error::custom(message),
            other => de::Error::custom(other),
        })
    }
}

/// Lets `sqlx` decode the `TEXT` status column straight into the enum.
impl TryFrom<String> for ReservationStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    // -- validate_stay -------------------------------------------------------

    #[test]
    fn checkout_after_checkin_accepted() {
        assert!(validate_stay(date("2024-06-10"), date("2024-06-12")).is_ok());
    }

    #[test]
    fn single_night_accepted() {
        assert!(validate_stay(date("2024-06-10"), date("2024-06-11")).is_ok());
    }

    #[test]
    fn checkout_before_checkin_rejected() {
        let err = validate_stay(date("2024-06-10"), date("2024-06-09")).unwrap_err();
        assert_eq!(
            err,
            BookingError::InvalidRange {
                checkin: date("2024-06-10"),
                checkout: date("2024-06-09"),
            }
        );
    }

    #[test]
    fn same_day_rejected() {
        assert!(validate_stay(date("2024-06-10"), date("2024-06-10")).is_err());
    }

    #[test]
    fn range_across_year_boundary_accepted() {
        assert!(validate_stay(date("2024-12-31"), date("2025-01-01")).is_ok());
    }

    #[test]
    fn invalid_range_maps_to_checkout_field() {
        let err: CoreError = validate_stay(date("2024-06-10"), date("2024-06-01"))
            .unwrap_err()
            .into();
        match err {
            CoreError::Validation { field, message } => {
                assert_eq!(field, "checkout");
                assert_eq!(message, "checkout must be after checkin");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    // -- nights --------------------------------------------------------------

    #[test]
    fn nights_counts_days_between_dates() {
        assert_eq!(nights(date("2024-02-27"), date("2024-03-02")), Some(4));
    }

    #[test]
    fn nights_is_none_for_invalid_range() {
        assert_eq!(nights(date("2024-06-10"), date("2024-06-10")), None);
    }

    // -- ReservationStatus ---------------------------------------------------

    #[test]
    fn new_reservations_default_to_pending() {
        assert_eq!(ReservationStatus::default(), ReservationStatus::Pending);
    }

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!(
            "confirmed".parse::<ReservationStatus>().unwrap(),
            ReservationStatus::Confirmed
        );
        assert_eq!(
            "CANCELLED".parse::<ReservationStatus>().unwrap(),
            ReservationStatus::Cancelled
        );
        assert_eq!(
            " Pending ".parse::<ReservationStatus>().unwrap(),
            ReservationStatus::Pending
        );
    }

    #[test]
    fn unknown_status_rejected() {
        let err = "checked-in".parse::<ReservationStatus>().unwrap_err();
        assert!(matches!(err, CoreError::Validation { field: "status", .. }));
    }

    #[test]
    fn status_serializes_as_capitalized_name() {
        let json = serde_json::to_string(&ReservationStatus::Confirmed).unwrap();
        assert_eq!(json, "\"Confirmed\"");
        let back: ReservationStatus = serde_json::from_str("\"Cancelled\"").unwrap();
        assert_eq!(back, ReservationStatus::Cancelled);
    }

    #[test]
    fn status_deserializes_case_insensitively() {
        let status: ReservationStatus = serde_json::from_str("\"confirmed\"").unwrap();
        assert_eq!(status, ReservationStatus::Confirmed);

        let err = serde_json::from_str::<ReservationStatus>("\"archived\"").unwrap_err();
        assert!(err.to_string().contains("is not a valid choice"));
    }

    #[test]
    fn any_status_round_trips_through_storage_string() {
        for status in ReservationStatus::ALL {
            let stored = status.as_str().to_string();
            assert_eq!(ReservationStatus::try_from(stored).unwrap(), status);
        }
    }
}
