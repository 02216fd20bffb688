//! Shared query parameter types for API handlers.

use hotel_core::booking::ReservationStatus;
use serde::Deserialize;

use crate::error::AppResult;

/// Query parameters for `GET /reservations/` (`?status=`).
#[derive(Debug, Default, Deserialize)]
pub struct ReservationListParams {
    pub status: Option<String>,
}

impl ReservationListParams {
    /// Parse the status filter case-insensitively. A blank value means no filter.
    pub fn status_filter(&self) -> AppResult<Option<ReservationStatus>> {
        match self.status.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => Ok(Some(raw.parse()?)),
        }
    }
}
