//! Staff entity model and DTOs.

use hotel_core::types::{Date, DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full staff row from the `staff` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`StaffResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Staff {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub entry_date: Date,
    pub resign_date: Option<Date>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe staff representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct StaffResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub entry_date: Date,
    pub resign_date: Option<Date>,
}

impl From<Staff> for StaffResponse {
    fn from(staff: Staff) -> Self {
        Self {
            id: staff.id,
            username: staff.username,
            email: staff.email,
            phone: staff.phone,
            address: staff.address,
            entry_date: staff.entry_date,
            resign_date: staff.resign_date,
        }
    }
}

/// DTO for creating a staff member. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateStaff {
    pub username: String,
    pub password_hash: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// DTO for updating a staff member. All fields are optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateStaff {
    pub username: Option<String>,
    pub password_hash: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub resign_date: Option<Date>,
}
