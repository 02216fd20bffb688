//! Food menu item model and DTOs.

use hotel_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `food` table. `image` is the stored relative path.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Food {
    pub id: DbId,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub image: String,
    pub created_at: Timestamp,
}

/// DTO for creating a food item. Built from a multipart form after the image is stored.
#[derive(Debug, Clone)]
pub struct CreateFood {
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub image: String,
}
