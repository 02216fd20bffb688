//! Room and room image models and DTOs.

use hotel_core::types::{DbId, Timestamp};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// A room row from the `rooms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Room {
    pub id: DbId,
    pub room_name: String,
    pub description: String,
    pub price: Decimal,
    pub capacity: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An image row from the `room_images` table. `image` is the stored relative path.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RoomImage {
    pub id: DbId,
    pub room_id: DbId,
    pub image: String,
    pub created_at: Timestamp,
}

/// DTO for creating a room. Built from a multipart form, never deserialized directly.
#[derive(Debug, Clone)]
pub struct CreateRoom {
    pub room_name: String,
    pub description: String,
    pub price: Decimal,
    pub capacity: i32,
}

impl Default for CreateRoom {
    fn default() -> Self {
        Self {
            room_name: String::new(),
            description: String::new(),
            price: Decimal::ZERO,
            capacity: 1,
        }
    }
}
