//! Gallery image model.

use hotel_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `gallery` table. `image` is the stored relative path.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GalleryImage {
    pub id: DbId,
    pub image: String,
    #[serde(rename = "uploaded_at")]
    pub created_at: Timestamp,
}
