//! Repository for the `gallery` table.

use hotel_core::types::DbId;
use sqlx::PgPool;

use crate::models::gallery::GalleryImage;

const COLUMNS: &str = "id, image, created_at";

/// Provides create/list/delete operations for gallery images.
pub struct GalleryRepo;

impl GalleryRepo {
    /// Record a stored image, returning the created row.
    pub async fn create(pool: &PgPool, image_path: &str) -> Result<GalleryImage, sqlx::Error> {
        let query = format!("INSERT INTO gallery (image) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(image_path)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GalleryImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery WHERE id = $1");
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all gallery images, newest upload first.
    pub async fn list(pool: &PgPool) -> Result<Vec<GalleryImage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM gallery ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, GalleryImage>(&query).fetch_all(pool).await
    }

    /// Delete a gallery row, returning it so the caller can remove the stored file.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<GalleryImage>, sqlx::Error> {
        let query = format!("DELETE FROM gallery WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, GalleryImage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
