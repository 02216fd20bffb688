//! Repository for the `rooms` and `room_images` tables.

use hotel_core::types::DbId;
use sqlx::PgPool;

use crate::models::room::{CreateRoom, Room, RoomImage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, room_name, description, price, capacity, created_at, updated_at";

/// Column list for `room_images`.
const IMAGE_COLUMNS: &str = "id, room_id, image, created_at";

/// Provides CRUD operations for rooms and their owned images.
pub struct RoomRepo;

impl RoomRepo {
    /// Insert a room together with its image rows in a single transaction.
    ///
    /// `image_paths` are stored relative paths, kept in the given order.
    pub async fn create_with_images(
        pool: &PgPool,
        input: &CreateRoom,
        image_paths: &[String],
    ) -> Result<(Room, Vec<RoomImage>), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO rooms (room_name, description, price, capacity)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let room = sqlx::query_as::<_, Room>(&query)
            .bind(&input.room_name)
            .bind(&input.description)
            .bind(input.price)
            .bind(input.capacity)
            .fetch_one(&mut *tx)
            .await?;

        let image_query = format!(
            "INSERT INTO room_images (room_id, image) VALUES ($1, $2) RETURNING {IMAGE_COLUMNS}"
        );
        let mut images = Vec::with_capacity(image_paths.len());
        for path in image_paths {
            let image = sqlx::query_as::<_, RoomImage>(&image_query)
                .bind(room.id)
                .bind(path)
                .fetch_one(&mut *tx)
                .await?;
            images.push(image);
        }

        tx.commit().await?;
        Ok((room, images))
    }

    /// Find a room by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE id = $1");
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all rooms ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Room>(&query).fetch_all(pool).await
    }

    /// List the images of one room in upload order.
    pub async fn list_images(pool: &PgPool, room_id: DbId) -> Result<Vec<RoomImage>, sqlx::Error> {
        let query =
            format!("SELECT {IMAGE_COLUMNS} FROM room_images WHERE room_id = $1 ORDER BY id");
        sqlx::query_as::<_, RoomImage>(&query)
            .bind(room_id)
            .fetch_all(pool)
            .await
    }

    /// List the images of several rooms at once, grouped by room then upload order.
    pub async fn list_images_for_rooms(
        pool: &PgPool,
        room_ids: &[DbId],
    ) -> Result<Vec<RoomImage>, sqlx::Error> {
        let query = format!(
            "SELECT {IMAGE_COLUMNS} FROM room_images
             WHERE room_id = ANY($1)
             ORDER BY room_id, id"
        );
        sqlx::query_as::<_, RoomImage>(&query)
            .bind(room_ids)
            .fetch_all(pool)
            .await
    }

    /// Delete a room; its images are removed by `ON DELETE CASCADE`.
    ///
    /// Returns the stored paths of the removed images so the caller can clean
    /// up files, or `None` if no room with the given `id` exists.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Vec<String>>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let paths: Vec<String> =
            sqlx::query_scalar("SELECT image FROM room_images WHERE room_id = $1 ORDER BY id")
                .bind(id)
                .fetch_all(&mut *tx)
                .await?;

        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        if result.rows_affected() > 0 {
            Ok(Some(paths))
        } else {
            Ok(None)
        }
    }
}
