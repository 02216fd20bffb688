//! Repository for the `food` table.

use hotel_core::types::DbId;
use sqlx::PgPool;

use crate::models::food::{CreateFood, Food};

const COLUMNS: &str = "id, name, category, price, image, created_at";

/// Provides create/list/delete operations for food items.
pub struct FoodRepo;

impl FoodRepo {
    /// Insert a new food item, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateFood) -> Result<Food, sqlx::Error> {
        let query = format!(
            "INSERT INTO food (name, category, price, image)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Food>(&query)
            .bind(&input.name)
            .bind(&input.category)
            .bind(input.price)
            .bind(&input.image)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Food>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM food WHERE id = $1");
        sqlx::query_as::<_, Food>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all food items, most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Food>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM food ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Food>(&query).fetch_all(pool).await
    }

    /// Delete a food item, returning it so the caller can remove the stored file.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Food>, sqlx::Error> {
        let query = format!("DELETE FROM food WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Food>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
