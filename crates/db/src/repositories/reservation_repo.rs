//! Repository for the `reservations` table.

use hotel_core::booking::ReservationStatus;
use hotel_core::types::DbId;
use sqlx::PgPool;

use crate::models::reservation::{CreateReservation, Reservation, UpdateReservation};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone, adults, children, checkin, checkout, \
                       room_type, rooms, notes, status, created_at, updated_at";

/// Provides CRUD operations for reservations.
pub struct ReservationRepo;

impl ReservationRepo {
    /// Insert a new reservation in `Pending` status, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateReservation,
    ) -> Result<Reservation, sqlx::Error> {
        let query = format!(
            "INSERT INTO reservations
                (name, email, phone, adults, children, checkin, checkout,
                 room_type, rooms, notes, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.adults)
            .bind(input.children)
            .bind(input.checkin)
            .bind(input.checkout)
            .bind(&input.room_type)
            .bind(input.rooms)
            .bind(&input.notes)
            .bind(ReservationStatus::Pending.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find a reservation by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reservations WHERE id = $1");
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List reservations, most recently created first, optionally filtered by status.
    pub async fn list(
        pool: &PgPool,
        status: Option<ReservationStatus>,
    ) -> Result<Vec<Reservation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reservations
             WHERE ($1::TEXT IS NULL OR status = $1)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(status.map(ReservationStatus::as_str))
            .fetch_all(pool)
            .await
    }

    /// Update a reservation. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReservation,
    ) -> Result<Option<Reservation>, sqlx::Error> {
        let query = format!(
            "UPDATE reservations SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                adults = COALESCE($5, adults),
                children = COALESCE($6, children),
                checkin = COALESCE($7, checkin),
                checkout = COALESCE($8, checkout),
                room_type = COALESCE($9, room_type),
                rooms = COALESCE($10, rooms),
                notes = COALESCE($11, notes),
                status = COALESCE($12, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reservation>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(input.adults)
            .bind(input.children)
            .bind(input.checkin)
            .bind(input.checkout)
            .bind(&input.room_type)
            .bind(input.rooms)
            .bind(&input.notes)
            .bind(input.status.map(ReservationStatus::as_str))
            .fetch_optional(pool)
            .await
    }

    /// Delete a reservation by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
