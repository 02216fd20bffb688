//! Handlers for the `/reservations` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use hotel_core::booking;
use hotel_core::error::CoreError;
use hotel_core::types::DbId;
use hotel_db::models::reservation::{
    CreateReservation, ReplaceReservation, Reservation, UpdateReservation,
};
use hotel_db::repositories::ReservationRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, RequiredFields, ValidJson};
use crate::query::ReservationListParams;
use crate::state::AppState;

const STAY_FIELDS: &[&[&str]] = &[
    &["name"],
    &["email"],
    &["check_in", "checkin"],
    &["check_out", "checkout"],
];

impl RequiredFields for CreateReservation {
    const REQUIRED: &'static [&'static [&'static str]] = STAY_FIELDS;
}

impl RequiredFields for ReplaceReservation {
    const REQUIRED: &'static [&'static [&'static str]] = STAY_FIELDS;
}

impl RequiredFields for UpdateReservation {}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Reservation",
        id,
    })
}

/// GET /api/reservations/
///
/// Newest first. `?status=` filters case-insensitively.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ReservationListParams>,
) -> AppResult<Json<Vec<Reservation>>> {
    let status = params.status_filter()?;
    let reservations = ReservationRepo::list(&state.pool, status).await?;
    Ok(Json(reservations))
}

/// POST /api/reservations/ and POST /api/reservations/create/
///
/// Rejects stays whose check-out is not after check-in; new reservations are
/// always `Pending`.
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateReservation>,
) -> AppResult<(StatusCode, Json<Reservation>)> {
    booking::validate_stay(input.checkin, input.checkout).map_err(CoreError::from)?;

    let reservation = ReservationRepo::create(&state.pool, &input).await?;
    tracing::info!(
        reservation_id = reservation.id,
        checkin = %reservation.checkin,
        checkout = %reservation.checkout,
        "Reservation created"
    );
    Ok((StatusCode::CREATED, Json(reservation)))
}

/// GET /api/reservations/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Reservation>> {
    let reservation = ReservationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(reservation))
}

/// PATCH /api/reservations/{id}/
///
/// Partial update. Status may move between any two values.
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<UpdateReservation>,
) -> AppResult<Json<Reservation>> {
    apply_update(&state, id, input).await.map(Json)
}

/// PUT /api/reservations/{id}/
///
/// Full replacement of the editable fields; omitted optional fields fall
/// back to their create-time defaults and an omitted `status` is kept.
pub async fn replace(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<ReplaceReservation>,
) -> AppResult<Json<Reservation>> {
    apply_update(&state, id, input.into()).await.map(Json)
}

/// DELETE /api/reservations/{id}/
pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<StatusCode> {
    if ReservationRepo::delete(&state.pool, id).await? {
        tracing::info!(reservation_id = id, "Reservation deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

/// Validate the stay the update would produce, then persist it.
async fn apply_update(
    state: &AppState,
    id: DbId,
    input: UpdateReservation,
) -> AppResult<Reservation> {
    let current = ReservationRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if input.changes_stay() {
        let (checkin, checkout) = input.merged_stay(&current);
        booking::validate_stay(checkin, checkout).map_err(CoreError::from)?;
    }

    let updated = ReservationRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    if updated.status != current.status {
        tracing::info!(
            reservation_id = id,
            from = %current.status,
            to = %updated.status,
            "Reservation status changed"
        );
    }
    Ok(updated)
}
