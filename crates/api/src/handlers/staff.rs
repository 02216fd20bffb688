//! Handlers for the `/staff` resource.
//!
//! Passwords are accepted on write, stored as Argon2id hashes and never
//! returned. Responses use [`StaffResponse`].

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use hotel_core::error::CoreError;
use hotel_core::types::{Date, DbId};
use hotel_db::models::staff::{CreateStaff, StaffResponse, UpdateStaff};
use hotel_db::repositories::StaffRepo;
use serde::Deserialize;
use validator::{Validate, ValidateEmail, ValidationError};

use crate::auth::password::hash_new_password;
use crate::error::{AppError, AppResult};
use crate::extract::{IdPath, RequiredFields, ValidJson};
use crate::state::AppState;

const DUPLICATE_USERNAME: &str = "staff with this username already exists.";

/// Email is optional; when given it must be well formed.
fn blank_or_email(email: &String) -> Result<(), ValidationError> {
    if email.is_empty() || email.validate_email() {
        Ok(())
    } else {
        Err(ValidationError::new("email").with_message("Enter a valid email address.".into()))
    }
}

/// Body of `POST /staff/`.
#[derive(Debug, Deserialize, Validate)]
pub struct StaffRequest {
    #[validate(length(min = 1, max = 150, message = "Ensure this field is not blank and has at most 150 characters."))]
    pub username: String,
    pub password: String,
    #[serde(default)]
    #[validate(
        custom(function = "blank_or_email"),
        length(max = 254, message = "Ensure this field has at most 254 characters.")
    )]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 30, message = "Ensure this field has at most 30 characters."))]
    pub phone: String,
    #[serde(default)]
    pub address: String,
}

/// Body of `PUT /staff/{id}/`: the create fields plus an optional resign date.
#[derive(Debug, Deserialize, Validate)]
pub struct StaffReplace {
    #[validate(length(min = 1, max = 150, message = "Ensure this field is not blank and has at most 150 characters."))]
    pub username: String,
    pub password: String,
    #[serde(default)]
    #[validate(
        custom(function = "blank_or_email"),
        length(max = 254, message = "Ensure this field has at most 254 characters.")
    )]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 30, message = "Ensure this field has at most 30 characters."))]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    pub resign_date: Option<Date>,
}

/// Body of `PATCH /staff/{id}/`. Absent fields are left unchanged.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct StaffPatch {
    #[validate(length(min = 1, max = 150, message = "Ensure this field is not blank and has at most 150 characters."))]
    pub username: Option<String>,
    pub password: Option<String>,
    #[validate(
        custom(function = "blank_or_email"),
        length(max = 254, message = "Ensure this field has at most 254 characters.")
    )]
    pub email: Option<String>,
    #[validate(length(max = 30, message = "Ensure this field has at most 30 characters."))]
    pub phone: Option<String>,
    pub address: Option<String>,
    pub resign_date: Option<Date>,
}

const CREDENTIALS: &[&[&str]] = &[&["username"], &["password"]];

impl RequiredFields for StaffRequest {
    const REQUIRED: &'static [&'static [&'static str]] = CREDENTIALS;
}

impl RequiredFields for StaffReplace {
    const REQUIRED: &'static [&'static [&'static str]] = CREDENTIALS;
}

impl RequiredFields for StaffPatch {}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Staff",
        id,
    })
}

/// Reject `username` if another staff member already holds it.
async fn ensure_username_free(
    state: &AppState,
    username: &str,
    current_id: Option<DbId>,
) -> AppResult<()> {
    match StaffRepo::find_by_username(&state.pool, username).await? {
        Some(existing) if Some(existing.id) != current_id => {
            Err(AppError::field("username", DUPLICATE_USERNAME))
        }
        _ => Ok(()),
    }
}

/// GET /api/staff/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<StaffResponse>>> {
    let staff = StaffRepo::list(&state.pool).await?;
    Ok(Json(staff.into_iter().map(StaffResponse::from).collect()))
}

/// POST /api/staff/
pub async fn create(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<StaffRequest>,
) -> AppResult<(StatusCode, Json<StaffResponse>)> {
    ensure_username_free(&state, &input.username, None).await?;
    let password_hash = hash_new_password(&input.password)?;

    let create = CreateStaff {
        username: input.username,
        password_hash,
        email: input.email,
        phone: input.phone,
        address: input.address,
    };
    let staff = StaffRepo::create(&state.pool, &create).await?;

    tracing::info!(staff_id = staff.id, username = %staff.username, "Staff member created");
    Ok((StatusCode::CREATED, Json(staff.into())))
}

/// GET /api/staff/{id}/
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<StaffResponse>> {
    let staff = StaffRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(staff.into()))
}

/// PATCH /api/staff/{id}/
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<StaffPatch>,
) -> AppResult<Json<StaffResponse>> {
    if let Some(username) = &input.username {
        ensure_username_free(&state, username, Some(id)).await?;
    }
    let password_hash = input
        .password
        .as_deref()
        .map(hash_new_password)
        .transpose()?;

    let update = UpdateStaff {
        username: input.username,
        password_hash,
        email: input.email,
        phone: input.phone,
        address: input.address,
        resign_date: input.resign_date,
    };
    apply_update(&state, id, &update).await.map(Json)
}

/// PUT /api/staff/{id}/
pub async fn replace(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidJson(input): ValidJson<StaffReplace>,
) -> AppResult<Json<StaffResponse>> {
    ensure_username_free(&state, &input.username, Some(id)).await?;
    let password_hash = hash_new_password(&input.password)?;

    let update = UpdateStaff {
        username: Some(input.username),
        password_hash: Some(password_hash),
        email: Some(input.email),
        phone: Some(input.phone),
        address: Some(input.address),
        resign_date: input.resign_date,
    };
    apply_update(&state, id, &update).await.map(Json)
}

/// DELETE /api/staff/{id}/
pub async fn delete(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<StatusCode> {
    if StaffRepo::delete(&state.pool, id).await? {
        tracing::info!(staff_id = id, "Staff member deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}

async fn apply_update(state: &AppState, id: DbId, update: &UpdateStaff) -> AppResult<StaffResponse> {
    let staff = StaffRepo::update(&state.pool, id, update)
        .await?
        .ok_or_else(|| not_found(id))?;
    if update.password_hash.is_some() {
        tracing::info!(staff_id = id, "Staff password changed");
    }
    Ok(staff.into())
}
