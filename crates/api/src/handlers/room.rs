//! Handlers for the `/rooms` resource.
//!
//! Rooms are created from a multipart form carrying any number of image
//! files. Every field and file name is checked before anything is written.

use std::collections::HashMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use hotel_core::error::CoreError;
use hotel_core::media::{self, ROOM_IMAGES_FOLDER};
use hotel_core::pricing;
use hotel_core::types::DbId;
use hotel_db::models::room::{CreateRoom, Room, RoomImage};
use hotel_db::repositories::RoomRepo;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{
    collect_field_error, push_field_error, AppError, AppResult, FieldErrors,
};
use crate::extract::IdPath;
use crate::form::FormData;
use crate::response::SuccessResponse;
use crate::state::AppState;
use crate::storage::MediaStore;

/// Accepted form field names for room images.
const IMAGE_FIELDS: &[&str] = &["images[]", "images"];

/// Field errors for images are reported under this key.
const IMAGES_FIELD: &str = "images";

const MAX_ROOM_NAME_LENGTH: usize = 150;

#[derive(Debug, Serialize)]
pub struct RoomImageResponse {
    #[serde(flatten)]
    pub image: RoomImage,
    pub image_url: String,
}

#[derive(Debug, Serialize)]
pub struct RoomResponse {
    #[serde(flatten)]
    pub room: Room,
    pub images: Vec<RoomImageResponse>,
}

impl RoomResponse {
    fn new(room: Room, images: Vec<RoomImage>, media: &MediaStore) -> Self {
        let images = images
            .into_iter()
            .map(|image| RoomImageResponse {
                image_url: media.url(&image.image),
                image,
            })
            .collect();
        Self { room, images }
    }
}

/// GET /api/rooms/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<RoomResponse>>> {
    let rooms = RoomRepo::list(&state.pool).await?;
    let ids: Vec<DbId> = rooms.iter().map(|r| r.id).collect();

    let mut images_by_room: HashMap<DbId, Vec<RoomImage>> = HashMap::new();
    for image in RoomRepo::list_images_for_rooms(&state.pool, &ids).await? {
        images_by_room.entry(image.room_id).or_default().push(image);
    }

    let response = rooms
        .into_iter()
        .map(|room| {
            let images = images_by_room.remove(&room.id).unwrap_or_default();
            RoomResponse::new(room, images, &state.media)
        })
        .collect();
    Ok(Json(response))
}

/// POST /api/rooms/
///
/// Multipart fields: `room_name` (required), `description`, `price`,
/// `capacity` and zero or more `images[]` files.
pub async fn create(
    State(state): State<AppState>,
    form: FormData,
) -> AppResult<(StatusCode, Json<RoomResponse>)> {
    let input = parse_room_form(&form)?;

    let mut stored = Vec::new();
    for file in form.files(IMAGE_FIELDS) {
        match state
            .media
            .save(ROOM_IMAGES_FOLDER, IMAGES_FIELD, &file.file_name, &file.data)
            .await
        {
            Ok(path) => stored.push(path),
            Err(e) => {
                state.media.remove_all(&stored).await;
                return Err(e);
            }
        }
    }

    let (room, images) = match RoomRepo::create_with_images(&state.pool, &input, &stored).await {
        Ok(created) => created,
        Err(e) => {
            state.media.remove_all(&stored).await;
            return Err(e.into());
        }
    };

    tracing::info!(
        room_id = room.id,
        image_count = images.len(),
        "Room created"
    );
    Ok((
        StatusCode::CREATED,
        Json(RoomResponse::new(room, images, &state.media)),
    ))
}

/// DELETE /api/rooms/{id}/
///
/// Removes the room, its image rows and their stored files.
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<SuccessResponse>> {
    let paths = RoomRepo::delete(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Room", id })?;

    state.media.remove_all(&paths).await;
    tracing::info!(room_id = id, image_count = paths.len(), "Room deleted");
    Ok(Json(SuccessResponse::ok()))
}

/// Validate the text fields and image names of a room form.
fn parse_room_form(form: &FormData) -> AppResult<CreateRoom> {
    let mut errors = FieldErrors::new();

    let room_name = match form.non_blank("room_name") {
        Some(name) if name.chars().count() > MAX_ROOM_NAME_LENGTH => {
            push_field_error(
                &mut errors,
                "room_name",
                format!("Ensure this field has no more than {MAX_ROOM_NAME_LENGTH} characters."),
            );
            String::new()
        }
        Some(name) => name.to_string(),
        None => {
            push_field_error(&mut errors, "room_name", "This field is required.");
            String::new()
        }
    };

    let description = form.text("description").unwrap_or_default().to_string();

    let price = match form.non_blank("price") {
        Some(raw) => {
            collect_field_error(&mut errors, pricing::parse_price(raw, pricing::ROOM_MAX_PRICE))
        }
        None => Some(Decimal::ZERO),
    };

    let capacity = match form.non_blank("capacity") {
        Some(raw) => collect_field_error(&mut errors, parse_capacity(raw)),
        None => Some(1),
    };

    for file in form.files(IMAGE_FIELDS) {
        collect_field_error(
            &mut errors,
            media::image_extension(IMAGES_FIELD, &file.file_name),
        );
    }

    AppError::check_fields(errors)?;

    Ok(CreateRoom {
        room_name,
        description,
        price: price.unwrap_or_default(),
        capacity: capacity.unwrap_or(1),
    })
}

fn parse_capacity(raw: &str) -> Result<i32, CoreError> {
    let capacity: i32 = raw
        .parse()
        .map_err(|_| CoreError::validation("capacity", "A valid integer is required."))?;
    if capacity < 1 {
        return Err(CoreError::validation(
            "capacity",
            "Ensure this value is greater than or equal to 1.",
        ));
    }
    Ok(capacity)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn capacity_must_be_positive_integer() {
        assert_eq!(parse_capacity("4").unwrap(), 4);
        assert_matches!(
            parse_capacity("0"),
            Err(CoreError::Validation { field: "capacity", .. })
        );
        assert_matches!(
            parse_capacity("two"),
            Err(CoreError::Validation { field: "capacity", .. })
        );
    }
}
