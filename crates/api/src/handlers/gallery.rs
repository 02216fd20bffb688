//! Handlers for the `/gallery` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use hotel_core::error::CoreError;
use hotel_core::media::GALLERY_FOLDER;
use hotel_core::types::DbId;
use hotel_db::models::gallery::GalleryImage;
use hotel_db::repositories::GalleryRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::IdPath;
use crate::form::FormData;
use crate::response::SuccessResponse;
use crate::state::AppState;
use crate::storage::MediaStore;

const IMAGE_FIELD: &str = "image";

#[derive(Debug, Serialize)]
pub struct GalleryResponse {
    #[serde(flatten)]
    pub image: GalleryImage,
    pub image_url: String,
}

impl GalleryResponse {
    fn new(image: GalleryImage, media: &MediaStore) -> Self {
        Self {
            image_url: media.url(&image.image),
            image,
        }
    }
}

/// GET /api/gallery/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<GalleryResponse>>> {
    let images = GalleryRepo::list(&state.pool).await?;
    Ok(Json(
        images
            .into_iter()
            .map(|image| GalleryResponse::new(image, &state.media))
            .collect(),
    ))
}

/// POST /api/gallery/
///
/// Multipart form with a single required `image` file.
pub async fn create(
    State(state): State<AppState>,
    form: FormData,
) -> AppResult<(StatusCode, Json<GalleryResponse>)> {
    let file = form
        .file(IMAGE_FIELD)
        .ok_or_else(|| AppError::required(IMAGE_FIELD))?;

    let stored = state
        .media
        .save(GALLERY_FOLDER, IMAGE_FIELD, &file.file_name, &file.data)
        .await?;

    let image = match GalleryRepo::create(&state.pool, &stored).await {
        Ok(image) => image,
        Err(e) => {
            state.media.remove(&stored).await;
            return Err(e.into());
        }
    };

    tracing::info!(gallery_id = image.id, path = %image.image, "Gallery image uploaded");
    Ok((
        StatusCode::CREATED,
        Json(GalleryResponse::new(image, &state.media)),
    ))
}

/// DELETE /api/gallery/{id}/
///
/// Removes the row and its stored file.
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<SuccessResponse>> {
    let image = GalleryRepo::delete(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "GalleryImage",
            id,
        })?;

    state.media.remove(&image.image).await;
    tracing::info!(gallery_id = id, "Gallery image deleted");
    Ok(Json(SuccessResponse::ok()))
}
