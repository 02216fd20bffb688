//! Handlers for the `/food` menu resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use hotel_core::error::CoreError;
use hotel_core::media::{self, FOOD_FOLDER};
use hotel_core::types::DbId;
use hotel_core::{food, pricing};
use hotel_db::models::food::{CreateFood, Food};
use hotel_db::repositories::FoodRepo;
use serde::Serialize;

use crate::error::{
    collect_field_error, push_field_error, AppError, AppResult, FieldErrors,
};
use crate::extract::IdPath;
use crate::form::FormData;
use crate::response::SuccessResponse;
use crate::state::AppState;
use crate::storage::MediaStore;

const IMAGE_FIELD: &str = "image";

const MAX_NAME_LENGTH: usize = 150;

const REQUIRED: &str = "This field is required.";

#[derive(Debug, Serialize)]
pub struct FoodResponse {
    #[serde(flatten)]
    pub food: Food,
    pub image_url: String,
}

impl FoodResponse {
    fn new(food: Food, media: &MediaStore) -> Self {
        Self {
            image_url: media.url(&food.image),
            food,
        }
    }
}

/// GET /api/food/
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<FoodResponse>>> {
    let items = FoodRepo::list(&state.pool).await?;
    Ok(Json(
        items
            .into_iter()
            .map(|food| FoodResponse::new(food, &state.media))
            .collect(),
    ))
}

/// POST /api/food/
///
/// Multipart fields `name`, `category`, `price` and an `image` file, all required.
pub async fn create(
    State(state): State<AppState>,
    form: FormData,
) -> AppResult<(StatusCode, Json<FoodResponse>)> {
    let mut errors = FieldErrors::new();

    let name = match form.non_blank("name") {
        Some(name) if name.chars().count() > MAX_NAME_LENGTH => {
            push_field_error(
                &mut errors,
                "name",
                format!("Ensure this field has no more than {MAX_NAME_LENGTH} characters."),
            );
            None
        }
        Some(name) => Some(name.to_string()),
        None => {
            push_field_error(&mut errors, "name", REQUIRED);
            None
        }
    };

    let category = match form.non_blank("category") {
        Some(category) => collect_field_error(&mut errors, food::validate_category(category))
            .map(|()| category.to_string()),
        None => {
            push_field_error(&mut errors, "category", REQUIRED);
            None
        }
    };

    let price = match form.non_blank("price") {
        Some(raw) => {
            collect_field_error(&mut errors, pricing::parse_price(raw, pricing::FOOD_MAX_PRICE))
        }
        None => {
            push_field_error(&mut errors, "price", REQUIRED);
            None
        }
    };

    let file = form.file(IMAGE_FIELD);
    match file {
        Some(file) => {
            collect_field_error(
                &mut errors,
                media::image_extension(IMAGE_FIELD, &file.file_name),
            );
        }
        None => push_field_error(&mut errors, IMAGE_FIELD, REQUIRED),
    }

    AppError::check_fields(errors)?;
    let (Some(name), Some(category), Some(price), Some(file)) = (name, category, price, file)
    else {
        return Err(AppError::InternalError(
            "food form passed validation with missing values".into(),
        ));
    };

    let image = state
        .media
        .save(FOOD_FOLDER, IMAGE_FIELD, &file.file_name, &file.data)
        .await?;

    let input = CreateFood {
        name,
        category,
        price,
        image,
    };
    let food = match FoodRepo::create(&state.pool, &input).await {
        Ok(food) => food,
        Err(e) => {
            state.media.remove(&input.image).await;
            return Err(e.into());
        }
    };

    tracing::info!(food_id = food.id, category = %food.category, "Food item created");
    Ok((
        StatusCode::CREATED,
        Json(FoodResponse::new(food, &state.media)),
    ))
}

/// DELETE /api/food/{id}/
///
/// Removes the row and its stored file.
pub async fn delete(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<SuccessResponse>> {
    let food = FoodRepo::delete(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Food", id })?;

    state.media.remove(&food.image).await;
    tracing::info!(food_id = id, "Food item deleted");
    Ok(Json(SuccessResponse::ok()))
}
