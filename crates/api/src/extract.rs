//! Request extractors that report failures as JSON [`AppError`]s.

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use hotel_core::types::DbId;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use serde_path_to_error::Segment;
use validator::Validate;

use crate::error::{push_field_error, AppError, FieldErrors};

const REQUIRED_MESSAGE: &str = "This field is required.";
const NOT_NULL: &str = "This field may not be null.";

/// Keys a JSON body must carry before it is deserialized.
///
/// Each entry lists the accepted spellings of one field; the first is the
/// name reported when none of them is present.
pub trait RequiredFields {
    const REQUIRED: &'static [&'static [&'static str]] = &[];
}

/// JSON body that is deserialized and then checked with [`Validate`].
///
/// Syntactically broken JSON, or a body that is not an object, is a 400
/// `BAD_REQUEST`. Missing, null or mistyped fields and rule violations are
/// a 400 `VALIDATION_ERROR` keyed by field.
///
/// ```ignore
/// async fn create(ValidJson(input): ValidJson<CreateReservation>) -> AppResult<StatusCode> {
///     Ok(StatusCode::CREATED)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate + RequiredFields,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        let Value::Object(object) = body else {
            return Err(AppError::BadRequest(
                "Expected a JSON object as the request body".to_string(),
            ));
        };

        AppError::check_fields(missing_fields(&object, T::REQUIRED))?;

        let value: T = serde_path_to_error::deserialize(Value::Object(object))
            .map_err(|err| AppError::Fields(field_error(err)))?;
        value.validate()?;
        Ok(ValidJson(value))
    }
}

fn missing_fields(object: &Map<String, Value>, required: &[&[&str]]) -> FieldErrors {
    let mut errors = FieldErrors::new();
    for names in required {
        if !names.iter().any(|name| object.contains_key(*name)) {
            if let Some(name) = names.first() {
                push_field_error(&mut errors, name, REQUIRED_MESSAGE);
            }
        }
    }
    errors
}

/// Key a deserialization failure by the top-level field it occurred in.
fn field_error(err: serde_path_to_error::Error<serde_json::Error>) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let inner = err.inner().to_string();
    match err.path().iter().next() {
        Some(Segment::Map { key }) => {
            let message = if inner.starts_with("invalid type: null") {
                NOT_NULL.to_string()
            } else {
                inner
            };
            push_field_error(&mut errors, key, message);
        }
        _ => match missing_field_name(&inner) {
            Some(field) => push_field_error(&mut errors, field, REQUIRED_MESSAGE),
            None => push_field_error(&mut errors, "non_field_errors", inner),
        },
    }
    errors
}

/// The field named by serde's "missing field `x`" message.
fn missing_field_name(message: &str) -> Option<&str> {
    message
        .strip_prefix("missing field `")?
        .split('`')
        .next()
}

/// A numeric id taken from the URL path.
///
/// A segment that is not a number matches no resource, so it is answered
/// with the JSON 404 envelope instead of axum's plain-text rejection.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub DbId);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<DbId>::from_request_parts(parts, state).await {
            Ok(Path(id)) => Ok(IdPath(id)),
            Err(PathRejection::FailedToDeserializePathParams(_)) => Err(AppError::NotFound),
            Err(rejection) => Err(AppError::InternalError(rejection.body_text())),
        }
    }
}
