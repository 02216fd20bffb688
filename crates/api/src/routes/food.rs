use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::food;
use crate::state::AppState;

/// Food menu routes.
///
/// ```text
/// GET    /food/         -> list
/// POST   /food/         -> create (multipart)
/// DELETE /food/{id}/    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/food/", get(food::list).post(food::create))
        .route("/food/{id}/", delete(food::delete))
}
