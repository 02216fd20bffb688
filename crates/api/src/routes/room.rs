use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::room;
use crate::state::AppState;

/// Room routes.
///
/// ```text
/// GET    /rooms/         -> list
/// POST   /rooms/         -> create (multipart)
/// DELETE /rooms/{id}/    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rooms/", get(room::list).post(room::create))
        .route("/rooms/{id}/", delete(room::delete))
}
