use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::gallery;
use crate::state::AppState;

/// Gallery routes.
///
/// ```text
/// GET    /gallery/         -> list
/// POST   /gallery/         -> create (multipart)
/// DELETE /gallery/{id}/    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/gallery/", get(gallery::list).post(gallery::create))
        .route("/gallery/{id}/", delete(gallery::delete))
}
