use axum::routing::get;
use axum::Router;

use crate::handlers::staff;
use crate::state::AppState;

/// Staff routes.
///
/// ```text
/// GET    /staff/         -> list
/// POST   /staff/         -> create
/// GET    /staff/{id}/    -> get_by_id
/// PATCH  /staff/{id}/    -> update
/// PUT    /staff/{id}/    -> replace
/// DELETE /staff/{id}/    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/staff/", get(staff::list).post(staff::create))
        .route(
            "/staff/{id}/",
            get(staff::get_by_id)
                .patch(staff::update)
                .put(staff::replace)
                .delete(staff::delete),
        )
}
