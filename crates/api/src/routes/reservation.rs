use axum::routing::{get, post};
use axum::Router;

use crate::handlers::reservation;
use crate::state::AppState;

/// Reservation routes.
///
/// ```text
/// GET    /reservations/              -> list (?status=)
/// POST   /reservations/              -> create
/// POST   /reservations/create/       -> create
/// GET    /reservations/{id}/         -> get_by_id
/// PATCH  /reservations/{id}/         -> update
/// PUT    /reservations/{id}/         -> replace
/// DELETE /reservations/{id}/         -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/reservations/",
            get(reservation::list).post(reservation::create),
        )
        .route("/reservations/create/", post(reservation::create))
        .route(
            "/reservations/{id}/",
            get(reservation::get_by_id)
                .patch(reservation::update)
                .put(reservation::replace)
                .delete(reservation::delete),
        )
}
