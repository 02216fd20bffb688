pub mod food;
pub mod gallery;
pub mod health;
pub mod reservation;
pub mod room;
pub mod staff;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Paths keep their trailing slash; each resource router registers full
/// paths and is merged rather than nested.
///
/// ```text
/// /reservations/                  list, create
/// /reservations/create/           create
/// /reservations/{id}/             get, partial update, replace, delete
///
/// /rooms/                         list, create (multipart)
/// /rooms/{id}/                    delete
///
/// /staff/                         list, create
/// /staff/{id}/                    get, partial update, replace, delete
///
/// /gallery/                       list, upload (multipart)
/// /gallery/{id}/                  delete
///
/// /food/                          list, create (multipart)
/// /food/{id}/                     delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(reservation::router())
        .merge(room::router())
        .merge(staff::router())
        .merge(gallery::router())
        .merge(food::router())
}
