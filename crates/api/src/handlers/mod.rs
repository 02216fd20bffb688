//! Request handlers, one module per resource.
//!
//! Handlers validate input, delegate persistence to the matching repository
//! in `hotel_db`, and map errors via [`AppError`](crate::error::AppError).

pub mod food;
pub mod gallery;
pub mod reservation;
pub mod room;
pub mod staff;
