//! Domain rules for the hotel backend.
//!
//! Everything here is pure logic with no database or HTTP dependencies, so
//! it can be unit-tested in isolation and shared by the `db` and `api` crates.

pub mod booking;
pub mod error;
pub mod food;
pub mod media;
pub mod pricing;
pub mod types;
