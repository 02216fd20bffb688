//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts
//! - An update DTO (all `Option` fields) for patches, where the entity is editable

pub mod food;
pub mod gallery;
pub mod reservation;
pub mod room;
pub mod staff;

