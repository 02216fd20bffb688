//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod food_repo;
pub mod gallery_repo;
pub mod reservation_repo;
pub mod room_repo;
pub mod staff_repo;

pub use food_repo::FoodRepo;
pub use gallery_repo::GalleryRepo;
pub use reservation_repo::ReservationRepo;
pub use room_repo::RoomRepo;
pub use staff_repo::StaffRepo;
