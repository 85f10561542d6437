//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&Store` as the first argument. Lookups return `Option`;
//! mutations return `CoreError::NotFound` for unknown ids and
//! `CoreError::Validation` for rejected input, leaving the store unchanged.

pub mod last_minute_task_repo;
pub mod packing_item_repo;
pub mod packing_list_repo;
pub mod trip_repo;

pub use last_minute_task_repo::LastMinuteTaskRepo;
pub use packing_item_repo::PackingItemRepo;
pub use packing_list_repo::PackingListRepo;
pub use trip_repo::TripRepo;
