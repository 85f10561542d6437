//! Request handlers.
//!
//! Each submodule provides async handler functions for a single entity
//! collection. Handlers delegate to the corresponding repository in
//! `packwise_db` and map errors via [`crate::error::AppError`].

pub mod last_minute_task;
pub mod packing_item;
pub mod packing_list;
pub mod trip;
