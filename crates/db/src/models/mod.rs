//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct as held by the store
//! - A `Deserialize` create DTO
//! - A `Deserialize` update DTO (all `Option` fields) for partial updates

pub mod last_minute_task;
pub mod packing_item;
pub mod packing_list;
pub mod trip;
