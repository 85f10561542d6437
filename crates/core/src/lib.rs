//! Domain logic for the packing assistant.
//!
//! Everything in this crate is pure: enums, validation, the packing item
//! generator, progress aggregation and category grouping. Storage lives in
//! `packwise_db`; HTTP lives in `packwise_api`.

pub mod category;
pub mod error;
pub mod generator;
pub mod grouping;
pub mod item;
pub mod last_minute;
pub mod progress;
pub mod trip;
pub mod types;
