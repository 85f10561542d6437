//! Trip attributes, validation and date helpers.
//!
//! Weather and trip type drive the packing item generator, so they are closed
//! enums: an unknown value fails to decode instead of silently producing a
//! shorter checklist.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::Date;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length for a destination name (characters).
pub const MAX_DESTINATION_LENGTH: usize = 200;

/// Message returned when a required trip field is missing.
pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields";

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Expected weather at the destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    #[default]
    Sunny,
    Rainy,
    Cold,
    Hot,
}

/// The purpose of the trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    #[default]
    Leisure,
    Business,
    Adventure,
    Beach,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a destination and return it trimmed.
pub fn validate_destination(destination: &str) -> Result<String, CoreError> {
    let trimmed = destination.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
    }
    let len = trimmed.chars().count();
    if len > MAX_DESTINATION_LENGTH {
        return Err(CoreError::Validation(format!(
            "Destination exceeds maximum length of {MAX_DESTINATION_LENGTH} characters (got {len})"
        )));
    }
    Ok(trimmed.to_string())
}

/// Validate that both dates are present and the trip does not end before it
/// starts. Returns `(start, end)`.
pub fn validate_trip_dates(
    start_date: Option<Date>,
    end_date: Option<Date>,
) -> Result<(Date, Date), CoreError> {
    let (Some(start), Some(end)) = (start_date, end_date) else {
        return Err(CoreError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
    };
    if end < start {
        return Err(CoreError::Validation(format!(
            "End date {end} is before start date {start}"
        )));
    }
    Ok((start, end))
}

// ---------------------------------------------------------------------------
// Date helpers
// ---------------------------------------------------------------------------

/// Whole days from `today` until `start_date`. Negative once the trip has
/// started.
pub fn days_until_departure(start_date: Date, today: Date) -> i64 {
    (start_date - today).num_days()
}

/// Number of calendar days the trip covers, counting both ends.
pub fn trip_duration_days(start_date: Date, end_date: Date) -> i64 {
    (end_date - start_date).num_days() + 1
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
