//! Trip entity model and DTOs.

use packwise_core::error::CoreError;
use packwise_core::trip::{validate_destination, validate_trip_dates, TripType, Weather};
use packwise_core::types::{Date, EntityId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::packing_item::PackingItem;
use crate::models::packing_list::{PackingList, PackingListWithItems};

/// A trip held in the `trips` collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trip {
    pub id: EntityId,
    pub destination: String,
    pub start_date: Date,
    pub end_date: Date,
    pub weather: Weather,
    pub trip_type: TripType,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a trip, as submitted by the trip form.
///
/// Dates are optional here so that a missing date surfaces as a validation
/// failure rather than a decode error. Weather and trip type default to
/// `sunny` / `leisure`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTrip {
    #[serde(default)]
    pub destination: String,
    #[serde(default, deserialize_with = "blank_date_as_none")]
    pub start_date: Option<Date>,
    #[serde(default, deserialize_with = "blank_date_as_none")]
    pub end_date: Option<Date>,
    #[serde(default)]
    pub weather: Weather,
    #[serde(default)]
    pub trip_type: TripType,
}

/// Decode an optional `YYYY-MM-DD` date, treating `""` like a missing value.
///
/// Date inputs submit an empty string when left blank.
fn blank_date_as_none<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<Date>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

impl CreateTrip {
    /// Check required fields and date order.
    pub fn validate(&self) -> Result<NewTrip, CoreError> {
        let destination = validate_destination(&self.destination)?;
        let (start_date, end_date) = validate_trip_dates(self.start_date, self.end_date)?;
        Ok(NewTrip {
            destination,
            start_date,
            end_date,
            weather: self.weather,
            trip_type: self.trip_type,
        })
    }
}

/// A validated trip ready to be committed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrip {
    pub destination: String,
    pub start_date: Date,
    pub end_date: Date,
    pub weather: Weather,
    pub trip_type: TripType,
}

/// DTO for updating an existing trip. All fields are optional.
///
/// Changing weather or trip type does not regenerate the packing list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTrip {
    pub destination: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub weather: Option<Weather>,
    pub trip_type: Option<TripType>,
}

/// A trip together with the packing list and items created alongside it.
#[derive(Debug, Clone, Serialize)]
pub struct TripWithPackingList {
    pub trip: Trip,
    pub packing_list: PackingList,
    pub items: Vec<PackingItem>,
}

/// A trip and, if it still has one, its packing list and items.
#[derive(Debug, Clone, PartialEq)]
pub struct TripDetail {
    pub trip: Trip,
    pub packing_list: Option<PackingListWithItems>,
}
