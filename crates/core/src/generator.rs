//! Rule-based packing item generation.
//!
//! A trip's weather and trip type map to a deterministic checklist: six base
//! essentials, then the weather set, then the trip-type set. No sorting and no
//! de-duplication (a hot beach trip gets both "Hat" and "Flip Flops" under
//! Clothing, and calling the generator twice yields the same list twice).

use serde::Serialize;

use crate::category::{Category, Priority};
use crate::trip::{TripType, Weather};

/// One generated item, before it is stored against a packing list.
///
/// Stored items start unpacked with empty notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemTemplate {
    pub name: &'static str,
    pub category: Category,
    pub quantity: u32,
    pub priority: Priority,
}

const fn item(
    name: &'static str,
    category: Category,
    quantity: u32,
    priority: Priority,
) -> ItemTemplate {
    ItemTemplate {
        name,
        category,
        quantity,
        priority,
    }
}

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

/// Essentials included in every checklist.
pub const BASE_ITEMS: &[ItemTemplate] = &[
    item("Passport/ID", Category::Documents, 1, Priority::High),
    item("Phone Charger", Category::Electronics, 1, Priority::High),
    item("Toothbrush", Category::Toiletries, 1, Priority::High),
    item("Toothpaste", Category::Toiletries, 1, Priority::Medium),
    item("Underwear", Category::Clothing, 5, Priority::High),
    item("Socks", Category::Clothing, 5, Priority::High),
];

const RAINY_ITEMS: &[ItemTemplate] = &[
    item("Umbrella", Category::Miscellaneous, 1, Priority::High),
    item("Rain Jacket", Category::Clothing, 1, Priority::High),
];

const COLD_ITEMS: &[ItemTemplate] = &[
    item("Winter Coat", Category::Clothing, 1, Priority::High),
    item("Gloves", Category::Clothing, 1, Priority::Medium),
    item("Warm Hat", Category::Clothing, 1, Priority::Medium),
];

const HOT_ITEMS: &[ItemTemplate] = &[
    item("Sunscreen", Category::Toiletries, 1, Priority::High),
    item("Sunglasses", Category::Miscellaneous, 1, Priority::Medium),
    item("Hat", Category::Clothing, 1, Priority::Medium),
];

const BUSINESS_ITEMS: &[ItemTemplate] = &[
    item("Business Suit", Category::Clothing, 1, Priority::High),
    item("Laptop", Category::Electronics, 1, Priority::High),
    item("Business Cards", Category::Documents, 1, Priority::Medium),
];

const BEACH_ITEMS: &[ItemTemplate] = &[
    item("Swimwear", Category::Clothing, 2, Priority::High),
    item("Beach Towel", Category::Miscellaneous, 1, Priority::Medium),
    item("Flip Flops", Category::Clothing, 1, Priority::Medium),
];

/// Items added for the given weather.
pub fn weather_items(weather: Weather) -> &'static [ItemTemplate] {
    match weather {
        Weather::Rainy => RAINY_ITEMS,
        Weather::Cold => COLD_ITEMS,
        Weather::Hot => HOT_ITEMS,
        Weather::Sunny => &[],
    }
}

/// Items added for the given trip type.
pub fn trip_type_items(trip_type: TripType) -> &'static [ItemTemplate] {
    match trip_type {
        TripType::Business => BUSINESS_ITEMS,
        TripType::Beach => BEACH_ITEMS,
        TripType::Leisure | TripType::Adventure => &[],
    }
}

/// Build the packing checklist for a trip.
pub fn generate_packing_items(weather: Weather, trip_type: TripType) -> Vec<ItemTemplate> {
    let weather_set = weather_items(weather);
    let trip_set = trip_type_items(trip_type);

    let mut items = Vec::with_capacity(BASE_ITEMS.len() + weather_set.len() + trip_set.len());
    items.extend_from_slice(BASE_ITEMS);
    items.extend_from_slice(weather_set);
    items.extend_from_slice(trip_set);
    items
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
