//! Packing item and packing list validation.

use crate::category::Category;
use crate::error::CoreError;

/// Maximum length for an item name (characters).
pub const MAX_ITEM_NAME_LENGTH: usize = 200;

/// Maximum length for free-form item notes (characters).
pub const MAX_NOTES_LENGTH: usize = 2_000;

/// Quantity used when a hand-added item does not specify one.
pub const DEFAULT_QUANTITY: u32 = 1;

/// Validate an item name and return it trimmed.
pub fn validate_item_name(name: &str) -> Result<String, CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("Item name must not be empty".to_string()));
    }
    let len = trimmed.chars().count();
    if len > MAX_ITEM_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Item name exceeds maximum length of {MAX_ITEM_NAME_LENGTH} characters (got {len})"
        )));
    }
    Ok(trimmed.to_string())
}

/// Quantities must be positive.
pub fn validate_quantity(quantity: u32) -> Result<(), CoreError> {
    if quantity == 0 {
        return Err(CoreError::Validation("Quantity must be at least 1".to_string()));
    }
    Ok(())
}

pub fn validate_notes(notes: &str) -> Result<(), CoreError> {
    let len = notes.chars().count();
    if len > MAX_NOTES_LENGTH {
        return Err(CoreError::Validation(format!(
            "Notes exceed maximum length of {MAX_NOTES_LENGTH} characters (got {len})"
        )));
    }
    Ok(())
}

/// A packing list must declare at least one category and no duplicates.
pub fn validate_categories(categories: &[Category]) -> Result<(), CoreError> {
    if categories.is_empty() {
        return Err(CoreError::Validation(
            "A packing list needs at least one category".to_string(),
        ));
    }
    for (i, category) in categories.iter().enumerate() {
        if categories[..i].contains(category) {
            return Err(CoreError::Validation(format!(
                "Duplicate category '{}'",
                category.as_str()
            )));
        }
    }
    Ok(())
}
