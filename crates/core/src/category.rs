//! Packing categories and item priorities.
//!
//! Both are closed sets. Categories serialize with their display names
//! (`"Clothing"`), priorities in lowercase (`"high"`).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// A fixed grouping used to organize packing items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Clothing,
    Toiletries,
    Electronics,
    Documents,
    Miscellaneous,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Clothing,
        Category::Toiletries,
        Category::Electronics,
        Category::Documents,
        Category::Miscellaneous,
    ];

    /// Display name, as used on the wire and in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clothing => "Clothing",
            Self::Toiletries => "Toiletries",
            Self::Electronics => "Electronics",
            Self::Documents => "Documents",
            Self::Miscellaneous => "Miscellaneous",
        }
    }
}

/// Categories declared by a freshly created packing list.
pub fn default_categories() -> Vec<Category> {
    Category::ALL.to_vec()
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

/// How important it is not to forget an item.
///
/// The generator only ever emits `High` and `Medium`; `Low` is available for
/// items added by hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
