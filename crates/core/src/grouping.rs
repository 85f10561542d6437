//! Group packing items by category.

use indexmap::IndexMap;

use crate::category::Category;

/// Partition `items` by category.
///
/// Groups appear in the order their category is first seen and items keep
/// their source order within a group. Categories with no items are absent.
/// No check is made against a list's declared categories.
pub fn group_by_category<T, I, F>(items: I, category_of: F) -> IndexMap<Category, Vec<T>>
where
    I: IntoIterator<Item = T>,
    F: Fn(&T) -> Category,
{
    let mut groups: IndexMap<Category, Vec<T>> = IndexMap::new();
    for item in items {
        groups.entry(category_of(&item)).or_default().push(item);
    }
    groups
}
