//! Food menu categories.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

pub const CATEGORY_BREAD: &str = "bread";
pub const CATEGORY_DRINKS: &str = "drinks";
pub const CATEGORY_VEG: &str = "veg";
pub const CATEGORY_NON_VEG: &str = "non-veg";
pub const CATEGORY_DESSERT: &str = "dessert";

/// All valid food categories, in menu order.
pub const VALID_CATEGORIES: &[&str] = &[
    CATEGORY_BREAD,
    CATEGORY_DRINKS,
    CATEGORY_VEG,
    CATEGORY_NON_VEG,
    CATEGORY_DESSERT,
];

/// Validate that `category` is one of [`VALID_CATEGORIES`]. Case-sensitive.
pub fn validate_category(category: &str) -> Result<(), CoreError> {
    if VALID_CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(CoreError::validation(
            "category",
            format!("\"{category}\" is not a valid choice."),
        ))
    }
}
