//! Nutrition calculation module
//!
//! Carbohydrate aggregation, the recipe calculator and input/output helpers.

pub mod aggregator;
pub mod format;
pub mod recipe;

pub use aggregator::{
    build_meal, build_typed_meal, carbs_per_100_from_portion, compute_item_carbs, scale_portion,
};
pub use format::{format_carbs, parse_amount, parse_quantity, CARBS_UNIT};
pub use recipe::{Ingredient, Recipe};
