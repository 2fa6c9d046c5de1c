//! Meal history
//!
//! The meal log and the views built on top of it.

mod groups;
mod meal_log;

pub use groups::{group_by_meal_type, MealTypeGroup};
pub use meal_log::MealLog;
