//! Data models
//!
//! Foods, categories, meals and their derived carbohydrate values.

mod category;
mod food_item;
mod meal;
mod meal_type;

pub use category::{CategoryGroup, FoodCategory};
pub use food_item::FoodItem;
pub use meal::{Meal, MealId, MealItem};
pub use meal_type::MealType;
