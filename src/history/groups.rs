//! Meal type grouping for history views

use serde::Serialize;

use crate::models::{Meal, MealType};

/// Meals of one type with their combined carbs
#[derive(Debug, Clone, Serialize)]
pub struct MealTypeGroup {
    pub meal_type: MealType,
    pub display_name: &'static str,
    pub meals: Vec<Meal>,
    pub total_carbs: f64,
}

/// Group meals by their meal type in the order of the day, skipping empty types
pub fn group_by_meal_type(meals: &[Meal]) -> Vec<MealTypeGroup> {
    MealType::ALL
        .into_iter()
        .filter_map(|meal_type| {
            let of_type: Vec<Meal> = meals
                .iter()
                .filter(|m| m.meal_type() == meal_type)
                .cloned()
                .collect();
            if of_type.is_empty() {
                return None;
            }
            let total_carbs = of_type.iter().map(Meal::total_carbs).sum();
            Some(MealTypeGroup {
                meal_type,
                display_name: meal_type.display_name(),
                meals: of_type,
                total_carbs,
            })
        })
        .collect()
}
