//! Carbohydrate aggregation
//!
//! Turns (food, quantity) selections into meals and scales recipe totals to a portion.

use chrono::NaiveDateTime;

use crate::error::CoreResult;
use crate::models::{FoodItem, Meal, MealItem, MealType};

/// Carbohydrate grams in `quantity` g/ml of `food`
///
/// # Errors
/// `InvalidArgument` when the quantity is not a positive, finite number
pub fn compute_item_carbs(food: &FoodItem, quantity: f64) -> CoreResult<f64> {
    Ok(MealItem::new(food.clone(), quantity)?.carbs())
}

/// Build a meal from selections. The meal type is taken from `name` when it
/// is exactly a meal type's display name, otherwise `Other`.
///
/// # Errors
/// `EmptyMeal` with no selections, `InvalidArgument` on a non-positive quantity
pub fn build_meal<'a, I>(name: &str, timestamp: NaiveDateTime, items: I) -> CoreResult<Meal>
where
    I: IntoIterator<Item = (&'a FoodItem, f64)>,
{
    let meal_type = MealType::from_display_name(name).unwrap_or_default();
    assemble(name.to_string(), meal_type, timestamp, items)
}

/// Build a meal of an explicit type; a blank name falls back to the type's display name
pub fn build_typed_meal<'a, I>(
    meal_type: MealType,
    name: Option<&str>,
    timestamp: NaiveDateTime,
    items: I,
) -> CoreResult<Meal>
where
    I: IntoIterator<Item = (&'a FoodItem, f64)>,
{
    let name = match name.map(str::trim) {
        Some(n) if !n.is_empty() => n.to_string(),
        _ => meal_type.display_name().to_string(),
    };
    assemble(name, meal_type, timestamp, items)
}

fn assemble<'a, I>(
    name: String,
    meal_type: MealType,
    timestamp: NaiveDateTime,
    items: I,
) -> CoreResult<Meal>
where
    I: IntoIterator<Item = (&'a FoodItem, f64)>,
{
    let items = items
        .into_iter()
        .map(|(food, quantity)| MealItem::new(food.clone(), quantity))
        .collect::<CoreResult<Vec<_>>>()?;

    let meal = Meal::new(name, meal_type, timestamp, items)?;
    tracing::debug!(
        meal_id = %meal.id(),
        items = meal.items().len(),
        total_carbs = meal.total_carbs(),
        "Built meal"
    );
    Ok(meal)
}

/// Carbs of a portion of a recipe, assuming carbohydrate is spread evenly by mass.
/// Returns 0 unless both weights are positive.
pub fn scale_portion(total_carbs: f64, total_weight: f64, portion_weight: f64) -> f64 {
    if total_weight > 0.0 && portion_weight > 0.0 {
        total_carbs * (portion_weight / total_weight)
    } else {
        0.0
    }
}

/// Carbs per 100 g/ml from a label stating `carbs` grams per `portion_weight`.
/// Returns 0 when the portion weight is not positive.
pub fn carbs_per_100_from_portion(carbs: f64, portion_weight: f64) -> f64 {
    if portion_weight > 0.0 {
        carbs * 100.0 / portion_weight
    } else {
        0.0
    }
}
