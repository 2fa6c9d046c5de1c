//! Calculator MCP Tools
//!
//! Carbs of a single portion and of a weighed share of a recipe.

use serde::Serialize;

use crate::catalog::FoodCatalog;
use crate::error::{CoreError, CoreResult};
use crate::nutrition::{compute_item_carbs, format_carbs, Ingredient, Recipe};

/// Recipe ingredient in a tool request
#[derive(Debug, Clone)]
pub struct IngredientRequest {
    /// Catalog food name, or a free label when `carbs_per_100` is given
    pub food: String,
    pub quantity: f64,
    /// Overrides the catalog lookup for foods missing from the table
    pub carbs_per_100: Option<f64>,
}

/// Response for calculate_item_carbs
#[derive(Debug, Serialize)]
pub struct ItemCarbsResponse {
    pub food: String,
    pub carbs_per_100: f64,
    pub quantity: f64,
    pub carbs: f64,
    pub carbs_display: String,
}

#[derive(Debug, Serialize)]
pub struct IngredientDetail {
    pub name: String,
    pub quantity: f64,
    pub carbs_per_100: f64,
    pub carbs: f64,
}

/// Response for calculate_portion
#[derive(Debug, Serialize)]
pub struct PortionResponse {
    pub ingredients: Vec<IngredientDetail>,
    pub total_carbs: f64,
    pub total_weight: f64,
    pub portion_weight: f64,
    pub portion_carbs: f64,
    pub portion_carbs_display: String,
}

pub fn calculate_item_carbs(catalog: &FoodCatalog, food: &str, quantity: f64) -> CoreResult<ItemCarbsResponse> {
    let item = catalog
        .find_by_name(food)
        .ok_or_else(|| CoreError::not_found(format!("food '{}' is not in the catalog", food)))?;
    let carbs = compute_item_carbs(item, quantity)?;
    Ok(ItemCarbsResponse {
        food: item.name().to_string(),
        carbs_per_100: item.carbs_per_100(),
        quantity,
        carbs,
        carbs_display: format_carbs(carbs),
    })
}

/// Weigh a recipe's ingredients and the eaten portion, get the portion's carbs
pub fn calculate_portion(
    catalog: &FoodCatalog,
    ingredients: &[IngredientRequest],
    portion_weight: f64,
) -> CoreResult<PortionResponse> {
    if !portion_weight.is_finite() || portion_weight <= 0.0 {
        return Err(CoreError::invalid("portion_weight must be greater than 0"));
    }

    let mut recipe = Recipe::new();
    for request in ingredients {
        let ingredient = match request.carbs_per_100 {
            Some(carbs_per_100) => Ingredient {
                name: request.food.clone(),
                quantity: request.quantity,
                carbs_per_100,
            },
            None => {
                let food = catalog.find_by_name(&request.food).ok_or_else(|| {
                    CoreError::not_found(format!("food '{}' is not in the catalog", request.food))
                })?;
                Ingredient::from_food(food, request.quantity)?
            }
        };
        recipe.add(ingredient)?;
    }

    let portion_carbs = recipe.portion_carbs(portion_weight);
    tracing::debug!(
        ingredients = recipe.ingredients().len(),
        total_weight = recipe.total_weight(),
        portion_weight,
        portion_carbs,
        "Calculated portion"
    );

    Ok(PortionResponse {
        ingredients: recipe
            .ingredients()
            .iter()
            .map(|i| IngredientDetail {
                name: i.name.clone(),
                quantity: i.quantity,
                carbs_per_100: i.carbs_per_100,
                carbs: i.carbs(),
            })
            .collect(),
        total_carbs: recipe.total_carbs(),
        total_weight: recipe.total_weight(),
        portion_weight,
        portion_carbs,
        portion_carbs_display: format_carbs(portion_carbs),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredient(food: &str, quantity: f64, carbs_per_100: Option<f64>) -> IngredientRequest {
        IngredientRequest {
            food: food.to_string(),
            quantity,
            carbs_per_100,
        }
    }

    #[test]
    fn test_calculate_item_carbs() {
        let catalog = FoodCatalog::new();
        let response = calculate_item_carbs(&catalog, "Banana", 50.0).unwrap();
        assert!((response.carbs - 6.45).abs() < 1e-9);
        assert_eq!(calculate_item_carbs(&catalog, "Banana", 100.0).unwrap().carbs_display, "12.9 HC");
        assert!(matches!(
            calculate_item_carbs(&catalog, "Banana", 0.0),
            Err(CoreError::InvalidArgument(_))
        ));
        assert!(matches!(
            calculate_item_carbs(&catalog, "Dragon fruit", 10.0),
            Err(CoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_calculate_portion_mixes_catalog_and_custom() {
        let catalog = FoodCatalog::new();
        let response = calculate_portion(
            &catalog,
            &[ingredient("Banana", 100.0, None), ingredient("Rice", 150.0, Some(28.0))],
            100.0,
        )
        .unwrap();
        assert!((response.total_carbs - 54.9).abs() < 1e-9);
        assert!((response.total_weight - 250.0).abs() < 1e-9);
        assert!((response.portion_carbs - 21.96).abs() < 1e-9);
    }

    #[test]
    fn test_calculate_portion_rejects_bad_input() {
        let catalog = FoodCatalog::new();
        assert!(calculate_portion(&catalog, &[ingredient("Banana", 100.0, None)], 0.0).is_err());
        assert!(calculate_portion(&catalog, &[ingredient("Banana", -1.0, None)], 50.0).is_err());
    }

    #[test]
    fn test_calculate_portion_without_ingredients_is_zero() {
        let catalog = FoodCatalog::new();
        let response = calculate_portion(&catalog, &[], 100.0).unwrap();
        assert_eq!(response.portion_carbs, 0.0);
    }
}
