//! Recipe calculator
//!
//! Weigh every ingredient of a recipe, then weigh the portion you eat.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::models::FoodItem;
use super::aggregator::scale_portion;

/// One weighed ingredient of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: f64,      // grams or ml
    pub carbs_per_100: f64, // grams per 100 g/ml
}

impl Ingredient {
    pub fn from_food(food: &FoodItem, quantity: f64) -> CoreResult<Self> {
        let ingredient = Self {
            name: food.name().to_string(),
            quantity,
            carbs_per_100: food.carbs_per_100(),
        };
        ingredient.validate()?;
        Ok(ingredient)
    }

    fn validate(&self) -> CoreResult<()> {
        if !self.quantity.is_finite() || self.quantity <= 0.0 {
            return Err(CoreError::invalid(format!(
                "quantity of '{}' must be greater than 0",
                self.name
            )));
        }
        if !self.carbs_per_100.is_finite() || self.carbs_per_100 < 0.0 {
            return Err(CoreError::invalid(format!(
                "carbs per 100 of '{}' cannot be negative",
                self.name
            )));
        }
        Ok(())
    }

    pub fn carbs(&self) -> f64 {
        self.carbs_per_100 * self.quantity / 100.0
    }
}

/// A whole recipe whose total carbs are spread over its total weight
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a recipe, validating every ingredient
    pub fn from_ingredients(ingredients: Vec<Ingredient>) -> CoreResult<Self> {
        for ingredient in &ingredients {
            ingredient.validate()?;
        }
        Ok(Self { ingredients })
    }

    pub fn add(&mut self, ingredient: Ingredient) -> CoreResult<()> {
        ingredient.validate()?;
        self.ingredients.push(ingredient);
        Ok(())
    }

    /// Remove the ingredient at `index`, if there is one
    pub fn remove(&mut self, index: usize) -> Option<Ingredient> {
        (index < self.ingredients.len()).then(|| self.ingredients.remove(index))
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn total_carbs(&self) -> f64 {
        self.ingredients.iter().map(Ingredient::carbs).sum()
    }

    pub fn total_weight(&self) -> f64 {
        self.ingredients.iter().map(|i| i.quantity).sum()
    }

    /// Carbs in a portion weighing `portion_weight`; 0 for an empty recipe
    /// or a non-positive portion
    pub fn portion_carbs(&self, portion_weight: f64) -> f64 {
        scale_portion(self.total_carbs(), self.total_weight(), portion_weight)
    }
}
