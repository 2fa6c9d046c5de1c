//! Meal model
//!
//! A logged meal: weighed portions of catalog foods with derived carbohydrate totals.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{CoreError, CoreResult};
use super::{FoodItem, MealType};

/// Meal identifier, generated at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MealId(Uuid);

impl MealId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse from string
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the string is not a valid UUID
    pub fn parse_str(s: &str) -> CoreResult<Self> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|e| CoreError::invalid(format!("invalid meal id '{}': {}", s, e)))
    }
}

impl Default for MealId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MealId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One weighed portion of a food inside a meal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealItem {
    food: FoodItem,
    quantity: f64, // grams or ml
}

impl MealItem {
    /// Create a meal item; the quantity must be a positive, finite amount
    pub fn new(food: FoodItem, quantity: f64) -> CoreResult<Self> {
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(CoreError::invalid(format!(
                "quantity of '{}' must be greater than 0, got {}",
                food.name(),
                quantity
            )));
        }
        Ok(Self { food, quantity })
    }

    pub fn food(&self) -> &FoodItem {
        &self.food
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// Carbohydrate grams of this portion, always derived from the food and quantity
    pub fn carbs(&self) -> f64 {
        self.food.carbs_for(self.quantity)
    }
}

/// A logged meal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meal {
    id: MealId,
    name: String,
    meal_type: MealType,
    timestamp: NaiveDateTime,
    items: Vec<MealItem>,
}

impl Meal {
    /// Assemble a meal with a fresh id; at least one item is required
    pub fn new(
        name: impl Into<String>,
        meal_type: MealType,
        timestamp: NaiveDateTime,
        items: Vec<MealItem>,
    ) -> CoreResult<Self> {
        if items.is_empty() {
            return Err(CoreError::EmptyMeal);
        }
        Ok(Self {
            id: MealId::new(),
            name: name.into(),
            meal_type,
            timestamp,
            items,
        })
    }

    /// Take over the identity of an existing meal, used to replace a logged entry
    #[must_use]
    pub fn with_id(mut self, id: MealId) -> Self {
        self.id = id;
        self
    }

    /// A copy of this meal with a new id and timestamp, for logging it again
    #[must_use]
    pub fn reuse(&self, timestamp: NaiveDateTime) -> Self {
        Self {
            id: MealId::new(),
            name: self.name.clone(),
            meal_type: self.meal_type,
            timestamp,
            items: self.items.clone(),
        }
    }

    pub fn id(&self) -> MealId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn meal_type(&self) -> MealType {
        self.meal_type
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn items(&self) -> &[MealItem] {
        &self.items
    }

    /// Sum of the items' carbohydrates
    pub fn total_carbs(&self) -> f64 {
        self.items.iter().map(MealItem::carbs).sum()
    }

    /// Sum of the items' quantities in g/ml
    pub fn total_weight(&self) -> f64 {
        self.items.iter().map(MealItem::quantity).sum()
    }
}
