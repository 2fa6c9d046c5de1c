//! Food Item model
//!
//! A named food with its carbohydrate density per 100 g/ml.

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use super::FoodCategory;

/// An immutable entry of the food catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodItem {
    name: String,
    carbs_per_100: f64, // grams of carbohydrate per 100 g/ml
    category: FoodCategory,
}

impl FoodItem {
    /// Create a food item, rejecting blank names and negative or non-finite carb values
    pub fn new(name: impl Into<String>, carbs_per_100: f64, category: FoodCategory) -> CoreResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CoreError::invalid("food name cannot be empty"));
        }
        if !carbs_per_100.is_finite() || carbs_per_100 < 0.0 {
            return Err(CoreError::invalid(format!(
                "carbs per 100 must be a non-negative number, got {}",
                carbs_per_100
            )));
        }
        Ok(Self { name, carbs_per_100, category })
    }

    /// Construct from trusted static data
    pub(crate) fn from_static(name: &str, carbs_per_100: f64, category: FoodCategory) -> Self {
        Self {
            name: name.to_string(),
            carbs_per_100,
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn carbs_per_100(&self) -> f64 {
        self.carbs_per_100
    }

    pub fn category(&self) -> FoodCategory {
        self.category
    }

    /// Carbohydrate grams in `quantity` g/ml of this food
    pub fn carbs_for(&self, quantity: f64) -> f64 {
        self.carbs_per_100 * quantity / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid() {
        let item = FoodItem::new("Banana", 12.9, FoodCategory::FreshFruit).unwrap();
        assert_eq!(item.name(), "Banana");
        assert_eq!(item.carbs_per_100(), 12.9);
        assert_eq!(item.category(), FoodCategory::FreshFruit);
    }

    #[test]
    fn test_new_accepts_zero_carbs() {
        assert!(FoodItem::new("Frango", 0.0, FoodCategory::MixedDishes).is_ok());
    }

    #[test]
    fn test_new_rejects_negative_and_nan() {
        assert!(matches!(
            FoodItem::new("X", -1.0, FoodCategory::Other),
            Err(CoreError::InvalidArgument(_))
        ));
        assert!(FoodItem::new("X", f64::NAN, FoodCategory::Other).is_err());
        assert!(FoodItem::new("X", f64::INFINITY, FoodCategory::Other).is_err());
    }

    #[test]
    fn test_new_rejects_blank_name() {
        assert!(FoodItem::new("   ", 1.0, FoodCategory::Other).is_err());
    }

    #[test]
    fn test_carbs_for() {
        let rice = FoodItem::new("Arroz", 28.0, FoodCategory::Rice).unwrap();
        assert!((rice.carbs_for(150.0) - 42.0).abs() < 1e-9);
        assert!((rice.carbs_for(100.0) - 28.0).abs() < 1e-9);
    }
}
