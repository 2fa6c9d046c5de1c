//! Meal log
//!
//! Ordered collection of logged meals with date-scoped retrieval.

use chrono::{NaiveDate, NaiveDateTime};

use crate::catalog::FoodCatalog;
use crate::error::CoreResult;
use crate::models::{FoodCategory, FoodItem, Meal, MealId, MealType};
use crate::nutrition::build_typed_meal;

/// Logged meals in insertion order
#[derive(Debug, Clone, Default)]
pub struct MealLog {
    meals: Vec<Meal>,
}

impl MealLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A log holding the four example meals of a typical day, all at `timestamp`
    pub fn with_sample_meals(catalog: &FoodCatalog, timestamp: NaiveDateTime) -> CoreResult<Self> {
        let mut log = Self::new();
        for meal in sample_meals(catalog, timestamp)? {
            log.add(meal);
        }
        Ok(log)
    }

    pub fn add(&mut self, meal: Meal) {
        tracing::info!(
            meal_id = %meal.id(),
            name = meal.name(),
            total_carbs = meal.total_carbs(),
            "Logged meal"
        );
        self.meals.push(meal);
    }

    /// Replace the meal with the same id, returning the previous entry.
    /// A missing id leaves the log untouched and returns `None`.
    pub fn update(&mut self, meal: Meal) -> Option<Meal> {
        match self.meals.iter_mut().find(|m| m.id() == meal.id()) {
            Some(slot) => {
                tracing::info!(meal_id = %meal.id(), "Updated meal");
                Some(std::mem::replace(slot, meal))
            }
            None => {
                tracing::warn!(meal_id = %meal.id(), "Update ignored: meal not in log");
                None
            }
        }
    }

    /// Remove the meal with `id`, returning it. A missing id is a no-op.
    pub fn delete(&mut self, id: MealId) -> Option<Meal> {
        match self.meals.iter().position(|m| m.id() == id) {
            Some(index) => {
                tracing::info!(meal_id = %id, "Deleted meal");
                Some(self.meals.remove(index))
            }
            None => {
                tracing::warn!(meal_id = %id, "Delete ignored: meal not in log");
                None
            }
        }
    }

    pub fn get(&self, id: MealId) -> Option<&Meal> {
        self.meals.iter().find(|m| m.id() == id)
    }

    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }

    pub fn len(&self) -> usize {
        self.meals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty()
    }

    /// Meals whose timestamp falls on `date`, in log order
    pub fn by_date(&self, date: NaiveDate) -> Vec<Meal> {
        self.meals
            .iter()
            .filter(|m| m.timestamp().date() == date)
            .cloned()
            .collect()
    }

    /// Carbohydrate grams logged on `date`
    pub fn total_carbs_on(&self, date: NaiveDate) -> f64 {
        self.meals
            .iter()
            .filter(|m| m.timestamp().date() == date)
            .map(Meal::total_carbs)
            .sum()
    }
}

fn sample_meals(catalog: &FoodCatalog, timestamp: NaiveDateTime) -> CoreResult<Vec<Meal>> {
    // Foods the table lacks are stood in by zero-carb entries
    let lookup = |name: &str, fallback: FoodCategory| -> CoreResult<FoodItem> {
        match catalog.find_by_name(name) {
            Some(food) => Ok(food.clone()),
            None => FoodItem::new(name, 0.0, fallback),
        }
    };

    let plan: [(MealType, Vec<(FoodItem, f64)>); 4] = [
        (
            MealType::Breakfast,
            vec![
                (lookup("Pão de trigo branco", FoodCategory::Breads)?, 50.0),
                (lookup("Leite de vaca", FoodCategory::DairyBeverages)?, 200.0),
            ],
        ),
        (
            MealType::Lunch,
            vec![
                (lookup("Arroz \"solto\" cozido", FoodCategory::Rice)?, 150.0),
                (lookup("Frango", FoodCategory::MixedDishes)?, 100.0),
                (lookup("Salada de fruta sem calda", FoodCategory::FreshFruit)?, 100.0),
            ],
        ),
        (
            MealType::AfternoonSnack,
            vec![
                (lookup("Iogurte natural ou 0% açúcar", FoodCategory::DairyBeverages)?, 125.0),
                (lookup("Banana", FoodCategory::FreshFruit)?, 100.0),
            ],
        ),
        (
            MealType::Dinner,
            vec![
                (lookup("Sopa de legumes (média)", FoodCategory::Soups)?, 250.0),
                (lookup("Pão de centeio", FoodCategory::Breads)?, 30.0),
                (lookup("Queijo", FoodCategory::DairyBeverages)?, 20.0),
            ],
        ),
    ];

    plan.iter()
        .map(|(meal_type, items)| {
            build_typed_meal(*meal_type, None, timestamp, items.iter().map(|(f, q)| (f, *q)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::build_meal;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn banana() -> FoodItem {
        FoodItem::new("Banana", 12.9, FoodCategory::FreshFruit).unwrap()
    }

    fn meal(name: &str, when: NaiveDateTime, grams: f64) -> Meal {
        let b = banana();
        build_meal(name, when, [(&b, grams)]).unwrap()
    }

    #[test]
    fn test_add_keeps_order() {
        let mut log = MealLog::new();
        let a = meal("A", at(1, 20), 10.0);
        let b = meal("B", at(1, 8), 10.0);
        log.add(a.clone());
        log.add(b.clone());
        assert_eq!(log.len(), 2);
        assert_eq!(log.meals()[0].id(), a.id());
        assert_eq!(log.meals()[1].id(), b.id());
    }

    #[test]
    fn test_by_date_filters_on_calendar_day() {
        let mut log = MealLog::new();
        let first = meal("Pequeno Almoço", at(1, 8), 100.0);
        log.add(first.clone());
        log.add(meal("Pequeno Almoço", at(2, 8), 100.0));

        let found = log.by_date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id(), first.id());
        assert!(log.by_date(NaiveDate::from_ymd_opt(2024, 5, 3).unwrap()).is_empty());
    }

    #[test]
    fn test_by_date_keeps_log_order_not_time_order() {
        let mut log = MealLog::new();
        log.add(meal("Jantar", at(1, 20), 10.0));
        log.add(meal("Pequeno Almoço", at(1, 8), 10.0));
        let names: Vec<String> = log
            .by_date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        assert_eq!(names, vec!["Jantar", "Pequeno Almoço"]);
    }

    #[test]
    fn test_update_replaces_by_id() {
        let mut log = MealLog::new();
        let original = meal("Almoço", at(1, 12), 100.0);
        log.add(original.clone());

        let replacement = meal("Almoço tardio", at(1, 14), 200.0).with_id(original.id());
        let previous = log.update(replacement);
        assert_eq!(previous.map(|m| m.name().to_string()), Some("Almoço".to_string()));

        let stored = log.get(original.id()).unwrap();
        assert_eq!(stored.name(), "Almoço tardio");
        assert!((stored.total_carbs() - 25.8).abs() < 1e-9);
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_update_missing_is_noop() {
        let mut log = MealLog::new();
        log.add(meal("Almoço", at(1, 12), 100.0));
        assert!(log.update(meal("Ghost", at(1, 12), 5.0)).is_none());
        assert_eq!(log.len(), 1);
        assert_eq!(log.meals()[0].name(), "Almoço");
    }

    #[test]
    fn test_delete() {
        let mut log = MealLog::new();
        let m = meal("Ceia", at(1, 23), 10.0);
        log.add(m.clone());
        assert_eq!(log.delete(m.id()).map(|d| d.id()), Some(m.id()));
        assert!(log.is_empty());
        assert!(log.delete(m.id()).is_none());
    }

    #[test]
    fn test_total_carbs_on() {
        let mut log = MealLog::new();
        log.add(meal("A", at(1, 8), 100.0));
        log.add(meal("B", at(1, 12), 50.0));
        log.add(meal("C", at(2, 8), 100.0));
        let total = log.total_carbs_on(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
        assert!((total - 19.35).abs() < 1e-9);
    }

    #[test]
    fn test_sample_meals() {
        let catalog = FoodCatalog::new();
        let log = MealLog::with_sample_meals(&catalog, at(1, 9)).unwrap();
        let types: Vec<MealType> = log.meals().iter().map(|m| m.meal_type()).collect();
        assert_eq!(
            types,
            vec![
                MealType::Breakfast,
                MealType::Lunch,
                MealType::AfternoonSnack,
                MealType::Dinner
            ]
        );
        assert_eq!(log.meals()[0].name(), "Pequeno Almoço");

        // "Frango" is not in the table and counts as zero carbs
        let lunch = &log.meals()[1];
        let chicken = lunch.items().iter().find(|i| i.food().name() == "Frango").unwrap();
        assert_eq!(chicken.carbs(), 0.0);
        assert!(catalog.find_by_name("Frango").is_none());
    }
}
