//! End-to-end behaviour of the catalog, aggregator and meal log through the public API.

use chrono::{NaiveDate, NaiveDateTime};

use glucosmart::models::{FoodCategory, FoodItem, MealType};
use glucosmart::nutrition::{build_meal, compute_item_carbs, scale_portion};
use glucosmart::tools::meals::{self, MealRequest, PortionRequest};
use glucosmart::{CoreError, FoodCatalog, MealLog};

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").unwrap()
}

fn banana() -> FoodItem {
    FoodItem::new("Banana", 12.9, FoodCategory::FreshFruit).unwrap()
}

fn rice() -> FoodItem {
    FoodItem::new("Arroz", 28.0, FoodCategory::Rice).unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn item_carbs_scale_with_quantity() {
    let banana = banana();
    assert!(close(compute_item_carbs(&banana, 100.0).unwrap(), 12.9));
    assert!(close(compute_item_carbs(&banana, 50.0).unwrap(), 6.45));
}

#[test]
fn meal_total_is_sum_of_items() {
    let (banana, rice) = (banana(), rice());
    let meal = build_meal(
        "Lunch",
        at("2024-05-01T13:00"),
        [(&banana, 100.0), (&rice, 150.0)],
    )
    .unwrap();

    assert!(close(meal.total_carbs(), 54.9));
    let item_sum: f64 = meal.items().iter().map(|i| i.carbs()).sum();
    assert!(close(meal.total_carbs(), item_sum));
    assert!(close(meal.total_weight(), 250.0));
}

#[test]
fn portion_scaling_and_zero_weight_guard() {
    assert!(close(scale_portion(54.9, 250.0, 100.0), 21.96));
    assert_eq!(scale_portion(54.9, 0.0, 100.0), 0.0);
}

#[test]
fn empty_meal_and_bad_quantities_are_rejected() {
    let banana = banana();
    let none: Vec<(&FoodItem, f64)> = Vec::new();
    assert_eq!(
        build_meal("Lunch", at("2024-05-01T13:00"), none).unwrap_err(),
        CoreError::EmptyMeal
    );
    assert!(matches!(
        compute_item_carbs(&banana, 0.0),
        Err(CoreError::InvalidArgument(_))
    ));
    assert!(matches!(
        compute_item_carbs(&banana, -5.0),
        Err(CoreError::InvalidArgument(_))
    ));
}

#[test]
fn by_date_returns_only_that_day() {
    let banana = banana();
    let mut log = MealLog::new();
    let first = build_meal("Breakfast", at("2024-05-01T08:00"), [(&banana, 100.0)]).unwrap();
    let second = build_meal("Breakfast", at("2024-05-02T08:00"), [(&banana, 100.0)]).unwrap();
    let first_id = first.id();
    log.add(first);
    log.add(second);

    let day = log.by_date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
    assert_eq!(day.len(), 1);
    assert_eq!(day[0].id(), first_id);
}

#[test]
fn added_food_shows_up_once_in_catalog_and_groups() {
    let mut catalog = FoodCatalog::new();
    catalog.add_food("Test Food", 10.0, FoodCategory::Other).unwrap();

    let matches = catalog
        .all_foods()
        .iter()
        .filter(|f| f.name() == "Test Food")
        .count();
    assert_eq!(matches, 1);

    let other = catalog
        .category_groups()
        .into_iter()
        .find(|g| g.category == FoodCategory::Other)
        .expect("Other group present");
    assert!(other.items.iter().any(|f| f.name() == "Test Food"));
}

#[test]
fn category_groups_partition_the_catalog() {
    let mut catalog = FoodCatalog::new();
    catalog.add_food("Bolo caseiro", 48.0, FoodCategory::Pastries).unwrap();

    let groups = catalog.category_groups();
    let grouped: usize = groups.iter().map(|g| g.items.len()).sum();
    assert_eq!(grouped, catalog.len());
    for group in &groups {
        assert!(!group.items.is_empty());
        assert!(group.items.iter().all(|f| f.category() == group.category));
        assert_eq!(group.display_name, catalog.display_name(group.category));
    }
}

#[test]
fn search_is_case_insensitive_sorted_and_idempotent() {
    let catalog = FoodCatalog::new();
    let lower = catalog.search_by_name("arroz");
    let upper = catalog.search_by_name("ARROZ");
    assert!(!lower.is_empty());
    assert_eq!(lower, upper);
    assert_eq!(lower, catalog.search_by_name("arroz"));
    assert!(lower.windows(2).all(|w| w[0].name() <= w[1].name()));
    assert!(lower
        .iter()
        .all(|f| f.name().to_lowercase().contains("arroz")));
    assert!(catalog.search_by_name("   ").is_empty());
}

#[test]
fn meal_lifecycle_through_tools() {
    let catalog = FoodCatalog::new();
    let mut log = MealLog::new();

    let request = MealRequest {
        meal_type: Some("lunch".to_string()),
        timestamp: Some("2024-05-01T13:00".to_string()),
        items: vec![PortionRequest {
            food: "Arroz \"solto\" cozido".to_string(),
            quantity: 150.0,
        }],
        ..Default::default()
    };
    let logged = meals::log_meal(&catalog, &mut log, &request).unwrap();
    assert_eq!(logged.name, MealType::Lunch.display_name());
    assert!(close(logged.total_carbs, 42.0));

    let day = meals::meals_by_date(&log, "2024-05-01").unwrap();
    assert_eq!(day.meals.len(), 1);
    assert!(close(day.total_carbs, 42.0));

    let reused = meals::reuse_meal(&mut log, &logged.id, Some("2024-05-02T13:00")).unwrap();
    assert_ne!(reused.id, logged.id);
    assert_eq!(log.len(), 2);

    meals::delete_meal(&mut log, &logged.id).unwrap();
    assert!(matches!(
        meals::get_meal(&log, &logged.id),
        Err(CoreError::NotFound(_))
    ));
    assert_eq!(log.len(), 1);
}
