//! Food catalog
//!
//! Builtin and user-added foods with search and category browsing.

use std::collections::BTreeMap;

use crate::error::CoreResult;
use crate::models::{CategoryGroup, FoodCategory, FoodItem};
use super::seed::BUILTIN_FOODS;

/// The set of known foods
///
/// Names are not required to be unique: user additions are appended without
/// deduplication and name lookups return the first match in insertion order.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    foods: Vec<FoodItem>,
    /// Index into `foods` where user additions start
    builtin_len: usize,
}

impl FoodCatalog {
    /// A catalog seeded with the builtin nutrition table
    pub fn new() -> Self {
        Self::with_builtin(
            BUILTIN_FOODS
                .iter()
                .map(|&(name, carbs, category)| FoodItem::from_static(name, carbs, category))
                .collect(),
        )
    }

    /// A catalog seeded with the given items as its builtin set
    pub fn with_builtin(foods: Vec<FoodItem>) -> Self {
        let builtin_len = foods.len();
        tracing::debug!(count = builtin_len, "Food catalog initialised");
        Self { foods, builtin_len }
    }

    /// Builtin followed by user-added foods, in insertion order
    pub fn all_foods(&self) -> &[FoodItem] {
        &self.foods
    }

    /// User-added foods only, in insertion order
    pub fn user_foods(&self) -> &[FoodItem] {
        &self.foods[self.builtin_len..]
    }

    pub fn len(&self) -> usize {
        self.foods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// First food whose name is exactly `name` (case-sensitive)
    pub fn find_by_name(&self, name: &str) -> Option<&FoodItem> {
        self.foods.iter().find(|f| f.name() == name)
    }

    /// Case-insensitive substring search on names, sorted by name.
    /// A blank query matches nothing.
    pub fn search_by_name(&self, query: &str) -> Vec<FoodItem> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        let mut found: Vec<FoodItem> = self
            .foods
            .iter()
            .filter(|f| f.name().to_lowercase().contains(&needle))
            .cloned()
            .collect();
        sort_by_name(&mut found);
        tracing::debug!(query, results = found.len(), "Food search");
        found
    }

    /// All foods of one category, sorted by name
    pub fn by_category(&self, category: FoodCategory) -> Vec<FoodItem> {
        let mut found: Vec<FoodItem> = self
            .foods
            .iter()
            .filter(|f| f.category() == category)
            .cloned()
            .collect();
        sort_by_name(&mut found);
        found
    }

    /// Append a user food and return it
    pub fn add_food(
        &mut self,
        name: impl Into<String>,
        carbs_per_100: f64,
        category: FoodCategory,
    ) -> CoreResult<FoodItem> {
        let item = FoodItem::new(name, carbs_per_100, category)?;
        self.foods.push(item.clone());
        tracing::info!(
            name = item.name(),
            carbs_per_100,
            category = category.as_str(),
            "Added user food"
        );
        Ok(item)
    }

    /// Foods partitioned by category: items sorted by name, groups sorted by
    /// display name. Computed from the current contents on every call.
    pub fn category_groups(&self) -> Vec<CategoryGroup> {
        let mut buckets: BTreeMap<FoodCategory, Vec<FoodItem>> = BTreeMap::new();
        for food in &self.foods {
            buckets.entry(food.category()).or_default().push(food.clone());
        }

        let mut groups: Vec<CategoryGroup> = buckets
            .into_iter()
            .map(|(category, mut items)| {
                sort_by_name(&mut items);
                CategoryGroup {
                    category,
                    display_name: category.display_name(),
                    items,
                }
            })
            .collect();
        groups.sort_by(|a, b| a.display_name.cmp(b.display_name));
        groups
    }

    pub fn display_name(&self, category: FoodCategory) -> &'static str {
        category.display_name()
    }
}

fn sort_by_name(items: &mut [FoodItem]) {
    items.sort_by(|a, b| a.name().cmp(b.name()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn small_catalog() -> FoodCatalog {
        FoodCatalog::with_builtin(vec![
            FoodItem::new("Banana", 12.9, FoodCategory::FreshFruit).unwrap(),
            FoodItem::new("Arroz \"solto\" cozido", 28.0, FoodCategory::Rice).unwrap(),
            FoodItem::new("Arroz doce", 23.0, FoodCategory::Desserts).unwrap(),
            FoodItem::new("Amêndoa", 7.1, FoodCategory::StarchyOilyNuts).unwrap(),
            FoodItem::new("Maçã", 10.2, FoodCategory::FreshFruit).unwrap(),
        ])
    }

    #[test]
    fn test_builtin_table_is_loaded() {
        let catalog = FoodCatalog::new();
        assert_eq!(catalog.len(), BUILTIN_FOODS.len());
        assert!(catalog.user_foods().is_empty());
        assert!(catalog.find_by_name("Banana").is_some());
    }

    #[test]
    fn test_builtin_table_is_valid() {
        for &(name, carbs, _) in BUILTIN_FOODS {
            assert!(!name.trim().is_empty());
            assert!(carbs.is_finite() && carbs >= 0.0, "{} has {}", name, carbs);
        }
    }

    #[test]
    fn test_builtin_table_covers_all_but_other() {
        let catalog = FoodCatalog::new();
        let groups = catalog.category_groups();
        assert_eq!(groups.len(), 20);
        assert!(groups.iter().all(|g| g.category != FoodCategory::Other));
    }

    #[test]
    fn test_search_blank_query() {
        let catalog = small_catalog();
        assert!(catalog.search_by_name("").is_empty());
        assert!(catalog.search_by_name("   ").is_empty());
        assert!(catalog.search_by_name("\t\n").is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_and_sorted() {
        let catalog = small_catalog();
        let lower = catalog.search_by_name("arroz");
        let upper = catalog.search_by_name("ARROZ");
        assert_eq!(lower, upper);
        let names: Vec<&str> = lower.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["Arroz \"solto\" cozido", "Arroz doce"]);
    }

    #[test]
    fn test_search_handles_accents() {
        let catalog = small_catalog();
        let found = catalog.search_by_name("MAÇÃ");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name(), "Maçã");
    }

    #[test]
    fn test_by_category_sorted() {
        let catalog = small_catalog();
        let fruit = catalog.by_category(FoodCategory::FreshFruit);
        let names: Vec<&str> = fruit.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["Banana", "Maçã"]);
        assert!(catalog.by_category(FoodCategory::Sushi).is_empty());
    }

    #[test]
    fn test_add_food_appends_to_both_lists() {
        let mut catalog = small_catalog();
        let added = catalog.add_food("Test Food", 10.0, FoodCategory::Other).unwrap();
        assert_eq!(catalog.all_foods().last(), Some(&added));
        assert_eq!(catalog.user_foods(), &[added.clone()]);
        assert_eq!(
            catalog.all_foods().iter().filter(|f| f.name() == "Test Food").count(),
            1
        );
    }

    #[test]
    fn test_add_food_allows_duplicate_names_first_match_wins() {
        let mut catalog = small_catalog();
        catalog.add_food("Banana", 20.0, FoodCategory::Other).unwrap();
        assert_eq!(catalog.find_by_name("Banana").unwrap().carbs_per_100(), 12.9);
        assert_eq!(catalog.search_by_name("banana").len(), 2);
    }

    #[test]
    fn test_add_food_validates() {
        let mut catalog = small_catalog();
        let before = catalog.len();
        assert!(matches!(
            catalog.add_food("Bad", -3.0, FoodCategory::Other),
            Err(CoreError::InvalidArgument(_))
        ));
        assert!(catalog.add_food("", 3.0, FoodCategory::Other).is_err());
        assert_eq!(catalog.len(), before);
    }

    #[test]
    fn test_category_groups_partition_all_foods() {
        let catalog = FoodCatalog::new();
        let groups = catalog.category_groups();

        let grouped: usize = groups.iter().map(|g| g.items.len()).sum();
        assert_eq!(grouped, catalog.len());

        for group in &groups {
            assert!(group.items.iter().all(|f| f.category() == group.category));
            assert!(group.items.windows(2).all(|w| w[0].name() <= w[1].name()));
            assert_eq!(group.display_name, group.category.display_name());
        }
        assert!(groups.windows(2).all(|w| w[0].display_name <= w[1].display_name));

        let mut categories: Vec<_> = groups.iter().map(|g| g.category).collect();
        categories.dedup();
        assert_eq!(categories.len(), groups.len());
    }

    #[test]
    fn test_category_groups_reflect_additions() {
        let mut catalog = small_catalog();
        assert!(catalog.category_groups().iter().all(|g| g.category != FoodCategory::Other));

        catalog.add_food("Test Food", 10.0, FoodCategory::Other).unwrap();
        let groups = catalog.category_groups();
        let other = groups.iter().find(|g| g.category == FoodCategory::Other).unwrap();
        assert_eq!(other.display_name, "Outros");
        assert_eq!(other.items.len(), 1);
        assert_eq!(other.items[0].name(), "Test Food");
    }

    #[test]
    fn test_all_foods_idempotent() {
        let catalog = small_catalog();
        assert_eq!(catalog.all_foods(), catalog.all_foods());
    }
}
