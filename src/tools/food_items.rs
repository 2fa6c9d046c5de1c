//! Food Catalog MCP Tools
//!
//! Browsing, searching and extending the food catalog.

use serde::Serialize;

use crate::catalog::FoodCatalog;
use crate::error::{CoreError, CoreResult};
use crate::models::{FoodCategory, FoodItem};
use crate::nutrition::{carbs_per_100_from_portion, format_carbs};

/// Summary of a food item for list/search results
#[derive(Debug, Serialize)]
pub struct FoodItemSummary {
    pub name: String,
    pub carbs_per_100: f64,
    pub carbs_display: String,
    pub category: FoodCategory,
    pub category_name: &'static str,
}

impl From<&FoodItem> for FoodItemSummary {
    fn from(item: &FoodItem) -> Self {
        Self {
            name: item.name().to_string(),
            carbs_per_100: item.carbs_per_100(),
            carbs_display: format_carbs(item.carbs_per_100()),
            category: item.category(),
            category_name: item.category().display_name(),
        }
    }
}

/// Response for list_foods
#[derive(Debug, Serialize)]
pub struct ListFoodsResponse {
    pub items: Vec<FoodItemSummary>,
    pub total: usize,
    pub user_added: usize,
}

/// Response for search_foods
#[derive(Debug, Serialize)]
pub struct SearchFoodsResponse {
    pub query: String,
    pub items: Vec<FoodItemSummary>,
    pub total: usize,
}

/// Response for foods_by_category
#[derive(Debug, Serialize)]
pub struct CategoryFoodsResponse {
    pub category: FoodCategory,
    pub display_name: &'static str,
    pub items: Vec<FoodItemSummary>,
}

/// One category group in list_categories
#[derive(Debug, Serialize)]
pub struct CategorySummary {
    pub category: FoodCategory,
    pub display_name: &'static str,
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<FoodItemSummary>>,
}

/// Response for list_categories
#[derive(Debug, Serialize)]
pub struct ListCategoriesResponse {
    pub categories: Vec<CategorySummary>,
}

/// Response for add_food
#[derive(Debug, Serialize)]
pub struct AddFoodResponse {
    pub food: FoodItemSummary,
    pub total_foods: usize,
}

/// List the whole catalog, or only user-added foods, in insertion order
pub fn list_foods(catalog: &FoodCatalog, user_only: bool) -> ListFoodsResponse {
    let source = if user_only {
        catalog.user_foods()
    } else {
        catalog.all_foods()
    };
    let items: Vec<FoodItemSummary> = source.iter().map(FoodItemSummary::from).collect();
    ListFoodsResponse {
        total: items.len(),
        items,
        user_added: catalog.user_foods().len(),
    }
}

/// Case-insensitive name search, optionally capped
pub fn search_foods(catalog: &FoodCatalog, query: &str, limit: Option<usize>) -> SearchFoodsResponse {
    let found = catalog.search_by_name(query);
    let total = found.len();
    let items = found
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(FoodItemSummary::from)
        .collect();
    SearchFoodsResponse {
        query: query.to_string(),
        items,
        total,
    }
}

pub fn resolve_category(category: &str) -> CoreResult<FoodCategory> {
    FoodCategory::parse(category)
        .ok_or_else(|| CoreError::invalid(format!("unknown food category '{}'", category)))
}

pub fn foods_by_category(catalog: &FoodCatalog, category: &str) -> CoreResult<CategoryFoodsResponse> {
    let category = resolve_category(category)?;
    Ok(CategoryFoodsResponse {
        category,
        display_name: catalog.display_name(category),
        items: catalog.by_category(category).iter().map(FoodItemSummary::from).collect(),
    })
}

/// Category groups sorted by display name
pub fn list_categories(catalog: &FoodCatalog, include_items: bool) -> ListCategoriesResponse {
    let categories = catalog
        .category_groups()
        .into_iter()
        .map(|group| CategorySummary {
            category: group.category,
            display_name: group.display_name,
            count: group.items.len(),
            items: include_items.then(|| group.items.iter().map(FoodItemSummary::from).collect()),
        })
        .collect();
    ListCategoriesResponse { categories }
}

/// Add a user food. `carbs` is per 100 g/ml unless `portion_weight` is given,
/// in which case it is the carb content of that portion.
pub fn add_food(
    catalog: &mut FoodCatalog,
    name: &str,
    carbs: f64,
    portion_weight: Option<f64>,
    category: &str,
) -> CoreResult<AddFoodResponse> {
    let name = name.trim();
    if name.is_empty() {
        return Err(CoreError::invalid("food name cannot be empty"));
    }
    if !carbs.is_finite() || carbs < 0.0 {
        return Err(CoreError::invalid("carbs cannot be negative"));
    }
    let category = resolve_category(category)?;

    let carbs_per_100 = match portion_weight {
        Some(portion) if portion.is_finite() && portion > 0.0 => {
            carbs_per_100_from_portion(carbs, portion)
        }
        Some(_) => return Err(CoreError::invalid("portion_weight must be greater than 0")),
        None => carbs,
    };

    let item = catalog.add_food(name, carbs_per_100, category)?;
    Ok(AddFoodResponse {
        food: FoodItemSummary::from(&item),
        total_foods: catalog.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_foods() {
        let mut catalog = FoodCatalog::new();
        let all = list_foods(&catalog, false);
        assert_eq!(all.total, catalog.len());
        assert_eq!(all.user_added, 0);

        catalog.add_food("Bolo da avó", 45.0, FoodCategory::Pastries).unwrap();
        let user = list_foods(&catalog, true);
        assert_eq!(user.total, 1);
        assert_eq!(user.items[0].name, "Bolo da avó");
    }

    #[test]
    fn test_search_foods_limit_keeps_total() {
        let catalog = FoodCatalog::new();
        let full = search_foods(&catalog, "arroz", None);
        assert!(full.total > 2);
        let capped = search_foods(&catalog, "arroz", Some(2));
        assert_eq!(capped.items.len(), 2);
        assert_eq!(capped.total, full.total);
    }

    #[test]
    fn test_foods_by_category_unknown() {
        let catalog = FoodCatalog::new();
        assert!(matches!(
            foods_by_category(&catalog, "vegetables"),
            Err(CoreError::InvalidArgument(_))
        ));
        let sushi = foods_by_category(&catalog, "sushi").unwrap();
        assert_eq!(sushi.display_name, "Sushi");
        assert!(!sushi.items.is_empty());
    }

    #[test]
    fn test_list_categories() {
        let catalog = FoodCatalog::new();
        let without = list_categories(&catalog, false);
        assert!(without.categories.iter().all(|c| c.items.is_none()));
        let with = list_categories(&catalog, true);
        let counted: usize = with.categories.iter().map(|c| c.count).sum();
        assert_eq!(counted, catalog.len());
    }

    #[test]
    fn test_add_food_from_portion() {
        let mut catalog = FoodCatalog::new();
        let response = add_food(&mut catalog, "  Barra de cereais ", 15.0, Some(30.0), "cereals_biscuits").unwrap();
        assert_eq!(response.food.name, "Barra de cereais");
        assert!((response.food.carbs_per_100 - 50.0).abs() < 1e-9);
        assert_eq!(response.total_foods, catalog.len());
    }

    #[test]
    fn test_add_food_validation() {
        let mut catalog = FoodCatalog::new();
        let before = catalog.len();
        assert!(add_food(&mut catalog, " ", 10.0, None, "other").is_err());
        assert!(add_food(&mut catalog, "X", -1.0, None, "other").is_err());
        assert!(add_food(&mut catalog, "X", 10.0, Some(0.0), "other").is_err());
        assert!(add_food(&mut catalog, "X", 10.0, None, "nope").is_err());
        assert_eq!(catalog.len(), before);
    }
}
