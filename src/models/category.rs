//! Food category taxonomy
//!
//! The closed set of tags the nutrition table is organised by.

use serde::{Deserialize, Serialize};

use super::FoodItem;

/// Category of a food item in the carbohydrate table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    MixedDishes,
    Pastries,
    SavouryCharcuterie,
    Desserts,
    Breads,
    CerealsBiscuits,
    DairyBeverages,
    Soups,
    Rice,
    Pasta,
    Potato,
    Legumes,
    Flours,
    FreshFruit,
    FruitInSyrup,
    DehydratedFruit,
    StarchyOilyNuts,
    DriedFruit,
    Seeds,
    Sushi,
    Other,
}

impl FoodCategory {
    /// Every category, in declaration order
    pub const ALL: [FoodCategory; 21] = [
        FoodCategory::MixedDishes,
        FoodCategory::Pastries,
        FoodCategory::SavouryCharcuterie,
        FoodCategory::Desserts,
        FoodCategory::Breads,
        FoodCategory::CerealsBiscuits,
        FoodCategory::DairyBeverages,
        FoodCategory::Soups,
        FoodCategory::Rice,
        FoodCategory::Pasta,
        FoodCategory::Potato,
        FoodCategory::Legumes,
        FoodCategory::Flours,
        FoodCategory::FreshFruit,
        FoodCategory::FruitInSyrup,
        FoodCategory::DehydratedFruit,
        FoodCategory::StarchyOilyNuts,
        FoodCategory::DriedFruit,
        FoodCategory::Seeds,
        FoodCategory::Sushi,
        FoodCategory::Other,
    ];

    /// Human-readable name shown when browsing the table
    pub fn display_name(&self) -> &'static str {
        match self {
            FoodCategory::MixedDishes => "Pratos Mistos",
            FoodCategory::Pastries => "Pastelaria",
            FoodCategory::SavouryCharcuterie => "Salgados e Charcutaria",
            FoodCategory::Desserts => "Sobremesas",
            FoodCategory::Breads => "Pão e Produtos Afins",
            FoodCategory::CerealsBiscuits => "Cereais e Biscoitos",
            FoodCategory::DairyBeverages => "Lacticínios e Bebidas",
            FoodCategory::Soups => "Sopas",
            FoodCategory::Rice => "Arroz",
            FoodCategory::Pasta => "Massa",
            FoodCategory::Potato => "Batata",
            FoodCategory::Legumes => "Leguminosas",
            FoodCategory::Flours => "Farinhas",
            FoodCategory::FreshFruit => "Fruta Fresca",
            FoodCategory::FruitInSyrup => "Fruta em Calda",
            FoodCategory::DehydratedFruit => "Fruta Desidratada",
            FoodCategory::StarchyOilyNuts => "Frutos Amiláceos e Oleaginosos",
            FoodCategory::DriedFruit => "Frutos Secos",
            FoodCategory::Seeds => "Sementes",
            FoodCategory::Sushi => "Sushi",
            FoodCategory::Other => "Outros",
        }
    }

    /// Stable snake_case code, identical to the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodCategory::MixedDishes => "mixed_dishes",
            FoodCategory::Pastries => "pastries",
            FoodCategory::SavouryCharcuterie => "savoury_charcuterie",
            FoodCategory::Desserts => "desserts",
            FoodCategory::Breads => "breads",
            FoodCategory::CerealsBiscuits => "cereals_biscuits",
            FoodCategory::DairyBeverages => "dairy_beverages",
            FoodCategory::Soups => "soups",
            FoodCategory::Rice => "rice",
            FoodCategory::Pasta => "pasta",
            FoodCategory::Potato => "potato",
            FoodCategory::Legumes => "legumes",
            FoodCategory::Flours => "flours",
            FoodCategory::FreshFruit => "fresh_fruit",
            FoodCategory::FruitInSyrup => "fruit_in_syrup",
            FoodCategory::DehydratedFruit => "dehydrated_fruit",
            FoodCategory::StarchyOilyNuts => "starchy_oily_nuts",
            FoodCategory::DriedFruit => "dried_fruit",
            FoodCategory::Seeds => "seeds",
            FoodCategory::Sushi => "sushi",
            FoodCategory::Other => "other",
        }
    }

    /// Parse a category from its code or its display name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| {
            c.as_str() == needle || c.display_name().to_lowercase() == needle
        })
    }
}

/// A browsing bucket: all foods sharing one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup {
    pub category: FoodCategory,
    pub display_name: &'static str,
    pub items: Vec<FoodItem>,
}
