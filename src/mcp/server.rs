//! GlucoSmart MCP Server Implementation
//!
//! Exposes the food catalog, meal log and calculators as MCP tools.

use std::sync::{Arc, Mutex, MutexGuard};

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::catalog::FoodCatalog;
use crate::error::CoreError;
use crate::history::MealLog;
use crate::tools::calculator::{self, IngredientRequest};
use crate::tools::food_items;
use crate::tools::meals::{self, MealRequest, PortionRequest};
use crate::tools::status::StatusTracker;

/// GlucoSmart MCP Service
///
/// Catalog and log are each behind a mutex held for the whole tool call.
/// Tools needing both lock the catalog first.
#[derive(Clone)]
pub struct GlucoSmartService {
    status_tracker: Arc<StatusTracker>,
    catalog: Arc<Mutex<FoodCatalog>>,
    meal_log: Arc<Mutex<MealLog>>,
    tool_router: ToolRouter<GlucoSmartService>,
}

impl GlucoSmartService {
    pub fn new(catalog: FoodCatalog, meal_log: MealLog) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new()),
            catalog: Arc::new(Mutex::new(catalog)),
            meal_log: Arc::new(Mutex::new(meal_log)),
            tool_router: Self::tool_router(),
        }
    }

    fn catalog(&self) -> Result<MutexGuard<'_, FoodCatalog>, McpError> {
        self.catalog
            .lock()
            .map_err(|_| McpError::internal_error("Food catalog lock poisoned", None))
    }

    fn meal_log(&self) -> Result<MutexGuard<'_, MealLog>, McpError> {
        self.meal_log
            .lock()
            .map_err(|_| McpError::internal_error("Meal log lock poisoned", None))
    }
}

fn core_error(e: CoreError) -> McpError {
    match e {
        CoreError::NotFound(_) => McpError::resource_not_found(e.to_string(), None),
        CoreError::InvalidArgument(_) | CoreError::EmptyMeal => {
            McpError::invalid_params(e.to_string(), None)
        }
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Food Catalog Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListFoodsParams {
    /// Only list foods added by the user (default false)
    #[serde(default)]
    pub user_only: bool,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchFoodsParams {
    /// Part of the food name, case-insensitive
    pub query: String,
    /// Maximum results (default: all)
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FoodsByCategoryParams {
    /// Category code (e.g. fresh_fruit) or display name (e.g. Fruta Fresca)
    pub category: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListCategoriesParams {
    /// Include the foods of every category (default false)
    #[serde(default)]
    pub include_items: bool,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddFoodParams {
    /// Food name
    pub name: String,
    /// Carbs per 100 g/ml, or per portion when portion_weight is given
    pub carbs: f64,
    /// Weight in g/ml of the portion `carbs` refers to
    pub portion_weight: Option<f64>,
    /// Category code or display name
    pub category: String,
}

// ============================================================================
// Meal Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MealItemParam {
    /// Exact catalog food name
    pub food: String,
    /// Quantity in grams or ml
    pub quantity: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LogMealParams {
    /// Free-text name (defaults to the meal type's display name)
    pub name: Option<String>,
    /// breakfast, morning_snack, lunch, afternoon_snack, dinner, supper or other
    pub meal_type: Option<String>,
    /// YYYY-MM-DDTHH:MM (default now)
    pub timestamp: Option<String>,
    /// Foods eaten, at least one
    pub items: Vec<MealItemParam>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct UpdateMealParams {
    /// Meal ID to replace
    pub id: String,
    pub name: Option<String>,
    pub meal_type: Option<String>,
    /// YYYY-MM-DDTHH:MM (default: keep current)
    pub timestamp: Option<String>,
    pub items: Vec<MealItemParam>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MealIdParams {
    /// Meal ID
    pub id: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MealsByDateParams {
    /// Date in YYYY-MM-DD format
    pub date: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ReuseMealParams {
    /// Meal ID to copy
    pub id: String,
    /// YYYY-MM-DDTHH:MM (default now)
    pub timestamp: Option<String>,
}

// ============================================================================
// Calculator Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateItemCarbsParams {
    /// Exact catalog food name
    pub food: String,
    /// Quantity in grams or ml
    pub quantity: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct IngredientParam {
    /// Catalog food name, or any label when carbs_per_100 is given
    pub food: String,
    /// Weight in the whole recipe, grams or ml
    pub quantity: f64,
    /// Carbs per 100 g/ml for foods not in the catalog
    pub carbs_per_100: Option<f64>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculatePortionParams {
    pub ingredients: Vec<IngredientParam>,
    /// Weight of the portion eaten, grams or ml
    pub portion_weight: f64,
}

fn portions(items: Vec<MealItemParam>) -> Vec<PortionRequest> {
    items
        .into_iter()
        .map(|i| PortionRequest {
            food: i.food,
            quantity: i.quantity,
        })
        .collect()
}

#[tool_router]
impl GlucoSmartService {
    // --- Status ---

    #[tool(description = "Get the current status of the GlucoSmart service: build info, catalog and meal log sizes, process information")]
    fn glucosmart_status(&self) -> Result<CallToolResult, McpError> {
        let catalog = self.catalog()?;
        let log = self.meal_log()?;
        json_result(&self.status_tracker.get_status(&catalog, &log))
    }

    #[tool(description = "Get step-by-step instructions for finding foods, logging meals and using the recipe calculator. Call this when starting a food logging session.")]
    fn meal_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::MEAL_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(MEAL_INSTRUCTIONS)]))
    }

    // --- Food Catalog ---

    #[tool(description = "List all foods in the catalog (builtin first, then user-added), or only user-added foods")]
    fn list_foods(&self, Parameters(p): Parameters<ListFoodsParams>) -> Result<CallToolResult, McpError> {
        let catalog = self.catalog()?;
        json_result(&food_items::list_foods(&catalog, p.user_only))
    }

    #[tool(description = "Search foods by name (case-insensitive substring), sorted by name")]
    fn search_foods(&self, Parameters(p): Parameters<SearchFoodsParams>) -> Result<CallToolResult, McpError> {
        let catalog = self.catalog()?;
        json_result(&food_items::search_foods(&catalog, &p.query, p.limit))
    }

    #[tool(description = "List the foods of one category, sorted by name")]
    fn foods_by_category(&self, Parameters(p): Parameters<FoodsByCategoryParams>) -> Result<CallToolResult, McpError> {
        let catalog = self.catalog()?;
        let result = food_items::foods_by_category(&catalog, &p.category).map_err(core_error)?;
        json_result(&result)
    }

    #[tool(description = "List food categories with their display names and food counts, optionally with their foods")]
    fn list_categories(&self, Parameters(p): Parameters<ListCategoriesParams>) -> Result<CallToolResult, McpError> {
        let catalog = self.catalog()?;
        json_result(&food_items::list_categories(&catalog, p.include_items))
    }

    #[tool(description = "Add a food to the catalog. Carbs are per 100 g/ml unless portion_weight is given.")]
    fn add_food(&self, Parameters(p): Parameters<AddFoodParams>) -> Result<CallToolResult, McpError> {
        let mut catalog = self.catalog()?;
        let result = food_items::add_food(&mut catalog, &p.name, p.carbs, p.portion_weight, &p.category)
            .map_err(core_error)?;
        json_result(&result)
    }

    // --- Meals ---

    #[tool(description = "Log a meal from catalog foods and quantities. Returns the meal with per-item and total carbs.")]
    fn log_meal(&self, Parameters(p): Parameters<LogMealParams>) -> Result<CallToolResult, McpError> {
        let request = MealRequest {
            name: p.name,
            meal_type: p.meal_type,
            timestamp: p.timestamp,
            items: portions(p.items),
        };
        let catalog = self.catalog()?;
        let mut log = self.meal_log()?;
        let result = meals::log_meal(&catalog, &mut log, &request).map_err(core_error)?;
        json_result(&result)
    }

    #[tool(description = "Replace a logged meal's name, type, timestamp and items, keeping its id")]
    fn update_meal(&self, Parameters(p): Parameters<UpdateMealParams>) -> Result<CallToolResult, McpError> {
        let request = MealRequest {
            name: p.name,
            meal_type: p.meal_type,
            timestamp: p.timestamp,
            items: portions(p.items),
        };
        let catalog = self.catalog()?;
        let mut log = self.meal_log()?;
        let result = meals::update_meal(&catalog, &mut log, &p.id, &request).map_err(core_error)?;
        json_result(&result)
    }

    #[tool(description = "Delete a logged meal")]
    fn delete_meal(&self, Parameters(p): Parameters<MealIdParams>) -> Result<CallToolResult, McpError> {
        let mut log = self.meal_log()?;
        let result = meals::delete_meal(&mut log, &p.id).map_err(core_error)?;
        json_result(&result)
    }

    #[tool(description = "Get a logged meal with its items and carbs")]
    fn get_meal(&self, Parameters(p): Parameters<MealIdParams>) -> Result<CallToolResult, McpError> {
        let log = self.meal_log()?;
        let result = meals::get_meal(&log, &p.id).map_err(core_error)?;
        json_result(&result)
    }

    #[tool(description = "Get all meals logged on a date with totals per meal type and for the day")]
    fn meals_by_date(&self, Parameters(p): Parameters<MealsByDateParams>) -> Result<CallToolResult, McpError> {
        let log = self.meal_log()?;
        let result = meals::meals_by_date(&log, &p.date).map_err(core_error)?;
        json_result(&result)
    }

    #[tool(description = "Log a copy of an earlier meal with a new id (timestamp defaults to now)")]
    fn reuse_meal(&self, Parameters(p): Parameters<ReuseMealParams>) -> Result<CallToolResult, McpError> {
        let mut log = self.meal_log()?;
        let result = meals::reuse_meal(&mut log, &p.id, p.timestamp.as_deref()).map_err(core_error)?;
        json_result(&result)
    }

    // --- Calculators ---

    #[tool(description = "Carbs in a quantity of a catalog food: carbs per 100 x quantity / 100")]
    fn calculate_item_carbs(&self, Parameters(p): Parameters<CalculateItemCarbsParams>) -> Result<CallToolResult, McpError> {
        let catalog = self.catalog()?;
        let result = calculator::calculate_item_carbs(&catalog, &p.food, p.quantity).map_err(core_error)?;
        json_result(&result)
    }

    #[tool(description = "Recipe calculator: total carbs and weight of the weighed ingredients, and the carbs of a portion by weight")]
    fn calculate_portion(&self, Parameters(p): Parameters<CalculatePortionParams>) -> Result<CallToolResult, McpError> {
        let ingredients: Vec<IngredientRequest> = p
            .ingredients
            .into_iter()
            .map(|i| IngredientRequest {
                food: i.food,
                quantity: i.quantity,
                carbs_per_100: i.carbs_per_100,
            })
            .collect();
        let catalog = self.catalog()?;
        let result = calculator::calculate_portion(&catalog, &ingredients, p.portion_weight)
            .map_err(core_error)?;
        json_result(&result)
    }
}

#[tool_handler]
impl ServerHandler for GlucoSmartService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "glucosmart".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("GlucoSmart".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "GlucoSmart - carbohydrate (HC) counting food diary. \
                 Call meal_instructions first. \
                 Foods: list_foods, search_foods, foods_by_category, list_categories, add_food. \
                 Meals: log_meal, get_meal, update_meal, delete_meal, reuse_meal, meals_by_date. \
                 Calculators: calculate_item_carbs, calculate_portion. \
                 Status: glucosmart_status."
                    .into(),
            ),
        }
    }
}
