//! Meal MCP Tools
//!
//! Logging, editing and reviewing meals.

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::catalog::FoodCatalog;
use crate::error::{CoreError, CoreResult};
use crate::history::{group_by_meal_type, MealLog};
use crate::models::{FoodItem, Meal, MealId, MealItem, MealType};
use crate::nutrition::{build_meal, build_typed_meal, format_carbs};

/// Accepted timestamp layouts, most specific first
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// One portion of a meal in a tool request
#[derive(Debug, Clone)]
pub struct PortionRequest {
    /// Catalog food name (first exact match)
    pub food: String,
    /// Grams or ml
    pub quantity: f64,
}

/// Fields of a meal to log or to replace an existing meal with
#[derive(Debug, Clone, Default)]
pub struct MealRequest {
    pub name: Option<String>,
    pub meal_type: Option<String>,
    pub timestamp: Option<String>,
    pub items: Vec<PortionRequest>,
}

#[derive(Debug, Serialize)]
pub struct MealItemDetail {
    pub food: String,
    pub quantity: f64,
    pub carbs: f64,
    pub carbs_display: String,
}

impl From<&MealItem> for MealItemDetail {
    fn from(item: &MealItem) -> Self {
        Self {
            food: item.food().name().to_string(),
            quantity: item.quantity(),
            carbs: item.carbs(),
            carbs_display: format_carbs(item.carbs()),
        }
    }
}

/// Full meal as returned by the meal tools
#[derive(Debug, Serialize)]
pub struct MealDetail {
    pub id: String,
    pub name: String,
    pub meal_type: MealType,
    pub meal_type_name: &'static str,
    pub timestamp: NaiveDateTime,
    pub items: Vec<MealItemDetail>,
    pub total_carbs: f64,
    pub total_carbs_display: String,
}

impl From<&Meal> for MealDetail {
    fn from(meal: &Meal) -> Self {
        Self {
            id: meal.id().to_string(),
            name: meal.name().to_string(),
            meal_type: meal.meal_type(),
            meal_type_name: meal.meal_type().display_name(),
            timestamp: meal.timestamp(),
            items: meal.items().iter().map(MealItemDetail::from).collect(),
            total_carbs: meal.total_carbs(),
            total_carbs_display: format_carbs(meal.total_carbs()),
        }
    }
}

/// Meals of one type on a day
#[derive(Debug, Serialize)]
pub struct MealTypeSummary {
    pub meal_type: MealType,
    pub display_name: &'static str,
    pub meal_ids: Vec<String>,
    pub total_carbs: f64,
}

/// Response for meals_by_date
#[derive(Debug, Serialize)]
pub struct DayMealsResponse {
    pub date: NaiveDate,
    pub meals: Vec<MealDetail>,
    pub by_type: Vec<MealTypeSummary>,
    pub total_carbs: f64,
    pub total_carbs_display: String,
}

/// Response for delete_meal
#[derive(Debug, Serialize)]
pub struct DeleteMealResponse {
    pub success: bool,
    pub deleted_id: String,
}

pub fn parse_timestamp(s: &str) -> CoreResult<NaiveDateTime> {
    let trimmed = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| {
            CoreError::invalid(format!(
                "invalid timestamp '{}', expected YYYY-MM-DDTHH:MM[:SS]",
                trimmed
            ))
        })
}

pub fn parse_date(s: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| CoreError::invalid(format!("invalid date '{}', expected YYYY-MM-DD", s.trim())))
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn find_meal(log: &MealLog, id: &str) -> CoreResult<MealId> {
    let id = MealId::parse_str(id)?;
    log.get(id)
        .map(Meal::id)
        .ok_or_else(|| CoreError::not_found(format!("meal with id {}", id)))
}

fn resolve_portions(catalog: &FoodCatalog, items: &[PortionRequest]) -> CoreResult<Vec<(FoodItem, f64)>> {
    items
        .iter()
        .map(|p| {
            catalog
                .find_by_name(&p.food)
                .cloned()
                .map(|food| (food, p.quantity))
                .ok_or_else(|| CoreError::not_found(format!("food '{}' is not in the catalog", p.food)))
        })
        .collect()
}

/// Build a meal from a request. An explicit meal type wins; otherwise the type
/// is inferred from the name.
fn meal_from_request(
    catalog: &FoodCatalog,
    request: &MealRequest,
    default_timestamp: NaiveDateTime,
) -> CoreResult<Meal> {
    let timestamp = match request.timestamp.as_deref() {
        Some(ts) => parse_timestamp(ts)?,
        None => default_timestamp,
    };
    let portions = resolve_portions(catalog, &request.items)?;
    let selections = portions.iter().map(|(food, quantity)| (food, *quantity));

    match (request.meal_type.as_deref(), request.name.as_deref()) {
        (Some(meal_type), name) => {
            build_typed_meal(MealType::from_str(meal_type), name, timestamp, selections)
        }
        (None, Some(name)) if !name.trim().is_empty() => build_meal(name.trim(), timestamp, selections),
        (None, _) => build_typed_meal(MealType::Other, None, timestamp, selections),
    }
}

/// Log a new meal (timestamp defaults to now)
pub fn log_meal(catalog: &FoodCatalog, log: &mut MealLog, request: &MealRequest) -> CoreResult<MealDetail> {
    let meal = meal_from_request(catalog, request, now())?;
    let detail = MealDetail::from(&meal);
    log.add(meal);
    Ok(detail)
}

/// Replace a logged meal wholesale, keeping its id. The timestamp defaults to the existing one.
pub fn update_meal(
    catalog: &FoodCatalog,
    log: &mut MealLog,
    id: &str,
    request: &MealRequest,
) -> CoreResult<MealDetail> {
    let id = find_meal(log, id)?;
    let existing_timestamp = log.get(id).map(Meal::timestamp).unwrap_or_else(now);
    let meal = meal_from_request(catalog, request, existing_timestamp)?.with_id(id);
    let detail = MealDetail::from(&meal);
    log.update(meal)
        .ok_or_else(|| CoreError::not_found(format!("meal with id {}", id)))?;
    Ok(detail)
}

pub fn delete_meal(log: &mut MealLog, id: &str) -> CoreResult<DeleteMealResponse> {
    let id = find_meal(log, id)?;
    log.delete(id)
        .ok_or_else(|| CoreError::not_found(format!("meal with id {}", id)))?;
    Ok(DeleteMealResponse {
        success: true,
        deleted_id: id.to_string(),
    })
}

pub fn get_meal(log: &MealLog, id: &str) -> CoreResult<MealDetail> {
    let id = find_meal(log, id)?;
    log.get(id)
        .map(MealDetail::from)
        .ok_or_else(|| CoreError::not_found(format!("meal with id {}", id)))
}

/// Log a copy of an earlier meal (timestamp defaults to now)
pub fn reuse_meal(log: &mut MealLog, id: &str, timestamp: Option<&str>) -> CoreResult<MealDetail> {
    let id = find_meal(log, id)?;
    let timestamp = match timestamp {
        Some(ts) => parse_timestamp(ts)?,
        None => now(),
    };
    let copy = log
        .get(id)
        .map(|m| m.reuse(timestamp))
        .ok_or_else(|| CoreError::not_found(format!("meal with id {}", id)))?;
    let detail = MealDetail::from(&copy);
    log.add(copy);
    Ok(detail)
}

/// All meals of a day, plus per-type and daily carb totals
pub fn meals_by_date(log: &MealLog, date: &str) -> CoreResult<DayMealsResponse> {
    let date = parse_date(date)?;
    let meals = log.by_date(date);
    let total_carbs = log.total_carbs_on(date);

    let by_type = group_by_meal_type(&meals)
        .into_iter()
        .map(|group| MealTypeSummary {
            meal_type: group.meal_type,
            display_name: group.display_name,
            meal_ids: group.meals.iter().map(|m| m.id().to_string()).collect(),
            total_carbs: group.total_carbs,
        })
        .collect();

    Ok(DayMealsResponse {
        date,
        meals: meals.iter().map(MealDetail::from).collect(),
        by_type,
        total_carbs,
        total_carbs_display: format_carbs(total_carbs),
    })
}
