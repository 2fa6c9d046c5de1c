//! GlucoSmart Status Tool
//!
//! Runtime status of the service and the usage guide for meal logging.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::catalog::FoodCatalog;
use crate::history::MealLog;

/// Meal logging instructions for AI assistants
pub const MEAL_INSTRUCTIONS: &str = r#"
# GlucoSmart Meal Logging Instructions

GlucoSmart counts carbohydrates (HC, hidratos de carbono) in grams.
Every food in the catalog stores its carbs per 100 g (or 100 ml).

## Finding foods

- `search_foods` with part of the name (case-insensitive, Portuguese names).
- `list_categories` to browse; `foods_by_category` with a category code
  such as `fresh_fruit` or its display name such as `Fruta Fresca`.
- Food references in other tools use the exact catalog name.

## Adding a missing food

`add_food` with `name`, `category` and `carbs`:
- without `portion_weight`, `carbs` is grams per 100 g/ml;
- with `portion_weight`, `carbs` is the grams in that portion (as printed
  on a label) and is converted to per-100 automatically.

## Logging a meal

`log_meal` with `items: [{food, quantity}]` (quantity in g/ml, > 0).
- `meal_type`: breakfast, morning_snack, lunch, afternoon_snack, dinner,
  supper or other. When given without `name`, the name becomes the type's
  display name (e.g. "Almoço").
- `timestamp`: `YYYY-MM-DDTHH:MM`, defaults to now.
- A meal needs at least one item.

## Reviewing and editing

- `meals_by_date` with `YYYY-MM-DD` returns the day's meals, totals per
  meal type and the daily total.
- `update_meal` replaces a meal's name, type and items (same id; the
  timestamp is kept unless a new one is given).
- `reuse_meal` logs a copy of an earlier meal now.
- `delete_meal` removes a meal.

## Recipes

`calculate_portion` with the weighed ingredients of the whole recipe and
the weight of the portion eaten. The portion's carbs are the recipe total
scaled by portion weight / total weight. Ingredients missing from the
catalog can be given with an explicit `carbs_per_100`.
"#;

/// Runtime status of the GlucoSmart service
#[derive(Debug, Clone, Serialize)]
pub struct GlucoSmartStatus {
    pub build: BuildInfo,

    /// Catalog and log sizes
    pub foods_total: usize,
    pub foods_user_added: usize,
    pub meals_logged: usize,

    /// Process information
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    pub fn get_status(&self, catalog: &FoodCatalog, log: &MealLog) -> GlucoSmartStatus {
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        GlucoSmartStatus {
            build: BuildInfo::current(),
            foods_total: catalog.len(),
            foods_user_added: catalog.user_foods().len(),
            meals_logged: log.len(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
