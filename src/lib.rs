//! GlucoSmart Library
//!
//! Food catalog, meal carbohydrate aggregation and the meal log.

pub mod build_info;
pub mod catalog;
pub mod config;
pub mod error;
pub mod history;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod tools;

pub use catalog::FoodCatalog;
pub use error::{CoreError, CoreResult};
pub use history::MealLog;
