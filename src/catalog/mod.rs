//! Food catalog module
//!
//! The nutrition table and its lookup operations.

mod food_catalog;
pub mod seed;

pub use food_catalog::FoodCatalog;
