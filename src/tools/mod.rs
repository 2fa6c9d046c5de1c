//! GlucoSmart Tools module
//!
//! Tool implementations behind the MCP server: plain functions over the
//! catalog and meal log returning serializable responses.

pub mod calculator;
pub mod food_items;
pub mod meals;
pub mod status;
