//! Presentation helpers
//!
//! Formatting of carbohydrate values and parsing of typed numeric input.
//! Values are formatted only at the output boundary and never parsed back.

use crate::error::{CoreError, CoreResult};

/// Unit label for carbohydrate grams
pub const CARBS_UNIT: &str = "HC";

/// One decimal place followed by the carbohydrate unit, e.g. `12.9 HC`
pub fn format_carbs(grams: f64) -> String {
    format!("{:.1} {}", grams, CARBS_UNIT)
}

/// Parse a typed number. Accepts surrounding whitespace and a decimal comma.
///
/// # Errors
/// `InvalidArgument` for blank, non-numeric or non-finite input
pub fn parse_amount(text: &str) -> CoreResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CoreError::invalid("a number is required"));
    }
    let normalised = trimmed.replace(',', ".");
    match normalised.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CoreError::invalid(format!("'{}' is not a number", trimmed))),
    }
}

/// Parse a quantity in g/ml, which must be greater than zero
pub fn parse_quantity(text: &str) -> CoreResult<f64> {
    let value = parse_amount(text)?;
    if value <= 0.0 {
        return Err(CoreError::invalid(format!(
            "quantity must be greater than 0, got {}",
            value
        )));
    }
    Ok(value)
}
