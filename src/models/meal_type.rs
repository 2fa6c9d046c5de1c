//! Meal type enum
//!
//! Classification of a logged meal by time of day.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    MorningSnack,
    Lunch,
    AfternoonSnack,
    Dinner,
    Supper,
    #[default]
    Other,
}

impl MealType {
    /// Every meal type, in the order of the day
    pub const ALL: [MealType; 7] = [
        MealType::Breakfast,
        MealType::MorningSnack,
        MealType::Lunch,
        MealType::AfternoonSnack,
        MealType::Dinner,
        MealType::Supper,
        MealType::Other,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            MealType::Breakfast => "Pequeno Almoço",
            MealType::MorningSnack => "Lanche da Manhã",
            MealType::Lunch => "Almoço",
            MealType::AfternoonSnack => "Lanche da Tarde",
            MealType::Dinner => "Jantar",
            MealType::Supper => "Ceia",
            MealType::Other => "Outra",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::MorningSnack => "morning_snack",
            MealType::Lunch => "lunch",
            MealType::AfternoonSnack => "afternoon_snack",
            MealType::Dinner => "dinner",
            MealType::Supper => "supper",
            MealType::Other => "other",
        }
    }

    /// Exact match against a display name, as a free-text meal name would carry it
    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.display_name() == name)
    }

    /// Parse from code or display name, case-insensitive; unknown input is `Other`
    pub fn from_str(s: &str) -> Self {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == needle || t.display_name().to_lowercase() == needle)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_display_name_is_exact() {
        assert_eq!(MealType::from_display_name("Almoço"), Some(MealType::Lunch));
        assert_eq!(MealType::from_display_name("almoço"), None);
        assert_eq!(MealType::from_display_name("Lunch"), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(MealType::from_str("afternoon_snack"), MealType::AfternoonSnack);
        assert_eq!(MealType::from_str("JANTAR"), MealType::Dinner);
        assert_eq!(MealType::from_str("brunch"), MealType::Other);
    }

    #[test]
    fn test_order_of_day() {
        assert_eq!(MealType::ALL.first(), Some(&MealType::Breakfast));
        assert_eq!(MealType::ALL.last(), Some(&MealType::Other));
    }
}
