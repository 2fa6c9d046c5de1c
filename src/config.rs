//! Runtime configuration
//!
//! Read from environment variables at startup.

/// Default log directive when `GLUCOSMART_LOG` is unset
pub const DEFAULT_LOG_DIRECTIVE: &str = "glucosmart=info";

pub const LOG_ENV: &str = "GLUCOSMART_LOG";
pub const SAMPLE_MEALS_ENV: &str = "GLUCOSMART_SAMPLE_MEALS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directive added to the `RUST_LOG` filter
    pub log_directive: String,
    /// Seed the meal log with the example day
    pub sample_meals: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
            sample_meals: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_directive = lookup(LOG_ENV)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_directive);

        let sample_meals = match lookup(SAMPLE_MEALS_ENV) {
            Some(raw) => parse_bool(&raw).unwrap_or_else(|| {
                // The subscriber is not installed yet, so this goes straight to stderr
                eprintln!(
                    "Ignoring {}={:?}: expected true/false, using {}",
                    SAMPLE_MEALS_ENV, raw, defaults.sample_meals
                );
                defaults.sample_meals
            }),
            None => defaults.sample_meals,
        };

        Self {
            log_directive,
            sample_meals,
        }
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config_with(&[]), Config::default());
        assert!(Config::default().sample_meals);
    }

    #[test]
    fn test_overrides() {
        let config = config_with(&[(LOG_ENV, "glucosmart=debug"), (SAMPLE_MEALS_ENV, "no")]);
        assert_eq!(config.log_directive, "glucosmart=debug");
        assert!(!config.sample_meals);
    }

    #[test]
    fn test_blank_log_and_bad_bool_fall_back() {
        let config = config_with(&[(LOG_ENV, "  "), (SAMPLE_MEALS_ENV, "maybe")]);
        assert_eq!(config.log_directive, DEFAULT_LOG_DIRECTIVE);
        assert!(config.sample_meals);
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" 0 "), Some(false));
        assert_eq!(parse_bool("2"), None);
    }
}
