use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::{info, warn};

pub const DEFAULT_API_URL: &str = "https://gm-back-production.up.railway.app/api";
pub const DEFAULT_TOKEN_FILE: &str = ".gymmind_token.json";

/// Settings read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub api_url: String,
    pub token_file: PathBuf,
    pub normalize_meal_weights: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_file: PathBuf::from(DEFAULT_TOKEN_FILE),
            normalize_meal_weights: false,
        }
    }
}

impl Config {
    /// Load from `GYMMIND_*` variables, falling back to defaults.
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using a custom variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            api_url: try_load(&lookup, "GYMMIND_API_URL", defaults.api_url),
            token_file: try_load(&lookup, "GYMMIND_TOKEN_FILE", defaults.token_file),
            normalize_meal_weights: try_load(
                &lookup,
                "GYMMIND_NORMALIZE_WEIGHTS",
                defaults.normalize_meal_weights,
            ),
        }
    }
}

fn try_load<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + std::fmt::Debug,
    T::Err: Display,
{
    match lookup(key) {
        None => {
            info!("{key} not set, using default: {default:?}");
            default
        }
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value '{raw}': {e}, using default: {default:?}");
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_values_from_environment() {
        let config = Config::from_lookup(lookup_from(&[
            ("GYMMIND_API_URL", "http://localhost:3003/api"),
            ("GYMMIND_TOKEN_FILE", "/tmp/tok.json"),
            ("GYMMIND_NORMALIZE_WEIGHTS", "true"),
        ]));
        assert_eq!(config.api_url, "http://localhost:3003/api");
        assert_eq!(config.token_file, PathBuf::from("/tmp/tok.json"));
        assert!(config.normalize_meal_weights);
    }

    #[test]
    fn test_invalid_value_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("GYMMIND_NORMALIZE_WEIGHTS", "maybe")]));
        assert!(!config.normalize_meal_weights);
    }
}
