//! Server configuration.
//!
//! Values come from the environment (a `.env` file is loaded first) and can be
//! overridden by CLI flags in `main.rs`.
//!
//! | Variable                   | Default                 |
//! |----------------------------|-------------------------|
//! | `IDEATION_PORT`            | `3000`                  |
//! | `IDEATION_FRONTEND_ORIGIN` | `http://localhost:8080` |
//! | `IDEATION_SEED`            | built-in demo data      |
//! | `IDEATION_MODEL`           | [`crate::ai::DEFAULT_MODEL`] |
//! | `IDEATION_DEV_USER`        | `user-1`                |

use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

use crate::store::seed::DEV_USER_ID;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    /// Origin allowed to send credentialed requests (CORS)
    pub frontend_origin: String,
    /// JSON seed file; demo data when absent
    pub seed: Option<PathBuf>,
    /// Model override for title suggestions
    pub model: Option<String>,
    /// User every request acts as
    pub dev_user_id: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            frontend_origin: DEFAULT_FRONTEND_ORIGIN.to_string(),
            seed: None,
            model: None,
            dev_user_id: DEV_USER_ID.to_string(),
        }
    }
}

impl ServerConfig {
    /// Load from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            port: parse_or("IDEATION_PORT", lookup("IDEATION_PORT"), defaults.port),
            frontend_origin: lookup("IDEATION_FRONTEND_ORIGIN")
                .unwrap_or(defaults.frontend_origin),
            seed: lookup("IDEATION_SEED")
                .filter(|s| !s.is_empty())
                .map(PathBuf::from),
            model: lookup("IDEATION_MODEL").filter(|s| !s.is_empty()),
            dev_user_id: lookup("IDEATION_DEV_USER").unwrap_or(defaults.dev_user_id),
        }
    }
}

fn parse_or<T: FromStr>(key: &str, value: Option<String>, default: T) -> T
where
    T::Err: Display,
{
    match value {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            eprintln!("⚠️  Invalid {} value '{}': {}, using default", key, raw, e);
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_reads_and_validates_values() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("IDEATION_PORT", "not-a-port"),
            ("IDEATION_SEED", "seed.json"),
            ("IDEATION_MODEL", ""),
            ("IDEATION_DEV_USER", "user-2"),
        ]);
        let config = ServerConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.seed, Some(PathBuf::from("seed.json")));
        assert_eq!(config.model, None);
        assert_eq!(config.dev_user_id, "user-2");
    }
}
