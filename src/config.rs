// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:5173";
const DEFAULT_RECENT_ACTIVITIES_LIMIT: usize = 20;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// GCP project holding the Firestore database
    pub gcp_project_id: String,
    /// Server port
    pub port: u16,
    /// Frontend URL (allowed CORS origin)
    pub frontend_url: String,
    /// Default number of activities returned with an athlete summary
    pub recent_activities_limit: usize,
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            gcp_project_id: env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string()),
            port: parse_var("PORT", DEFAULT_PORT)?,
            frontend_url: env::var("FRONTEND_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_FRONTEND_URL.to_string()),
            recent_activities_limit: parse_var(
                "RECENT_ACTIVITIES_LIMIT",
                DEFAULT_RECENT_ACTIVITIES_LIMIT,
            )?,
        })
    }

    /// Config for tests; never reads the environment.
    pub fn test_default() -> Self {
        Self {
            gcp_project_id: "test-project".to_string(),
            port: DEFAULT_PORT,
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            recent_activities_limit: DEFAULT_RECENT_ACTIVITIES_LIMIT,
        }
    }
}

/// Read an optional variable, falling back to `default` when unset.
fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            value: raw.clone(),
        }),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env vars are process-wide; each test uses its own variable name.

    #[test]
    fn test_parse_var_default_when_unset() {
        env::remove_var("ZC_TEST_UNSET_LIMIT");
        assert_eq!(parse_var("ZC_TEST_UNSET_LIMIT", 7usize).unwrap(), 7);
    }

    #[test]
    fn test_parse_var_reads_value() {
        env::set_var("ZC_TEST_PORT", " 9090 ");
        assert_eq!(parse_var("ZC_TEST_PORT", 8080u16).unwrap(), 9090);
    }

    #[test]
    fn test_parse_var_rejects_garbage() {
        env::set_var("ZC_TEST_BAD_PORT", "eighty");
        let err = parse_var("ZC_TEST_BAD_PORT", 8080u16).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: "ZC_TEST_BAD_PORT", .. }));
    }

    #[test]
    fn test_default_values() {
        let config = Config::test_default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.recent_activities_limit, 20);
    }
}
