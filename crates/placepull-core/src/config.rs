use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if `GOOGLE_PLACES_API_KEY` is missing or a value is
/// not parseable.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if `GOOGLE_PLACES_API_KEY` is missing or a value is
/// not parseable.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The parsing/validation logic is decoupled from the actual environment so
/// it can be tested with a plain `HashMap` lookup — no `set_var`/`remove_var`
/// needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let places_api_key = require("GOOGLE_PLACES_API_KEY")?;

    let log_level = or_default("PLACEPULL_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("PLACEPULL_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("PLACEPULL_USER_AGENT", "placepull/0.1 (places-export)");
    let page_token_delay_ms = parse_u64("PLACEPULL_PAGE_TOKEN_DELAY_MS", "2000")?;
    let output_path = PathBuf::from(or_default("PLACEPULL_OUTPUT_PATH", "./places_data.csv"));

    Ok(AppConfig {
        places_api_key,
        log_level,
        request_timeout_secs,
        user_agent,
        page_token_delay_ms,
        output_path,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with the required env vars populated.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("GOOGLE_PLACES_API_KEY", "test-key");
        m
    }

    #[test]
    fn build_app_config_fails_without_api_key() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "GOOGLE_PLACES_API_KEY"),
            "expected MissingEnvVar(GOOGLE_PLACES_API_KEY), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_succeeds_with_defaults() {
        let map = full_env();
        let cfg = build_app_config(lookup_from_map(&map)).expect("expected Ok");
        assert_eq!(cfg.places_api_key, "test-key");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.user_agent, "placepull/0.1 (places-export)");
        assert_eq!(cfg.page_token_delay_ms, 2000);
        assert_eq!(cfg.output_path, PathBuf::from("./places_data.csv"));
    }

    #[test]
    fn page_token_delay_override() {
        let mut map = full_env();
        map.insert("PLACEPULL_PAGE_TOKEN_DELAY_MS", "50");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.page_token_delay_ms, 50);
    }

    #[test]
    fn page_token_delay_invalid() {
        let mut map = full_env();
        map.insert("PLACEPULL_PAGE_TOKEN_DELAY_MS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLACEPULL_PAGE_TOKEN_DELAY_MS"),
            "expected InvalidEnvVar(PLACEPULL_PAGE_TOKEN_DELAY_MS), got: {result:?}"
        );
    }

    #[test]
    fn request_timeout_override() {
        let mut map = full_env();
        map.insert("PLACEPULL_REQUEST_TIMEOUT_SECS", "60");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.request_timeout_secs, 60);
    }

    #[test]
    fn request_timeout_invalid() {
        let mut map = full_env();
        map.insert("PLACEPULL_REQUEST_TIMEOUT_SECS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "PLACEPULL_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(PLACEPULL_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn output_path_override() {
        let mut map = full_env();
        map.insert("PLACEPULL_OUTPUT_PATH", "/tmp/out.csv");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.output_path, PathBuf::from("/tmp/out.csv"));
    }

    #[test]
    fn user_agent_override() {
        let mut map = full_env();
        map.insert("PLACEPULL_USER_AGENT", "custom-agent/2.0");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.user_agent, "custom-agent/2.0");
    }
}
