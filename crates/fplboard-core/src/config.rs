use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an unparseable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an unparseable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// The parsing logic is decoupled from the actual environment so tests can
/// drive it with a pure `HashMap` lookup instead of `set_var`/`remove_var`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let bind_addr = parse_addr("FPLBOARD_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("FPLBOARD_LOG_LEVEL", "info");
    let fpl_base_url = or_default(
        "FPLBOARD_FPL_BASE_URL",
        "https://fantasy.premierleague.com/api",
    );
    let request_timeout_secs = parse_u64("FPLBOARD_REQUEST_TIMEOUT_SECS", "30")?;

    Ok(AppConfig {
        bind_addr,
        log_level,
        fpl_base_url,
        request_timeout_secs,
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

    #[test]
    fn build_app_config_succeeds_with_empty_env() {
        let map: HashMap<&str, &str> = HashMap::new();
        let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should parse");
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
        assert_eq!(cfg.log_level, "info");
        assert_eq!(cfg.fpl_base_url, "https://fantasy.premierleague.com/api");
        assert_eq!(cfg.request_timeout_secs, 30);
    }

    #[test]
    fn build_app_config_applies_overrides() {
        let mut map = HashMap::new();
        map.insert("FPLBOARD_BIND_ADDR", "127.0.0.1:8080");
        map.insert("FPLBOARD_LOG_LEVEL", "debug");
        map.insert("FPLBOARD_FPL_BASE_URL", "http://localhost:9999/api");
        map.insert("FPLBOARD_REQUEST_TIMEOUT_SECS", "5");
        let cfg = build_app_config(lookup_from_map(&map)).expect("overrides should parse");
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(cfg.log_level, "debug");
        assert_eq!(cfg.fpl_base_url, "http://localhost:9999/api");
        assert_eq!(cfg.request_timeout_secs, 5);
    }

    #[test]
    fn build_app_config_fails_with_invalid_bind_addr() {
        let mut map = HashMap::new();
        map.insert("FPLBOARD_BIND_ADDR", "not-a-socket-addr");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FPLBOARD_BIND_ADDR"),
            "expected InvalidEnvVar(FPLBOARD_BIND_ADDR), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_with_invalid_timeout() {
        let mut map = HashMap::new();
        map.insert("FPLBOARD_REQUEST_TIMEOUT_SECS", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FPLBOARD_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(FPLBOARD_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }
}
