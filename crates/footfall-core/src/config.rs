use crate::app_config::AppConfig;
use crate::ConfigError;

const TRENDS_BATCH_SIZE_RANGE: std::ops::RangeInclusive<usize> = 1..=5;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can use a plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_bounded = |var: &str,
                         default: &str,
                         range: std::ops::RangeInclusive<usize>|
     -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        let value = raw
            .parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })?;
        if !range.contains(&value) {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!(
                    "{value} is outside {}..={}",
                    range.start(),
                    range.end()
                ),
            });
        }
        Ok(value)
    };

    let categories_path = PathBuf::from(or_default(
        "FOOTFALL_CATEGORIES_PATH",
        "./config/categories.yaml",
    ));
    let trends_batch_size =
        parse_bounded("FOOTFALL_TRENDS_BATCH_SIZE", "5", TRENDS_BATCH_SIZE_RANGE)?;

    Ok(AppConfig {
        categories_path,
        trends_batch_size,
    })
}
