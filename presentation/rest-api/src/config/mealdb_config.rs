use std::env;
use std::time::Duration;

use mealdb::client::DEFAULT_BASE_URL;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for TheMealDB catalog access.
#[derive(Debug, Clone)]
pub struct MealDbConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl MealDbConfig {
    /// Environment variables:
    /// - MEALDB_BASE_URL: API root (default: the public v1 test-key endpoint)
    /// - MEALDB_TIMEOUT_SECS: request timeout in seconds (default: 30)
    pub fn from_env() -> anyhow::Result<Self> {
        let base_url =
            env::var("MEALDB_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let timeout = parse_timeout(env::var("MEALDB_TIMEOUT_SECS").ok().as_deref())?;

        Ok(Self { base_url, timeout })
    }
}

fn parse_timeout(raw: Option<&str>) -> anyhow::Result<Duration> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        Some(value) => {
            let secs: u64 = value.parse().map_err(|_| {
                anyhow::anyhow!(
                    "MEALDB_TIMEOUT_SECS must be a whole number of seconds, got '{}'",
                    value
                )
            })?;
            if secs == 0 {
                anyhow::bail!("MEALDB_TIMEOUT_SECS must be greater than zero");
            }
            Ok(Duration::from_secs(secs))
        }
    }
}
