use std::{env, time::Duration};

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub app_address: String,
    pub database_path: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Config {
    /// Reads the process environment. Call `dotenvy::dotenv()` first to pick
    /// up a `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let app_host = var("APP_HOST", "127.0.0.1");
        let app_port = var("APP_PORT", "8000");
        let app_address = format!("{}:{}", app_host, app_port);

        let database_path = var("DATABASE_PATH", "messenger.db");

        let max_connections = var("DB_MAX_CONNECTIONS", "5")
            .parse::<u32>()
            .context("DB_MAX_CONNECTIONS must be a positive integer")?;
        let acquire_timeout = var("DB_ACQUIRE_TIMEOUT_SECS", "3")
            .parse::<u64>()
            .map(Duration::from_secs)
            .context("DB_ACQUIRE_TIMEOUT_SECS must be a whole number of seconds")?;

        Ok(Config {
            app_address,
            database_path,
            max_connections,
            acquire_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.app_address, "127.0.0.1:8000");
        assert_eq!(config.database_path, "messenger.db");
        assert_eq!(config.max_connections, 5);
        assert_eq!(config.acquire_timeout, Duration::from_secs(3));
    }

    #[test]
    fn overrides() {
        let config = config_from(&[
            ("APP_HOST", "0.0.0.0"),
            ("APP_PORT", "9000"),
            ("DATABASE_PATH", "/tmp/chat.db"),
            ("DB_MAX_CONNECTIONS", "12"),
        ])
        .unwrap();
        assert_eq!(config.app_address, "0.0.0.0:9000");
        assert_eq!(config.database_path, "/tmp/chat.db");
        assert_eq!(config.max_connections, 12);
    }

    #[test]
    fn rejects_bad_numbers() {
        assert!(config_from(&[("DB_MAX_CONNECTIONS", "many")]).is_err());
        assert!(config_from(&[("DB_ACQUIRE_TIMEOUT_SECS", "-1")]).is_err());
    }
}
