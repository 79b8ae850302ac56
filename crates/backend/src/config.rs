//! Server configuration read from the environment

use deadpool_postgres::Config;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct ServerConfig {
    pub bind_address: String,
    pub database: Config,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidPort(value) => write!(f, "DB_PORT is not a valid port: {:?}", value),
        }
    }
}

impl std::error::Error for ConfigError {}

impl ServerConfig {
    /// Read `DB_*` and `BIND_ADDRESS` from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut database = Config::new();
        database.host = lookup("DB_HOST");
        database.port = match lookup("DB_PORT") {
            Some(port) => Some(port.parse().map_err(|_| ConfigError::InvalidPort(port))?),
            None => None,
        };
        database.dbname = lookup("DB_NAME");
        database.user = lookup("DB_USER");
        database.password = lookup("DB_PASSWORD");

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        Ok(Self { bind_address, database })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_to_port_8080() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert!(config.database.host.is_none());
        assert!(config.database.port.is_none());
    }

    #[test]
    fn reads_database_settings() {
        let config = config_from(&[
            ("DB_HOST", "db.internal"),
            ("DB_PORT", "5433"),
            ("DB_NAME", "wordle"),
            ("DB_USER", "wordle"),
            ("DB_PASSWORD", "hunter2"),
            ("BIND_ADDRESS", "127.0.0.1:9000"),
        ])
        .unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.database.host.as_deref(), Some("db.internal"));
        assert_eq!(config.database.port, Some(5433));
        assert_eq!(config.database.dbname.as_deref(), Some("wordle"));
        assert_eq!(config.database.password.as_deref(), Some("hunter2"));
    }

    #[test]
    fn malformed_port_is_an_error() {
        assert!(matches!(
            config_from(&[("DB_PORT", "fifty")]),
            Err(ConfigError::InvalidPort(p)) if p == "fifty"
        ));
    }
}
