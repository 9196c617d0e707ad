use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_UPLOAD_LIMIT_BYTES: usize = 10 * 1024 * 1024;

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,
    /// Maximum accepted request body size for spreadsheet uploads
    pub upload_limit_bytes: usize,
}

impl Config {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, returning `None` for unset variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        let upload_limit_bytes = match lookup("UPLOAD_LIMIT_BYTES") {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: "UPLOAD_LIMIT_BYTES".to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_UPLOAD_LIMIT_BYTES,
        };

        Ok(Self {
            database_url,
            bind_address,
            upload_limit_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |var| vars.get(var).cloned()
    }

    /// Expect defaults for optional variables when only the database URL is set
    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup(&[("DATABASE_URL", "sqlite::memory:")]))
            .expect("config should load");

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_address.to_string(), DEFAULT_BIND_ADDRESS);
        assert_eq!(config.upload_limit_bytes, DEFAULT_UPLOAD_LIMIT_BYTES);
    }

    /// Expect MissingEnvVar when DATABASE_URL is not set
    #[test]
    fn requires_database_url() {
        let result = Config::from_lookup(lookup(&[]));

        assert!(matches!(result, Err(ConfigError::MissingEnvVar(var)) if var == "DATABASE_URL"));
    }

    /// Expect InvalidEnvValue for an unparsable bind address or upload limit
    #[test]
    fn rejects_invalid_values() {
        let bad_address = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("BIND_ADDRESS", "localhost"),
        ]));
        let bad_limit = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("UPLOAD_LIMIT_BYTES", "ten"),
        ]));

        assert!(matches!(
            bad_address,
            Err(ConfigError::InvalidEnvValue { var, .. }) if var == "BIND_ADDRESS"
        ));
        assert!(matches!(
            bad_limit,
            Err(ConfigError::InvalidEnvValue { var, .. }) if var == "UPLOAD_LIMIT_BYTES"
        ));
    }
}
