use crate::error::{AppError, Result};
use std::{env, path::PathBuf, str::FromStr, time::Duration};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
    pub static_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub query_timeout: Duration,
}

#[derive(Debug, Clone, Default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup, so parsing can be
    /// exercised without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server: ServerConfig {
                host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
                port: parse_or(&lookup, "PORT", 8081)?,
                max_body_size: parse_or(&lookup, "MAX_BODY_SIZE", 1_048_576)?,
                static_dir: lookup("STATIC_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("./static")),
            },
            database: DatabaseConfig {
                url: lookup("DB_URL")
                    .ok_or_else(|| AppError::ConfigError("DB_URL not set".to_string()))?,
                max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 10)?,
                query_timeout: Duration::from_secs(parse_or(
                    &lookup,
                    "DB_QUERY_TIMEOUT_SECS",
                    5,
                )?),
            },
            cors: CorsConfig {
                allowed_origins: lookup("FRONTEND_URL")
                    .map(|origins| {
                        origins
                            .split(',')
                            .map(|s| s.trim().to_string())
                            .filter(|s| !s.is_empty())
                            .collect()
                    })
                    .unwrap_or_default(),
            },
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .parse()
            .map_err(|_| AppError::ConfigError(format!("Invalid {} value", key))),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_db_url_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[("DB_URL", "postgres://localhost/shop")]))
            .unwrap();

        assert_eq!(config.server_address(), "0.0.0.0:8081");
        assert_eq!(config.server.static_dir, PathBuf::from("./static"));
        assert_eq!(config.server.max_body_size, 1_048_576);
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.database.query_timeout, Duration::from_secs(5));
        assert!(config.cors.allowed_origins.is_empty());
    }

    #[test]
    fn missing_db_url_is_a_config_error() {
        let result = AppConfig::from_lookup(lookup_from(&[]));
        assert!(matches!(result, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn invalid_port_is_rejected() {
        let result = AppConfig::from_lookup(lookup_from(&[
            ("DB_URL", "postgres://localhost/shop"),
            ("PORT", "eighty"),
        ]));
        assert!(matches!(result, Err(AppError::ConfigError(msg)) if msg.contains("PORT")));
    }

    #[test]
    fn overrides_and_cors_origins_are_parsed() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DB_URL", "postgres://db/shop"),
            ("HOST", "127.0.0.1"),
            ("PORT", "9000"),
            ("DB_QUERY_TIMEOUT_SECS", "2"),
            ("STATIC_DIR", "/srv/www"),
            ("FRONTEND_URL", "http://a.test, http://b.test,"),
        ]))
        .unwrap();

        assert_eq!(config.server_address(), "127.0.0.1:9000");
        assert_eq!(config.database.query_timeout, Duration::from_secs(2));
        assert_eq!(config.server.static_dir, PathBuf::from("/srv/www"));
        assert_eq!(
            config.cors.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }
}
