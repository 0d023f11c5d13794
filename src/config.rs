use std::{env, net::SocketAddr, str::FromStr};

use anyhow::{Context, Result};
use tracing::Level;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub log_level: Level,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// `None` keeps the store in memory.
    pub path: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            server: ServerConfig {
                host: lookup("HOST").unwrap_or_else(|| "::".to_string()),
                port: lookup("PORT")
                    .unwrap_or_else(|| "3000".to_string())
                    .parse()
                    .context("PORT must be a valid port number")?,
            },
            database: DatabaseConfig {
                path: lookup("DATABASE_PATH").filter(|path| !path.is_empty()),
            },
            log_level: Level::from_str(
                &lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            )
            .context("LOG_LEVEL must be one of trace, debug, info, warn, error")?,
        })
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        let ip = self
            .host
            .parse()
            .with_context(|| format!("HOST '{}' is not a valid IP address", self.host))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.server.port, 3000);
        assert_eq!(
            config.server.bind_addr().unwrap(),
            "[::]:3000".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(config.database.path, None);
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn overrides() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("DATABASE_PATH", "users.db"),
            ("LOG_LEVEL", "debug"),
        ])
        .unwrap();

        assert_eq!(
            config.server.bind_addr().unwrap(),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(config.database.path.as_deref(), Some("users.db"));
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(config_from(&[("PORT", "eighty")]).is_err());
        assert!(config_from(&[("LOG_LEVEL", "loud")]).is_err());
        assert!(config_from(&[("HOST", "localhost")])
            .unwrap()
            .server
            .bind_addr()
            .is_err());
    }
}
