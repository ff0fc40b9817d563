use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::inventory::generator::{BATCH_CEILING, MAX_BATCH, MIN_BATCH};

/// Deployment stage the service runs under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Test => "test",
            Self::Production => "production",
        }
    }
}

/// Settings for the search service and the inventory engine behind it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub inventory: InventoryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::parse(&env_or("APP_ENV", "development"));
        let host = env_or("APP_HOST", "127.0.0.1");
        let port = env_or("APP_PORT", "3000")
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;
        let log_level = env_or("APP_LOG_LEVEL", "info");

        let min_offers = batch_bound("INVENTORY_MIN_OFFERS", MIN_BATCH)?;
        let max_offers = batch_bound("INVENTORY_MAX_OFFERS", MAX_BATCH)?;
        if min_offers == 0 || min_offers > max_offers {
            return Err(ConfigError::InvalidBatchRange {
                min: min_offers,
                max: max_offers,
            });
        }

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            inventory: InventoryConfig {
                min_offers,
                max_offers,
            },
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn batch_bound(key: &'static str, default: usize) -> Result<usize, ConfigError> {
    let value = match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidNumber { key })?,
        Err(_) => default,
    };
    if value > BATCH_CEILING {
        return Err(ConfigError::BatchTooLarge { key, value });
    }
    Ok(value)
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Bounds for the number of offers drawn per search before coverage top-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryConfig {
    pub min_offers: usize,
    pub max_offers: usize,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            min_offers: MIN_BATCH,
            max_offers: MAX_BATCH,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidNumber { key: &'static str },
    InvalidBatchRange { min: usize, max: usize },
    BatchTooLarge { key: &'static str, value: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidNumber { key } => {
                write!(f, "{key} must be a non-negative integer")
            }
            ConfigError::InvalidBatchRange { min, max } => write!(
                f,
                "offer batch range {min}..={max} is invalid: minimum must be at least 1 and not exceed the maximum"
            ),
            ConfigError::BatchTooLarge { key, value } => {
                write!(f, "{key}={value} exceeds the ceiling of {BATCH_CEILING} offers")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidNumber { .. }
            | ConfigError::InvalidBatchRange { .. }
            | ConfigError::BatchTooLarge { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in [
            "APP_ENV",
            "APP_HOST",
            "APP_PORT",
            "APP_LOG_LEVEL",
            "INVENTORY_MIN_OFFERS",
            "INVENTORY_MAX_OFFERS",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.inventory, InventoryConfig::default());
    }

    #[test]
    fn accepts_localhost_host() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_HOST", "localhost");
        let config = AppConfig::load().expect("config loads");
        let addr = config.server.socket_addr().expect("localhost resolves");
        assert_eq!(addr, SocketAddr::new(IpAddr::from([127, 0, 0, 1]), 3000));
        reset_env();
    }

    #[test]
    fn rejects_unparseable_port() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_PORT", "eighty");
        assert!(matches!(AppConfig::load(), Err(ConfigError::InvalidPort)));
        reset_env();
    }

    #[test]
    fn rejects_inverted_offer_bounds() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("INVENTORY_MIN_OFFERS", "9");
        env::set_var("INVENTORY_MAX_OFFERS", "4");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::InvalidBatchRange { min: 9, max: 4 })
        ));
        reset_env();
    }

    #[test]
    fn rejects_offer_bounds_above_the_ceiling() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("INVENTORY_MIN_OFFERS", "50000");
        env::set_var("INVENTORY_MAX_OFFERS", "50000");
        let err = AppConfig::load().expect_err("oversized batch is rejected");
        assert!(matches!(
            err,
            ConfigError::BatchTooLarge {
                key: "INVENTORY_MIN_OFFERS",
                value: 50000
            }
        ));
        assert!(err.to_string().contains("50000"));

        env::set_var("INVENTORY_MIN_OFFERS", "6");
        env::set_var("INVENTORY_MAX_OFFERS", &(BATCH_CEILING + 1).to_string());
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::BatchTooLarge {
                key: "INVENTORY_MAX_OFFERS",
                ..
            })
        ));

        env::set_var("INVENTORY_MAX_OFFERS", &BATCH_CEILING.to_string());
        let config = AppConfig::load().expect("ceiling itself is accepted");
        assert_eq!(config.inventory.max_offers, BATCH_CEILING);
        reset_env();
    }

    #[test]
    fn production_aliases_are_recognized() {
        assert_eq!(AppEnvironment::parse("PROD"), AppEnvironment::Production);
        assert_eq!(AppEnvironment::parse(" ci "), AppEnvironment::Test);
        assert_eq!(AppEnvironment::parse("staging"), AppEnvironment::Development);
    }
}
