use dashmap::DashMap;
use std::env;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://users.db?mode=rwc";
pub const DEFAULT_INIT_TIMEOUT_SECS: u64 = 30;

/// Raw key/value configuration
///
/// Seeded from the process environment (after `.env` has been applied) and
/// overridable in code, which is how tests feed it.
#[derive(Clone, Default)]
pub struct ConfigService {
    config: Arc<DashMap<String, String>>,
}

impl ConfigService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let service = Self::new();
        for (key, value) in env::vars() {
            service.set(&key, &value);
        }
        service
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.config.get(key).map(|v| v.clone())
    }

    pub fn set(&self, key: &str, value: &str) {
        self.config.insert(key.to_string(), value.to_string());
    }

    fn parse_or<T: FromStr>(&self, key: &'static str, default: T) -> Result<T, ConfigError> {
        match self.get(key) {
            None => Ok(default),
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { key, value: raw }),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Which record store backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Sqlite,
    Memory,
}

impl FromStr for StoreKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sqlite" => Ok(StoreKind::Sqlite),
            "memory" => Ok(StoreKind::Memory),
            _ => Err(()),
        }
    }
}

/// Typed settings for the server process.
///
/// | Variable | Default |
/// |---|---|
/// | `HOST` | `0.0.0.0` |
/// | `PORT` | `8080` |
/// | `USER_STORE` | `sqlite` (`memory` also accepted) |
/// | `DATABASE_URL` | `sqlite://users.db?mode=rwc` |
/// | `STORE_INIT_TIMEOUT_SECS` | `30` |
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreKind,
    pub database_url: String,
    pub init_timeout: Duration,
}

impl AppConfig {
    pub fn from_service(service: &ConfigService) -> Result<Self, ConfigError> {
        Ok(Self {
            host: service.get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: service.parse_or("PORT", DEFAULT_PORT)?,
            store: service.parse_or("USER_STORE", StoreKind::Sqlite)?,
            database_url: service
                .get("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            init_timeout: Duration::from_secs(
                service.parse_or("STORE_INIT_TIMEOUT_SECS", DEFAULT_INIT_TIMEOUT_SECS)?,
            ),
        })
    }

    /// `host:port`, resolved by the listener so hostnames work too.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
