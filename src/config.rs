// config.rs
use crate::domain::listing::DEFAULT_PLACEHOLDER_IMAGE;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid {expected}: {value:?}")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Runtime settings, read from `RENTALS_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub api_base_url: Url,
    /// Service token used when the visitor has no `auth_token` cookie.
    pub api_token: Option<String>,
    pub api_timeout: Duration,
    pub max_workers: usize,
    pub placeholder_image: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            api_base_url: Url::parse("http://localhost:5000/api")
                .unwrap_or_else(|_| unreachable!("literal URL")),
            api_token: None,
            api_timeout: Duration::from_secs(30),
            max_workers: 8,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load `.env` (if present) and read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut cfg = Self::default();

        if let Some(v) = get("RENTALS_BIND_ADDR") {
            cfg.bind_addr = v.parse().map_err(|_| invalid("RENTALS_BIND_ADDR", "socket address", &v))?;
        }

        if let Some(v) = get("RENTALS_API_BASE_URL") {
            let url = Url::parse(&v).map_err(|_| invalid("RENTALS_API_BASE_URL", "http(s) URL", &v))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(invalid("RENTALS_API_BASE_URL", "http(s) URL", &v));
            }
            cfg.api_base_url = url;
        }

        cfg.api_token = get("RENTALS_API_TOKEN");

        if let Some(v) = get("RENTALS_API_TIMEOUT_SECS") {
            let secs: u64 = v
                .parse()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| invalid("RENTALS_API_TIMEOUT_SECS", "positive number of seconds", &v))?;
            cfg.api_timeout = Duration::from_secs(secs);
        }

        if let Some(v) = get("RENTALS_MAX_WORKERS") {
            cfg.max_workers = v
                .parse()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| invalid("RENTALS_MAX_WORKERS", "positive worker count", &v))?;
        }

        if let Some(v) = get("RENTALS_PLACEHOLDER_IMAGE") {
            cfg.placeholder_image = v;
        }

        if let Some(v) = get("RENTALS_LOG") {
            cfg.log_level = v;
        }

        Ok(cfg)
    }
}

fn invalid(var: &'static str, expected: &'static str, value: &str) -> ConfigError {
    ConfigError::Invalid {
        var,
        expected,
        value: value.to_string(),
    }
}
