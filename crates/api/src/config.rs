//! Application configuration loaded from environment variables.

use checkout::{EmailConfig, RazorpayConfig};
use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value {value:?} for environment variable {name}")]
    Invalid { name: &'static str, value: String },
}

/// Server configuration.
///
/// Reads from environment variables:
/// - `HOST` (default: `"0.0.0.0"`), `PORT` (default: `8001`)
/// - `RUST_LOG` tracing filter directive (default: `"info"`)
/// - `DATABASE_URL` and `DB_NAME` (required)
/// - `CORS_ORIGINS` comma-separated origins (default: `"*"`)
/// - `EMAIL_API_URL`, `EMAIL_API_KEY`, `EMAIL_SENDER`, `ADMIN_EMAIL`
/// - `RAZORPAY_KEY_ID`, `RAZORPAY_KEY_SECRET`, `RAZORPAY_WEBHOOK_SECRET`
///
/// Blank values count as unset.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub database_url: String,
    pub db_name: String,
    /// Allowed origins; empty means any origin.
    pub cors_origins: Vec<String>,
    /// Email API settings, present only when all three variables are set.
    pub email: Option<EmailConfig>,
    pub admin_email: Option<String>,
    /// Gateway credentials, present only when key id and secret are set.
    pub razorpay: Option<RazorpayConfig>,
}

impl Config {
    /// Default listen port.
    pub const DEFAULT_PORT: u16 = 8001;

    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let required = |name: &'static str| var(name).ok_or(ConfigError::Missing(name));

        let port = match var("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw,
            })?,
            None => Self::DEFAULT_PORT,
        };

        let cors_origins = var("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty() && *origin != "*")
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let email = match (
            var("EMAIL_API_URL"),
            var("EMAIL_API_KEY"),
            var("EMAIL_SENDER"),
        ) {
            (Some(api_url), Some(api_key), Some(sender)) => Some(EmailConfig {
                api_url,
                api_key,
                sender,
            }),
            _ => None,
        };

        let razorpay = match (var("RAZORPAY_KEY_ID"), var("RAZORPAY_KEY_SECRET")) {
            (Some(key_id), Some(key_secret)) => {
                let mut config = RazorpayConfig::new(key_id, key_secret);
                config.webhook_secret = var("RAZORPAY_WEBHOOK_SECRET");
                Some(config)
            }
            _ => None,
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            log_level: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            database_url: required("DATABASE_URL")?,
            db_name: required("DB_NAME")?,
            cors_origins,
            email,
            admin_email: var("ADMIN_EMAIL"),
            razorpay,
        })
    }

    /// Returns the `"host:port"` bind address string.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
