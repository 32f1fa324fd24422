//! Configuration loading.
//!
//! Configuration is layered (highest precedence first):
//! 1. `RESEND_API_KEY` from the environment
//! 2. `HOMESTAY_*` environment variables, `__` separating sections
//!    (e.g. `HOMESTAY_SERVER__BIND=0.0.0.0:8080`)
//! 3. TOML file at `homestay.toml`, or the path in `HOMESTAY_CONFIG`
//! 4. Default values

use std::net::SocketAddr;
use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const CONFIG_FILE_NAME: &str = "homestay.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(Box<figment::Error>),

    #[error("invalid configuration: {message}")]
    Validation { message: String },
}

impl ConfigError {
    fn validation(message: impl Into<String>) -> Self {
        ConfigError::Validation {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub mail: MailConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
    pub max_workers: usize,
    /// Public origin used when building absolute links for emails.
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: PathBuf,
    pub schema_path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailConfig {
    /// When unset, outbound email is replaced by a log line.
    pub resend_api_key: Option<String>,
    pub api_url: String,
    pub from: String,
    pub booking_recipients: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
            max_workers: 8,
            base_url: "http://127.0.0.1:3000".to_string(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("homestay.sqlite3"),
            schema_path: PathBuf::from("sql/schema.sql"),
        }
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            resend_api_key: None,
            api_url: "https://api.resend.com/emails".to_string(),
            from: "HomestayHub <onboarding@resend.dev>".to_string(),
            booking_recipients: vec!["bookings@homestayhub.com".to_string()],
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "homestay_hub=info".to_string(),
        }
    }
}

impl Config {
    /// Load from the default file location plus the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os("HOMESTAY_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
        Self::from_figment(Self::figment(&path))
    }

    pub fn figment(config_file: &std::path::Path) -> Figment {
        Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_file).nested())
            .merge(Env::prefixed("HOMESTAY_").split("__"))
            .merge(
                Env::raw()
                    .only(&["RESEND_API_KEY"])
                    .map(|_| "mail.resend_api_key".into()),
            )
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Load(Box::new(e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.max_workers == 0 {
            return Err(ConfigError::validation("server.max_workers must be at least 1"));
        }
        self.bind_addr()?;
        if self.mail.booking_recipients.is_empty() {
            return Err(ConfigError::validation(
                "mail.booking_recipients must not be empty",
            ));
        }
        Ok(())
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server.bind.parse().map_err(|e| {
            ConfigError::validation(format!("server.bind '{}': {e}", self.server.bind))
        })
    }
}
