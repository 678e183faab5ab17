use std::env;
use std::str::FromStr;

use thiserror::Error;

pub const SQS_ENDPOINT_URL: &str = "SQS_ENDPOINT_URL";
pub const FALLBACK_REGION: &str = "FALLBACK_REGION";
pub const RESOLVE_QUEUE_ARN: &str = "RESOLVE_QUEUE_ARN";
pub const LOG_FORMAT: &str = "LOG_FORMAT";

const DEFAULT_FALLBACK_REGION: &str = "us-east-1";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidValue {
                key: LOG_FORMAT,
                value: value.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Overrides the SQS endpoint, e.g. for a local emulator.
    pub endpoint_url: Option<String>,
    /// Region used only when the default region provider chain finds none.
    pub fallback_region: String,
    /// Convert event source ARNs to queue URLs before deleting.
    pub resolve_queue_arn: bool,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            endpoint_url: None,
            fallback_region: DEFAULT_FALLBACK_REGION.to_string(),
            resolve_queue_arn: true,
            log_format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    /// Reads the configuration from the process environment.
    pub fn load() -> Result<AppConfig, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<AppConfig, ConfigError>
    where F: Fn(&str) -> Option<String> {
        let defaults = AppConfig::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let resolve_queue_arn = match non_empty(RESOLVE_QUEUE_ARN) {
            Some(value) => parse_flag(RESOLVE_QUEUE_ARN, &value)?,
            None => defaults.resolve_queue_arn,
        };

        let log_format = match non_empty(LOG_FORMAT) {
            Some(value) => value.parse()?,
            None => defaults.log_format,
        };

        Ok(AppConfig {
            endpoint_url: non_empty(SQS_ENDPOINT_URL),
            fallback_region: non_empty(FALLBACK_REGION).unwrap_or(defaults.fallback_region),
            resolve_queue_arn,
            log_format,
        })
    }
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}
