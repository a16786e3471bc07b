use thiserror::Error;
use tracing::level_filters::LevelFilter;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key} has an unknown log level: {value}")]
    InvalidLogLevel { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub brand: String,
    pub api_base: String,
    pub token_key: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand: "FastFood".to_string(),
            api_base: "/api".to_string(),
            token_key: "token".to_string(),
            log_level: LevelFilter::INFO,
        }
    }
}

impl AppConfig {
    /// Reads settings baked in at build time (`FASTFOOD_*` environment
    /// variables seen by the compiler).
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            let value = match key {
                "FASTFOOD_BRAND" => option_env!("FASTFOOD_BRAND"),
                "FASTFOOD_API_BASE" => option_env!("FASTFOOD_API_BASE"),
                "FASTFOOD_TOKEN_KEY" => option_env!("FASTFOOD_TOKEN_KEY"),
                "FASTFOOD_LOG_LEVEL" => option_env!("FASTFOOD_LOG_LEVEL"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let log_level = match lookup("FASTFOOD_LOG_LEVEL") {
            Some(value) => parse_level(&value).ok_or(ConfigError::InvalidLogLevel {
                key: "FASTFOOD_LOG_LEVEL",
                value,
            })?,
            None => defaults.log_level,
        };

        Ok(Self {
            brand: lookup("FASTFOOD_BRAND").unwrap_or(defaults.brand),
            api_base: lookup("FASTFOOD_API_BASE")
                .map(|base| base.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            token_key: lookup("FASTFOOD_TOKEN_KEY").unwrap_or(defaults.token_key),
            log_level,
        })
    }
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}
