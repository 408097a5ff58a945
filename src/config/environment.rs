// ABOUTME: Environment configuration for the nutrition API client and runtime settings
// ABOUTME: Handles environment variables, deployment modes, and numeric parsing with defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrilens Contributors

//! Environment-based configuration

use super::ConfigError;
use crate::constants::{defaults, env_config};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;
use tracing::info;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Nutrition API client settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionApiConfig {
    /// Base URL, without a trailing slash
    pub base_url: String,
    /// Bearer token, if the API requires authentication
    #[serde(skip_serializing)]
    pub token: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Response cache TTL in seconds
    pub cache_ttl_secs: u64,
    /// Outbound request budget per minute
    pub rate_limit_per_minute: u32,
}

impl Default for NutritionApiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::API_URL.to_owned(),
            token: None,
            timeout_secs: defaults::API_TIMEOUT_SECS,
            cache_ttl_secs: defaults::CACHE_TTL_SECS,
            rate_limit_per_minute: defaults::RATE_LIMIT_PER_MINUTE,
        }
    }
}

impl NutritionApiConfig {
    /// Validate URL shape and numeric limits
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for a non-HTTP base URL, a zero timeout, or a zero rate limit
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::Parse(format!(
                "{} must start with http:// or https://, got '{}'",
                env_config::API_URL,
                self.base_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "API timeout must be at least 1 second",
            ));
        }
        if self.rate_limit_per_minute == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "API rate limit must be at least 1 request per minute",
            ));
        }
        Ok(())
    }
}

/// Application configuration loaded from the environment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Nutrition API client settings
    pub api: NutritionApiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` when a numeric variable cannot be parsed,
    /// or a validation error from [`NutritionApiConfig::validate`]
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = env::var(env_config::API_URL)
            .unwrap_or_else(|_| defaults::API_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();

        let config = Self {
            environment: Environment::from_str_or_default(
                &env::var("ENVIRONMENT").unwrap_or_default(),
            ),
            log_level: LogLevel::from_str_or_default(
                &env::var("RUST_LOG").unwrap_or_default(),
            ),
            api: NutritionApiConfig {
                base_url,
                token: env::var(env_config::API_TOKEN)
                    .ok()
                    .filter(|token| !token.trim().is_empty()),
                timeout_secs: env_var_or(env_config::API_TIMEOUT_SECS, defaults::API_TIMEOUT_SECS)?,
                cache_ttl_secs: env_var_or(env_config::CACHE_TTL_SECS, defaults::CACHE_TTL_SECS)?,
                rate_limit_per_minute: env_var_or(
                    env_config::RATE_LIMIT_PER_MINUTE,
                    defaults::RATE_LIMIT_PER_MINUTE,
                )?,
            },
        };

        config.api.validate()?;
        info!(
            environment = %config.environment,
            api.base_url = %config.api.base_url,
            api.authenticated = config.api.token.is_some(),
            "Loaded configuration from environment"
        );
        Ok(config)
    }

    /// Summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Nutrilens Configuration:\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - API URL: {}\n\
             - API Token: {}\n\
             - Timeout: {}s\n\
             - Cache TTL: {}s\n\
             - Rate Limit: {}/min",
            self.environment,
            self.log_level,
            self.api.base_url,
            if self.api.token.is_some() {
                "Configured"
            } else {
                "Not set"
            },
            self.api.timeout_secs,
            self.api.cache_ttl_secs,
            self.api.rate_limit_per_minute
        )
    }
}

/// Parse an environment variable, using `default` when it is unset
fn env_var_or<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {key} value '{value}'"))),
        Err(_) => Ok(default),
    }
}
