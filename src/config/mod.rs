use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid DynamoDB endpoint URL: {0}")]
    InvalidEndpointUrl(String),

    #[error("Key attribute name must not be empty")]
    EmptyKeyAttribute,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Table used when an invocation does not name one
    pub default_table: Option<String>,
    pub key_attribute: String,
    pub region: Option<String>,
    /// Override for local DynamoDB (e.g. http://localhost:8000)
    pub endpoint_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub filter: String,
    pub with_time: bool,
    pub with_target: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_overrides(|key| env::var(key).ok(), amplify_table_from_env())
    }

    /// Apply overrides from a variable lookup. `amplify_table` is only used
    /// when TABLE_NAME is not set.
    fn with_overrides<F>(mut self, lookup: F, amplify_table: Option<String>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Store overrides
        if let Some(v) = lookup("TABLE_NAME").filter(|v| !v.trim().is_empty()) {
            self.store.default_table = Some(v.trim().to_string());
        } else if amplify_table.is_some() {
            self.store.default_table = amplify_table;
        }
        if let Some(v) = lookup("DYNAMODB_KEY_ATTRIBUTE") {
            self.store.key_attribute = v.trim().to_string();
        }
        if let Some(v) = lookup("AWS_REGION").filter(|v| !v.is_empty()) {
            self.store.region = Some(v);
        }
        if let Some(v) = lookup("DYNAMODB_ENDPOINT_URL").filter(|v| !v.is_empty()) {
            self.store.endpoint_url = Some(v);
        }

        // Logging overrides
        if let Some(v) = lookup("LOG_FILTER") {
            self.logging.filter = v;
        }
        if let Some(v) = lookup("LOG_WITH_TIME") {
            self.logging.with_time = v.parse().unwrap_or(self.logging.with_time);
        }
        if let Some(v) = lookup("LOG_WITH_TARGET") {
            self.logging.with_target = v.parse().unwrap_or(self.logging.with_target);
        }

        self
    }

    /// Check values that would otherwise only fail on the first invocation
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.key_attribute.is_empty() {
            return Err(ConfigError::EmptyKeyAttribute);
        }
        if let Some(endpoint) = &self.store.endpoint_url {
            let parsed = url::Url::parse(endpoint)
                .map_err(|_| ConfigError::InvalidEndpointUrl(endpoint.clone()))?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError::InvalidEndpointUrl(endpoint.clone()));
            }
        }
        Ok(())
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            store: StoreConfig::default(),
            logging: LoggingConfig {
                filter: "debug".to_string(),
                with_time: true,
                with_target: true,
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            store: StoreConfig::default(),
            logging: LoggingConfig {
                filter: "info".to_string(),
                with_time: false,
                with_target: true,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            store: StoreConfig::default(),
            logging: LoggingConfig {
                // CloudWatch stamps ingestion time on every line
                filter: "info".to_string(),
                with_time: false,
                with_target: false,
            },
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            default_table: None,
            key_attribute: "id".to_string(),
            region: None,
            endpoint_url: None,
        }
    }
}

/// Amplify exposes storage resources as STORAGE_<RESOURCE>_NAME. Only an
/// unambiguous single table is used as the default; with several, callers
/// must name the table or set TABLE_NAME.
fn amplify_table_from_env() -> Option<String> {
    amplify_table(env::vars())
}

fn amplify_table<I>(vars: I) -> Option<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut candidates = vars
        .into_iter()
        .filter(|(k, v)| k.starts_with("STORAGE_") && k.ends_with("_NAME") && !v.is_empty())
        .map(|(_, v)| v);

    match (candidates.next(), candidates.next()) {
        (Some(table), None) => Some(table),
        _ => None,
    }
}

// Global singleton config - initialized once at cold start
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

pub fn config() -> &'static AppConfig {
    &CONFIG
}
