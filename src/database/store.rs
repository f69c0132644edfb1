use async_trait::async_trait;
use thiserror::Error;

/// Errors from a key-value store delete
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Table not found: {0}")]
    TableNotFound(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Request throttled: {0}")]
    Throttled(String),

    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Service error {code}: {message}")]
    Service { code: String, message: String },
}

impl StoreError {
    /// Classify a DynamoDB service error code
    pub fn from_service_code(code: Option<&str>, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            Some("ResourceNotFoundException") => StoreError::TableNotFound(message),
            Some("AccessDeniedException")
            | Some("UnrecognizedClientException")
            | Some("MissingAuthenticationTokenException")
            | Some("ExpiredTokenException") => StoreError::AccessDenied(message),
            Some("ProvisionedThroughputExceededException")
            | Some("RequestLimitExceeded")
            | Some("ThrottlingException") => StoreError::Throttled(message),
            Some("ValidationException") => StoreError::Validation(message),
            Some(other) => StoreError::Service {
                code: other.to_string(),
                message,
            },
            None => StoreError::Service {
                code: "Unknown".to_string(),
                message,
            },
        }
    }

    /// Get error code for log filtering
    pub fn error_code(&self) -> &'static str {
        match self {
            StoreError::TableNotFound(_) => "TABLE_NOT_FOUND",
            StoreError::AccessDenied(_) => "ACCESS_DENIED",
            StoreError::Throttled(_) => "THROTTLED",
            StoreError::Validation(_) => "VALIDATION",
            StoreError::Timeout => "TIMEOUT",
            StoreError::Transport(_) => "TRANSPORT",
            StoreError::Service { .. } => "SERVICE",
        }
    }
}

/// Primary key of a single item: one string attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    pub attribute: String,
    pub value: String,
}

impl Key {
    pub fn new(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            value: value.into(),
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}: {:?}}}", self.attribute, self.value)
    }
}

/// Delete-by-key primitive. Removing a key that does not exist succeeds.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn delete(&self, table: &str, key: &Key) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_service_codes() {
        assert_eq!(
            StoreError::from_service_code(Some("ResourceNotFoundException"), "no table"),
            StoreError::TableNotFound("no table".to_string())
        );
        assert_eq!(
            StoreError::from_service_code(Some("AccessDeniedException"), "denied").error_code(),
            "ACCESS_DENIED"
        );
        assert_eq!(
            StoreError::from_service_code(Some("UnrecognizedClientException"), "bad token").error_code(),
            "ACCESS_DENIED"
        );
        for code in ["ProvisionedThroughputExceededException", "RequestLimitExceeded", "ThrottlingException"] {
            assert_eq!(StoreError::from_service_code(Some(code), "slow down").error_code(), "THROTTLED");
        }
        assert_eq!(
            StoreError::from_service_code(Some("ValidationException"), "empty key").error_code(),
            "VALIDATION"
        );
    }

    #[test]
    fn unknown_codes_keep_the_raw_code() {
        assert_eq!(
            StoreError::from_service_code(Some("InternalServerError"), "boom"),
            StoreError::Service {
                code: "InternalServerError".to_string(),
                message: "boom".to_string()
            }
        );
        match StoreError::from_service_code(None, "boom") {
            StoreError::Service { code, .. } => assert_eq!(code, "Unknown"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn key_display() {
        assert_eq!(Key::new("id", "abc").to_string(), "{id: \"abc\"}");
    }
}
