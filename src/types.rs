/// Shared types used across the codebase

use serde::{Deserialize, Serialize};

/// Reference to the record being removed. Only `id` is read; any other
/// fields sent by the caller are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelRef {
    pub id: String,
}

impl ModelRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

/// Confirmation returned after a successful delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedModel {
    pub id: String,
}

/// Lambda invocation payload
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteRequest {
    pub model: ModelRef,
    /// Falls back to the configured default table when absent
    #[serde(default)]
    pub table: Option<String>,
}
