// Delete error types
use thiserror::Error;

use crate::database::store::StoreError;

/// Why a delete did not complete. Callers of the Lambda only ever see
/// `null`; this type is for callers that want the reason.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeleteError {
    #[error("No table given and no default table configured")]
    MissingTable,

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DeleteError {
    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DeleteError::MissingTable => "MISSING_TABLE",
            DeleteError::Store(err) => err.error_code(),
        }
    }
}
