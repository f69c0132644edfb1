use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::database::store::KeyValueStore;
use crate::error::DeleteError;
use crate::types::{DeleteRequest, DeletedModel};

use super::delete::delete_model;

/// Everything an invocation needs, built once at cold start and shared by
/// reference across invocations.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn KeyValueStore>,
    pub key_attribute: String,
    pub default_table: Option<String>,
}

impl AppState {
    pub fn new(store: Arc<dyn KeyValueStore>, config: &AppConfig) -> Self {
        Self {
            store,
            key_attribute: config.store.key_attribute.clone(),
            default_table: config.store.default_table.clone(),
        }
    }

    /// The event's table wins; otherwise fall back to the configured default
    pub fn resolve_table<'a>(&'a self, requested: Option<&'a str>) -> Result<&'a str, DeleteError> {
        requested
            .filter(|t| !t.is_empty())
            .or(self.default_table.as_deref())
            .ok_or(DeleteError::MissingTable)
    }
}

/// Lambda entry point. Always returns `Ok`: a malformed payload or a failed
/// delete is reported to the caller as `null`, never as an invocation error.
pub async fn function_handler(
    state: &AppState,
    event: LambdaEvent<Value>,
) -> Result<Option<DeletedModel>, Error> {
    let (payload, context) = event.into_parts();

    let request: DeleteRequest = match serde_json::from_value(payload) {
        Ok(request) => request,
        Err(e) => {
            warn!(request_id = %context.request_id, "Rejected delete payload: {}", e);
            return Ok(None);
        }
    };
    debug!(request_id = %context.request_id, id = %request.model.id, "Delete invocation");

    let table = match state.resolve_table(request.table.as_deref()) {
        Ok(table) => table,
        Err(e) => {
            warn!(id = %request.model.id, code = e.error_code(), "Delete not attempted: {}", e);
            return Ok(None);
        }
    };

    Ok(delete_model(state.store.as_ref(), &state.key_attribute, &request.model, table).await)
}
