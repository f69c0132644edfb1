use tracing::{error, info};

use crate::database::store::{Key, KeyValueStore};
use crate::error::DeleteError;
use crate::types::{DeletedModel, ModelRef};

/// Delete one record by id, reporting why it failed.
///
/// Issues exactly one store call. A key that is not present still counts
/// as deleted.
pub async fn try_delete_model(
    store: &dyn KeyValueStore,
    key_attribute: &str,
    model: &ModelRef,
    table: &str,
) -> Result<DeletedModel, DeleteError> {
    let key = Key::new(key_attribute, model.id.as_str());
    store.delete(table, &key).await?;

    info!(table = %table, key = %key, "Deleted model");
    Ok(DeletedModel { id: model.id.clone() })
}

/// Fail-soft delete: any failure is logged and becomes `None`.
pub async fn delete_model(
    store: &dyn KeyValueStore,
    key_attribute: &str,
    model: &ModelRef,
    table: &str,
) -> Option<DeletedModel> {
    match try_delete_model(store, key_attribute, model, table).await {
        Ok(deleted) => Some(deleted),
        Err(e) => {
            error!(
                table = %table,
                id = %model.id,
                code = e.error_code(),
                "DynamoDB Error: {}",
                e
            );
            None
        }
    }
}
