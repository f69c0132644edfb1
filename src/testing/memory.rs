use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::database::store::{Key, KeyValueStore, StoreError};

type Table = HashMap<Key, Value>;

/// A delete request as received by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCall {
    pub table: String,
    pub key: Key,
}

/// In-process store with DynamoDB delete semantics: unknown tables fail,
/// empty key values are rejected, missing keys are a no-op.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<HashMap<String, Table>>>,
    calls: Arc<Mutex<Vec<DeleteCall>>>,
    fail_next: Arc<Mutex<Option<StoreError>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn create_table(&self, table: &str) {
        self.tables
            .write()
            .await
            .entry(table.to_string())
            .or_default();
    }

    pub async fn put(&self, table: &str, key: Key, item: Value) {
        self.tables
            .write()
            .await
            .entry(table.to_string())
            .or_default()
            .insert(key, item);
    }

    pub async fn get(&self, table: &str, key: &Key) -> Option<Value> {
        self.tables
            .read()
            .await
            .get(table)
            .and_then(|items| items.get(key).cloned())
    }

    pub async fn len(&self, table: &str) -> usize {
        self.tables.read().await.get(table).map_or(0, HashMap::len)
    }

    /// Fail the next delete with `err`, then behave normally again
    pub async fn fail_next(&self, err: StoreError) {
        *self.fail_next.lock().await = Some(err);
    }

    /// Every delete received so far, in arrival order
    pub async fn calls(&self) -> Vec<DeleteCall> {
        self.calls.lock().await.clone()
    }

    pub async fn clear_calls(&self) {
        self.calls.lock().await.clear();
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn delete(&self, table: &str, key: &Key) -> Result<(), StoreError> {
        self.calls.lock().await.push(DeleteCall {
            table: table.to_string(),
            key: key.clone(),
        });

        if let Some(err) = self.fail_next.lock().await.take() {
            return Err(err);
        }

        if key.value.is_empty() {
            return Err(StoreError::Validation(format!(
                "The AttributeValue for key attribute '{}' cannot contain an empty string value",
                key.attribute
            )));
        }

        let mut tables = self.tables.write().await;
        let items = tables
            .get_mut(table)
            .ok_or_else(|| StoreError::TableNotFound(format!("Requested table not found: {}", table)))?;
        items.remove(key);
        Ok(())
    }
}
