#![allow(dead_code)]

use std::sync::Arc;

use delete_handler::database::Key;
use delete_handler::testing::MemoryStore;
use delete_handler::handlers::AppState;
use lambda_runtime::{Context, LambdaEvent};
use serde_json::{json, Value};

pub const TABLE: &str = "Items";

/// Store with the Items table holding the given ids
pub async fn seeded_store(ids: &[&str]) -> MemoryStore {
    let store = MemoryStore::new();
    store.create_table(TABLE).await;
    for id in ids {
        store
            .put(TABLE, Key::new("id", *id), json!({ "id": id, "name": format!("model {}", id) }))
            .await;
    }
    store
}

pub fn state(store: &MemoryStore, default_table: Option<&str>) -> AppState {
    AppState {
        store: Arc::new(store.clone()),
        key_attribute: "id".to_string(),
        default_table: default_table.map(str::to_string),
    }
}

/// Build an invocation from a raw JSON payload, as the runtime would
pub fn event(payload: Value) -> LambdaEvent<Value> {
    LambdaEvent::new(payload, Context::default())
}
