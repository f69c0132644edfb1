pub mod client;
pub mod dynamo;
pub mod store;

pub use client::dynamo_client;
pub use dynamo::DynamoStore;
pub use store::{Key, KeyValueStore, StoreError};
