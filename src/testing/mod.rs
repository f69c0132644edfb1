//! Test support: an in-process store with DynamoDB delete semantics, used by
//! unit and integration tests and by local harnesses that run without AWS.
pub mod memory;

pub use memory::{DeleteCall, MemoryStore};
