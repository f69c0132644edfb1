// handlers/mod.rs - Delete handler and its Lambda entry point
//
// delete   - store-facing operation (typed and fail-soft variants)
// function - Lambda event adapter, table resolution, shared state
pub mod delete;
pub mod function;

pub use delete::{delete_model, try_delete_model};
pub use function::{function_handler, AppState};
