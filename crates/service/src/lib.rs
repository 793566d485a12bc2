//! Storage layer for the schedule document.
//! - `DocumentStore` is the one contract the HTTP layer talks to.
//! - Relational, file and read-only variants are chosen once at startup.
//! - Errors are reported through `ServiceError`.

pub mod errors;
pub mod runtime;
pub mod storage;
#[cfg(test)]
pub mod test_support;

pub use storage::{select_store, BackendKind, DocumentStore, SharedStore};
