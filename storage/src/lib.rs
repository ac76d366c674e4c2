//! Storage crate: string-keyed, JSON-valued key-value persistence and repository abstractions.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`kv`] – KeyValueStore trait and JSON helpers
//! - [`memory_kv`] – InMemoryKeyValueStore
//! - [`sqlite_kv`] – SqliteKeyValueStore
//! - [`sqlite_pool`] – SqlitePoolManager
//! - [`repository`] – Repository trait and JsonListRepository

mod error;
mod kv;
mod memory_kv;
mod repository;
mod sqlite_kv;
mod sqlite_pool;

pub use error::StorageError;
pub use kv::{load_json, save_json, KeyValueStore};
pub use memory_kv::InMemoryKeyValueStore;
pub use repository::{JsonListRepository, Record, Repository};
pub use sqlite_kv::SqliteKeyValueStore;
pub use sqlite_pool::SqlitePoolManager;
