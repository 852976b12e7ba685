//! # Durable Local Storage
//!
//! A single-key string store, the same shape as browser `localStorage`. The
//! [`StateActor`](crate::framework::StateActor) serializes its whole state to
//! JSON and writes it under one key; storage backends never see typed data.
//!
//! ## Backends
//!
//! - [`MemoryStorage`] - shared in-process map, inspectable from tests
//! - [`FileStorage`] - one JSON file per key, written atomically

pub mod file;
pub mod memory;

pub use file::*;
pub use memory::*;

use thiserror::Error;

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),
}

/// Key-value persistence for serialized snapshots.
///
/// Writes are synchronous: when `set` returns `Ok`, the value is durable as far
/// as the backend can guarantee it.
///
/// Calls run inline on the actor's task, so backends must be fast local
/// stores (memory, a local file), not network round-trips.
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`, or `None` if the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Builds the storage key for a state slot, e.g. `"@RocketShoes:cart"`.
pub fn storage_key(namespace: &str, slot: &str) -> String {
    format!("{namespace}:{slot}")
}
