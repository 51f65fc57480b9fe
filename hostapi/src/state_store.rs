//! State storage abstraction consumed by the dispatcher.
//!
//! The ledger runtime supplies the real implementation. The dispatcher
//! receives it as an explicit `&mut dyn StateStore` on every call and
//! never holds on to it between calls.
//!
//! Implementations:
//! - `MemStore` (this crate): in-memory BTreeMap
//! - the runtime's ledger state, provided by the host

use keystone_primitives::Value;

use crate::error::StoreError;

/// Single-key state access.
///
/// Each method touches exactly one key and must be atomic for that key.
/// Isolation across concurrent transactions is the runtime's concern.
pub trait StateStore {
    /// Get the value for a key.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Remove `key`.
    ///
    /// Whether removing an absent key is an error is up to the adapter.
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;

    /// Check if a key exists.
    ///
    /// Default implementation uses `get()`, but backends may optimize this.
    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }
}
