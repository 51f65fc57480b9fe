//! In-memory state store.
//!
//! `MemStore` implements `StateStore` using a `BTreeMap` for deterministic
//! key ordering. Useful for unit tests, integration tests, and hosts that
//! embed the chaincode without a ledger behind it.

use std::collections::BTreeMap;

use keystone_primitives::{Key, Value};

use crate::error::StoreError;
use crate::state_store::StateStore;
use crate::types::StateLimits;

/// In-memory state store backed by `BTreeMap`.
///
/// Writes are checked against `StateLimits`: empty keys, oversize keys,
/// and oversize values are rejected and leave the store unchanged.
#[derive(Debug, Clone, Default)]
pub struct MemStore {
    data: BTreeMap<Key, Value>,
    limits: StateLimits,
}

impl MemStore {
    /// Create a new empty store with default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty store with the given limits.
    pub fn with_limits(limits: StateLimits) -> Self {
        Self {
            data: BTreeMap::new(),
            limits,
        }
    }

    /// Create a store pre-populated with data.
    ///
    /// Entries are taken as-is; limits apply only to later writes.
    pub fn with_data(data: BTreeMap<Key, Value>) -> Self {
        Self {
            data,
            limits: StateLimits::default(),
        }
    }

    /// Insert a key-value pair directly, bypassing limit checks.
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<Value>) {
        self.data.insert(key.into(), value.into());
    }

    /// Returns the number of entries in the store.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterate over stored keys in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// The limits this store enforces.
    pub fn limits(&self) -> &StateLimits {
        &self.limits
    }

    fn check_key(&self, key: &str) -> Result<(), StoreError> {
        if key.is_empty() {
            return Err(StoreError::invalid_key());
        }
        if key.len() > self.limits.max_key_len {
            return Err(StoreError::key_too_large());
        }
        Ok(())
    }
}

impl StateStore for MemStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.data.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.check_key(key)?;
        if value.len() > self.limits.max_value_len {
            tracing::trace!(key, len = value.len(), "rejecting oversize value");
            return Err(StoreError::value_too_large());
        }
        self.data.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.check_key(key)?;
        if self.data.remove(key).is_none() && self.limits.strict_deletes {
            return Err(StoreError::key_not_found());
        }
        Ok(())
    }

    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.data.contains_key(key))
    }
}
