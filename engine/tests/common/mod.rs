//! Shared test helpers for engine integration tests.
//!
//! Provides stores that record or fail calls, and a dispatcher factory.

#![allow(dead_code)]

use std::cell::RefCell;

use keystone_engine::{Dispatcher, DispatcherConfig};
use keystone_hostapi::{MemStore, StateStore, StoreError};

// ── Store Calls ──

/// One call made against a `RecordingStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Get(String),
    Put(String, Vec<u8>),
    Delete(String),
}

/// `MemStore` wrapper that logs every call in order.
#[derive(Debug, Default)]
pub struct RecordingStore {
    pub inner: MemStore,
    calls: RefCell<Vec<Call>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls made so far.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Returns true if any put or delete has been made.
    pub fn mutated(&self) -> bool {
        self.calls
            .borrow()
            .iter()
            .any(|c| !matches!(c, Call::Get(_)))
    }
}

impl StateStore for RecordingStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        self.calls.borrow_mut().push(Call::Get(key.to_string()));
        self.inner.get(key)
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.calls
            .borrow_mut()
            .push(Call::Put(key.to_string(), value.to_vec()));
        self.inner.put(key, value)
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.calls.borrow_mut().push(Call::Delete(key.to_string()));
        self.inner.delete(key)
    }
}

/// Store whose operations fail with a fixed error once enabled.
#[derive(Debug, Default)]
pub struct FailingStore {
    pub inner: MemStore,
    pub fail_get: Option<StoreError>,
    pub fail_put: Option<StoreError>,
    pub fail_delete: Option<StoreError>,
    /// Number of puts allowed to succeed before `fail_put` applies.
    pub puts_before_failure: usize,
    puts: usize,
}

impl FailingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_puts(err: StoreError) -> Self {
        Self {
            fail_put: Some(err),
            ..Self::default()
        }
    }

    /// Let `n` puts succeed, then fail every put with `err`.
    pub fn failing_puts_after(n: usize, err: StoreError) -> Self {
        Self {
            fail_put: Some(err),
            puts_before_failure: n,
            ..Self::default()
        }
    }

    pub fn failing_deletes(err: StoreError) -> Self {
        Self {
            fail_delete: Some(err),
            ..Self::default()
        }
    }

    pub fn failing_gets(err: StoreError) -> Self {
        Self {
            fail_get: Some(err),
            ..Self::default()
        }
    }
}

impl StateStore for FailingStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match &self.fail_get {
            Some(err) => Err(err.clone()),
            None => self.inner.get(key),
        }
    }

    fn put(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        if let Some(err) = &self.fail_put {
            if self.puts >= self.puts_before_failure {
                return Err(err.clone());
            }
        }
        self.puts += 1;
        self.inner.put(key, value)
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        match &self.fail_delete {
            Some(err) => Err(err.clone()),
            None => self.inner.delete(key),
        }
    }
}

// ── Dispatcher Builders ──

/// Dispatcher with default configuration.
pub fn dispatcher() -> Dispatcher {
    Dispatcher::default()
}

/// Dispatcher that also resets the given index keys on init.
pub fn dispatcher_with_indexes(keys: &[&str]) -> Dispatcher {
    let config = keys
        .iter()
        .fold(DispatcherConfig::default(), |c, k| c.with_index_key(*k));
    Dispatcher::new(config)
}

pub const NO_ARGS: [&str; 0] = [];
