//! State handlers, one per operation.
//!
//! Each handler performs its store round trips and nothing else: no
//! caching, no retries, no rollback. Argument validation has already
//! happened by the time a handler runs.

use keystone_hostapi::StateStore;
use keystone_primitives::Value;

use crate::config::DispatcherConfig;
use crate::error::{ChaincodeError, ChaincodeResult};

/// Value written to each index key on `init`: an empty JSON list.
pub const EMPTY_INDEX: &[u8] = b"[]";

/// Write the initialization marker, then reset every configured index key.
///
/// Stops at the first failing put. Earlier puts are not undone.
pub fn init(
    store: &mut dyn StateStore,
    config: &DispatcherConfig,
    value: &str,
) -> ChaincodeResult<()> {
    put(store, &config.init_key, value.as_bytes())?;
    for index_key in &config.index_keys {
        put(store, index_key, EMPTY_INDEX)?;
    }
    Ok(())
}

/// Store `value` under `key`, replacing whatever was there.
pub fn write(store: &mut dyn StateStore, key: &str, value: &str) -> ChaincodeResult<()> {
    put(store, key, value.as_bytes())
}

/// Remove `key`. Any adapter failure is reported as a failed delete.
pub fn delete(store: &mut dyn StateStore, key: &str) -> ChaincodeResult<()> {
    store.delete(key).map_err(|source| {
        tracing::debug!(key, error = %source, "state delete failed");
        ChaincodeError::DeleteFailed {
            key: key.to_string(),
            source,
        }
    })
}

/// Return the bytes stored under `key`.
///
/// A missing key and a failed lookup both surface as `NotFound`.
pub fn read(store: &dyn StateStore, key: &str) -> ChaincodeResult<Value> {
    match store.get(key) {
        Ok(Some(value)) => Ok(value),
        Ok(None) => Err(ChaincodeError::NotFound {
            key: key.to_string(),
        }),
        Err(source) => {
            tracing::debug!(key, error = %source, "state lookup failed");
            Err(ChaincodeError::NotFound {
                key: key.to_string(),
            })
        }
    }
}

fn put(store: &mut dyn StateStore, key: &str, value: &[u8]) -> ChaincodeResult<()> {
    store.put(key, value).map_err(|source| {
        tracing::debug!(key, error = %source, "state put failed");
        ChaincodeError::Store {
            key: key.to_string(),
            source,
        }
    })
}
