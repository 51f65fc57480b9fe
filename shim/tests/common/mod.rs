//! Shared test helpers for shim integration tests.
//!
//! Input encoding, response decoding, and shim factories.

#![allow(dead_code)]

use keystone_hostapi::{MemStore, StateStore};
use keystone_primitives::{ChaincodeInput, EntryPoint, Response};
use keystone_shim::{Shim, ShimConfig};
use prost::Message;

/// Encode a call as `ChaincodeInput` bytes.
pub fn input(function: &str, args: &[&str]) -> Vec<u8> {
    ChaincodeInput::from_call(function, args).encode_to_vec()
}

/// Decode the bytes returned by `Shim::execute`.
pub fn response(bytes: &[u8]) -> Response {
    Response::decode(bytes).expect("shim must return a valid Response")
}

/// Run one call end to end and decode the result.
pub fn run(
    shim: &Shim,
    store: &mut dyn StateStore,
    entry: EntryPoint,
    function: &str,
    args: &[&str],
) -> Response {
    response(&shim.execute(entry, &input(function, args), store))
}

/// Shim with default configuration.
pub fn shim() -> Shim {
    Shim::default()
}

/// Shim that resets the given index keys on `init`.
pub fn shim_with_indexes(keys: &[&str]) -> Shim {
    let mut config = ShimConfig::default();
    for key in keys {
        config.dispatcher = config.dispatcher.with_index_key(*key);
    }
    Shim::new(config)
}

/// Empty in-memory store.
pub fn store() -> MemStore {
    MemStore::new()
}
