//! Adapter configuration types.
//!
//! `StateLimits` bundles the size limits and delete policy enforced by
//! the bundled `MemStore`. Hosts may load it from JSON; omitted fields
//! take their defaults.

use keystone_primitives::{MAX_KEY_LEN, MAX_VALUE_LEN};
use serde::Deserialize;

/// Limits and policy for a state adapter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StateLimits {
    /// Maximum length of a state key in bytes.
    pub max_key_len: usize,
    /// Maximum length of a state value in bytes.
    pub max_value_len: usize,
    /// When true, deleting an absent key fails with `ERR_KEY_NOT_FOUND`.
    /// When false, deletes are idempotent.
    pub strict_deletes: bool,
}

impl Default for StateLimits {
    fn default() -> Self {
        Self {
            max_key_len: MAX_KEY_LEN,
            max_value_len: MAX_VALUE_LEN,
            strict_deletes: false,
        }
    }
}
