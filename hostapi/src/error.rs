//! State adapter error types.
//!
//! `StoreError` is the error type returned by `StateStore` methods.
//! It wraps `ErrorCode` from `keystone-primitives` for classified failures
//! and provides an `Internal` variant for backend-specific failures that
//! carry their own message.

use keystone_primitives::ErrorCode;
use std::fmt;

/// Error returned by `StateStore` methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A classified adapter failure.
    Code(ErrorCode),
    /// A backend failure with a descriptive message.
    Internal(String),
}

impl StoreError {
    /// Create an invalid-key error.
    pub fn invalid_key() -> Self {
        Self::Code(ErrorCode::InvalidKey)
    }

    /// Create a key-too-large error.
    pub fn key_too_large() -> Self {
        Self::Code(ErrorCode::KeyTooLarge)
    }

    /// Create a value-too-large error.
    pub fn value_too_large() -> Self {
        Self::Code(ErrorCode::ValueTooLarge)
    }

    /// Create a key-not-found error.
    pub fn key_not_found() -> Self {
        Self::Code(ErrorCode::KeyNotFound)
    }

    /// Create a store-unavailable error.
    pub fn unavailable() -> Self {
        Self::Code(ErrorCode::Unavailable)
    }

    /// Returns true if this error reports a missing key.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Code(ErrorCode::KeyNotFound))
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "store error: {}", code),
            Self::Internal(msg) => write!(f, "internal store error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<ErrorCode> for StoreError {
    fn from(code: ErrorCode) -> Self {
        Self::Code(code)
    }
}
