//! Error taxonomy for the dispatcher.
//!
//! Display strings are part of the observable contract: the runtime shows
//! them to clients verbatim in failed responses.

use keystone_hostapi::StoreError;
use keystone_primitives::EntryPoint;

use crate::command::Operation;

/// Coarse classification of a [`ChaincodeError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Wrong number of arguments for the selected operation.
    ArgumentCount,
    /// Operation name not registered for the entry point.
    UnknownOperation,
    /// The state adapter failed a put or delete.
    Store,
    /// Read of a key that holds no value.
    NotFound,
}

/// Errors raised by the dispatcher.
///
/// None of these are retried here. Retry policy belongs to the runtime.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChaincodeError {
    /// Wrong number of arguments.
    #[error("Incorrect number of arguments. Expecting {expecting}")]
    ArgumentCount {
        operation: Operation,
        expecting: &'static str,
        got: usize,
    },

    /// Operation name not in the registered set for this entry point.
    #[error("Received unknown function {}", unknown_noun(.entry))]
    UnknownOperation { entry: EntryPoint, name: String },

    /// Put failed. The adapter's message is reported unchanged.
    #[error("{source}")]
    Store { key: String, source: StoreError },

    /// Delete failed.
    #[error("Failed to delete state")]
    DeleteFailed { key: String, source: StoreError },

    /// No value stored under `key`.
    #[error("{{\"Error\":\"Failed to get state for {key}\"}}")]
    NotFound { key: String },
}

fn unknown_noun(entry: &EntryPoint) -> &'static str {
    match entry {
        EntryPoint::Query => "query",
        EntryPoint::Init | EntryPoint::Invoke => "invocation",
    }
}

impl ChaincodeError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ArgumentCount { .. } => ErrorKind::ArgumentCount,
            Self::UnknownOperation { .. } => ErrorKind::UnknownOperation,
            Self::Store { .. } | Self::DeleteFailed { .. } => ErrorKind::Store,
            Self::NotFound { .. } => ErrorKind::NotFound,
        }
    }

    /// The adapter error behind a `Store`-kind failure, if any.
    pub fn store_error(&self) -> Option<&StoreError> {
        match self {
            Self::Store { source, .. } | Self::DeleteFailed { source, .. } => Some(source),
            _ => None,
        }
    }

    /// The state key this error concerns, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Store { key, .. } | Self::DeleteFailed { key, .. } | Self::NotFound { key } => {
                Some(key.as_str())
            }
            _ => None,
        }
    }
}

/// Convenience result type for the dispatcher.
pub type ChaincodeResult<T> = Result<T, ChaincodeError>;
