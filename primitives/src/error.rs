//! Error codes reported by state store adapters.
//!
//! Every adapter failure is classified by one of these codes so the
//! dispatcher and the runtime can report it without knowing which
//! backend produced it.

use core::fmt;

/// State store failure classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidKey,
    KeyTooLarge,
    ValueTooLarge,
    KeyNotFound,
    Unavailable,
    Internal,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKey => write!(f, "ERR_INVALID_KEY"),
            Self::KeyTooLarge => write!(f, "ERR_KEY_TOO_LARGE"),
            Self::ValueTooLarge => write!(f, "ERR_VALUE_TOO_LARGE"),
            Self::KeyNotFound => write!(f, "ERR_KEY_NOT_FOUND"),
            Self::Unavailable => write!(f, "ERR_UNAVAILABLE"),
            Self::Internal => write!(f, "ERR_INTERNAL"),
        }
    }
}
