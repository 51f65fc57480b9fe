//! `keystone-primitives`: foundational types for the Keystone chaincode.
//!
//! This crate provides the constants, store error codes, and chaincode
//! boundary messages shared by the state adapter, the dispatcher, and the
//! runtime shim.

pub mod types;
pub mod error;
pub mod messages;

// Re-export commonly used types at the crate root for convenience.
pub use types::{EntryPoint, Key, Value, MAX_KEY_LEN, MAX_VALUE_LEN};
pub use error::ErrorCode;
pub use messages::{ChaincodeInput, Response, STATUS_ERROR, STATUS_OK};
