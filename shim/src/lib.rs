//! `keystone-shim`: runtime-facing adapter for the Keystone chaincode.
//!
//! The chaincode runtime hands over an entry point, protobuf-encoded
//! `ChaincodeInput` bytes, and a state store. The shim decodes and
//! validates the input, drives the [`keystone_engine::Dispatcher`], and
//! returns an encoded `Response`.
//!
//! ```text
//! bytes ──decode_input──▶ Invocation ──call──▶ payload | ChaincodeError
//!                                                  │
//!                                       Response { 200 | 500 } ──▶ bytes
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod runtime;
pub mod validation;

pub use config::ShimConfig;
pub use error::ShimError;
pub use runtime::Shim;
pub use validation::{decode_input, Invocation};
