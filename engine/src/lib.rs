//! `keystone-engine`: the Keystone command dispatcher.
//!
//! This crate implements the chaincode's request handling:
//! `(entry point, function, args) → store calls → payload | error`.
//!
//! ## Architecture
//!
//! - [`command`]: operation names, arity rules, typed commands
//! - [`handlers`]: one state handler per operation
//! - [`dispatcher::Dispatcher`]: the `init` / `invoke` / `query` entry points
//! - [`error::ChaincodeError`]: the error taxonomy
//!
//! The state store is never owned by the dispatcher. Each entry point
//! borrows it for the duration of one call.

pub mod command;
pub mod config;
pub mod error;
pub mod handlers;
pub mod dispatcher;

// Re-export key types for convenience
pub use command::{InvokeCommand, InvokeOperation, Operation, QueryCommand};
pub use config::DispatcherConfig;
pub use dispatcher::Dispatcher;
pub use error::{ChaincodeError, ChaincodeResult, ErrorKind};
