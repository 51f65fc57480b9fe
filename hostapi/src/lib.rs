//! `keystone-hostapi`: the state capability consumed by the Keystone chaincode.
//!
//! The ledger runtime owns persistence. This crate defines the narrow
//! interface the chaincode uses to reach it:
//!
//! - `StateStore` trait: single-key get / put / delete
//! - `StoreError`: adapter error type with `ErrorCode` conversion
//! - `StateLimits`: key/value size limits and delete policy
//! - `MemStore`: in-memory `StateStore` for tests and embedding hosts

pub mod error;
pub mod types;
pub mod state_store;
pub mod mem_store;

// Re-export commonly used types at the crate root.
pub use error::StoreError;
pub use types::StateLimits;
pub use state_store::StateStore;
pub use mem_store::MemStore;
