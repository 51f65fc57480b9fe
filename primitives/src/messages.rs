//! Chaincode boundary messages exchanged with the ledger runtime.
//!
//! Both messages are protobuf-encoded and field-compatible with the
//! runtime's `ChaincodeInput` and `Response` definitions:
//!
//! ```text
//! message ChaincodeInput { repeated bytes args = 1; }
//! message Response { int32 status = 1; string message = 2; bytes payload = 3; }
//! ```
//!
//! `args[0]` of a `ChaincodeInput` is the function name; the remaining
//! elements are its arguments.

use bytes::Bytes;

/// Status for a successful call.
pub const STATUS_OK: i32 = 200;

/// Status for a failed call. The message field carries the error text.
pub const STATUS_ERROR: i32 = 500;

/// Function name and arguments supplied by the runtime.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChaincodeInput {
    #[prost(bytes = "vec", repeated, tag = "1")]
    pub args: Vec<Vec<u8>>,
}

impl ChaincodeInput {
    /// Build an input from a function name and string arguments.
    pub fn from_call<S: AsRef<str>>(function: &str, args: &[S]) -> Self {
        let mut all = Vec::with_capacity(args.len() + 1);
        all.push(function.as_bytes().to_vec());
        all.extend(args.iter().map(|a| a.as_ref().as_bytes().to_vec()));
        Self { args: all }
    }
}

/// Outcome of a chaincode call returned to the runtime.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Response {
    #[prost(int32, tag = "1")]
    pub status: i32,
    #[prost(string, tag = "2")]
    pub message: String,
    #[prost(bytes = "bytes", tag = "3")]
    pub payload: Bytes,
}

impl Response {
    /// Successful response carrying `payload` (empty for mutations).
    pub fn success(payload: impl Into<Bytes>) -> Self {
        Self {
            status: STATUS_OK,
            message: String::new(),
            payload: payload.into(),
        }
    }

    /// Failed response carrying the error text.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR,
            message: message.into(),
            payload: Bytes::new(),
        }
    }

    /// Returns true if the status is below the error threshold.
    pub fn is_ok(&self) -> bool {
        self.status < 400
    }
}
