//! Shim error types.

/// Errors raised while decoding chaincode input.
///
/// Dispatch failures are not represented here: they are reported to the
/// runtime as `ChaincodeError` text inside an error `Response`.
#[derive(Debug, thiserror::Error)]
pub enum ShimError {
    /// The input bytes are not a valid `ChaincodeInput` message.
    #[error("malformed chaincode input: {0}")]
    Decode(#[from] prost::DecodeError),

    /// The input has no elements, so no function name.
    #[error("chaincode input carries no function name")]
    MissingFunction,

    /// More arguments than `max_args`.
    #[error("too many arguments: {got} (max {max})")]
    TooManyArgs { max: usize, got: usize },

    /// An element longer than `max_arg_len`. Index 0 is the function name.
    #[error("argument {index} is {len} bytes (max {max})")]
    ArgTooLong { index: usize, len: usize, max: usize },

    /// An element that is not valid UTF-8. Index 0 is the function name.
    #[error("argument {index} is not valid UTF-8")]
    InvalidUtf8 { index: usize },
}
