//! Chaincode input decoding and validation.
//!
//! Turns the runtime's protobuf `ChaincodeInput` into an [`Invocation`].
//! Checks, in order:
//!
//! 1. The bytes decode as a `ChaincodeInput`
//! 2. At least one element (the function name) is present
//! 3. The argument count is within `max_args`
//! 4. Every element is within `max_arg_len` and is valid UTF-8

use keystone_primitives::ChaincodeInput;
use prost::Message;

use crate::config::ShimConfig;
use crate::error::ShimError;

/// A decoded call: function name plus string arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub function: String,
    pub args: Vec<String>,
}

impl Invocation {
    /// Build an invocation from borrowed parts.
    pub fn new<S: AsRef<str>>(function: &str, args: &[S]) -> Self {
        Self {
            function: function.to_string(),
            args: args.iter().map(|a| a.as_ref().to_string()).collect(),
        }
    }
}

/// Decode and validate raw `ChaincodeInput` bytes.
pub fn decode_input(bytes: &[u8], config: &ShimConfig) -> Result<Invocation, ShimError> {
    let input = ChaincodeInput::decode(bytes)?;
    validate_input(input, config)
}

/// Validate an already-decoded `ChaincodeInput`.
pub fn validate_input(input: ChaincodeInput, config: &ShimConfig) -> Result<Invocation, ShimError> {
    let mut elements = input.args.into_iter();
    let function = elements.next().ok_or(ShimError::MissingFunction)?;

    let arg_count = elements.len();
    if arg_count > config.max_args {
        return Err(ShimError::TooManyArgs {
            max: config.max_args,
            got: arg_count,
        });
    }

    let function = element_to_string(0, function, config)?;
    let args = elements
        .enumerate()
        .map(|(i, raw)| element_to_string(i + 1, raw, config))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Invocation { function, args })
}

fn element_to_string(index: usize, raw: Vec<u8>, config: &ShimConfig) -> Result<String, ShimError> {
    if raw.len() > config.max_arg_len {
        return Err(ShimError::ArgTooLong {
            index,
            len: raw.len(),
            max: config.max_arg_len,
        });
    }
    String::from_utf8(raw).map_err(|_| ShimError::InvalidUtf8 { index })
}
