//! Shim runtime: the bridge between the chaincode runtime and the dispatcher.
//!
//! `Shim` is the main entry point. For each call it:
//!
//! 1. Decodes and validates the `ChaincodeInput` bytes
//! 2. Routes the invocation to the dispatcher for the given entry point
//! 3. Wraps the outcome in a `Response` (status 200 or 500)
//! 4. Encodes the `Response` for the runtime

use keystone_engine::{ChaincodeResult, Dispatcher};
use keystone_hostapi::StateStore;
use keystone_primitives::{EntryPoint, Response, Value};
use prost::Message;

use crate::config::ShimConfig;
use crate::error::ShimError;
use crate::validation::{self, Invocation};

/// The chaincode runtime shim.
///
/// Owns the configuration and a dispatcher. The state store is supplied
/// per call by the runtime.
#[derive(Debug, Clone, Default)]
pub struct Shim {
    config: ShimConfig,
    dispatcher: Dispatcher,
}

impl Shim {
    /// Create a shim from configuration.
    pub fn new(config: ShimConfig) -> Self {
        let dispatcher = Dispatcher::new(config.dispatcher.clone());
        Self { config, dispatcher }
    }

    /// The active configuration.
    pub fn config(&self) -> &ShimConfig {
        &self.config
    }

    /// The underlying dispatcher.
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Decode raw input bytes under this shim's limits.
    pub fn decode_input(&self, bytes: &[u8]) -> Result<Invocation, ShimError> {
        validation::decode_input(bytes, &self.config)
    }

    /// Route a decoded invocation to the dispatcher.
    ///
    /// `Init` ignores the function name. `Invoke` yields an empty payload.
    /// `Query` only ever sees the store read-only.
    pub fn call(
        &self,
        entry: EntryPoint,
        invocation: &Invocation,
        store: &mut dyn StateStore,
    ) -> ChaincodeResult<Value> {
        match entry {
            EntryPoint::Init => {
                self.dispatcher.init(store, invocation.args.as_slice())?;
                Ok(Vec::new())
            }
            EntryPoint::Invoke => {
                self.dispatcher
                    .invoke(store, &invocation.function, invocation.args.as_slice())?;
                Ok(Vec::new())
            }
            EntryPoint::Query => {
                self.dispatcher
                    .query(&*store, &invocation.function, invocation.args.as_slice())
            }
        }
    }

    /// Run a decoded invocation and wrap the outcome in a `Response`.
    pub fn handle(
        &self,
        entry: EntryPoint,
        invocation: &Invocation,
        store: &mut dyn StateStore,
    ) -> Response {
        match self.call(entry, invocation, store) {
            Ok(payload) => Response::success(payload),
            Err(err) => Response::error(err.to_string()),
        }
    }

    /// Full byte-level round: decode input, dispatch, encode the `Response`.
    ///
    /// Input that fails to decode never reaches the store; it produces an
    /// error `Response` carrying the decode failure.
    pub fn execute(&self, entry: EntryPoint, input: &[u8], store: &mut dyn StateStore) -> Vec<u8> {
        let response = match self.decode_input(input) {
            Ok(invocation) => self.handle(entry, &invocation, store),
            Err(err) => {
                tracing::warn!(entry = %entry, error = %err, "rejected chaincode input");
                Response::error(err.to_string())
            }
        };
        response.encode_to_vec()
    }
}
