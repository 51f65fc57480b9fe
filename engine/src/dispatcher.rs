//! Command dispatcher: the chaincode's three entry points.
//!
//! `Dispatcher` implements the call lifecycle:
//!
//! 1. Resolve the function name against the entry point's registered set
//! 2. Check argument count
//! 3. Run the handler against the supplied store
//! 4. Return the payload (query) or nothing (init / invoke)
//!
//! Errors surface immediately and unchanged. A call that fails in step 1
//! or 2 never touches the store.

use keystone_hostapi::StateStore;
use keystone_primitives::Value;

use crate::command::{InvokeCommand, QueryCommand};
use crate::config::DispatcherConfig;
use crate::error::ChaincodeResult;
use crate::handlers;

/// The command dispatcher.
///
/// Holds configuration only. All state lives in the store passed to each
/// call, so one dispatcher can serve any number of stores and calls.
#[derive(Debug, Clone, Default)]
pub struct Dispatcher {
    config: DispatcherConfig,
}

impl Dispatcher {
    /// Create a dispatcher with the given configuration.
    pub fn new(config: DispatcherConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// `init` entry point. Expects exactly one argument: the marker value.
    pub fn init<S: AsRef<str>>(
        &self,
        store: &mut dyn StateStore,
        args: &[S],
    ) -> ChaincodeResult<()> {
        tracing::debug!(args = args.len(), "init is running");
        let command = InvokeCommand::init(args)?;
        self.execute(store, command)
    }

    /// `invoke` entry point: `init`, `write`, or `delete`.
    pub fn invoke<S: AsRef<str>>(
        &self,
        store: &mut dyn StateStore,
        function: &str,
        args: &[S],
    ) -> ChaincodeResult<()> {
        tracing::debug!(function, args = args.len(), "invoke is running");
        let command = InvokeCommand::parse(function, args).inspect_err(|err| {
            tracing::warn!(function, error = %err, "invoke rejected");
        })?;
        self.execute(store, command)
    }

    /// `query` entry point: `read`. Takes the store read-only.
    pub fn query<S: AsRef<str>>(
        &self,
        store: &dyn StateStore,
        function: &str,
        args: &[S],
    ) -> ChaincodeResult<Value> {
        tracing::debug!(function, args = args.len(), "query is running");
        let command = QueryCommand::parse(function, args).inspect_err(|err| {
            tracing::warn!(function, error = %err, "query rejected");
        })?;
        self.execute_query(store, command)
    }

    /// Run an already-decoded mutating command.
    pub fn execute(
        &self,
        store: &mut dyn StateStore,
        command: InvokeCommand,
    ) -> ChaincodeResult<()> {
        match command {
            InvokeCommand::Init { value } => handlers::init(store, &self.config, &value),
            InvokeCommand::Write { key, value } => handlers::write(store, &key, &value),
            InvokeCommand::Delete { key } => handlers::delete(store, &key),
        }
    }

    /// Run an already-decoded query command.
    pub fn execute_query(
        &self,
        store: &dyn StateStore,
        command: QueryCommand,
    ) -> ChaincodeResult<Value> {
        match command {
            QueryCommand::Read { key } => handlers::read(store, &key),
        }
    }
}
