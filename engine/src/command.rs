//! Operation names and typed commands.
//!
//! The runtime hands the chaincode a function name and a list of string
//! arguments. This module turns that pair into a typed command:
//!
//! ```text
//! invoke: "init"   [value]        -> InvokeCommand::Init
//!         "write"  [key, value]   -> InvokeCommand::Write
//!         "delete" [key]          -> InvokeCommand::Delete
//! query:  "read"   [key]          -> QueryCommand::Read
//! ```
//!
//! Name matching is case-exact. Arity is checked before any command is
//! built, so a command value is always well-formed.

use core::fmt;

use keystone_primitives::types::{FN_DELETE, FN_INIT, FN_READ, FN_WRITE};
use keystone_primitives::EntryPoint;

use crate::error::{ChaincodeError, ChaincodeResult};

/// Every operation the chaincode understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Init,
    Write,
    Delete,
    Read,
}

impl Operation {
    /// Operations reachable through `query`.
    pub const QUERY: [Operation; 1] = [Operation::Read];

    /// The wire name of this operation.
    pub fn name(self) -> &'static str {
        match self {
            Self::Init => FN_INIT,
            Self::Write => FN_WRITE,
            Self::Delete => FN_DELETE,
            Self::Read => FN_READ,
        }
    }

    /// Exact number of arguments this operation takes.
    pub fn arity(self) -> usize {
        match self {
            Self::Init | Self::Delete | Self::Read => 1,
            Self::Write => 2,
        }
    }

    /// Tail of the argument-count error message.
    pub fn expecting(self) -> &'static str {
        match self {
            Self::Init | Self::Delete => "1",
            Self::Write => "2. name of the key and value to set",
            Self::Read => "name of the key to query",
        }
    }

    /// Resolve `name` against the operations registered for `entry`.
    ///
    /// The `Init` entry point ignores the function name and always
    /// resolves to [`Operation::Init`].
    pub fn resolve(entry: EntryPoint, name: &str) -> ChaincodeResult<Self> {
        let registered: &[Operation] = match entry {
            EntryPoint::Init => return Ok(Self::Init),
            EntryPoint::Invoke => {
                return InvokeOperation::resolve(name).map(InvokeOperation::operation)
            }
            EntryPoint::Query => &Self::QUERY,
        };
        registered
            .iter()
            .copied()
            .find(|op| op.name() == name)
            .ok_or_else(|| ChaincodeError::UnknownOperation {
                entry,
                name: name.to_string(),
            })
    }

    /// Fail with `ArgumentCount` unless `args` has exactly `self.arity()` items.
    pub fn check_arity<S: AsRef<str>>(self, args: &[S]) -> ChaincodeResult<()> {
        if args.len() != self.arity() {
            return Err(ChaincodeError::ArgumentCount {
                operation: self,
                expecting: self.expecting(),
                got: args.len(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The subset of [`Operation`] reachable through `invoke`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvokeOperation {
    Init,
    Write,
    Delete,
}

impl InvokeOperation {
    pub const ALL: [InvokeOperation; 3] = [Self::Init, Self::Write, Self::Delete];

    /// Look up `name` among the invoke operations.
    pub fn resolve(name: &str) -> ChaincodeResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.operation().name() == name)
            .ok_or_else(|| ChaincodeError::UnknownOperation {
                entry: EntryPoint::Invoke,
                name: name.to_string(),
            })
    }

    /// Widen to the general operation.
    pub fn operation(self) -> Operation {
        match self {
            Self::Init => Operation::Init,
            Self::Write => Operation::Write,
            Self::Delete => Operation::Delete,
        }
    }
}

/// A state-mutating command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvokeCommand {
    /// Write the initialization marker and reset configured index keys.
    Init { value: String },
    /// Store `value` under `key`, overwriting unconditionally.
    Write { key: String, value: String },
    /// Remove `key`.
    Delete { key: String },
}

impl InvokeCommand {
    /// Decode an `invoke` call.
    pub fn parse<S: AsRef<str>>(function: &str, args: &[S]) -> ChaincodeResult<Self> {
        let operation = InvokeOperation::resolve(function)?;
        Self::from_operation(operation, args)
    }

    /// Decode an `init` call.
    pub fn init<S: AsRef<str>>(args: &[S]) -> ChaincodeResult<Self> {
        Self::from_operation(InvokeOperation::Init, args)
    }

    fn from_operation<S: AsRef<str>>(
        operation: InvokeOperation,
        args: &[S],
    ) -> ChaincodeResult<Self> {
        operation.operation().check_arity(args)?;
        let arg = |i: usize| args[i].as_ref().to_string();
        Ok(match operation {
            InvokeOperation::Init => Self::Init { value: arg(0) },
            InvokeOperation::Write => Self::Write {
                key: arg(0),
                value: arg(1),
            },
            InvokeOperation::Delete => Self::Delete { key: arg(0) },
        })
    }

    /// The operation this command performs.
    pub fn operation(&self) -> Operation {
        match self {
            Self::Init { .. } => Operation::Init,
            Self::Write { .. } => Operation::Write,
            Self::Delete { .. } => Operation::Delete,
        }
    }
}

/// A read-only command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryCommand {
    /// Return the raw bytes stored under `key`.
    Read { key: String },
}

impl QueryCommand {
    /// Decode a `query` call.
    pub fn parse<S: AsRef<str>>(function: &str, args: &[S]) -> ChaincodeResult<Self> {
        let operation = Operation::resolve(EntryPoint::Query, function)?;
        operation.check_arity(args)?;
        Ok(Self::Read {
            key: args[0].as_ref().to_string(),
        })
    }

    /// The operation this command performs.
    pub fn operation(&self) -> Operation {
        match self {
            Self::Read { .. } => Operation::Read,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_operation_names_and_arity() {
        assert_eq!(Operation::Init.name(), "init");
        assert_eq!(Operation::Write.name(), "write");
        assert_eq!(Operation::Delete.name(), "delete");
        assert_eq!(Operation::Read.name(), "read");

        assert_eq!(Operation::Init.arity(), 1);
        assert_eq!(Operation::Write.arity(), 2);
        assert_eq!(Operation::Delete.arity(), 1);
        assert_eq!(Operation::Read.arity(), 1);
    }

    #[test]
    fn test_resolve_invoke() {
        assert_eq!(Operation::resolve(EntryPoint::Invoke, "init").unwrap(), Operation::Init);
        assert_eq!(Operation::resolve(EntryPoint::Invoke, "write").unwrap(), Operation::Write);
        assert_eq!(Operation::resolve(EntryPoint::Invoke, "delete").unwrap(), Operation::Delete);
    }

    #[test]
    fn test_resolve_is_case_exact() {
        let err = Operation::resolve(EntryPoint::Invoke, "Write").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownOperation);
        let err = Operation::resolve(EntryPoint::Query, "READ").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownOperation);
    }

    #[test]
    fn test_read_is_not_an_invocation() {
        let err = Operation::resolve(EntryPoint::Invoke, "read").unwrap_err();
        assert_eq!(err.to_string(), "Received unknown function invocation");
    }

    #[test]
    fn test_write_is_not_a_query() {
        let err = Operation::resolve(EntryPoint::Query, "write").unwrap_err();
        assert_eq!(err.to_string(), "Received unknown function query");
    }

    #[test]
    fn test_init_entry_ignores_function_name() {
        assert_eq!(Operation::resolve(EntryPoint::Init, "").unwrap(), Operation::Init);
        assert_eq!(Operation::resolve(EntryPoint::Init, "anything").unwrap(), Operation::Init);
    }

    #[test]
    fn test_invoke_operations_cover_registry() {
        let names: Vec<_> = InvokeOperation::ALL
            .iter()
            .map(|op| op.operation().name())
            .collect();
        assert_eq!(names, vec!["init", "write", "delete"]);
        assert_eq!(InvokeOperation::resolve("delete").unwrap(), InvokeOperation::Delete);
    }

    #[test]
    fn test_read_never_decodes_as_invocation() {
        let err = InvokeCommand::parse("read", &["k"]).unwrap_err();
        assert_eq!(
            err,
            ChaincodeError::UnknownOperation {
                entry: EntryPoint::Invoke,
                name: "read".into(),
            }
        );
    }

    #[test]
    fn test_parse_write() {
        let cmd = InvokeCommand::parse("write", &["x", "1"]).unwrap();
        assert_eq!(
            cmd,
            InvokeCommand::Write {
                key: "x".into(),
                value: "1".into()
            }
        );
        assert_eq!(cmd.operation(), Operation::Write);
    }

    #[test]
    fn test_parse_write_wrong_arity() {
        let err = InvokeCommand::parse("write", &["a"]).unwrap_err();
        match err {
            ChaincodeError::ArgumentCount { operation, got, .. } => {
                assert_eq!(operation, Operation::Write);
                assert_eq!(got, 1);
            }
            other => panic!("expected ArgumentCount, got {other:?}"),
        }

        let err = InvokeCommand::parse("write", &["a", "b", "c"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentCount);
    }

    #[test]
    fn test_parse_delete_and_init() {
        assert_eq!(
            InvokeCommand::parse("delete", &["k"]).unwrap(),
            InvokeCommand::Delete { key: "k".into() }
        );
        assert_eq!(
            InvokeCommand::parse("init", &["v"]).unwrap(),
            InvokeCommand::Init { value: "v".into() }
        );
        assert_eq!(
            InvokeCommand::init(&["v"]).unwrap(),
            InvokeCommand::Init { value: "v".into() }
        );
    }

    #[test]
    fn test_init_wrong_arity() {
        let none: [&str; 0] = [];
        let err = InvokeCommand::init(&none).unwrap_err();
        assert_eq!(err.to_string(), "Incorrect number of arguments. Expecting 1");
        let err = InvokeCommand::init(&["a", "b"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentCount);
    }

    #[test]
    fn test_unknown_name_checked_before_arity() {
        let none: [&str; 0] = [];
        let err = InvokeCommand::parse("bogus", &none).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownOperation);
    }

    #[test]
    fn test_parse_read() {
        let cmd = QueryCommand::parse("read", &["k"]).unwrap();
        assert_eq!(cmd, QueryCommand::Read { key: "k".into() });
        assert_eq!(cmd.operation(), Operation::Read);

        let err = QueryCommand::parse("read", &["a", "b"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Incorrect number of arguments. Expecting name of the key to query"
        );
    }

    #[test]
    fn test_accepts_owned_strings() {
        let args = vec!["key".to_string(), "value".to_string()];
        let cmd = InvokeCommand::parse("write", &args).unwrap();
        assert_eq!(cmd.operation(), Operation::Write);
    }
}
