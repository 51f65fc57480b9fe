//! Core type aliases and constants for Keystone.
//!
//! `Key` and `Value` are the types stored through `StateStore`.

use core::fmt;
use core::str::FromStr;

/// State key. Keys are caller-supplied strings.
pub type Key = String;

/// State value. Values are opaque bytes with no schema.
pub type Value = Vec<u8>;

/// Maximum key length accepted by the bundled state adapter, in bytes.
pub const MAX_KEY_LEN: usize = 256;

/// Maximum value length accepted by the bundled state adapter, in bytes.
pub const MAX_VALUE_LEN: usize = 65_536; // 64 KiB

/// Key written by `init` when no other marker key is configured.
pub const DEFAULT_INIT_KEY: &str = "hello";

/// Operation name for the initialization command.
pub const FN_INIT: &str = "init";
/// Operation name for the write command.
pub const FN_WRITE: &str = "write";
/// Operation name for the delete command.
pub const FN_DELETE: &str = "delete";
/// Operation name for the read command.
pub const FN_READ: &str = "read";

/// The three entry categories through which the runtime calls the chaincode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryPoint {
    /// One-time initialization (deploy or upgrade).
    Init,
    /// State-mutating invocation.
    Invoke,
    /// Read-only query.
    Query,
}

impl EntryPoint {
    /// Lowercase name of the entry point.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Invoke => "invoke",
            Self::Query => "query",
        }
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name an entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownEntryPoint(pub String);

impl fmt::Display for UnknownEntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown entry point: {}", self.0)
    }
}

impl std::error::Error for UnknownEntryPoint {}

impl FromStr for EntryPoint {
    type Err = UnknownEntryPoint;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "init" => Ok(Self::Init),
            "invoke" => Ok(Self::Invoke),
            "query" => Ok(Self::Query),
            other => Err(UnknownEntryPoint(other.to_string())),
        }
    }
}
