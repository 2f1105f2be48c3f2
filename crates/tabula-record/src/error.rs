//! Record-level error types.

use std::error::Error;
use std::fmt;

use tabula_core::{Name, ScanError};

/// Errors from field lookup and bulk record operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RecordError {
    /// No field with this name exists anywhere in the record's embedding
    /// graph.
    NameNotFound {
        /// The name that was looked up.
        name: Name,
    },
    /// A resolved field rejected the value it was given.
    Scan {
        /// The field that failed to scan.
        name: Name,
        /// The underlying coercion failure.
        source: ScanError,
    },
    /// Two mapped fields share a name and the discovery policy forbids it.
    DuplicateName {
        /// The repeated name.
        name: Name,
    },
    /// A primary-key generator hook failed.
    Generator {
        /// Description of the failure.
        reason: String,
    },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NameNotFound { name } => write!(f, "field name not found: {name}"),
            Self::Scan { name, source } => write!(f, "field {name}: {source}"),
            Self::DuplicateName { name } => {
                write!(f, "field name {name} is mapped more than once")
            }
            Self::Generator { reason } => write!(f, "primary key generator failed: {reason}"),
        }
    }
}

impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Scan { source, .. } => Some(source),
            _ => None,
        }
    }
}
