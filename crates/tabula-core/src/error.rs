//! Error types for field scanning and baseline access.
//!
//! Record-level errors (name lookup, bulk loads) live in `tabula-record`
//! and wrap these.

use std::error::Error;
use std::fmt;

use crate::value::RawValue;

/// A raw value could not be coerced into a field's semantic type.
///
/// Carries the target type name and a rendering of the offending value
/// so upstream layers can report bad input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanError {
    /// Semantic type the value was being scanned into (e.g. `"Int64"`).
    pub target: &'static str,
    /// Rendering of the offending raw value.
    pub value: String,
    /// Why the coercion failed, when more is known than the type mismatch.
    pub reason: Option<String>,
}

impl ScanError {
    /// Build a scan error for `target` from the offending raw value.
    pub fn new(target: &'static str, value: &RawValue) -> Self {
        Self {
            target,
            value: value.to_string(),
            reason: None,
        }
    }

    /// Attach a reason to this error.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "could not scan type {} from value {}",
            self.target, self.value
        )?;
        if let Some(reason) = &self.reason {
            write!(f, ": {reason}")?;
        }
        Ok(())
    }
}

impl Error for ScanError {}

/// Errors from reading a field's captured state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// The baseline was requested before any successful scan.
    ///
    /// Distinguishes "never scanned" from "scanned and null".
    NotYetCaptured {
        /// Semantic type of the field.
        target: &'static str,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotYetCaptured { target } => {
                write!(f, "baseline of {target} field not yet captured")
            }
        }
    }
}

impl Error for FieldError {}
