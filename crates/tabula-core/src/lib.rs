//! Core types and traits for the Tabula record mapping layer.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Tabula workspace:
//! field names and their column mapping, the raw column value, the
//! [`Field`] capability trait, the exactly-once [`Capture`] gate, and
//! the core error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod capture;
pub mod error;
pub mod field;
pub mod name;
pub mod value;

pub use capture::Capture;
pub use error::{FieldError, ScanError};
pub use field::Field;
pub use name::{Name, Names};
pub use value::RawValue;
