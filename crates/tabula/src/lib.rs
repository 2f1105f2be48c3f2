//! Tabula: typed, dirty-tracking field values and record mapping for
//! relational rows.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Tabula sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use tabula::prelude::*;
//!
//! #[derive(Default)]
//! struct User {
//!     id: Int64,
//!     first_name: NullText,
//! }
//!
//! tabula::structure! {
//!     User {
//!         field id => "Id",
//!         field first_name => "FirstName",
//!     }
//! }
//!
//! impl Record for User {
//!     fn table_name(&self) -> &str { "users" }
//!     fn primary_key(&self) -> PrimaryKey { PrimaryKey::single("Id") }
//! }
//!
//! let mut user = User::default();
//! load_from_map(&mut user, [("id", RawValue::Int(1)), ("first_name", "Joe".into())]).unwrap();
//! user.first_name.scan_from("Joey").unwrap();
//!
//! assert_eq!(fields(&user).unwrap().snake_case(), ["id", "first_name"]);
//! assert_eq!(dirty_fields(&user).unwrap().to_string(), "[FirstName]");
//! assert!(!user.is_new());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tabula-core` | Names, raw values, the `Field` trait, `Capture`, core errors |
//! | [`field`] | `tabula-field` | Required and nullable typed field values |
//! | [`record`] | `tabula-record` | Structure registration, discovery, access, bulk operations |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`tabula-core`).
///
/// The [`types::Field`] capability trait, [`types::Name`] and its column
/// mapping, [`types::RawValue`], and [`types::Capture`].
pub use tabula_core as types;

/// Typed field values (`tabula-field`).
///
/// Aliases such as [`field::Int64`] and [`field::NullText`] over the
/// generic [`field::Required`] and [`field::Nullable`] wrappers.
pub use tabula_field as field;

/// Record mapping (`tabula-record`).
///
/// [`record::SchemaCache`] discovery, [`record::get_field`], bulk
/// operations and the [`record::Session`] touchpoints.
pub use tabula_record as record;

pub use tabula_record::structure;

/// Common imports for typical Tabula usage.
pub mod prelude {
    // Core
    pub use tabula_core::{Field, FieldError, Name, Names, RawValue, ScanError};

    // Typed fields
    pub use tabula_field::{
        Bool, Date, Dec, Decimal, Document, Float64, Int64, NullBool, NullDate, NullDecimal,
        NullDocument, NullFloat64, NullInt64, NullText, NullTimeOfDay, NullTimestamp, Text,
        TimeOfDay, Timestamp,
    };

    // Records
    pub use tabula_record::{
        copy_fields, copy_set_fields, dirty_fields, fields, get_field, get_field_mut,
        load_from_map, set_fields, DiscoveryConfig, DuplicatePolicy, PrimaryKey, Record,
        RecordError, SchemaCache, Session, Structure,
    };
}
