//! Typed field values for Tabula records.
//!
//! Every semantic type comes in a required and a nullable variant, both
//! implementing [`Field`](tabula_core::Field):
//!
//! | Required | Nullable | Value type |
//! |----------|----------|------------|
//! | [`Text`] | [`NullText`] | `String` |
//! | [`Bool`] | [`NullBool`] | `bool` |
//! | [`Int64`] | [`NullInt64`] | `i64` |
//! | [`Float64`] | [`NullFloat64`] | `f64` |
//! | [`Timestamp`] | [`NullTimestamp`] | [`NaiveDateTime`] |
//! | [`Date`] | [`NullDate`] | [`NaiveDate`] |
//! | [`TimeOfDay`] | [`NullTimeOfDay`] | [`NaiveTime`] |
//! | [`Decimal`] | [`NullDecimal`] | [`Dec`] |
//! | [`Document`] | [`NullDocument`] | [`serde_json::Value`] |
//!
//! The per-type coercion rules live in [`ColumnType`] implementations;
//! [`Required`] and [`Nullable`] own the baseline/dirty/set contract.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boolean;
pub mod column;
pub mod decimal;
pub mod document;
pub mod nullable;
pub mod numeric;
pub mod required;
pub mod temporal;
pub mod text;

pub use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
pub use column::ColumnType;
pub use decimal::{Dec, ParseDecError};
pub use nullable::Nullable;
pub use required::Required;

/// Text that must not be null.
pub type Text = Required<String>;
/// Text that may be null.
pub type NullText = Nullable<String>;
/// Boolean that must not be null.
pub type Bool = Required<bool>;
/// Boolean that may be null.
pub type NullBool = Nullable<bool>;
/// 64-bit integer that must not be null.
pub type Int64 = Required<i64>;
/// 64-bit integer that may be null.
pub type NullInt64 = Nullable<i64>;
/// 64-bit float that must not be null.
pub type Float64 = Required<f64>;
/// 64-bit float that may be null.
pub type NullFloat64 = Nullable<f64>;
/// Timestamp that must not be null.
pub type Timestamp = Required<NaiveDateTime>;
/// Timestamp that may be null.
pub type NullTimestamp = Nullable<NaiveDateTime>;
/// Calendar date that must not be null.
pub type Date = Required<NaiveDate>;
/// Calendar date that may be null.
pub type NullDate = Nullable<NaiveDate>;
/// Time of day that must not be null.
pub type TimeOfDay = Required<NaiveTime>;
/// Time of day that may be null.
pub type NullTimeOfDay = Nullable<NaiveTime>;
/// Fixed-point decimal that must not be null.
pub type Decimal = Required<Dec>;
/// Fixed-point decimal that may be null.
pub type NullDecimal = Nullable<Dec>;
/// Opaque JSON document that must not be null.
pub type Document = Required<serde_json::Value>;
/// Opaque JSON document that may be null.
pub type NullDocument = Nullable<serde_json::Value>;
