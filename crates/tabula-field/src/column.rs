//! The per-type coercion contract behind [`Required`](crate::Required)
//! and [`Nullable`](crate::Nullable).

use tabula_core::{RawValue, ScanError};

/// A semantic column type: how raw values coerce into it and how it is
/// written back.
pub trait ColumnType: Clone + PartialEq + Send + Sync + 'static {
    /// Type name used in scan errors for the required variant.
    const NAME: &'static str;

    /// Type name used in scan errors for the nullable variant.
    const NULLABLE_NAME: &'static str;

    /// The zero value a required field holds before its first scan.
    fn zero() -> Self;

    /// Coerce a non-null raw value.
    ///
    /// `Ok(None)` means the input is a disguised null (for example a SQL
    /// zero-date string): nullable fields store it as present-null,
    /// required fields reject it.
    fn coerce(raw: &RawValue) -> Result<Option<Self>, ScanError>;

    /// Storage-writable form of a value.
    fn to_raw(&self) -> RawValue;

    /// Equality used for dirtiness.
    fn same(&self, other: &Self) -> bool {
        self == other
    }
}
