//! The field capability trait.

use crate::error::{FieldError, ScanError};
use crate::value::RawValue;

/// The contract every typed field value implements.
///
/// A field owns a current value and a baseline ("shadow") value. The
/// baseline is fixed by the first successful [`scan`](Field::scan) and
/// never again; later scans move only the current value. Dirtiness is
/// the comparison of the two.
pub trait Field: Send + Sync {
    /// Coerce `raw` into the field's semantic type and make it current.
    ///
    /// The first successful scan also fixes the baseline. On failure the
    /// baseline is untouched.
    fn scan(&mut self, raw: RawValue) -> Result<(), ScanError>;

    /// The current value in storage-writable form.
    ///
    /// Nullable fields return [`RawValue::Null`] when present-null or
    /// never scanned.
    fn value(&self) -> RawValue;

    /// The value captured at the first successful scan.
    fn baseline(&self) -> Result<RawValue, FieldError>;

    /// Whether the current value differs from the baseline.
    fn is_dirty(&self) -> bool;

    /// Whether any scan has ever succeeded.
    fn is_set(&self) -> bool;

    /// Semantic type name, as used in scan errors.
    fn type_name(&self) -> &'static str;

    /// Scan anything convertible into a [`RawValue`].
    fn scan_from<V: Into<RawValue>>(&mut self, value: V) -> Result<(), ScanError>
    where
        Self: Sized,
    {
        self.scan(value.into())
    }
}
