//! Field values that must never be null.

use serde::{Serialize, Serializer};
use tabula_core::{Capture, Field, FieldError, RawValue, ScanError};

use crate::column::ColumnType;

/// A field holding a concrete `T` at all times.
///
/// Before the first scan it holds [`ColumnType::zero`]. Scanning
/// [`RawValue::Null`] (or a disguised null) is an error.
#[derive(Clone, Debug)]
pub struct Required<T: ColumnType> {
    current: T,
    baseline: T,
    capture: Capture,
}

impl<T: ColumnType> Required<T> {
    /// A field that has never been scanned.
    pub fn new() -> Self {
        Self {
            current: T::zero(),
            baseline: T::zero(),
            capture: Capture::new(),
        }
    }

    /// The current value.
    pub fn get(&self) -> &T {
        &self.current
    }

    /// The captured baseline, if any scan has succeeded.
    pub fn baseline_ref(&self) -> Option<&T> {
        self.capture.has_captured().then_some(&self.baseline)
    }

    fn null_error(raw: &RawValue) -> ScanError {
        ScanError::new(T::NAME, raw).with_reason("value must not be null")
    }
}

impl<T: ColumnType> Default for Required<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ColumnType> Field for Required<T> {
    fn scan(&mut self, raw: RawValue) -> Result<(), ScanError> {
        if raw.is_null() {
            return Err(Self::null_error(&raw));
        }
        let Some(value) = T::coerce(&raw)? else {
            return Err(Self::null_error(&raw));
        };
        self.current = value;
        let captured = self
            .capture
            .capture(|| self.baseline = self.current.clone());
        if captured {
            tracing::trace!(target: "tabula.field", ty = T::NAME, "baseline captured");
        }
        Ok(())
    }

    fn value(&self) -> RawValue {
        self.current.to_raw()
    }

    fn baseline(&self) -> Result<RawValue, FieldError> {
        self.baseline_ref()
            .map(ColumnType::to_raw)
            .ok_or(FieldError::NotYetCaptured { target: T::NAME })
    }

    fn is_dirty(&self) -> bool {
        !self.current.same(&self.baseline)
    }

    fn is_set(&self) -> bool {
        self.capture.has_captured()
    }

    fn type_name(&self) -> &'static str {
        T::NAME
    }
}

/// Serializes the current value only.
impl<T: ColumnType + Serialize> Serialize for Required<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.current.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Int64, Text};
    use tabula_core::{Field, FieldError, RawValue};

    #[test]
    fn unscanned_field_has_zero_value_and_no_baseline() {
        let f = Int64::new();
        assert_eq!(f.value(), RawValue::Int(0));
        assert!(!f.is_set());
        assert!(!f.is_dirty());
        assert_eq!(
            f.baseline(),
            Err(FieldError::NotYetCaptured { target: "Int64" })
        );
    }

    #[test]
    fn null_is_rejected_without_touching_state() {
        let mut f = Text::new();
        f.scan_from("Joe").unwrap();
        let err = f.scan(RawValue::Null).unwrap_err();
        assert_eq!(err.target, "Text");
        assert_eq!(f.get(), "Joe");
        assert!(!f.is_dirty());
    }

    #[test]
    fn failed_first_scan_leaves_field_unset() {
        let mut f = Int64::new();
        assert!(f.scan_from("twelve").is_err());
        assert!(!f.is_set());
        f.scan_from(12i64).unwrap();
        assert_eq!(f.baseline(), Ok(RawValue::Int(12)));
    }

    #[test]
    fn serializes_current_value() {
        let mut f = Text::new();
        f.scan_from("a").unwrap();
        f.scan_from("b").unwrap();
        assert_eq!(serde_json::to_string(&f).unwrap(), "\"b\"");
    }
}
