//! Field values that distinguish present-null from present-value.

use serde::{Serialize, Serializer};
use tabula_core::{Capture, Field, FieldError, RawValue, ScanError};

use crate::column::ColumnType;

/// A field that is absent (never scanned), present-null, or holds a `T`.
///
/// Dirtiness compares presence first: a transition between null and a
/// value is always dirty.
#[derive(Clone, Debug)]
pub struct Nullable<T: ColumnType> {
    current: Option<T>,
    baseline: Option<T>,
    capture: Capture,
}

impl<T: ColumnType> Nullable<T> {
    /// A field that has never been scanned.
    pub fn new() -> Self {
        Self {
            current: None,
            baseline: None,
            capture: Capture::new(),
        }
    }

    /// The current value, `None` when null or never scanned.
    pub fn get(&self) -> Option<&T> {
        self.current.as_ref()
    }

    /// Whether the current value is null (or never scanned).
    pub fn is_null(&self) -> bool {
        self.current.is_none()
    }

    /// The captured baseline: `None` if never captured, `Some(None)` if
    /// the first scan was null.
    pub fn baseline_ref(&self) -> Option<Option<&T>> {
        self.capture
            .has_captured()
            .then_some(self.baseline.as_ref())
    }
}

impl<T: ColumnType> Default for Nullable<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn to_raw<T: ColumnType>(value: Option<&T>) -> RawValue {
    value.map_or(RawValue::Null, ColumnType::to_raw)
}

impl<T: ColumnType> Field for Nullable<T> {
    fn scan(&mut self, raw: RawValue) -> Result<(), ScanError> {
        let value = if raw.is_null() {
            None
        } else {
            T::coerce(&raw).map_err(|mut err| {
                err.target = T::NULLABLE_NAME;
                err
            })?
        };
        self.current = value;
        let captured = self
            .capture
            .capture(|| self.baseline = self.current.clone());
        if captured {
            tracing::trace!(
                target: "tabula.field",
                ty = T::NULLABLE_NAME,
                null = self.current.is_none(),
                "baseline captured"
            );
        }
        Ok(())
    }

    fn value(&self) -> RawValue {
        to_raw(self.current.as_ref())
    }

    fn baseline(&self) -> Result<RawValue, FieldError> {
        self.baseline_ref()
            .map(to_raw)
            .ok_or(FieldError::NotYetCaptured {
                target: T::NULLABLE_NAME,
            })
    }

    fn is_dirty(&self) -> bool {
        match (&self.current, &self.baseline) {
            (None, None) => false,
            (Some(current), Some(baseline)) => !current.same(baseline),
            _ => true,
        }
    }

    fn is_set(&self) -> bool {
        self.capture.has_captured()
    }

    fn type_name(&self) -> &'static str {
        T::NULLABLE_NAME
    }
}

/// Serializes the current value, `null` when absent or null.
impl<T: ColumnType + Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.current.serialize(serializer)
    }
}
