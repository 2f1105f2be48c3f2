//! Integer and floating-point columns.

use tabula_core::{RawValue, ScanError};

use crate::column::ColumnType;

/// `i64::MIN` and `i64::MAX + 1` as exactly-representable floats.
const I64_LOWER: f64 = -9_223_372_036_854_775_808.0;
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

impl ColumnType for i64 {
    const NAME: &'static str = "Int64";
    const NULLABLE_NAME: &'static str = "NullInt64";

    fn zero() -> Self {
        0
    }

    fn coerce(raw: &RawValue) -> Result<Option<Self>, ScanError> {
        match raw {
            RawValue::Int(i) => Ok(Some(*i)),
            RawValue::Float(x) => {
                if x.is_finite() && x.fract() == 0.0 && *x >= I64_LOWER && *x < I64_UPPER {
                    Ok(Some(*x as i64))
                } else {
                    Err(ScanError::new(Self::NAME, raw).with_reason("not an integral value"))
                }
            }
            RawValue::Text(_) | RawValue::Bytes(_) => raw
                .as_text()
                .ok_or_else(|| ScanError::new(Self::NAME, raw))?
                .parse::<i64>()
                .map(Some)
                .map_err(|e| ScanError::new(Self::NAME, raw).with_reason(e.to_string())),
            _ => Err(ScanError::new(Self::NAME, raw)),
        }
    }

    fn to_raw(&self) -> RawValue {
        RawValue::Int(*self)
    }
}

impl ColumnType for f64 {
    const NAME: &'static str = "Float64";
    const NULLABLE_NAME: &'static str = "NullFloat64";

    fn zero() -> Self {
        0.0
    }

    fn coerce(raw: &RawValue) -> Result<Option<Self>, ScanError> {
        match raw {
            RawValue::Float(x) => Ok(Some(*x)),
            RawValue::Int(i) => Ok(Some(*i as f64)),
            RawValue::Text(_) | RawValue::Bytes(_) => raw
                .as_text()
                .ok_or_else(|| ScanError::new(Self::NAME, raw))?
                .parse::<f64>()
                .map(Some)
                .map_err(|e| ScanError::new(Self::NAME, raw).with_reason(e.to_string())),
            _ => Err(ScanError::new(Self::NAME, raw)),
        }
    }

    fn to_raw(&self) -> RawValue {
        RawValue::Float(*self)
    }

    /// NaN is treated as equal to NaN so a re-scanned NaN is not dirty.
    fn same(&self, other: &Self) -> bool {
        self == other || (self.is_nan() && other.is_nan())
    }
}
