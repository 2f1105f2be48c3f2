//! Fixed-point decimal values and decimal columns.
//!
//! [`Dec`] stores an integer unit count and a scale (digits after the
//! point). Parsing preserves the scale of the input, so `"1.50"` and
//! `"1.5"` are distinct values. Inputs with more than [`Dec::MAX_SCALE`]
//! fractional digits are rounded half away from zero.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use tabula_core::{RawValue, ScanError};

use crate::column::ColumnType;

/// A signed fixed-point decimal number.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Dec {
    units: i64,
    scale: u32,
}

/// Errors from parsing a [`Dec`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseDecError {
    /// The input is not of the form `[-+]digits[.digits]`.
    Invalid {
        /// The rejected input.
        input: String,
    },
    /// The value does not fit in 64-bit units at its scale.
    Overflow {
        /// The rejected input.
        input: String,
    },
}

impl fmt::Display for ParseDecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid { input } => write!(f, "invalid decimal string: {input:?}"),
            Self::Overflow { input } => write!(f, "decimal out of range: {input:?}"),
        }
    }
}

impl Error for ParseDecError {}

/// Drop `digits` trailing digits from `units`, rounding half away from zero.
fn round_units(units: i128, digits: u32) -> i128 {
    if digits == 0 {
        return units;
    }
    let Some(factor) = 10i128.checked_pow(digits) else {
        return 0;
    };
    let quotient = units / factor;
    let remainder = (units % factor).abs();
    if remainder >= factor - remainder {
        quotient + units.signum()
    } else {
        quotient
    }
}

impl Dec {
    /// Largest scale a parsed value keeps.
    pub const MAX_SCALE: u32 = 18;

    /// A decimal equal to `units × 10^-scale`.
    pub const fn new(units: i64, scale: u32) -> Self {
        Self { units, scale }
    }

    /// The unscaled integer.
    pub fn units(&self) -> i64 {
        self.units
    }

    /// Digits after the decimal point.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Round to `scale` digits, half away from zero.
    ///
    /// A value already at or below `scale` is returned unchanged.
    pub fn round(self, scale: u32) -> Self {
        if self.scale <= scale {
            return self;
        }
        let units = round_units(i128::from(self.units), self.scale - scale);
        Self {
            // Rounding towards fewer digits cannot grow the magnitude past i64.
            units: i64::try_from(units).unwrap_or(self.units.signum() * i64::MAX),
            scale,
        }
    }
}

impl FromStr for Dec {
    type Err = ParseDecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseDecError::Invalid {
            input: s.to_owned(),
        };
        let overflow = || ParseDecError::Overflow {
            input: s.to_owned(),
        };

        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(invalid());
        }

        let mut units: i128 = 0;
        for b in int_part.bytes().chain(frac_part.bytes()) {
            if !b.is_ascii_digit() {
                return Err(invalid());
            }
            units = units
                .checked_mul(10)
                .and_then(|u| u.checked_add(i128::from(b - b'0')))
                .ok_or_else(overflow)?;
        }
        if negative {
            units = -units;
        }

        let mut scale = u32::try_from(frac_part.len()).map_err(|_| overflow())?;
        if scale > Self::MAX_SCALE {
            units = round_units(units, scale - Self::MAX_SCALE);
            scale = Self::MAX_SCALE;
        }
        let units = i64::try_from(units).map_err(|_| overflow())?;
        Ok(Self { units, scale })
    }
}

impl fmt::Display for Dec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.units.unsigned_abs().to_string();
        let sign = if self.units < 0 { "-" } else { "" };
        let scale = self.scale as usize;
        if scale == 0 {
            return write!(f, "{sign}{digits}");
        }
        if digits.len() <= scale {
            let zeros = "0".repeat(scale - digits.len());
            return write!(f, "{sign}0.{zeros}{digits}");
        }
        let (whole, frac) = digits.split_at(digits.len() - scale);
        write!(f, "{sign}{whole}.{frac}")
    }
}

/// Serialized as its decimal string to avoid float rounding.
impl Serialize for Dec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl ColumnType for Dec {
    const NAME: &'static str = "Decimal";
    const NULLABLE_NAME: &'static str = "NullDecimal";

    fn zero() -> Self {
        Self::default()
    }

    fn coerce(raw: &RawValue) -> Result<Option<Self>, ScanError> {
        let parsed = match raw {
            RawValue::Int(i) => return Ok(Some(Self::new(*i, 0))),
            RawValue::Float(x) if x.is_finite() => x.to_string().parse::<Dec>(),
            RawValue::Text(_) | RawValue::Bytes(_) => match raw.as_text() {
                Some(s) => s.parse::<Dec>(),
                None => return Err(ScanError::new(Self::NAME, raw)),
            },
            _ => return Err(ScanError::new(Self::NAME, raw)),
        };
        parsed
            .map(Some)
            .map_err(|e| ScanError::new(Self::NAME, raw).with_reason(e.to_string()))
    }

    fn to_raw(&self) -> RawValue {
        RawValue::Text(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Decimal, NullDecimal};
    use tabula_core::Field;

    fn dec(s: &str) -> Dec {
        s.parse().unwrap()
    }

    #[test]
    fn parse_preserves_scale() {
        assert_eq!(dec("12.340"), Dec::new(12340, 3));
        assert_eq!(dec("-0.05"), Dec::new(-5, 2));
        assert_eq!(dec("+7"), Dec::new(7, 0));
        assert_eq!(dec(".5"), Dec::new(5, 1));
    }

    #[test]
    fn trailing_point_is_scale_zero() {
        assert_eq!(dec("5."), Dec::new(5, 0));
        assert_eq!(dec("-12."), Dec::new(-12, 0));
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", "-", ".", "-.", "1.2.3", "1e5", "abc", "1,5"] {
            assert!(bad.parse::<Dec>().is_err(), "accepted {bad:?}");
        }
        assert!(matches!(
            "99999999999999999999".parse::<Dec>(),
            Err(ParseDecError::Overflow { .. })
        ));
    }

    #[test]
    fn excess_scale_is_rounded() {
        assert_eq!(
            dec("0.1234567890123456789"),
            Dec::new(123_456_789_012_345_679, 18)
        );
    }

    #[test]
    fn display_pads_leading_zeros() {
        assert_eq!(Dec::new(5, 3).to_string(), "0.005");
        assert_eq!(Dec::new(-1234, 2).to_string(), "-12.34");
        assert_eq!(Dec::new(42, 0).to_string(), "42");
        assert_eq!(Dec::new(-5, 1).to_string(), "-0.5");
    }

    #[test]
    fn round_half_away_from_zero() {
        assert_eq!(dec("1.25").round(1), dec("1.3"));
        assert_eq!(dec("-1.25").round(1), dec("-1.3"));
        assert_eq!(dec("1.24").round(1), dec("1.2"));
        assert_eq!(dec("1.2").round(4), dec("1.2"));
    }

    #[test]
    fn decimal_field_writes_text() {
        let mut f = Decimal::new();
        f.scan_from("10.50").unwrap();
        assert_eq!(f.value(), RawValue::Text("10.50".into()));
        f.scan_from(3i64).unwrap();
        assert_eq!(f.value(), RawValue::Text("3".into()));
        assert_eq!(f.baseline(), Ok(RawValue::Text("10.50".into())));
    }

    #[test]
    fn nullable_decimal_from_float_and_null() {
        let mut f = NullDecimal::new();
        f.scan_from(2.25).unwrap();
        assert_eq!(f.get(), Some(&dec("2.25")));
        f.scan(RawValue::Null).unwrap();
        assert!(f.is_dirty());
        assert!(f.scan_from(f64::INFINITY).is_err());
    }
}
