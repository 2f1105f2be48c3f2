//! Boolean columns.

use tabula_core::{RawValue, ScanError};

use crate::column::ColumnType;

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

impl ColumnType for bool {
    const NAME: &'static str = "Bool";
    const NULLABLE_NAME: &'static str = "NullBool";

    fn zero() -> Self {
        false
    }

    fn coerce(raw: &RawValue) -> Result<Option<Self>, ScanError> {
        let parsed = match raw {
            RawValue::Bool(b) => Some(*b),
            RawValue::Int(0) => Some(false),
            RawValue::Int(1) => Some(true),
            RawValue::Text(_) | RawValue::Bytes(_) => raw.as_text().and_then(parse_bool),
            _ => None,
        };
        parsed
            .map(Some)
            .ok_or_else(|| ScanError::new(Self::NAME, raw))
    }

    fn to_raw(&self) -> RawValue {
        RawValue::Bool(*self)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Bool, NullBool};
    use tabula_core::{Field, RawValue};

    #[test]
    fn accepts_driver_spellings() {
        let mut f = Bool::new();
        for (input, expected) in [("1", true), ("f", false), ("TRUE", true), ("False", false)] {
            f.scan_from(input).unwrap();
            assert_eq!(*f.get(), expected, "input {input}");
        }
        f.scan(RawValue::Bytes(b"t".to_vec())).unwrap();
        assert!(*f.get());
    }

    #[test]
    fn integers_other_than_zero_and_one_fail() {
        let mut f = NullBool::new();
        f.scan_from(0i64).unwrap();
        assert_eq!(f.get(), Some(&false));
        let err = f.scan_from(2i64).unwrap_err();
        assert_eq!(err.target, "NullBool");
        assert_eq!(f.get(), Some(&false));
    }

    #[test]
    fn same_value_twice_is_clean() {
        let mut f = Bool::new();
        f.scan_from(true).unwrap();
        f.scan_from("true").unwrap();
        assert!(!f.is_dirty());
    }
}
