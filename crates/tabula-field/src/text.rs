//! Text columns.

use tabula_core::{RawValue, ScanError};

use crate::column::ColumnType;

impl ColumnType for String {
    const NAME: &'static str = "Text";
    const NULLABLE_NAME: &'static str = "NullText";

    fn zero() -> Self {
        String::new()
    }

    fn coerce(raw: &RawValue) -> Result<Option<Self>, ScanError> {
        match raw {
            RawValue::Text(s) => Ok(Some(s.clone())),
            RawValue::Bytes(b) => String::from_utf8(b.clone())
                .map(Some)
                .map_err(|_| ScanError::new(Self::NAME, raw).with_reason("invalid UTF-8")),
            RawValue::Int(_)
            | RawValue::Float(_)
            | RawValue::Bool(_)
            | RawValue::Timestamp(_)
            | RawValue::Date(_)
            | RawValue::Time(_) => Ok(Some(raw.to_string())),
            RawValue::Null | RawValue::Json(_) => Err(ScanError::new(Self::NAME, raw)),
        }
    }

    fn to_raw(&self) -> RawValue {
        RawValue::Text(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use crate::{NullText, Text};
    use tabula_core::{Field, RawValue};

    #[test]
    fn scans_text_and_bytes() {
        let mut f = Text::new();
        f.scan_from("Joe").unwrap();
        assert_eq!(f.get(), "Joe");
        f.scan(RawValue::Bytes(b"Joey".to_vec())).unwrap();
        assert_eq!(f.value(), RawValue::Text("Joey".into()));
        assert_eq!(f.baseline(), Ok(RawValue::Text("Joe".into())));
        assert!(f.is_dirty());
    }

    #[test]
    fn renders_numbers_as_text() {
        let mut f = Text::new();
        f.scan_from(42i64).unwrap();
        assert_eq!(f.get(), "42");
    }

    #[test]
    fn rejects_invalid_utf8_and_documents() {
        let mut f = NullText::new();
        assert!(f.scan(RawValue::Bytes(vec![0xff])).is_err());
        assert!(f.scan(RawValue::Json(serde_json::json!([1]))).is_err());
        assert!(!f.is_set());
    }
}
