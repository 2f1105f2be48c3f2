//! Opaque JSON document columns.

use serde_json::Value;
use tabula_core::{RawValue, ScanError};

use crate::column::ColumnType;

impl ColumnType for Value {
    const NAME: &'static str = "Document";
    const NULLABLE_NAME: &'static str = "NullDocument";

    fn zero() -> Self {
        Value::Null
    }

    fn coerce(raw: &RawValue) -> Result<Option<Self>, ScanError> {
        match raw {
            RawValue::Json(v) => Ok(Some(v.clone())),
            RawValue::Text(_) | RawValue::Bytes(_) => {
                let text = raw
                    .as_text()
                    .ok_or_else(|| ScanError::new(Self::NAME, raw))?;
                serde_json::from_str(text)
                    .map(Some)
                    .map_err(|e| ScanError::new(Self::NAME, raw).with_reason(e.to_string()))
            }
            _ => Err(ScanError::new(Self::NAME, raw)),
        }
    }

    /// Written as compact JSON text.
    fn to_raw(&self) -> RawValue {
        RawValue::Text(self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Document, NullDocument};
    use serde_json::json;
    use tabula_core::{Field, RawValue};

    #[test]
    fn scans_text_and_native_documents() {
        let mut f = Document::new();
        f.scan_from(r#"{"a": [1, 2]}"#).unwrap();
        assert_eq!(f.get(), &json!({"a": [1, 2]}));
        assert_eq!(f.value(), RawValue::Text(r#"{"a":[1,2]}"#.into()));

        f.scan(RawValue::Json(json!({"a": [1, 2]}))).unwrap();
        assert!(!f.is_dirty());
        f.scan(RawValue::Json(json!([]))).unwrap();
        assert!(f.is_dirty());
    }

    #[test]
    fn rejects_malformed_json() {
        let mut f = NullDocument::new();
        let err = f.scan_from("{oops").unwrap_err();
        assert_eq!(err.target, "NullDocument");
        assert!(err.reason.is_some());
        assert!(f.scan_from(5i64).is_err());
    }
}
