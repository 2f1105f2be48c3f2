//! Baseline, dirty and set laws checked across every field variant.

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use serde_json::json;
use tabula_core::{Field, RawValue};
use tabula_field::*;

/// Scan `a` then `b` and check the baseline contract.
///
/// `coerce(x)` is taken to be what a fresh field reports after scanning `x`.
fn check_laws<F: Field + Default>(a: RawValue, b: RawValue) -> Result<(), TestCaseError> {
    let scan = |f: &mut F, raw: &RawValue| {
        f.scan(raw.clone())
            .map_err(|e| TestCaseError::fail(e.to_string()))
    };

    let mut fresh_b = F::default();
    scan(&mut fresh_b, &b)?;

    let mut f = F::default();
    prop_assert!(!f.is_set());
    scan(&mut f, &a)?;
    let first = f.value();
    prop_assert!(f.is_set());
    prop_assert_eq!(f.baseline().ok(), Some(first.clone()));

    scan(&mut f, &a)?;
    prop_assert!(!f.is_dirty());

    scan(&mut f, &b)?;
    prop_assert_eq!(f.value(), fresh_b.value());
    prop_assert_eq!(f.baseline().ok(), Some(first.clone()));
    prop_assert_eq!(f.is_dirty(), first != fresh_b.value());
    Ok(())
}

fn datetime() -> impl Strategy<Value = NaiveDateTime> {
    (1970i32..2100, 1u32..=12, 1u32..=28, 0u32..24, 0u32..60, 0u32..60, 0u32..1_000_000).prop_map(
        |(y, mo, d, h, mi, s, us)| {
            NaiveDate::from_ymd_opt(y, mo, d)
                .and_then(|date| date.and_hms_micro_opt(h, mi, s, us))
                .unwrap_or_default()
        },
    )
}

fn text() -> impl Strategy<Value = RawValue> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,12}".prop_map(RawValue::Text),
        any::<i64>().prop_map(RawValue::Int),
    ]
}

fn boolean() -> impl Strategy<Value = RawValue> {
    prop_oneof![
        any::<bool>().prop_map(RawValue::Bool),
        prop::sample::select(vec!["1", "0", "t", "F", "TRUE", "false"]).prop_map(RawValue::from),
    ]
}

fn int() -> impl Strategy<Value = RawValue> {
    prop_oneof![
        any::<i64>().prop_map(RawValue::Int),
        any::<i64>().prop_map(|i| RawValue::Text(i.to_string())),
    ]
}

fn float() -> impl Strategy<Value = RawValue> {
    prop_oneof![
        (-1.0e9f64..1.0e9).prop_map(RawValue::Float),
        any::<i32>().prop_map(RawValue::from),
    ]
}

fn timestamp() -> impl Strategy<Value = RawValue> {
    prop_oneof![
        datetime().prop_map(RawValue::Timestamp),
        datetime().prop_map(|ts| RawValue::Text(ts.format("%Y-%m-%d %H:%M:%S%.6f").to_string())),
    ]
}

fn date() -> impl Strategy<Value = RawValue> {
    prop_oneof![
        datetime().prop_map(|ts| RawValue::Date(ts.date())),
        datetime().prop_map(|ts| RawValue::Text(ts.format("%Y-%m-%d").to_string())),
    ]
}

fn time_of_day() -> impl Strategy<Value = RawValue> {
    prop_oneof![
        datetime().prop_map(|ts| RawValue::Time(ts.time())),
        datetime().prop_map(|ts| RawValue::Text(ts.format("%H:%M:%S%.6f").to_string())),
    ]
}

fn decimal() -> impl Strategy<Value = RawValue> {
    (-1_000_000_000i64..1_000_000_000, 0u32..8)
        .prop_map(|(units, scale)| RawValue::Text(Dec::new(units, scale).to_string()))
}

fn document() -> impl Strategy<Value = RawValue> {
    prop_oneof![
        any::<i32>().prop_map(|n| RawValue::Json(json!({ "n": n }))),
        "[a-z]{0,8}".prop_map(|s| RawValue::Text(json!([s]).to_string())),
    ]
}

fn or_null(inner: impl Strategy<Value = RawValue>) -> impl Strategy<Value = RawValue> {
    prop_oneof![1 => Just(RawValue::Null), 4 => inner]
}

macro_rules! laws {
    ($($test:ident: $required:ty, $nullable:ty => $strategy:expr;)*) => {
        proptest! {
            $(
                #[test]
                fn $test(
                    (a, b) in ($strategy, $strategy),
                    (na, nb) in (or_null($strategy), or_null($strategy)),
                ) {
                    check_laws::<$required>(a, b)?;
                    check_laws::<$nullable>(na, nb)?;
                }
            )*
        }
    };
}

laws! {
    text_laws: Text, NullText => text();
    bool_laws: Bool, NullBool => boolean();
    int64_laws: Int64, NullInt64 => int();
    float64_laws: Float64, NullFloat64 => float();
    timestamp_laws: Timestamp, NullTimestamp => timestamp();
    date_laws: Date, NullDate => date();
    time_of_day_laws: TimeOfDay, NullTimeOfDay => time_of_day();
    decimal_laws: Decimal, NullDecimal => decimal();
    document_laws: Document, NullDocument => document();
}
