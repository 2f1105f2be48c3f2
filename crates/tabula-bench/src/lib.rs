//! Benchmark inputs for the Tabula record mapping layer.
//!
//! - [`wide_row`]: one raw row covering every column of
//!   [`Wide`](tabula_test_utils::fixtures::Wide)
//! - [`loaded_wide`]: a `Wide` record with that row scanned in

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tabula_core::RawValue;
use tabula_record::load_from_map;
use tabula_test_utils::fixtures::Wide;

/// A row keyed by external column names, as a driver would return it.
pub fn wide_row() -> Vec<(&'static str, RawValue)> {
    vec![
        ("id", RawValue::Int(42)),
        ("name", RawValue::from("widget")),
        ("active", RawValue::from("1")),
        ("ratio", RawValue::Float(0.25)),
        ("born", RawValue::from("1999-12-31")),
        ("wakes", RawValue::from("06:30:00")),
        ("price", RawValue::from("19.99")),
        ("discount", RawValue::Null),
        ("meta", RawValue::from(r#"{"tags":["a","b"]}"#)),
        ("created", RawValue::from("2024-05-06 07:08:09.123456")),
        ("modified", RawValue::Null),
    ]
}

/// A [`Wide`] record with [`wide_row`] loaded.
pub fn loaded_wide() -> Wide {
    let mut wide = Wide::default();
    // The row is well-formed for every column; a failure is a bench bug.
    if let Err(e) = load_from_map(&mut wide, wide_row()) {
        panic!("bench row failed to load: {e}");
    }
    wide
}
