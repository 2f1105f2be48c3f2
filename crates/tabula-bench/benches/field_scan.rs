//! Criterion micro-benchmarks for typed field scanning.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tabula_core::{Field, RawValue};
use tabula_field::{Decimal, Int64, NullText, Timestamp};

fn bench_scan(c: &mut Criterion) {
    c.bench_function("scan_int64_from_text", |b| {
        b.iter(|| {
            let mut f = Int64::new();
            f.scan(black_box(RawValue::from("123456789"))).unwrap();
            black_box(f.is_dirty())
        });
    });

    c.bench_function("scan_null_text_twice", |b| {
        b.iter(|| {
            let mut f = NullText::new();
            f.scan(black_box(RawValue::from("first"))).unwrap();
            f.scan(black_box(RawValue::Null)).unwrap();
            black_box(f.is_dirty())
        });
    });

    c.bench_function("scan_timestamp_text", |b| {
        b.iter(|| {
            let mut f = Timestamp::new();
            f.scan(black_box(RawValue::from("2024-05-06 07:08:09.123456")))
                .unwrap();
            black_box(f.value())
        });
    });

    c.bench_function("scan_decimal_text", |b| {
        b.iter(|| {
            let mut f = Decimal::new();
            f.scan(black_box(RawValue::from("-12345.678901"))).unwrap();
            black_box(f.value())
        });
    });
}

criterion_group!(benches, bench_scan);
criterion_main!(benches);
