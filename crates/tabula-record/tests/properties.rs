//! Property tests over record operations.

use proptest::prelude::*;
use tabula_core::{Field, RawValue};
use tabula_field::{NullInt64, NullText, Text};
use tabula_record::{dirty_fields, fields, set_fields, structure, SchemaCache};

#[derive(Default)]
struct Inner {
    label: Text,
    score: NullInt64,
}

structure! {
    Inner {
        field label => "Label",
        field score => "Score",
    }
}

#[derive(Default)]
struct Outer {
    name: NullText,
    count: NullInt64,
    inner: Inner,
}

structure! {
    Outer {
        field name => "Name",
        field count => "Count",
        embed inner => "Inner",
    }
}

fn value() -> impl Strategy<Value = RawValue> {
    prop_oneof![
        Just(RawValue::Null),
        any::<i64>().prop_map(RawValue::Int),
        "[a-z]{0,6}".prop_map(RawValue::Text),
    ]
}

proptest! {
    #[test]
    fn dirty_and_set_are_subsets(ops in prop::collection::vec((0usize..4, value()), 0..24)) {
        let mut rec = Outer::default();
        for (slot, raw) in ops {
            let field: &mut dyn Field = match slot {
                0 => &mut rec.name,
                1 => &mut rec.count,
                2 => &mut rec.inner.label,
                _ => &mut rec.inner.score,
            };
            let _ = field.scan(raw);
        }
        let all = fields(&rec).unwrap();
        let dirty = dirty_fields(&rec).unwrap();
        let set = set_fields(&rec).unwrap();
        prop_assert!(dirty.is_subset(&all));
        prop_assert!(set.is_subset(&all));
        prop_assert!(dirty.is_subset(&set));
    }

    #[test]
    fn discovery_is_deterministic(rounds in 1usize..8) {
        let cache = SchemaCache::default();
        let expected = cache.fields(&Outer::default()).unwrap();
        for _ in 0..rounds {
            prop_assert_eq!(&cache.fields(&Outer::default()).unwrap(), &expected);
        }
        prop_assert_eq!(expected.to_string(), "[Name Count Label Score]");
    }
}
