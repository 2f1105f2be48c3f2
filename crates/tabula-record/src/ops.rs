//! Record-level bulk operations.
//!
//! Each operation exists as a [`SchemaCache`] method and as a free
//! function over [`SchemaCache::global`].

use indexmap::IndexMap;
use tabula_core::{Field, Name, Names, RawValue};

use crate::accessor::{get_field, get_field_mut};
use crate::error::RecordError;
use crate::schema::SchemaCache;
use crate::structure::Structure;

impl SchemaCache {
    /// Every mapped field name of `record`, in discovery order.
    pub fn fields<S: Structure + ?Sized>(&self, record: &S) -> Result<Names, RecordError> {
        Ok(self.discover(record)?.names().clone())
    }

    /// Mapped names whose field is dirty.
    pub fn dirty_fields<S: Structure + ?Sized>(&self, record: &S) -> Result<Names, RecordError> {
        self.filter_fields(record, |f| f.is_dirty())
    }

    /// Mapped names whose field has been scanned at least once.
    pub fn set_fields<S: Structure + ?Sized>(&self, record: &S) -> Result<Names, RecordError> {
        self.filter_fields(record, |f| f.is_set())
    }

    fn filter_fields<S, P>(&self, record: &S, keep: P) -> Result<Names, RecordError>
    where
        S: Structure + ?Sized,
        P: Fn(&dyn Field) -> bool,
    {
        let schema = self.discover(record)?;
        let mut out = Names::new();
        for name in schema.names() {
            if keep(get_field(record, name.as_str())?) {
                out.push(name.clone());
            }
        }
        Ok(out)
    }

    /// Scan every field of `src` into the same-named field of `dst`.
    ///
    /// `mapping` renames source fields on the destination side; names
    /// not in it map to themselves. Names missing from `dst` are skipped.
    /// Returns the destination names that were written.
    pub fn copy_fields<S, D>(
        &self,
        src: &S,
        dst: &mut D,
        mapping: &IndexMap<Name, Name>,
    ) -> Result<Names, RecordError>
    where
        S: Structure + ?Sized,
        D: Structure + ?Sized,
    {
        self.copy_filtered(src, dst, mapping, false)
    }

    /// Like [`copy_fields`](Self::copy_fields), restricted to source
    /// fields that have been set.
    pub fn copy_set_fields<S, D>(
        &self,
        src: &S,
        dst: &mut D,
        mapping: &IndexMap<Name, Name>,
    ) -> Result<Names, RecordError>
    where
        S: Structure + ?Sized,
        D: Structure + ?Sized,
    {
        self.copy_filtered(src, dst, mapping, true)
    }

    fn copy_filtered<S, D>(
        &self,
        src: &S,
        dst: &mut D,
        mapping: &IndexMap<Name, Name>,
        only_set: bool,
    ) -> Result<Names, RecordError>
    where
        S: Structure + ?Sized,
        D: Structure + ?Sized,
    {
        let schema = self.discover(src)?;
        let mut copied = Names::new();
        for name in schema.names() {
            let from = get_field(src, name.as_str())?;
            if only_set && !from.is_set() {
                continue;
            }
            let target = mapping.get(name).unwrap_or(name);
            let field = match get_field_mut(dst, target.as_str()) {
                Ok(field) => field,
                Err(RecordError::NameNotFound { .. }) => continue,
                Err(e) => return Err(e),
            };
            field.scan(from.value()).map_err(|source| RecordError::Scan {
                name: target.clone(),
                source,
            })?;
            tracing::trace!(
                target: "tabula.record",
                from = %name,
                to = %target,
                "field copied"
            );
            copied.push(target.clone());
        }
        Ok(copied)
    }
}

/// Scan values from an external map into `record`.
///
/// Keys are external column names (`first_name`) and are mapped to
/// declared names before lookup. Unknown keys are skipped. The first scan
/// failure aborts the load; fields already scanned keep their new values.
/// Returns the names that were scanned.
pub fn load_from_map<S, I, K, V>(record: &mut S, map: I) -> Result<Names, RecordError>
where
    S: Structure + ?Sized,
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<RawValue>,
{
    let mut loaded = Names::new();
    for (key, value) in map {
        let name = Name::from_snake_case(key.as_ref());
        let field = match get_field_mut(record, name.as_str()) {
            Ok(field) => field,
            Err(RecordError::NameNotFound { .. }) => {
                tracing::trace!(
                    target: "tabula.record",
                    key = key.as_ref(),
                    "skipping unmapped key"
                );
                continue;
            }
            Err(e) => return Err(e),
        };
        if let Err(source) = field.scan(value.into()) {
            tracing::debug!(
                target: "tabula.record",
                field = %name,
                error = %source,
                "load aborted"
            );
            return Err(RecordError::Scan { name, source });
        }
        loaded.push(name);
    }
    Ok(loaded)
}

/// [`SchemaCache::fields`] on the global cache.
pub fn fields<S: Structure + ?Sized>(record: &S) -> Result<Names, RecordError> {
    SchemaCache::global().fields(record)
}

/// [`SchemaCache::dirty_fields`] on the global cache.
pub fn dirty_fields<S: Structure + ?Sized>(record: &S) -> Result<Names, RecordError> {
    SchemaCache::global().dirty_fields(record)
}

/// [`SchemaCache::set_fields`] on the global cache.
pub fn set_fields<S: Structure + ?Sized>(record: &S) -> Result<Names, RecordError> {
    SchemaCache::global().set_fields(record)
}

/// [`SchemaCache::copy_fields`] on the global cache.
pub fn copy_fields<S, D>(
    src: &S,
    dst: &mut D,
    mapping: &IndexMap<Name, Name>,
) -> Result<Names, RecordError>
where
    S: Structure + ?Sized,
    D: Structure + ?Sized,
{
    SchemaCache::global().copy_fields(src, dst, mapping)
}

/// [`SchemaCache::copy_set_fields`] on the global cache.
pub fn copy_set_fields<S, D>(
    src: &S,
    dst: &mut D,
    mapping: &IndexMap<Name, Name>,
) -> Result<Names, RecordError>
where
    S: Structure + ?Sized,
    D: Structure + ?Sized,
{
    SchemaCache::global().copy_set_fields(src, dst, mapping)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structure;
    use tabula_field::{Int64, NullInt64};

    #[derive(Default)]
    struct Counter {
        hits: Int64,
        misses: NullInt64,
    }

    structure! {
        Counter {
            field hits => "Hits",
            field misses => "Misses",
        }
    }

    #[test]
    fn load_stops_at_first_bad_value() {
        let mut c = Counter::default();
        let err = load_from_map(
            &mut c,
            [("hits", RawValue::Int(3)), ("misses", RawValue::from("x"))],
        )
        .unwrap_err();
        assert!(matches!(err, RecordError::Scan { ref name, .. } if name == "Misses"));
        assert_eq!(*c.hits.get(), 3);
        assert!(!c.misses.is_set());
    }

    #[test]
    fn copy_set_fields_skips_unset_sources() {
        let mut src = Counter::default();
        src.hits.scan_from(9i64).unwrap();
        let mut dst = Counter::default();
        let copied = SchemaCache::default()
            .copy_set_fields(&src, &mut dst, &IndexMap::new())
            .unwrap();
        assert_eq!(copied.to_string(), "[Hits]");
        assert_eq!(*dst.hits.get(), 9);
        assert!(!dst.misses.is_set());
    }
}
