//! Record schema discovery and the per-shape cache.
//!
//! Discovery walks a structure's registered members: direct fields are
//! listed first in declaration order, then the fields of each embedded
//! structure and referenced record in declaration order, recursively.
//! The result is cached by [`ShapeKey`].

use std::any::TypeId;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use smallvec::SmallVec;
use tabula_core::{Name, Names};

use crate::config::{DiscoveryConfig, DuplicatePolicy};
use crate::error::RecordError;
use crate::structure::{Member, Structure};

/// Cache key for one record shape.
///
/// The outer type followed by the concrete type of every polymorphic
/// reference reached during the walk, in discovery order. Two values of
/// one outer type holding different sub-records are different shapes.
pub type ShapeKey = SmallVec<[TypeId; 4]>;

/// Marks an empty reference slot in a [`ShapeKey`].
struct Absent;

/// The ordered field names of one record shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schema {
    shape_name: &'static str,
    names: Names,
}

impl Schema {
    /// Type name of the outer structure.
    pub fn shape_name(&self) -> &'static str {
        self.shape_name
    }

    /// Field names in discovery order.
    pub fn names(&self) -> &Names {
        &self.names
    }

    /// Number of mapped fields, counting duplicates.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the shape maps no fields.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Whether `name` is mapped.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_name(name)
    }
}

/// Compute the cache key for `record`.
pub fn shape_key<S: Structure + ?Sized>(record: &S) -> ShapeKey {
    let mut key = ShapeKey::new();
    key.push(record.shape());
    collect_references(record.members(), &mut key);
    key
}

fn collect_references(members: Vec<Member<'_>>, key: &mut ShapeKey) {
    for member in members {
        match member {
            Member::Embedded(_, inner) => collect_references(inner.members(), key),
            Member::Reference(_, Some(inner)) => {
                key.push(inner.shape());
                collect_references(inner.members(), key);
            }
            Member::Reference(_, None) => key.push(TypeId::of::<Absent>()),
            Member::Field(..) | Member::Ignored(_) => {}
        }
    }
}

/// Panic unless every member name is an identifier and unique within
/// its structure.
fn check_members(owner: &'static str, members: &[Member<'_>]) {
    let mut seen: SmallVec<[&str; 16]> = SmallVec::new();
    for member in members {
        let name = member.name();
        if !Name::from(name).is_identifier() {
            panic!("{owner}: member name {name:?} is not an identifier");
        }
        if seen.contains(&name) {
            panic!("{owner}: member {name:?} is registered more than once");
        }
        seen.push(name);
    }
}

fn walk(owner: &'static str, members: Vec<Member<'_>>, names: &mut Names) {
    check_members(owner, &members);
    let mut nested = Vec::new();
    for member in members {
        match member {
            Member::Field(name, _) => names.push(name),
            Member::Embedded(_, inner) => nested.push((inner.shape_name(), inner.members())),
            Member::Reference(_, Some(inner)) => {
                nested.push((inner.shape_name(), inner.members()));
            }
            Member::Reference(_, None) | Member::Ignored(_) => {}
        }
    }
    for (owner, members) in nested {
        walk(owner, members, names);
    }
}

fn first_duplicate(names: &Names) -> Option<&Name> {
    let mut seen = HashSet::with_capacity(names.len());
    names.iter().find(|name| !seen.insert(name.as_str()))
}

/// Process-wide or injected cache of discovered schemas.
///
/// Lookups take a shared lock. A miss discovers the schema without
/// holding any lock and then inserts it; when two callers race on the
/// same shape the first insert wins and both receive the same entry.
pub struct SchemaCache {
    config: DiscoveryConfig,
    shapes: RwLock<HashMap<ShapeKey, Arc<Schema>>>,
}

impl SchemaCache {
    /// An empty cache.
    pub fn new(config: DiscoveryConfig) -> Self {
        let shapes = HashMap::with_capacity(config.initial_capacity);
        Self {
            config,
            shapes: RwLock::new(shapes),
        }
    }

    /// The lazily created process-wide cache, with default config.
    ///
    /// Used by the free-function API. Entries are never evicted.
    pub fn global() -> &'static SchemaCache {
        static GLOBAL: OnceLock<SchemaCache> = OnceLock::new();
        GLOBAL.get_or_init(|| SchemaCache::new(DiscoveryConfig::default()))
    }

    /// The configuration this cache was built with.
    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    /// Discover the schema of `record`, from cache when possible.
    ///
    /// # Panics
    ///
    /// If a structure in the embedding graph registers an empty or
    /// non-identifier member name, or the same member name twice.
    pub fn discover<S: Structure + ?Sized>(&self, record: &S) -> Result<Arc<Schema>, RecordError> {
        let key = shape_key(record);
        if let Some(schema) = self.shapes.read().get(&key) {
            tracing::trace!(
                target: "tabula.schema",
                shape = schema.shape_name,
                "schema cache hit"
            );
            return Ok(Arc::clone(schema));
        }

        let mut names = Names::new();
        walk(record.shape_name(), record.members(), &mut names);
        if self.config.duplicate_names == DuplicatePolicy::Reject {
            if let Some(name) = first_duplicate(&names) {
                return Err(RecordError::DuplicateName { name: name.clone() });
            }
        }
        let schema = Arc::new(Schema {
            shape_name: record.shape_name(),
            names,
        });
        tracing::debug!(
            target: "tabula.schema",
            shape = schema.shape_name,
            fields = schema.len(),
            "schema discovered"
        );

        let mut shapes = self.shapes.write();
        Ok(Arc::clone(shapes.entry(key).or_insert(schema)))
    }

    /// Number of cached shapes.
    pub fn len(&self) -> usize {
        self.shapes.read().len()
    }

    /// Whether no shape has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.shapes.read().is_empty()
    }

    /// Drop every cached schema.
    pub fn clear(&self) {
        self.shapes.write().clear();
    }
}

impl Default for SchemaCache {
    fn default() -> Self {
        Self::new(DiscoveryConfig::default())
    }
}

impl std::fmt::Debug for SchemaCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaCache")
            .field("config", &self.config)
            .field("shapes", &self.len())
            .finish()
    }
}
