//! Primary key descriptors and generator hooks.

use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;
use tabula_core::{Name, Names};

use crate::error::RecordError;
use crate::record::Record;

/// Synthesizes key values on a record before insert.
///
/// Returns the names of the fields it populated.
pub type KeyGenerator =
    Arc<dyn Fn(&PrimaryKey, &mut dyn Record) -> Result<Names, RecordError> + Send + Sync>;

/// The ordered key field names of a record, plus a generator hook.
#[derive(Clone)]
pub struct PrimaryKey {
    names: SmallVec<[Name; 2]>,
    generator: Option<KeyGenerator>,
}

impl PrimaryKey {
    /// A single-field key with no generator.
    pub fn single(name: impl Into<Name>) -> Self {
        let mut names = SmallVec::new();
        names.push(name.into());
        Self {
            names,
            generator: None,
        }
    }

    /// A composite key with no generator.
    pub fn multiple<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Name>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            generator: None,
        }
    }

    /// A key whose values are produced by `generator`.
    pub fn custom<I, N, F>(names: I, generator: F) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Name>,
        F: Fn(&PrimaryKey, &mut dyn Record) -> Result<Names, RecordError> + Send + Sync + 'static,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            generator: Some(Arc::new(generator)),
        }
    }

    /// Key field names in order.
    pub fn names(&self) -> &[Name] {
        &self.names
    }

    /// Key field names as a [`Names`] list.
    pub fn to_names(&self) -> Names {
        self.names.iter().cloned().collect()
    }

    /// Run the generator hook against `record`.
    ///
    /// Keys without a hook generate nothing and return an empty list.
    pub fn generate(&self, record: &mut dyn Record) -> Result<Names, RecordError> {
        match &self.generator {
            Some(generator) => {
                let generated = generator(self, record)?;
                tracing::trace!(
                    target: "tabula.record",
                    table = record.table_name(),
                    fields = %generated,
                    "primary key generated"
                );
                Ok(generated)
            }
            None => Ok(Names::new()),
        }
    }
}

impl fmt::Debug for PrimaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrimaryKey")
            .field("names", &self.names)
            .field("custom", &self.generator.is_some())
            .finish()
    }
}
