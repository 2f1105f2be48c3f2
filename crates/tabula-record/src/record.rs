//! The record trait.

use crate::accessor::get_field;
use crate::primary_key::PrimaryKey;
use crate::structure::Structure;

/// A structure bound to a table row.
pub trait Record: Structure {
    /// Table this record is stored in.
    fn table_name(&self) -> &str;

    /// The record's primary key descriptor.
    fn primary_key(&self) -> PrimaryKey;

    /// Whether the record has not been stored yet.
    ///
    /// The default treats a record as new while any primary-key field is
    /// missing or has never been scanned.
    fn is_new(&self) -> bool {
        self.primary_key()
            .names()
            .iter()
            .any(|name| get_field(self, name.as_str()).map_or(true, |f| !f.is_set()))
    }
}
