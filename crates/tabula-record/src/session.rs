//! Storage-session touchpoints.
//!
//! This crate does not build SQL. It hands a [`Session`] the qualified
//! table name and the column list (or column/value pairs) derived from a
//! record, and the session's builders take it from there.

use tabula_core::{Names, RawValue};

use crate::accessor::get_field;
use crate::error::RecordError;
use crate::ops;
use crate::record::Record;

/// Entry points of a storage session's statement builders.
pub trait Session {
    /// Builder returned by [`select`](Session::select).
    type Select;
    /// Builder returned by [`insert_into`](Session::insert_into).
    type Insert;
    /// Builder returned by [`update`](Session::update).
    type Update;
    /// Builder returned by [`delete_from`](Session::delete_from).
    type Delete;

    /// Database the session is bound to. May be empty.
    fn database(&self) -> &str;

    /// Select `columns` (already escaped) from `table`.
    fn select(&self, table: &str, columns: Vec<String>) -> Self::Select;

    /// Insert one row of `values` under `columns` into `table`.
    fn insert_into(&self, table: &str, columns: Vec<String>, values: Vec<RawValue>) -> Self::Insert;

    /// Update `table`, assigning each column its value.
    fn update(&self, table: &str, assignments: Vec<(String, RawValue)>) -> Self::Update;

    /// Delete from `table`.
    fn delete_from(&self, table: &str) -> Self::Delete;
}

/// Back-tick quoted external column names.
pub fn escape_columns(names: &Names) -> Vec<String> {
    names.iter().map(|n| format!("`{}`", n.snake_case())).collect()
}

/// `database.table`, or just the table when `database` is empty.
pub fn qualified_table<R: Record + ?Sized>(database: &str, record: &R) -> String {
    if database.is_empty() {
        record.table_name().to_owned()
    } else {
        format!("{database}.{}", record.table_name())
    }
}

/// The requested names, or every mapped name. Each requested name must
/// be mapped on `record`.
fn requested<R: Record + ?Sized>(record: &R, names: Option<&Names>) -> Result<Names, RecordError> {
    let mapped = ops::fields(record)?;
    let Some(names) = names else {
        return Ok(mapped);
    };
    if let Some(missing) = names.iter().find(|n| !mapped.contains_name(n.as_str())) {
        return Err(RecordError::NameNotFound {
            name: missing.clone(),
        });
    }
    Ok(names.clone())
}

/// Select the requested fields of `record`'s table, all fields by default.
pub fn new_select<T, R>(session: &T, record: &R, names: Option<&Names>) -> Result<T::Select, RecordError>
where
    T: Session + ?Sized,
    R: Record + ?Sized,
{
    let columns = escape_columns(&requested(record, names)?);
    Ok(session.select(&qualified_table(session.database(), record), columns))
}

/// Insert the current values of the requested fields, all by default.
pub fn new_insert<T, R>(session: &T, record: &R, names: Option<&Names>) -> Result<T::Insert, RecordError>
where
    T: Session + ?Sized,
    R: Record + ?Sized,
{
    let names = requested(record, names)?;
    let values = names
        .iter()
        .map(|n| get_field(record, n.as_str()).map(|f| f.value()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(session.insert_into(
        &qualified_table(session.database(), record),
        names.snake_case(),
        values,
    ))
}

/// Update the requested fields to their current values, all by default.
pub fn new_update<T, R>(session: &T, record: &R, names: Option<&Names>) -> Result<T::Update, RecordError>
where
    T: Session + ?Sized,
    R: Record + ?Sized,
{
    let assignments = requested(record, names)?
        .iter()
        .map(|n| get_field(record, n.as_str()).map(|f| (n.snake_case(), f.value())))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(session.update(&qualified_table(session.database(), record), assignments))
}

/// Delete from `record`'s table.
pub fn new_delete<T, R>(session: &T, record: &R) -> T::Delete
where
    T: Session + ?Sized,
    R: Record + ?Sized,
{
    session.delete_from(&qualified_table(session.database(), record))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_snake_case_names() {
        let names: Names = ["Id", "FirstName"].into_iter().collect();
        assert_eq!(escape_columns(&names), ["`id`", "`first_name`"]);
    }
}
