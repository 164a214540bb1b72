//! Row mapping traits

use crate::error::{GdoError, GdoResult};
use tokio_postgres::Row;
use tokio_postgres::types::FromSql;

/// Trait for converting a database row into a Rust struct.
///
/// This trait should typically be derived using `#[derive(FromRow)]`.
///
/// # Example
///
/// ```ignore
/// use gdo::{FromRow, NullString};
///
/// #[derive(FromRow)]
/// struct User {
///     id: i64,
///     name: String,
///     #[gdo(column = "email_address")]
///     email: NullString,
/// }
/// ```
pub trait FromRow: Sized {
    /// Convert a database row into Self
    fn from_row(row: &Row) -> GdoResult<Self>;
}

/// Extension trait for Row to provide typed access
pub trait RowExt {
    /// Try to get a column value, returning GdoError::Decode on failure
    fn try_get_column<T>(&self, column: &str) -> GdoResult<T>
    where
        T: for<'a> FromSql<'a>;
}

impl RowExt for Row {
    fn try_get_column<T>(&self, column: &str) -> GdoResult<T>
    where
        T: for<'a> FromSql<'a>,
    {
        self.try_get(column)
            .map_err(|e| GdoError::decode(column, e.to_string()))
    }
}
