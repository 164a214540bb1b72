//! Record descriptions and field-to-column mappings.
//!
//! A [`Record`] lists its fields in declaration order, each with a borrowed
//! parameter value and a zero-value flag. Implement it by hand or with
//! `#[derive(Record)]`.
//!
//! ```ignore
//! use gdo::{Field, FieldMap, Record};
//!
//! struct Person {
//!     name: String,
//!     age: i64,
//! }
//!
//! impl Record for Person {
//!     fn fields(&self) -> Vec<Field<'_>> {
//!         vec![Field::new("name", &self.name), Field::new("age", &self.age)]
//!     }
//!
//!     fn field_map() -> FieldMap {
//!         FieldMap::new().with("name", "name").with("age", "age")
//!     }
//! }
//! ```

use crate::zero::Zero;
use std::collections::HashMap;
use std::fmt;
use tokio_postgres::types::ToSql;

/// One field of a record: its name, a borrowed value and whether that value is zero.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    name: &'static str,
    value: &'a (dyn ToSql + Sync),
    zero: bool,
}

impl<'a> Field<'a> {
    /// Describe a field, computing the zero flag from the value.
    pub fn new<T>(name: &'static str, value: &'a T) -> Self
    where
        T: ToSql + Sync + Zero,
    {
        Self {
            name,
            value,
            zero: value.is_zero(),
        }
    }

    /// Describe a field whose zero flag is decided by the caller.
    pub fn with_zero(name: &'static str, value: &'a (dyn ToSql + Sync), zero: bool) -> Self {
        Self { name, value, zero }
    }

    /// The field name (the key looked up in a [`FieldMap`]).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The value, ready to be passed to the driver as a parameter.
    pub fn value(&self) -> &'a (dyn ToSql + Sync) {
        self.value
    }

    pub fn is_zero(&self) -> bool {
        self.zero
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("zero", &self.zero)
            .finish()
    }
}

/// A value with named fields that can be turned into SQL fragments.
pub trait Record {
    /// All fields, in declaration order.
    fn fields(&self) -> Vec<Field<'_>>;

    /// The default field-to-column mapping for this record type.
    fn field_map() -> FieldMap
    where
        Self: Sized;
}

/// Mapping from record field name to SQL column name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    columns: HashMap<String, String>,
}

impl FieldMap {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Chainable insert.
    pub fn with(mut self, field: impl Into<String>, column: impl Into<String>) -> Self {
        self.insert(field, column);
        self
    }

    /// Map `field` to `column`, returning the previous column if any.
    pub fn insert(&mut self, field: impl Into<String>, column: impl Into<String>) -> Option<String> {
        self.columns.insert(field.into(), column.into())
    }

    /// Column name for `field`, if mapped.
    pub fn column(&self, field: &str) -> Option<&str> {
        self.columns.get(field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Names of the record's fields that have no column in this mapping.
    ///
    /// Fragment generation does not fail on unmapped fields; it emits an empty
    /// column name. Use this to check a mapping up front.
    pub fn unmapped<R: Record + ?Sized>(&self, record: &R) -> Vec<&'static str> {
        record
            .fields()
            .iter()
            .map(Field::name)
            .filter(|name| !self.columns.contains_key(*name))
            .collect()
    }
}

impl<F, C> FromIterator<(F, C)> for FieldMap
where
    F: Into<String>,
    C: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (F, C)>>(iter: I) -> Self {
        Self {
            columns: iter
                .into_iter()
                .map(|(field, column)| (field.into(), column.into()))
                .collect(),
        }
    }
}

impl<F, C, const N: usize> From<[(F, C); N]> for FieldMap
where
    F: Into<String>,
    C: Into<String>,
{
    fn from(pairs: [(F, C); N]) -> Self {
        pairs.into_iter().collect()
    }
}
