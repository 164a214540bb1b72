//! SQL fragments generated from partially-populated records.
//!
//! Both generators walk a record's fields in declaration order and keep only
//! the fields whose value is not the zero value of its type. Fragments use `?`
//! positional markers; [`Gdo`](crate::Gdo) clients rewrite them to `$n` before
//! dispatch.
//!
//! # Example
//!
//! ```ignore
//! use gdo::{insert_fragment, update_fragment, Gdo};
//!
//! let ins = insert_fragment(&user, &User::field_map());
//! if !ins.is_empty() {
//!     conn.execute(&ins.insert_sql("users"), &ins.args).await?;
//! }
//!
//! let mut upd = update_fragment(&patch, &User::field_map());
//! upd.push_arg(&user_id);
//! conn.execute(&upd.update_sql("users", "id = ?"), &upd.args).await?;
//! ```
//!
//! A field that is meant to be written as zero (`0`, `""`, `false`) is skipped
//! like any other zero value. Wrap it in a valid [`Null`](crate::Null) to force
//! it into the fragment.

use crate::record::{FieldMap, Record};
use tokio_postgres::types::ToSql;

/// Assignment list for an `UPDATE ... SET` clause plus its arguments.
#[derive(Debug, Default)]
pub struct UpdateFragment<'a> {
    /// `col = ?` entries joined by `,`.
    pub assignments: String,
    /// One argument per assignment, in the same order.
    pub args: Vec<&'a (dyn ToSql + Sync)>,
}

impl<'a> UpdateFragment<'a> {
    /// No field qualified; `UPDATE t SET` would be invalid.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Append a trailing argument (e.g. for a `WHERE` clause).
    pub fn push_arg(&mut self, arg: &'a (dyn ToSql + Sync)) -> &mut Self {
        self.args.push(arg);
        self
    }

    /// `UPDATE <table> SET <assignments> WHERE <filter>`.
    ///
    /// `filter` may carry its own `?` markers; bind them with [`push_arg`](Self::push_arg).
    pub fn update_sql(&self, table: &str, filter: &str) -> String {
        format!("UPDATE {} SET {} WHERE {}", table, self.assignments, filter)
    }
}

/// Column and placeholder lists for an `INSERT` statement plus its arguments.
#[derive(Debug, Default)]
pub struct InsertFragment<'a> {
    /// Column names joined by `,`.
    pub columns: String,
    /// One `?` per column, joined by `,`.
    pub placeholders: String,
    /// One argument per column, in the same order.
    pub args: Vec<&'a (dyn ToSql + Sync)>,
}

impl<'a> InsertFragment<'a> {
    /// No field qualified; `INSERT INTO t () VALUES ()` would be invalid.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// `INSERT INTO <table> (<columns>) VALUES (<placeholders>)`.
    pub fn insert_sql(&self, table: &str) -> String {
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            table, self.columns, self.placeholders
        )
    }
}

/// Build the `SET` assignment list for every non-zero field of `record`.
///
/// A field missing from `map` yields an entry with an empty column name; a
/// warning is logged but generation does not fail.
pub fn update_fragment<'a, R>(record: &'a R, map: &FieldMap) -> UpdateFragment<'a>
where
    R: Record + ?Sized,
{
    let mut assignments = Vec::new();
    let mut args = Vec::new();

    for field in record.fields() {
        if field.is_zero() {
            continue;
        }
        assignments.push(format!("{} = ?", column_for(map, field.name())));
        args.push(field.value());
    }

    UpdateFragment {
        assignments: assignments.join(","),
        args,
    }
}

/// Build the column list, placeholder list and arguments for every non-zero
/// field of `record`.
///
/// Unmapped fields behave as in [`update_fragment`].
pub fn insert_fragment<'a, R>(record: &'a R, map: &FieldMap) -> InsertFragment<'a>
where
    R: Record + ?Sized,
{
    let mut columns = Vec::new();
    let mut args = Vec::new();

    for field in record.fields() {
        if field.is_zero() {
            continue;
        }
        columns.push(column_for(map, field.name()));
        args.push(field.value());
    }

    InsertFragment {
        columns: columns.join(","),
        placeholders: placeholders(args.len()),
        args,
    }
}

/// `n` positional markers joined by `,` (`"?,?,?"` for 3, `""` for 0).
///
/// Use it for `VALUES (...)` or `IN (...)` lists.
pub fn placeholders(n: usize) -> String {
    vec!["?"; n].join(",")
}

fn column_for<'m>(map: &'m FieldMap, field_name: &str) -> &'m str {
    match map.column(field_name) {
        Some(column) => column,
        None => {
            tracing::warn!(target: "gdo.fragment", field_name, "field has no column mapping");
            ""
        }
    }
}

#[cfg(test)]
mod tests;
