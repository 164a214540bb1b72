//! Derive macros for gdo
//!
//! Provides `#[derive(Record)]` and `#[derive(FromRow)]`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod attrs;
mod from_row;
mod record;

/// Derive `Record` for a struct with named fields.
///
/// # Example
///
/// ```ignore
/// use gdo::Record;
///
/// #[derive(Record)]
/// struct User {
///     name: String,
///     #[gdo(column = "user_age")]
///     age: i64,
///     #[gdo(skip)]
///     cached_score: f64,
/// }
/// ```
///
/// # Generated
///
/// - `fn fields(&self)` - every non-skipped field in declaration order
/// - `fn field_map()` - field name to column name (the field name unless overridden)
///
/// Every non-skipped field type must implement `ToSql + Sync + gdo::Zero`.
///
/// # Attributes
///
/// - `#[gdo(column = "name")]` - Map field to a different column name
/// - `#[gdo(skip)]` - Leave the field out of fragments
#[proc_macro_derive(Record, attributes(gdo))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    record::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Derive `FromRow` trait for a struct.
///
/// # Example
///
/// ```ignore
/// use gdo::FromRow;
///
/// #[derive(FromRow)]
/// struct User {
///     id: i64,
///     name: String,
///     #[gdo(column = "email_address")]
///     email: gdo::NullString,
/// }
/// ```
///
/// # Attributes
///
/// - `#[gdo(column = "name")]` - Map field to a different column name
/// - `#[gdo(skip)]` - Fill the field with `Default::default()`
#[proc_macro_derive(FromRow, attributes(gdo))]
pub fn derive_from_row(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    from_row::expand(input)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
