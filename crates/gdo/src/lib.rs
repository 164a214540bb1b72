//! # gdo
//!
//! A thin convenience layer over `tokio-postgres`.
//!
//! ## Features
//!
//! - **Record fragments**: turn the populated fields of a struct into an
//!   `INSERT` column/placeholder list or an `UPDATE ... SET` list, with
//!   positional arguments in matching order
//! - **`?` statements**: write `?` markers; they are numbered `$1..$n` before
//!   the statement reaches the driver
//! - **Connection protocol**: build a DSN from discrete settings, from the
//!   environment or from TOML
//! - **Nullable scalars**: `NullBool`, `NullInt64`, `NullFloat64`, `NullString`
//!   that scan SQL `NULL` and serialize to JSON `null`
//!
//! Pooling, transactions beyond `BEGIN`/`COMMIT`/`ROLLBACK`, retries and
//! migrations are left to the driver and the application.
//!
//! ## Example
//!
//! ```ignore
//! use gdo::{Gdo, Protocol, Record, insert_fragment};
//!
//! #[derive(Record)]
//! struct User {
//!     name: String,
//!     age: i64,
//!     city: String,
//! }
//!
//! let conn = Protocol::from_env()?.connect().await?;
//! let user = User { name: "Alice".into(), age: 0, city: "NYC".into() };
//!
//! // INSERT INTO users (name,city) VALUES (?,?)
//! let frag = insert_fragment(&user, &User::field_map());
//! conn.execute(&frag.insert_sql("users"), &frag.args).await?;
//! ```

pub mod client;
pub mod connection;
pub mod digest;
pub mod error;
pub mod fragment;
pub mod null;
pub mod protocol;
pub mod record;
pub mod rewrite;
pub mod row;
pub mod zero;

pub use client::Gdo;
pub use connection::Connection;
pub use digest::{SHA512_LEN, sha512_binary};
pub use error::{GdoError, GdoResult};
pub use fragment::{InsertFragment, UpdateFragment, insert_fragment, placeholders, update_fragment};
pub use null::{Null, NullBool, NullFloat64, NullInt64, NullString};
pub use protocol::Protocol;
pub use record::{Field, FieldMap, Record};
pub use row::{FromRow, RowExt};
pub use zero::Zero;

// Re-export the driver types that appear in the public API.
pub use tokio_postgres::types::ToSql;
pub use tokio_postgres::{Row, Statement, Transaction};

#[cfg(feature = "derive")]
pub use gdo_derive::{FromRow, Record};
