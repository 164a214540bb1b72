//! The database-execution interface.
//!
//! [`Gdo`] is implemented by [`Connection`](crate::Connection),
//! `tokio_postgres::Client` and `tokio_postgres::Transaction`, so code written
//! against it runs the same inside or outside a transaction.
//!
//! Statements use `?` positional markers (see [`crate::rewrite`]).

use crate::error::{GdoError, GdoResult};
use crate::rewrite::{bind_positional, rewrite_placeholders};
use crate::row::FromRow;
use tokio_postgres::types::ToSql;
use tokio_postgres::{Row, Statement};

/// Logged SQL is cut to this many bytes.
const MAX_LOGGED_SQL: usize = 200;

/// A database handle that can run `?`-style statements.
pub trait Gdo: Send + Sync {
    /// Round-trip to the server.
    fn ping(&self) -> impl std::future::Future<Output = GdoResult<()>> + Send;

    /// Execute a query and return all rows.
    fn query(
        &self,
        sql: &str,
        args: &[&(dyn ToSql + Sync)],
    ) -> impl std::future::Future<Output = GdoResult<Vec<Row>>> + Send;

    /// Execute a statement and return the number of affected rows.
    fn execute(
        &self,
        sql: &str,
        args: &[&(dyn ToSql + Sync)],
    ) -> impl std::future::Future<Output = GdoResult<u64>> + Send;

    /// Prepare a statement on this connection.
    ///
    /// The statement is closed when the returned handle is dropped.
    fn prepare(&self, sql: &str) -> impl std::future::Future<Output = GdoResult<Statement>> + Send;

    /// Run a prepared statement and return all rows.
    fn query_statement(
        &self,
        stmt: &Statement,
        args: &[&(dyn ToSql + Sync)],
    ) -> impl std::future::Future<Output = GdoResult<Vec<Row>>> + Send;

    /// Run a prepared statement and return the number of affected rows.
    fn execute_statement(
        &self,
        stmt: &Statement,
        args: &[&(dyn ToSql + Sync)],
    ) -> impl std::future::Future<Output = GdoResult<u64>> + Send;

    /// Execute a query and return the **first** row.
    ///
    /// - 0 rows: returns [`GdoError::NoRows`]
    /// - 1 or more rows: returns the first row
    fn query_row(
        &self,
        sql: &str,
        args: &[&(dyn ToSql + Sync)],
    ) -> impl std::future::Future<Output = GdoResult<Row>> + Send {
        async move {
            let rows = self.query(sql, args).await?;
            rows.into_iter().next().ok_or(GdoError::NoRows)
        }
    }

    /// Execute a query and return the first row, if any.
    fn query_opt(
        &self,
        sql: &str,
        args: &[&(dyn ToSql + Sync)],
    ) -> impl std::future::Future<Output = GdoResult<Option<Row>>> + Send {
        async move {
            let rows = self.query(sql, args).await?;
            Ok(rows.into_iter().next())
        }
    }

    /// Execute a query and map every row with [`FromRow`].
    fn query_as<T>(
        &self,
        sql: &str,
        args: &[&(dyn ToSql + Sync)],
    ) -> impl std::future::Future<Output = GdoResult<Vec<T>>> + Send
    where
        T: FromRow + Send,
    {
        async move {
            let rows = self.query(sql, args).await?;
            rows.iter().map(T::from_row).collect()
        }
    }

    /// Execute a query and map the first row with [`FromRow`].
    fn query_row_as<T>(
        &self,
        sql: &str,
        args: &[&(dyn ToSql + Sync)],
    ) -> impl std::future::Future<Output = GdoResult<T>> + Send
    where
        T: FromRow + Send,
    {
        async move {
            let row = self.query_row(sql, args).await?;
            T::from_row(&row)
        }
    }
}

pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

fn log_sql(op: &'static str, sql: &str, args: usize) {
    tracing::debug!(
        target: "gdo.sql",
        op,
        args,
        sql = truncate_sql_bytes(sql, MAX_LOGGED_SQL),
        "statement"
    );
}

impl Gdo for tokio_postgres::Client {
    async fn ping(&self) -> GdoResult<()> {
        tokio_postgres::Client::batch_execute(self, "SELECT 1")
            .await
            .map_err(GdoError::from_db_error)
    }

    async fn query(&self, sql: &str, args: &[&(dyn ToSql + Sync)]) -> GdoResult<Vec<Row>> {
        let sql = bind_positional(sql, args.len())?;
        log_sql("query", &sql, args.len());
        tokio_postgres::Client::query(self, sql.as_str(), args)
            .await
            .map_err(GdoError::from_db_error)
    }

    async fn execute(&self, sql: &str, args: &[&(dyn ToSql + Sync)]) -> GdoResult<u64> {
        let sql = bind_positional(sql, args.len())?;
        log_sql("execute", &sql, args.len());
        tokio_postgres::Client::execute(self, sql.as_str(), args)
            .await
            .map_err(GdoError::from_db_error)
    }

    async fn prepare(&self, sql: &str) -> GdoResult<Statement> {
        let (sql, _) = rewrite_placeholders(sql);
        log_sql("prepare", &sql, 0);
        tokio_postgres::Client::prepare(self, &sql)
            .await
            .map_err(GdoError::from_db_error)
    }

    async fn query_statement(
        &self,
        stmt: &Statement,
        args: &[&(dyn ToSql + Sync)],
    ) -> GdoResult<Vec<Row>> {
        tokio_postgres::Client::query(self, stmt, args)
            .await
            .map_err(GdoError::from_db_error)
    }

    async fn execute_statement(
        &self,
        stmt: &Statement,
        args: &[&(dyn ToSql + Sync)],
    ) -> GdoResult<u64> {
        tokio_postgres::Client::execute(self, stmt, args)
            .await
            .map_err(GdoError::from_db_error)
    }
}

impl Gdo for tokio_postgres::Transaction<'_> {
    async fn ping(&self) -> GdoResult<()> {
        tokio_postgres::Transaction::batch_execute(self, "SELECT 1")
            .await
            .map_err(GdoError::from_db_error)
    }

    async fn query(&self, sql: &str, args: &[&(dyn ToSql + Sync)]) -> GdoResult<Vec<Row>> {
        let sql = bind_positional(sql, args.len())?;
        log_sql("query", &sql, args.len());
        tokio_postgres::Transaction::query(self, sql.as_str(), args)
            .await
            .map_err(GdoError::from_db_error)
    }

    async fn execute(&self, sql: &str, args: &[&(dyn ToSql + Sync)]) -> GdoResult<u64> {
        let sql = bind_positional(sql, args.len())?;
        log_sql("execute", &sql, args.len());
        tokio_postgres::Transaction::execute(self, sql.as_str(), args)
            .await
            .map_err(GdoError::from_db_error)
    }

    async fn prepare(&self, sql: &str) -> GdoResult<Statement> {
        let (sql, _) = rewrite_placeholders(sql);
        log_sql("prepare", &sql, 0);
        tokio_postgres::Transaction::prepare(self, &sql)
            .await
            .map_err(GdoError::from_db_error)
    }

    async fn query_statement(
        &self,
        stmt: &Statement,
        args: &[&(dyn ToSql + Sync)],
    ) -> GdoResult<Vec<Row>> {
        tokio_postgres::Transaction::query(self, stmt, args)
            .await
            .map_err(GdoError::from_db_error)
    }

    async fn execute_statement(
        &self,
        stmt: &Statement,
        args: &[&(dyn ToSql + Sync)],
    ) -> GdoResult<u64> {
        tokio_postgres::Transaction::execute(self, stmt, args)
            .await
            .map_err(GdoError::from_db_error)
    }
}
