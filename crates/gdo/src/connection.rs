//! A single database connection.

use crate::client::Gdo;
use crate::error::{GdoError, GdoResult};
use std::fmt;
use tokio::task::JoinHandle;
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, NoTls, Row, Statement, Transaction};

/// An open connection: the driver client plus the task driving its socket.
///
/// Created by [`Protocol::connect`](crate::Protocol::connect) or
/// [`Connection::connect`].
pub struct Connection {
    client: Client,
    task: JoinHandle<()>,
}

impl Connection {
    /// Open a connection from a driver connection string.
    ///
    /// Must be called inside a Tokio runtime; the connection task is spawned on it.
    pub async fn connect(dsn: &str) -> GdoResult<Self> {
        let (client, connection) = tokio_postgres::connect(dsn, NoTls)
            .await
            .map_err(GdoError::from_db_error)?;

        let task = tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!(target: "gdo.conn", error = %e, "connection terminated");
            }
        });

        Ok(Self { client, task })
    }

    /// The underlying driver client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Start a transaction. Commit or roll back through the returned handle;
    /// dropping it without committing rolls back.
    pub async fn begin(&mut self) -> GdoResult<Transaction<'_>> {
        self.client
            .transaction()
            .await
            .map_err(GdoError::from_db_error)
    }

    pub fn is_closed(&self) -> bool {
        self.client.is_closed()
    }

    /// Close the connection and wait for its task to finish.
    pub async fn close(self) -> GdoResult<()> {
        let Self { client, task } = self;
        drop(client);
        task.await
            .map_err(|e| GdoError::Connection(e.to_string()))?;
        tracing::debug!(target: "gdo.conn", "connection closed");
        Ok(())
    }
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("closed", &self.client.is_closed())
            .finish_non_exhaustive()
    }
}

impl Gdo for Connection {
    async fn ping(&self) -> GdoResult<()> {
        Gdo::ping(&self.client).await
    }

    async fn query(&self, sql: &str, args: &[&(dyn ToSql + Sync)]) -> GdoResult<Vec<Row>> {
        Gdo::query(&self.client, sql, args).await
    }

    async fn execute(&self, sql: &str, args: &[&(dyn ToSql + Sync)]) -> GdoResult<u64> {
        Gdo::execute(&self.client, sql, args).await
    }

    async fn prepare(&self, sql: &str) -> GdoResult<Statement> {
        Gdo::prepare(&self.client, sql).await
    }

    async fn query_statement(
        &self,
        stmt: &Statement,
        args: &[&(dyn ToSql + Sync)],
    ) -> GdoResult<Vec<Row>> {
        Gdo::query_statement(&self.client, stmt, args).await
    }

    async fn execute_statement(
        &self,
        stmt: &Statement,
        args: &[&(dyn ToSql + Sync)],
    ) -> GdoResult<u64> {
        Gdo::execute_statement(&self.client, stmt, args).await
    }
}
