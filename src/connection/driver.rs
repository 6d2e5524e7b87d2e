//! Driver abstraction
//!
//! [`Database`](crate::Database) only talks to the network through these traits,
//! which keeps the swallow-and-log policy testable without a live server.

use crate::error::ConnectionError;
use async_trait::async_trait;

/// Opens connections from a rendered connection string
#[async_trait]
pub trait Driver: Send + Sync {
    /// Connection handle produced by this driver
    type Connection: DriverConnection;

    /// Open a new, independent connection
    async fn connect(&self, connection_string: &str) -> Result<Self::Connection, ConnectionError>;
}

/// An open connection owned by the caller
#[async_trait]
pub trait DriverConnection: Send {
    /// Run `sql` and report whether at least one row came back
    async fn query_returns_row(&mut self, sql: &str) -> Result<bool, ConnectionError>;

    /// Close the connection
    async fn close(self) -> Result<(), ConnectionError>;
}
