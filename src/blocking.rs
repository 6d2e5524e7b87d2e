//! Synchronous API
//!
//! Every call blocks the current thread until the network round-trip is done.
//! A [`Database`] owns a current-thread tokio runtime used only to drive the
//! driver, so it must not be created or dropped from inside an async context.
//!
//! ```no_run
//! use mssql_conn::{blocking, ConnectionConfig};
//!
//! let config = ConnectionConfig::from_env().expect("DB_PASSWORD must be set");
//! let db = blocking::Database::new(config).expect("runtime");
//! if let Some(conn) = db.acquire_connection() {
//!     conn.close().ok();
//! }
//! ```

use crate::client;
use crate::config::ConnectionConfig;
use crate::connection::{Driver, DriverConnection, TdsDriver};
use crate::error::ConnectionError;
use std::sync::Arc;
use tokio::runtime::{Builder, Runtime};

/// Blocking counterpart of [`client::Database`]
#[derive(Debug)]
pub struct Database<D = TdsDriver> {
    inner: client::Database<D>,
    runtime: Arc<Runtime>,
}

impl Database<TdsDriver> {
    /// Create a handle using the TDS driver
    pub fn new(config: ConnectionConfig) -> Result<Self, ConnectionError> {
        Self::with_driver(config, TdsDriver)
    }
}

impl<D: Driver> Database<D> {
    /// Create a handle with a custom driver
    pub fn with_driver(config: ConnectionConfig, driver: D) -> Result<Self, ConnectionError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(ConnectionError::Runtime)?;

        Ok(Self {
            inner: client::Database::with_driver(config, driver),
            runtime: Arc::new(runtime),
        })
    }

    pub fn config(&self) -> &ConnectionConfig {
        self.inner.config()
    }

    /// See [`client::Database::try_acquire_connection`]
    pub fn try_acquire_connection(&self) -> Result<Connection<D::Connection>, ConnectionError> {
        let conn = self.runtime.block_on(self.inner.try_acquire_connection())?;
        Ok(self.wrap(conn))
    }

    /// See [`client::Database::acquire_connection`]
    pub fn acquire_connection(&self) -> Option<Connection<D::Connection>> {
        self.runtime
            .block_on(self.inner.acquire_connection())
            .map(|conn| self.wrap(conn))
    }

    /// See [`client::Database::test_connection`]
    pub fn test_connection(&self) -> bool {
        self.runtime.block_on(self.inner.test_connection())
    }

    fn wrap(&self, conn: D::Connection) -> Connection<D::Connection> {
        Connection {
            inner: conn,
            runtime: Arc::clone(&self.runtime),
        }
    }
}

/// Connection returned by the blocking API
///
/// Keeps the runtime alive for as long as the connection exists.
#[derive(Debug)]
pub struct Connection<C> {
    inner: C,
    runtime: Arc<Runtime>,
}

impl<C: DriverConnection> Connection<C> {
    /// Run `sql` and report whether a row came back
    pub fn query_returns_row(&mut self, sql: &str) -> Result<bool, ConnectionError> {
        self.runtime.block_on(self.inner.query_returns_row(sql))
    }

    /// Close the connection
    pub fn close(self) -> Result<(), ConnectionError> {
        let Self { inner, runtime } = self;
        runtime.block_on(inner.close())
    }

    /// Borrow the driver connection
    pub fn get_mut(&mut self) -> &mut C {
        &mut self.inner
    }

    /// Run a future on the runtime that owns this connection
    ///
    /// Use it to drive driver-specific calls made through [`get_mut`](Self::get_mut).
    pub fn block_on<F: std::future::Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocking_unreachable_server() {
        let config = ConnectionConfig::builder("pw")
            .host("127.0.0.1")
            .port("1")
            .build()
            .unwrap();
        let db = Database::new(config).unwrap();
        assert!(db.acquire_connection().is_none());
        assert!(!db.test_connection());
        assert!(db.try_acquire_connection().is_err());
    }

    #[test]
    fn test_blocking_invalid_port() {
        let config = ConnectionConfig::builder("pw")
            .port("not-a-port")
            .build()
            .unwrap();
        let db = Database::new(config).unwrap();
        assert!(matches!(
            db.try_acquire_connection(),
            Err(ConnectionError::InvalidConnectionString(_))
        ));
    }
}
