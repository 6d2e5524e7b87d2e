//! Database handle: acquire connections and check liveness

use crate::config::ConnectionConfig;
use crate::connection::{Driver, DriverConnection, TdsDriver};
use crate::error::ConnectionError;
use crate::metrics::{counters, histograms, labels};
use std::time::Instant;
use tracing::Instrument;

/// Query used by [`Database::test_connection`]
pub const HEALTH_CHECK_QUERY: &str = "SELECT 1";

/// Entry point for database access
///
/// Holds the configuration and the driver. It never tracks or pools the
/// connections it hands out; each call opens a fresh one that the caller owns.
///
/// ```no_run
/// # async fn example() -> Result<(), mssql_conn::Error> {
/// use mssql_conn::{ConnectionConfig, Database};
///
/// let db = Database::new(ConnectionConfig::from_env()?);
/// if !db.test_connection().await {
///     eprintln!("database unreachable");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Database<D = TdsDriver> {
    config: ConnectionConfig,
    driver: D,
}

impl Database<TdsDriver> {
    /// Create a handle using the TDS driver
    pub fn new(config: ConnectionConfig) -> Self {
        Self::with_driver(config, TdsDriver)
    }
}

impl<D: Driver> Database<D> {
    /// Create a handle with a custom driver
    pub fn with_driver(config: ConnectionConfig, driver: D) -> Self {
        Self { config, driver }
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Open a connection, surfacing the real error
    ///
    /// Applies the configured connect timeout, if any.
    pub async fn try_acquire_connection(&self) -> Result<D::Connection, ConnectionError> {
        let connection_string = self.config.connection_string();

        async {
            counters::connect_attempted();
            let start = Instant::now();

            let result = match self.config.connect_timeout() {
                Some(limit) => {
                    match tokio::time::timeout(limit, self.driver.connect(&connection_string)).await
                    {
                        Ok(result) => result,
                        Err(_) => Err(ConnectionError::Timeout(limit)),
                    }
                }
                None => self.driver.connect(&connection_string).await,
            };

            histograms::connect_duration(start.elapsed().as_millis() as u64);
            if let Err(e) = &result {
                counters::connect_failed(e.reason());
            }
            result
        }
        .instrument(tracing::info_span!(
            "connect",
            host = %self.config.host(),
            port = %self.config.port(),
            database = %self.config.database()
        ))
        .await
    }

    /// Open a connection, or `None` on any failure
    ///
    /// Failures are logged at error level and never returned.
    pub async fn acquire_connection(&self) -> Option<D::Connection> {
        match self.try_acquire_connection().await {
            Ok(conn) => {
                tracing::info!("Database connection established successfully");
                Some(conn)
            }
            Err(e) => {
                tracing::error!("Failed to connect to database: {}", e);
                None
            }
        }
    }

    /// Round-trip `SELECT 1` on a fresh connection
    ///
    /// Returns `true` iff a row came back. The connection is closed on every
    /// path once it has been opened.
    pub async fn test_connection(&self) -> bool {
        let Some(mut conn) = self.acquire_connection().await else {
            counters::health_check(labels::RESULT_UNREACHABLE);
            return false;
        };

        let answered = conn.query_returns_row(HEALTH_CHECK_QUERY).await;
        let closed = conn.close().await;

        let healthy = match (answered, closed) {
            (Ok(has_row), Ok(())) => {
                counters::health_check(if has_row {
                    labels::RESULT_OK
                } else {
                    labels::RESULT_NO_ROW
                });
                has_row
            }
            (Err(e), _) | (Ok(_), Err(e)) => {
                counters::health_check(labels::RESULT_ERROR);
                tracing::error!("Database connection test failed: {}", e);
                false
            }
        };

        tracing::debug!(healthy, "database connection test finished");
        healthy
    }
}
