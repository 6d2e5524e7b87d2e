//! Error types
//!
//! Two kinds of failure exist:
//! * [`ConfigError`] is raised while building a [`ConnectionConfig`](crate::ConnectionConfig)
//!   and is meant to stop the process at startup.
//! * [`ConnectionError`] covers everything that can go wrong while opening or
//!   using a connection. The legacy [`Database`](crate::Database) API collapses it
//!   into `None` / `false` after logging it.

use std::io;
use std::time::Duration;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required secret was absent or empty
    #[error("{var} environment variable is required")]
    MissingSecret {
        /// Name of the environment variable
        var: &'static str,
    },
}

/// Errors raised while opening or using a connection
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    /// The connection string could not be interpreted
    #[error("invalid connection string: {0}")]
    InvalidConnectionString(String),

    /// Network-level failure (DNS, refused, reset)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failure reported by the TDS driver (login, TLS, protocol)
    #[error("driver error: {0}")]
    Driver(#[from] tiberius::error::Error),

    /// Connect attempt exceeded the configured timeout
    #[error("connection attempt timed out after {0:?}")]
    Timeout(Duration),

    /// The runtime backing the blocking API could not be started
    #[error("failed to start runtime: {0}")]
    Runtime(#[source] io::Error),
}

impl ConnectionError {
    /// Short, stable label used as a metrics dimension
    pub fn reason(&self) -> &'static str {
        match self {
            Self::InvalidConnectionString(_) => crate::metrics::labels::REASON_CONFIG,
            Self::Io(_) => crate::metrics::labels::REASON_IO,
            Self::Driver(_) => crate::metrics::labels::REASON_DRIVER,
            Self::Timeout(_) => crate::metrics::labels::REASON_TIMEOUT,
            Self::Runtime(_) => crate::metrics::labels::REASON_RUNTIME,
        }
    }
}

/// Crate-wide error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Connection error
    #[error(transparent)]
    Connection(#[from] ConnectionError),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
