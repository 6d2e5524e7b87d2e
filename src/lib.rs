//! # mssql-conn
//!
//! Connection configuration and liveness checks for SQL Server.
//!
//! Configuration comes from `DB_HOST`, `DB_PORT`, `DB_NAME`, `DB_USER` and
//! `DB_PASSWORD` (the only required one). A missing password fails fast at
//! startup; every other problem degrades to "no connection" and is reported
//! through logs.
//!
//! ```no_run
//! use mssql_conn::{blocking, ConnectionConfig};
//!
//! let config = ConnectionConfig::from_env().expect("DB_PASSWORD must be set");
//! let db = blocking::Database::new(config).expect("runtime");
//! println!("database reachable: {}", db.test_connection());
//! ```
//!
//! The rendered connection string carries `TrustServerCertificate=yes`, so the
//! server certificate is not validated.

#![warn(missing_debug_implementations)]

pub mod blocking;
pub mod client;
pub mod config;
pub mod connection;
pub mod error;
pub mod logging;
pub mod metrics;

pub use client::{Database, OdbcConnectionString};
pub use config::{ConnectionConfig, ConnectionConfigBuilder, EnvSource, ProcessEnv};
pub use error::{ConfigError, ConnectionError, Error, Result};
