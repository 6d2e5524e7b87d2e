//! Client API
//!
//! * [`Database`]: acquire connections and run the liveness check
//! * [`OdbcConnectionString`]: parse rendered connection strings

pub(crate) mod connection_string;
mod database;

pub use connection_string::{OdbcConnectionString, DEFAULT_TDS_PORT, ODBC_DRIVER};
pub use database::{Database, HEALTH_CHECK_QUERY};
