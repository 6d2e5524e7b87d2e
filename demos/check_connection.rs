//! Check that the configured database answers
//!
//! Run with:
//! ```bash
//! DB_HOST=localhost DB_PASSWORD='...' cargo run --example check_connection
//! ```

use mssql_conn::logging::try_init_logging;
use mssql_conn::{blocking, ConnectionConfig};
use std::process::ExitCode;

fn main() -> ExitCode {
    let _ = try_init_logging(tracing::Level::INFO);

    // A missing password stops the process here
    let config = match ConnectionConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("checking {}", config.redacted_connection_string());

    let db = match blocking::Database::new(config) {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if db.test_connection() {
        println!("database reachable");
        ExitCode::SUCCESS
    } else {
        println!("database unreachable");
        ExitCode::FAILURE
    }
}
