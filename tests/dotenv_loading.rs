//! `.env` loading in `ConnectionConfig::from_env`
//!
//! Changes the working directory, so it lives in its own test binary and
//! runs as a single test.

use mssql_conn::ConnectionConfig;
use std::fs;
use tokio_test::assert_ok;

const VARS: [&str; 5] = ["DB_HOST", "DB_PORT", "DB_NAME", "DB_USER", "DB_PASSWORD"];

#[test]
fn test_from_env_reads_dotenv_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".env"),
        "DB_HOST=dotenv-host\nDB_NAME=DotenvDB\nDB_PASSWORD=from-dotenv\n",
    )
    .unwrap();
    std::env::set_current_dir(dir.path()).unwrap();

    for var in VARS {
        std::env::remove_var(var);
    }
    let config = assert_ok!(ConnectionConfig::from_env());
    assert_eq!(config.host(), "dotenv-host");
    assert_eq!(config.database(), "DotenvDB");
    assert_eq!(config.password(), "from-dotenv");
    assert_eq!(config.port(), "1433");
    assert_eq!(config.username(), "sa");

    // Process environment wins over the file
    for var in VARS {
        std::env::remove_var(var);
    }
    std::env::set_var("DB_HOST", "process-host");
    let config = assert_ok!(ConnectionConfig::from_env());
    assert_eq!(config.host(), "process-host");
    assert_eq!(config.password(), "from-dotenv");
}
