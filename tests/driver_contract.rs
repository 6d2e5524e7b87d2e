//! Connection lifecycle through the public API, using a counting driver
//!
//! Checks that failures collapse to `None` / `false` and that the liveness
//! check never leaks the connection it opens.

use async_trait::async_trait;
use mssql_conn::connection::{Driver, DriverConnection};
use mssql_conn::{blocking, ConnectionConfig, ConnectionError, Database};
use std::io;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Default)]
struct Ledger {
    open: AtomicUsize,
    total_opened: AtomicUsize,
    reachable: AtomicBool,
}

#[derive(Debug, Clone)]
struct CountingDriver {
    ledger: Arc<Ledger>,
}

#[derive(Debug)]
struct CountingConnection {
    ledger: Arc<Ledger>,
}

impl CountingDriver {
    fn new(reachable: bool) -> Self {
        let ledger = Arc::new(Ledger::default());
        ledger.reachable.store(reachable, Ordering::SeqCst);
        Self { ledger }
    }

    fn open(&self) -> usize {
        self.ledger.open.load(Ordering::SeqCst)
    }

    fn total_opened(&self) -> usize {
        self.ledger.total_opened.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Driver for CountingDriver {
    type Connection = CountingConnection;

    async fn connect(&self, _connection_string: &str) -> Result<CountingConnection, ConnectionError> {
        if !self.ledger.reachable.load(Ordering::SeqCst) {
            return Err(io::Error::new(io::ErrorKind::TimedOut, "host unreachable").into());
        }
        self.ledger.open.fetch_add(1, Ordering::SeqCst);
        self.ledger.total_opened.fetch_add(1, Ordering::SeqCst);
        Ok(CountingConnection {
            ledger: Arc::clone(&self.ledger),
        })
    }
}

#[async_trait]
impl DriverConnection for CountingConnection {
    async fn query_returns_row(&mut self, _sql: &str) -> Result<bool, ConnectionError> {
        Ok(true)
    }

    async fn close(self) -> Result<(), ConnectionError> {
        self.ledger.open.fetch_sub(1, Ordering::SeqCst);
        Ok(())
    }
}

fn config() -> ConnectionConfig {
    ConnectionConfig::builder("secret").host("db1").build().unwrap()
}

#[tokio::test]
async fn test_async_health_check_closes_connection() {
    let driver = CountingDriver::new(true);
    let db = Database::with_driver(config(), driver.clone());

    for _ in 0..5 {
        assert!(db.test_connection().await);
    }

    assert_eq!(driver.total_opened(), 5);
    assert_eq!(driver.open(), 0);
}

#[tokio::test]
async fn test_async_unreachable_collapses_to_none() {
    let driver = CountingDriver::new(false);
    let db = Database::with_driver(config(), driver.clone());

    assert!(db.acquire_connection().await.is_none());
    assert!(!db.test_connection().await);
    assert!(matches!(
        db.try_acquire_connection().await,
        Err(ConnectionError::Io(_))
    ));
    assert_eq!(driver.total_opened(), 0);
}

#[tokio::test]
async fn test_acquired_connection_belongs_to_caller() {
    let driver = CountingDriver::new(true);
    let db = Database::with_driver(config(), driver.clone());

    let conn = db.acquire_connection().await.unwrap();
    assert_eq!(driver.open(), 1);

    conn.close().await.unwrap();
    assert_eq!(driver.open(), 0);
}

#[test]
fn test_blocking_health_check_closes_connection() {
    let driver = CountingDriver::new(true);
    let db = blocking::Database::with_driver(config(), driver.clone()).unwrap();

    assert!(db.test_connection());
    assert!(db.test_connection());
    assert_eq!(driver.total_opened(), 2);
    assert_eq!(driver.open(), 0);
}

#[test]
fn test_blocking_acquire_and_close() {
    let driver = CountingDriver::new(true);
    let db = blocking::Database::with_driver(config(), driver.clone()).unwrap();

    let mut conn = db.acquire_connection().unwrap();
    assert!(conn.query_returns_row("SELECT 1").unwrap());
    assert_eq!(driver.open(), 1);

    conn.close().unwrap();
    assert_eq!(driver.open(), 0);
}

#[test]
fn test_blocking_unreachable() {
    let driver = CountingDriver::new(false);
    let db = blocking::Database::with_driver(config(), driver).unwrap();

    assert!(db.acquire_connection().is_none());
    assert!(!db.test_connection());
}
