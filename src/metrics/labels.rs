//! Metric names and label values

pub const CONNECT_ATTEMPTS_TOTAL: &str = "mssql_conn_connect_attempts_total";
pub const CONNECT_FAILURES_TOTAL: &str = "mssql_conn_connect_failures_total";
pub const HEALTH_CHECKS_TOTAL: &str = "mssql_conn_health_checks_total";
pub const CONNECT_DURATION_MS: &str = "mssql_conn_connect_duration_ms";

pub const REASON: &str = "reason";
pub const RESULT: &str = "result";

// Failure reasons
pub const REASON_CONFIG: &str = "config";
pub const REASON_IO: &str = "io";
pub const REASON_DRIVER: &str = "driver";
pub const REASON_TIMEOUT: &str = "timeout";
pub const REASON_RUNTIME: &str = "runtime";

// Health check results
pub const RESULT_OK: &str = "ok";
pub const RESULT_NO_ROW: &str = "no_row";
pub const RESULT_UNREACHABLE: &str = "unreachable";
pub const RESULT_ERROR: &str = "error";
