//! Histogram helpers

use super::labels;

/// Time spent opening a connection, successful or not
pub fn connect_duration(duration_ms: u64) {
    ::metrics::histogram!(labels::CONNECT_DURATION_MS).record(duration_ms as f64);
}
