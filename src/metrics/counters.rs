//! Counter helpers

use super::labels;

/// A connect attempt was started
pub fn connect_attempted() {
    ::metrics::counter!(labels::CONNECT_ATTEMPTS_TOTAL).increment(1);
}

/// A connect attempt failed
pub fn connect_failed(reason: &'static str) {
    ::metrics::counter!(labels::CONNECT_FAILURES_TOTAL, labels::REASON => reason).increment(1);
}

/// A liveness check finished with the given result label
pub fn health_check(result: &'static str) {
    ::metrics::counter!(labels::HEALTH_CHECKS_TOTAL, labels::RESULT => result).increment(1);
}
