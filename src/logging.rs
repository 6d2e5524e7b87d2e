//! Tracing subscriber setup for binaries and tests
//!
//! The library only emits `tracing` events. Applications that do not install
//! their own subscriber can call [`try_init_logging`].

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a plain-text subscriber
///
/// `RUST_LOG` takes precedence over `default_level` when set.
///
/// # Errors
///
/// Returns [`LoggingError::AlreadyInitialized`] if a global subscriber exists.
pub fn try_init_logging(default_level: Level) -> Result<(), LoggingError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_string()));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)
}

/// Logging initialization errors
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("tracing subscriber already initialized")]
    AlreadyInitialized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        // Another test may have installed one first; either way the second call fails
        let _ = try_init_logging(Level::DEBUG);
        assert!(matches!(
            try_init_logging(Level::DEBUG),
            Err(LoggingError::AlreadyInitialized)
        ));
    }
}
