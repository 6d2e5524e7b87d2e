//! Connection configuration

use super::env::{EnvSource, ProcessEnv};
use crate::client::connection_string;
use crate::error::ConfigError;
use std::fmt;
use std::time::Duration;

pub const ENV_HOST: &str = "DB_HOST";
pub const ENV_PORT: &str = "DB_PORT";
pub const ENV_NAME: &str = "DB_NAME";
pub const ENV_USER: &str = "DB_USER";
pub const ENV_PASSWORD: &str = "DB_PASSWORD";

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: &str = "1433";
pub const DEFAULT_DATABASE: &str = "SentimentDB";
pub const DEFAULT_USER: &str = "sa";

/// Connection configuration
///
/// Built once at startup, immutable afterwards. The rendered connection string
/// carries `TrustServerCertificate=yes`, so the server certificate is **not**
/// validated.
///
/// The port is kept as text and is not range-checked; an unusable port shows
/// up as a connection failure.
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    host: String,
    port: String,
    database: String,
    username: String,
    password: String,
    connect_timeout: Option<Duration>,
}

impl ConnectionConfig {
    /// Load `.env` (if present) and read the process environment
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSecret`] when `DB_PASSWORD` is unset or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();
        Self::from_source(&ProcessEnv)
    }

    /// Read configuration from any key-value source
    ///
    /// Optional variables fall back to their defaults only when unset.
    pub fn from_source(env: &impl EnvSource) -> Result<Self, ConfigError> {
        let password = env
            .var(ENV_PASSWORD)
            .filter(|p| !p.is_empty())
            .ok_or(ConfigError::MissingSecret { var: ENV_PASSWORD })?;

        let config = Self {
            host: env.var(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: env.var(ENV_PORT).unwrap_or_else(|| DEFAULT_PORT.to_string()),
            database: env
                .var(ENV_NAME)
                .unwrap_or_else(|| DEFAULT_DATABASE.to_string()),
            username: env.var(ENV_USER).unwrap_or_else(|| DEFAULT_USER.to_string()),
            password,
            connect_timeout: None,
        };

        tracing::debug!(
            host = %config.host,
            port = %config.port,
            database = %config.database,
            user = %config.username,
            "database configuration loaded"
        );

        Ok(config)
    }

    /// Create a builder with every optional field at its default
    ///
    /// # Examples
    ///
    /// ```
    /// use mssql_conn::ConnectionConfig;
    /// use std::time::Duration;
    ///
    /// let config = ConnectionConfig::builder("secret")
    ///     .host("db1")
    ///     .database("Sales")
    ///     .connect_timeout(Duration::from_secs(5))
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(config.host(), "db1");
    /// ```
    pub fn builder(password: impl Into<String>) -> ConnectionConfigBuilder {
        ConnectionConfigBuilder {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            username: DEFAULT_USER.to_string(),
            password: password.into(),
            connect_timeout: None,
        }
    }

    /// Server host
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Server port, as given
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Database name
    pub fn database(&self) -> &str {
        &self.database
    }

    /// Login name
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Login password, never empty. Sent verbatim, surrounding whitespace included
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Connect timeout, `None` leaves it to the driver and OS
    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout
    }

    /// Render the ODBC connection string
    pub fn connection_string(&self) -> String {
        connection_string::render(
            &self.host,
            &self.port,
            &self.database,
            &self.username,
            &self.password,
        )
    }

    /// Connection string with the password masked, safe for logs
    pub fn redacted_connection_string(&self) -> String {
        connection_string::render(
            &self.host,
            &self.port,
            &self.database,
            &self.username,
            connection_string::REDACTED,
        )
    }
}

impl fmt::Debug for ConnectionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &connection_string::REDACTED)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}

/// Builder for [`ConnectionConfig`]
#[derive(Clone)]
pub struct ConnectionConfigBuilder {
    host: String,
    port: String,
    database: String,
    username: String,
    password: String,
    connect_timeout: Option<Duration>,
}

impl ConnectionConfigBuilder {
    /// Set the server host (default: `localhost`)
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the server port (default: `1433`)
    pub fn port(mut self, port: impl Into<String>) -> Self {
        self.port = port.into();
        self
    }

    /// Set the database name (default: `SentimentDB`)
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.database = database.into();
        self
    }

    /// Set the login name (default: `sa`)
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Bound the time spent establishing a connection
    ///
    /// Default: None (driver and OS defaults apply)
    pub fn connect_timeout(mut self, duration: Duration) -> Self {
        self.connect_timeout = Some(duration);
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSecret`] when the password is empty.
    pub fn build(self) -> Result<ConnectionConfig, ConfigError> {
        if self.password.is_empty() {
            return Err(ConfigError::MissingSecret { var: ENV_PASSWORD });
        }

        Ok(ConnectionConfig {
            host: self.host,
            port: self.port,
            database: self.database,
            username: self.username,
            password: self.password,
            connect_timeout: self.connect_timeout,
        })
    }
}

impl fmt::Debug for ConnectionConfigBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionConfigBuilder")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &connection_string::REDACTED)
            .field("connect_timeout", &self.connect_timeout)
            .finish()
    }
}
