//! Configuration
//!
//! This module handles:
//! * Reading `DB_*` variables from the environment (or any [`EnvSource`])
//! * Defaults for everything except the password
//! * Fail-fast validation of the password

mod connection_config;
mod env;

pub use connection_config::{
    ConnectionConfig, ConnectionConfigBuilder, DEFAULT_DATABASE, DEFAULT_HOST, DEFAULT_PORT,
    DEFAULT_USER, ENV_HOST, ENV_NAME, ENV_PASSWORD, ENV_PORT, ENV_USER,
};
pub use env::{EnvSource, ProcessEnv};
