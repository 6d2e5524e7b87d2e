//! Connection management
//!
//! This module handles:
//! * The driver seam ([`Driver`], [`DriverConnection`])
//! * The TDS driver used in production ([`TdsDriver`])

mod driver;
mod tds;

pub use driver::{Driver, DriverConnection};
pub use tds::{TdsClient, TdsConnection, TdsDriver};
