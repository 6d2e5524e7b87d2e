//! TDS (SQL Server wire protocol) driver over TCP

use super::driver::{Driver, DriverConnection};
use crate::client::OdbcConnectionString;
use crate::error::ConnectionError;
use async_trait::async_trait;
use std::future::Future;
use tiberius::Client;
use tokio::net::TcpStream;
use tokio_util::compat::{Compat, TokioAsyncWriteCompatExt};

/// Client type carried by [`TdsConnection`]
pub type TdsClient = Client<Compat<TcpStream>>;

/// Driver speaking TDS directly to SQL Server
#[derive(Debug, Clone, Copy, Default)]
pub struct TdsDriver;

#[async_trait]
impl Driver for TdsDriver {
    type Connection = TdsConnection;

    async fn connect(&self, connection_string: &str) -> Result<TdsConnection, ConnectionError> {
        let parsed = OdbcConnectionString::parse(connection_string)?;
        let config = parsed.to_tds_config()?;

        let client = follow_routing(config, |config| async move {
            let addr = config.get_addr();
            tracing::debug!(%addr, "opening TCP connection");
            let tcp = TcpStream::connect(&addr).await?;
            tcp.set_nodelay(true)?;

            let client = Client::connect(config, tcp.compat_write()).await?;
            tracing::debug!(%addr, "login complete");
            Ok::<_, ConnectionError>(client)
        })
        .await?;

        Ok(TdsConnection { client })
    }
}

/// Run `connect`, and run it once more against the target of a routing
/// redirect (Azure SQL gateways, availability group listeners).
///
/// A second redirect is returned as an error.
async fn follow_routing<T, F, Fut>(
    config: tiberius::Config,
    mut connect: F,
) -> Result<T, ConnectionError>
where
    F: FnMut(tiberius::Config) -> Fut,
    Fut: Future<Output = Result<T, ConnectionError>>,
{
    match connect(config.clone()).await {
        Err(ConnectionError::Driver(tiberius::error::Error::Routing { host, port })) => {
            tracing::info!(%host, port, "server redirected connection");
            let mut config = config;
            config.host(&host);
            config.port(port);
            connect(config).await
        }
        other => other,
    }
}

/// SQL Server connection
pub struct TdsConnection {
    client: TdsClient,
}

impl TdsConnection {
    /// Borrow the underlying client for queries
    pub fn client_mut(&mut self) -> &mut TdsClient {
        &mut self.client
    }

    /// Take ownership of the underlying client
    pub fn into_inner(self) -> TdsClient {
        self.client
    }
}

impl std::fmt::Debug for TdsConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TdsConnection")
            .field("client", &"<tiberius::Client>")
            .finish()
    }
}

#[async_trait]
impl DriverConnection for TdsConnection {
    async fn query_returns_row(&mut self, sql: &str) -> Result<bool, ConnectionError> {
        let row = self.client.simple_query(sql).await?.into_row().await?;
        Ok(row.is_some())
    }

    async fn close(self) -> Result<(), ConnectionError> {
        self.client.close().await?;
        Ok(())
    }
}
