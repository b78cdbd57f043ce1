//! Server Module
//!
//! Binds the listener and serves the router until shutdown.

use std::future::Future;
use std::net::SocketAddr;

use tokio::net::TcpListener;

use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::error::{Result, ServiceError};

const BANNER_RULE: &str = "*********************************";

/// Binds a TCP listener on all interfaces at the configured port.
///
/// Port 0 asks the OS for a free port. No retry on failure.
pub async fn bind(config: &Config) -> Result<TcpListener> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    TcpListener::bind(addr).await.map_err(|source| ServiceError::Bind {
        port: config.server_port,
        source,
    })
}

/// Logs the startup banner with the bound port, then serves until
/// `shutdown` resolves.
pub async fn run<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let port = listener.local_addr()?.port();

    state.log.info(BANNER_RULE);
    state.log.info(&format!("* App listening on port {}", port));
    state.log.info(BANNER_RULE);

    let app = create_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
