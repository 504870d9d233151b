use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

use crate::api::{create_router, AppState};
use crate::error::{PropError, Result};

/// Start the API server and run until `shutdown` resolves
pub async fn start_api_server<F>(state: AppState, host: &str, port: u16, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| PropError::Internal(format!("invalid bind address {}:{}: {}", host, port, e)))?;

    let data_source = state.provider.source();
    let app = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    info!(%addr, %data_source, "API server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("API server stopped");
    Ok(())
}
