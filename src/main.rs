//! Entry point for sysdash. Wires logging, shared state, and the HTTP routes.

use std::net::SocketAddr;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sysdash::routes::router;
use sysdash::state::AppState;

/// The dashboard always binds every interface on this port.
const PORT: u16 = 5001;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let state = AppState::new();
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], PORT));
    info!("dashboard listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
