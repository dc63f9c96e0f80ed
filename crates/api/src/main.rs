use std::net::SocketAddr;

use anyhow::{Context, Result};
use seniorsafe_api::{build_app, ApiConfig};
use seniorsafe_observability::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("seniorsafe_api");

    let config = ApiConfig::from_env();
    let bind = config.bind.clone();
    let app = build_app(config)?;

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    tracing::info!(bind = %bind, "seniorsafe api started");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}
