use axum::{serve, Router};
use tokio::net::TcpListener;

use trackn_api::api;
use trackn_api::app;
use trackn_api::config::state::AppState;
use trackn_api::core::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    let state: AppState = AppState::from_env()?;

    let app: Router = app::compose(&api::modules(), state.clone())?;

    let listener: TcpListener = server::setup_listener(&state.environment).await?;
    tracing::info!("Server listening on: {}", listener.local_addr()?);

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    Ok(())
}
