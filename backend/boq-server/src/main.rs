use boq_server::error::Result as ServerErrorResult;
use boq_server::ws::ConnectionConfig;
use boq_server::{AppState, build_router, logger};

use boq_store::DocumentHub;

use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerErrorResult<()> {
    let config = boq_config::Config::load()?;
    config.validate()?;

    // Logger comes first so everything below is captured
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting boq-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let document_path = config.document_path()?;
    info!("Opening document: {}", document_path.display());
    let hub = Arc::new(
        DocumentHub::open(&document_path, config.store.channel_capacity)
            .await?
            .with_activity_capacity(config.activity_log.capacity),
    );

    let app_state = AppState::new(
        hub,
        config.server.max_connections,
        ConnectionConfig::from(&config.websocket),
    );
    let shutdown = app_state.shutdown.clone();

    let app = build_router(app_state);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Must subscribe before the signal task can fire
    let mut server_guard = shutdown.subscribe_guard();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            server_guard.wait().await;
            info!("Graceful shutdown complete");
        })
        .await?;

    Ok(())
}
