use tracker_server::views::TemplateRenderer;
use tracker_server::{AppState, Cli, ServerResult, build_router, logger};

use tracker_core::ProjectRepository;

use std::sync::Arc;

use clap::Parser;
use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerResult<()> {
    let cli = Cli::parse();

    // Load and validate configuration
    let mut config = tracker_config::Config::load()?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(log_dir)?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting tracker-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary(cli.dev);

    // Templates are compiled up front; a broken asset directory is fatal
    let renderer = TemplateRenderer::load(&config.asset_dir(cli.dev))?;

    let repository = ProjectRepository::seeded();
    info!(
        "Repository seeded with {} project(s)",
        repository.get_all_projects().len()
    );

    let app = build_router(AppState::new(repository, Arc::new(renderer)));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    let actual_addr = listener.local_addr()?;
    info!("Listening on http://{}", actual_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => {
                    error!("Failed to listen for SIGINT: {}", e);
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    info!("Server stopped");
    Ok(())
}
