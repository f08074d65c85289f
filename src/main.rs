use design_vault::{
    AppState, build_router,
    config::Config,
    error::Result,
    infrastructure::db::Database,
    utils::server::{init_tracing, shutdown_signal},
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let config = Config::from_env()?;
    config.validate()?;
    tracing::info!("Configuration loaded");

    let db = Database::init_db(&config.database).await?;
    tracing::info!("Database initialized");

    db.run_migrations().await?;
    tracing::info!("Migrations completed");

    let server_addr = format!("{}:{}", config.server.host, config.server.port);

    let state = AppState::new(config, db);
    let app = build_router(state);

    let listener = TcpListener::bind(server_addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Server shutdown complete");

    Ok(())
}
