use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use vibecurate_web::build_router;
use vibecurate_web::config::Config;
use vibecurate_web::state::{AppState, StartupError};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("vibecurate_web=info,tower_http=info")),
        )
        .init();

    if let Err(e) = run().await {
        error!("Failed to start server: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), StartupError> {
    let config = Config::from_env()?;
    let app_state = Arc::new(AppState::new(&config).await?);
    let app = build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Server running on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
