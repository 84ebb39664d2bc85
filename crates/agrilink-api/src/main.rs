use agrilink_api::{create_app, ApiConfig, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ApiConfig::from_env()?;
    let optimizer = config.build_optimizer()?;

    let app = create_app(AppState::with_optimizer(optimizer));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("AgriLink API server running on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
