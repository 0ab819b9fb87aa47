mod config;
mod routes;

use tracing_subscriber::EnvFilter;

use crate::config::SiteConfig;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "portfolio-site failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = SiteConfig::from_env()?;
    let app = routes::app()?;
    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;

    tracing::info!(addr = %config.socket_addr(), "portfolio-site listening");
    axum::serve(listener, app).await?;
    Ok(())
}
