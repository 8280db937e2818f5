mod config;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        tracing::error!(error = %e, "keylo host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), config::ConfigError> {
    // A missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info")))
        .init();

    let config = config::ServerConfig::from_env()?;
    let app = routes::app().map_err(config::ConfigError::Leptos)?;

    let listener = tokio::net::TcpListener::bind(config.addr())
        .await
        .map_err(|e| config::ConfigError::Bind { addr: config.addr(), source: e })?;

    tracing::info!(addr = %config.addr(), "keylo listening");
    axum::serve(listener, app)
        .await
        .map_err(|e| config::ConfigError::Serve(e.to_string()))
}
