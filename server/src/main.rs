#![recursion_limit = "256"]

mod config;
mod routes;

use config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is normal outside local development.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e.into());
        }
    }
    tracing_subscriber::fmt::init();

    let config = ServerConfig::load().inspect_err(|e| tracing::error!(error = %e, "configuration failed"))?;
    let addr = config.addr;
    let app = routes::app(config.leptos);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "crm listening");
    axum::serve(listener, app).await?;
    Ok(())
}
