//! Backend entry-point: loads settings, connects the store adapters and
//! serves the console API.

mod server;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use cafe_backend::config::AppSettings;
use cafe_backend::inbound::http::health::HealthState;
use cafe_backend::outbound::store::StoreClient;
use ortho_config::OrthoConfig;

use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr();
    info!(
        store_url = %settings.store_url,
        key_fingerprint = %settings.store_key_fingerprint(),
        "store configured"
    );

    let store_config = settings
        .into_store_config()
        .map_err(std::io::Error::other)?;
    let store = StoreClient::new(store_config).map_err(std::io::Error::other)?;

    let config = ServerConfig::new(bind_addr, store);
    #[cfg(feature = "metrics")]
    let config = config.with_metrics(server::build_metrics());

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config).await?;
    server.await
}
