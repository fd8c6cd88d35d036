use std::net::{IpAddr, SocketAddr};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rural_pharmacy_api::{config::AppConfig, routes::create_app, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,rural_pharmacy_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let state = AppState::from_config(&config).await?;
    let app = create_app(state);

    let addr = SocketAddr::from((config.host.parse::<IpAddr>()?, config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, storage = ?config.storage, "pharmacy api listening");
    axum::serve(listener, app).await?;
    Ok(())
}
