//! OpenSASE Shipping - parcel selection and shipping quote service

use anyhow::Result;
use opensase_shipping::config::Config;
use opensase_shipping::http::{router, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;
    tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| "info".into())).with(tracing_subscriber::fmt::layer()).init();

    let quotes = config.quote_service()?;
    tracing::info!(boxes = quotes.catalog().len(), policy = ?config.fit_policy, "shipping catalog ready");
    let app = router(AppState { quotes });

    tracing::info!("🚀 OpenSASE Shipping listening on 0.0.0.0:{}", config.port);
    axum::serve(tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?, app).await?;
    Ok(())
}
