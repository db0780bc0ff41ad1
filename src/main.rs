use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use log::info;
use saferoute::config::Config;
use saferoute::server::{AppState, router};
use saferoute::{CHENNAI, SafetyDataset};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();

    // 1. Safety data
    let dataset = match &config.dataset {
        Some(path) => SafetyDataset::from_path(path)
            .with_context(|| format!("failed to load dataset {}", path.display()))?,
        None => {
            info!(
                "Using built-in Chennai dataset: {} roads, {} risk zones",
                CHENNAI.roads.len(),
                CHENNAI.risk_zones.len()
            );
            CHENNAI.clone()
        }
    };
    // Build the road index before the first request.
    info!("Indexed {} roads", dataset.road_index().len());

    // 2. Router
    let app = router(AppState::new(&config, Arc::new(dataset)));

    info!("API server running on http://{}", config.bind);
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    axum::serve(listener, app).await?;

    Ok(())
}
