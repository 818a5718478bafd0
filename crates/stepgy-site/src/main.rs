//! Stepgy Site
//!
//! Leptos SSR rendering of the Stepgy project page, served with axum.

mod app;
mod components;
mod config;
mod routes;
mod sections;

use clap::Parser;
use config::{Cli, SiteConfig};
use routes::AppState;
use std::sync::Arc;
use stepgy_core::{ContentTree, HttpContactTransport};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "stepgy_site=debug,stepgy_core=info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SiteConfig::try_from(Cli::parse())?;

    let content = match &config.content_path {
        Some(path) => {
            info!("Loading page content from {}", path.display());
            ContentTree::from_json_file(path)?
        }
        None => ContentTree::stepgy(),
    };

    let transport = HttpContactTransport::new(&config.api_url, config.timeout)?;
    info!(endpoint = %transport.endpoint(), "Contact endpoint configured");

    let state = Arc::new(AppState::new(content, transport));
    let app = routes::router(state, &config.assets_dir);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("Stepgy site listening on http://{}", config.addr);
    axum::serve(listener, app).await?;

    Ok(())
}
