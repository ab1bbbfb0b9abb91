mod render;
mod site;

use anyhow::{Context, Result};
use rhtmx_breadcrumb::BreadcrumbConfig;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = BreadcrumbConfig::load_default().unwrap_or_else(|e| {
        warn!("Failed to load config: {:#}, using defaults", e);
        BreadcrumbConfig::default()
    });

    let breadcrumbs = Arc::new(site::breadcrumbs(config));
    info!(
        routes = breadcrumbs.routes().len(),
        labels = breadcrumbs.metadata().len(),
        method = %breadcrumbs.config().catalog.method,
        "breadcrumb catalog ready"
    );
    for entry in breadcrumbs.routes() {
        info!("  {} -> {}", entry.canonical_url, entry.route_id);
    }

    let app = site::app(breadcrumbs);

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
