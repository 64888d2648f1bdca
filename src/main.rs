//! Barbershop Server
//!
//! Run with: cargo run --bin barbershop
//!
//! # Configuration
//!
//! Read from `~/.config/barbershop/config.toml`, `/etc/barbershop/config.toml`
//! or `./config.toml`, whichever exists first. Environment variables:
//! - `BARBERSHOP_HOST`: Host to bind to (default: 0.0.0.0)
//! - `BARBERSHOP_PORT`: Port to listen on (default: 8080)
//! - `BARBERSHOP_ANALYTICS_URL`: Analytics endpoint
//! - `BARBERSHOP_LOCALE`: Chart date labels, `ru-RU` or `en-US`
//! - `BARBERSHOP_LOG_LEVEL` / `BARBERSHOP_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Overrides the log filter entirely

use barbershop::analytics::HttpAnalyticsSource;
use barbershop::api::{serve, AppState};
use barbershop::config::Config;
use barbershop::logging;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, report) = Config::load_default();

    // Initialize tracing
    logging::init(&config.logging);
    report.log();

    tracing::info!("Starting Barbershop server v{}", env!("CARGO_PKG_VERSION"));

    let timeout = config.analytics.request_timeout_ms.map(Duration::from_millis);
    let source = HttpAnalyticsSource::new(&config.analytics.endpoint_url, timeout)?;
    tracing::info!(endpoint = %source.endpoint_url(), "Analytics endpoint configured");

    tracing::info!(
        "Catalog: {} services, {} stylists, {} time slots",
        config.catalog.services.len(),
        config.catalog.stylists.len(),
        config.catalog.time_slots.len()
    );

    let state = AppState::new(
        config.catalog,
        Arc::new(source),
        config.analytics.locale,
        config.server,
    );

    serve(state).await?;

    tracing::info!("Barbershop server stopped");
    Ok(())
}
