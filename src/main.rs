//! rugwatch - rug pull checks for Solana mints
//!
//! CLI entry point: one concurrent check per mint address argument. Each
//! check runs on the blocking thread pool via the async adapter, so a slow
//! redis never stalls the others.

use futures_util::future::join_all;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rugwatch::{check_rug_pull, AppConfig, CheckReport};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Starting rugwatch v{}", env!("CARGO_PKG_VERSION"));

    let mints: Vec<String> = std::env::args().skip(1).collect();
    if mints.is_empty() {
        anyhow::bail!("Usage: rugwatch <mint_address>...");
    }

    let config = load_config()?;
    tracing::info!(redis_url = %config.redis.url, mints = mints.len(), "Configuration loaded");

    let checks = mints.into_iter().map(|mint| {
        let url = config.redis.url.clone();
        async move {
            let report = check_rug_pull(&mint, Some(&url)).await;
            (mint, report)
        }
    });

    let mut rugged = 0usize;
    for (mint, report) in join_all(checks).await {
        log_report(&mint, &report);
        if report.rug_pulled {
            rugged += 1;
        }
    }

    tracing::info!(rugged, "All checks complete");

    Ok(())
}

/// Log one mint's verdict
fn log_report(mint: &str, report: &CheckReport) {
    if report.rug_pulled {
        let info = &report.debug_info;
        tracing::warn!(
            mint = mint,
            trigger = info.trigger_type.as_deref().unwrap_or("unknown"),
            confidence = info.confidence.unwrap_or(0.0),
            drop_pct = info.drop_percentage.unwrap_or(0.0),
            peak_mc_sol = info.peak_market_cap.unwrap_or(0.0),
            current_mc_sol = info.current_market_cap.unwrap_or(0.0),
            timestamp = ?report.timestamp,
            "Rug pull detected"
        );
    } else if let Some(error) = &report.debug_info.error {
        tracing::error!(mint = mint, error = %error, "Check failed");
    } else {
        tracing::info!(mint = mint, "No rug pull pattern detected");
    }
}

/// Initialize tracing/logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rugwatch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Load and validate configuration
fn load_config() -> anyhow::Result<AppConfig> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::load().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    config.validate()?;

    Ok(config)
}
