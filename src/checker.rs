//! Rug pull check entry points
//!
//! [`check_rug_pull_sync`] is the blocking collaborator: redis fetch plus a
//! detector scan. [`check_rug_pull`] is the async adapter around it, which
//! offloads the whole check to the blocking thread pool and folds every
//! failure mode into the fixed report shape.

use crate::constants::DEFAULT_REDIS_URL;
use crate::detection::{DetectionConfig, RugPullDetector};
use crate::error::{AppError, AppResult};
use crate::models::CheckReport;
use crate::store::RedisTradeStore;

/// Synchronously check whether a mint's trade stream shows a rug pull
///
/// Blocking (redis I/O); call from async code via [`check_rug_pull`]. Never
/// fails: any error ends up in the report's `debug_info.error`.
pub fn check_rug_pull_sync(mint_address: &str, redis_url: &str) -> CheckReport {
    check_rug_pull_sync_with(mint_address, redis_url, &DetectionConfig::default())
}

/// Same as [`check_rug_pull_sync`], with caller-supplied thresholds
pub fn check_rug_pull_sync_with(
    mint_address: &str,
    redis_url: &str,
    config: &DetectionConfig,
) -> CheckReport {
    match run_check(mint_address, redis_url, config) {
        Ok(report) => report,
        Err(e) => {
            tracing::debug!(mint = mint_address, error = %e, "Check failed");
            CheckReport::failure(e.to_string())
        }
    }
}

/// The fallible core of a check
fn run_check(
    mint_address: &str,
    redis_url: &str,
    config: &DetectionConfig,
) -> AppResult<CheckReport> {
    let store = RedisTradeStore::connect(redis_url)?;
    let trades = store.fetch_trades(mint_address)?;

    if trades.is_empty() {
        return Err(AppError::NoTradeData);
    }

    let mut detector = RugPullDetector::new();
    for trade in trades {
        detector.add_trade(trade);
    }

    Ok(match detector.process_trades(config) {
        Some(detection) => CheckReport::detected(detection),
        None => CheckReport::clean(),
    })
}

/// Check a mint without blocking the calling task
///
/// `redis_url: None` resolves to [`DEFAULT_REDIS_URL`]. The blocking check
/// runs on the runtime's blocking thread pool; the single await suspends the
/// caller until it completes. Every failure, including a panic on the worker
/// thread, comes back as a failure report rather than an error, so the caller
/// always receives a report with `rug_pulled`, `timestamp` and `debug_info`
/// set. No timeout is imposed here.
pub async fn check_rug_pull(mint_address: &str, redis_url: Option<&str>) -> CheckReport {
    let mint = mint_address.to_string();
    let url = redis_url.unwrap_or(DEFAULT_REDIS_URL).to_string();

    match tokio::task::spawn_blocking(move || check_rug_pull_sync(&mint, &url)).await {
        Ok(report) => report,
        // The worker died before producing a report (panic or runtime shutdown)
        Err(e) => CheckReport::failure(e.to_string()),
    }
}
