//! Sliding-window rug pull detector
//!
//! Walks a mint's trade stream looking for two exit signatures: a hard
//! stop-loss drop from the running peak, and a scored pattern combining the
//! drop, its timing relative to the peak, a volume spike, and a run of
//! consecutive price drops.

use chrono::{DateTime, Duration, Utc};

use super::{Detection, DetectionConfig, Trigger};
use crate::models::Trade;

/// Pattern scoring starts this many seconds after the peak
const MIN_SECS_FROM_PEAK: i64 = 5;

/// Per-window aggregates
#[derive(Debug, Default)]
struct WindowStats {
    /// Mean absolute change in trade size (SOL)
    volume_trend: f64,
    /// Mean change in market cap per trade (SOL)
    price_velocity: f64,
    /// Negative price changes among the last three
    consecutive_drops: usize,
    /// Combined signature strength
    pattern_strength: f64,
}

/// Running peak during the scan
#[derive(Debug, Clone, Copy)]
struct Peak {
    market_cap_sol: f64,
    at: DateTime<Utc>,
}

/// Rug pull detector over a single mint's trade stream
///
/// Trades must be added in timestamp order; the window lookup binary-searches
/// on timestamps. [`crate::store::RedisTradeStore`] returns them sorted.
pub struct RugPullDetector {
    trades: Vec<Trade>,
}

impl RugPullDetector {
    pub fn new() -> Self {
        Self { trades: Vec::new() }
    }

    /// Feed one trade
    pub fn add_trade(&mut self, trade: Trade) {
        self.trades.push(trade);
    }

    /// Scan the stream for a rug pull signature
    ///
    /// Returns the first triggering trade, or `None` for a clean stream. The
    /// peak is tracked as of each trade, so a trade is only ever compared
    /// against the peak reached before it.
    pub fn process_trades(&self, config: &DetectionConfig) -> Option<Detection> {
        let first = self.trades.first()?;
        let start = first.timestamp;
        let mut peak = Peak {
            market_cap_sol: first.market_cap_sol,
            at: first.timestamp,
        };

        for (idx, trade) in self.trades.iter().enumerate() {
            if trade.market_cap_sol > peak.market_cap_sol {
                peak = Peak {
                    market_cap_sol: trade.market_cap_sol,
                    at: trade.timestamp,
                };
            }

            let time_since_peak = (trade.timestamp - peak.at).num_seconds();
            let current_drop = if peak.market_cap_sol > 0.0 {
                (peak.market_cap_sol - trade.market_cap_sol) / peak.market_cap_sol
            } else {
                0.0
            };

            // Fast path: hard stop loss
            if current_drop >= config.stop_loss_threshold {
                return Some(Detection {
                    timestamp: trade.timestamp,
                    trigger: Trigger::StopLoss,
                    confidence: 1.0,
                    drop_percentage: current_drop * 100.0,
                    peak_market_cap: peak.market_cap_sol,
                    current_market_cap: trade.market_cap_sol,
                });
            }

            let window = self.window_ending_at(idx, start, config);
            if window.len() > 1 && time_since_peak >= MIN_SECS_FROM_PEAK {
                let stats = Self::window_stats(window);
                let score = Self::confidence(current_drop, time_since_peak, &stats, config);

                if score >= config.min_confidence_score {
                    return Some(Detection {
                        timestamp: trade.timestamp,
                        trigger: Trigger::Pattern,
                        confidence: score,
                        drop_percentage: current_drop * 100.0,
                        peak_market_cap: peak.market_cap_sol,
                        current_market_cap: trade.market_cap_sol,
                    });
                }
            }
        }

        None
    }

    /// Trades within the analysis window ending at trade `idx`
    ///
    /// The window grows with elapsed time since the first trade, clamped to
    /// the configured bounds.
    fn window_ending_at(&self, idx: usize, start: DateTime<Utc>, config: &DetectionConfig) -> &[Trade] {
        let at = self.trades[idx].timestamp;
        let elapsed = (at - start).num_seconds();
        let window_secs = elapsed.clamp(config.min_window_secs, config.max_window_secs);
        let window_start = at - Duration::seconds(window_secs);

        let lo = self.trades.partition_point(|t| t.timestamp < window_start);
        let hi = self.trades.partition_point(|t| t.timestamp <= at);
        &self.trades[lo..hi]
    }

    fn window_stats(window: &[Trade]) -> WindowStats {
        let mut stats = WindowStats::default();
        if window.len() <= 1 {
            return stats;
        }

        let price_changes: Vec<f64> = window
            .windows(2)
            .map(|pair| pair[1].market_cap_sol - pair[0].market_cap_sol)
            .collect();
        let volume_changes: Vec<f64> = window
            .windows(2)
            .map(|pair| (pair[1].sol_amount - pair[0].sol_amount).abs())
            .collect();

        stats.consecutive_drops = price_changes
            .iter()
            .rev()
            .take(3)
            .filter(|change| **change < 0.0)
            .count();
        stats.volume_trend = volume_changes.iter().sum::<f64>() / volume_changes.len() as f64;
        stats.price_velocity = price_changes.iter().sum::<f64>() / price_changes.len() as f64;

        let strength_base = (stats.consecutive_drops as f64 / window.len() as f64)
            * (1.0 + stats.volume_trend.min(2.0))
            * (1.0 + stats.price_velocity.abs());
        stats.pattern_strength = strength_base.cbrt();

        stats
    }

    /// Weighted score: 0.4 price (decayed by time from peak), 0.3 pattern,
    /// 0.3 volume
    fn confidence(
        drop: f64,
        secs_from_peak: i64,
        stats: &WindowStats,
        config: &DetectionConfig,
    ) -> f64 {
        let price_conf = if drop >= config.peak_drop_threshold { 1.0 } else { 0.0 };
        let time_conf =
            (1.0 - secs_from_peak as f64 / config.time_from_peak_secs as f64).max(0.0);
        let pattern_conf = if stats.pattern_strength >= config.pattern_strength_threshold {
            1.0
        } else {
            0.0
        };
        let volume_conf = if stats.volume_trend >= config.volume_spike_threshold {
            1.0
        } else {
            0.0
        };

        0.4 * price_conf * time_conf + 0.3 * pattern_conf + 0.3 * volume_conf
    }
}

impl Default for RugPullDetector {
    fn default() -> Self {
        Self::new()
    }
}
