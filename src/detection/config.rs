//! Detection thresholds

/// Thresholds driving the rug pull detector
///
/// The defaults are the calibrated production values; tests and the CLI may
/// supply their own.
#[derive(Debug, Clone)]
pub struct DetectionConfig {
    /// Drop from peak treated as a confirmed price break (fraction)
    pub peak_drop_threshold: f64,
    /// Seconds after the peak during which a drop still scores
    pub time_from_peak_secs: i64,
    /// Mean absolute trade-size change treated as a volume spike (SOL)
    pub volume_spike_threshold: f64,
    /// Confidence score required for a pattern detection
    pub min_confidence_score: f64,
    /// Pattern strength required to contribute to the score
    pub pattern_strength_threshold: f64,
    /// Drop from peak that flags immediately, regardless of pattern (fraction)
    pub stop_loss_threshold: f64,
    /// Smallest analysis window, in seconds
    pub min_window_secs: i64,
    /// Largest analysis window, in seconds
    pub max_window_secs: i64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            peak_drop_threshold: 0.100, // 10% drop
            time_from_peak_secs: 105,
            volume_spike_threshold: 1.244,
            min_confidence_score: 0.672,
            pattern_strength_threshold: 0.457,
            stop_loss_threshold: 0.40, // 40% drop
            min_window_secs: 10,
            max_window_secs: 60,
        }
    }
}
