//! Detector verdict types

use chrono::{DateTime, Utc};

/// What tripped the detector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Hard drop from peak past the stop-loss threshold
    StopLoss,
    /// Confidence score over drop, timing, volume and pattern strength
    Pattern,
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trigger::StopLoss => write!(f, "stop_loss"),
            Trigger::Pattern => write!(f, "pattern"),
        }
    }
}

/// A positive detector verdict
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Timestamp of the trade that tripped the detector
    pub timestamp: DateTime<Utc>,
    /// What tripped it
    pub trigger: Trigger,
    /// Score of the pattern match (1.0 for a stop-loss trip)
    pub confidence: f64,
    /// Drop from peak, in percent
    pub drop_percentage: f64,
    /// Peak market cap seen up to the triggering trade, in SOL
    pub peak_market_cap: f64,
    /// Market cap at the triggering trade, in SOL
    pub current_market_cap: f64,
}
