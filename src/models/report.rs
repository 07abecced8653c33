//! Check report - the caller-facing outcome of a rug pull check

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::detection::Detection;

/// Outcome of a rug pull check
///
/// Always carries all three fields regardless of outcome. A failed check is
/// reported here rather than raised: `rug_pulled` stays false and
/// `debug_info.error` holds the cause, so a failure and a confident clean
/// verdict share the same `rug_pulled` value. Use [`CheckReport::failed`] to
/// tell them apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckReport {
    /// Detection verdict
    pub rug_pulled: bool,
    /// Time of the detected pull; absent on a clean pass or a failure
    pub timestamp: Option<DateTime<Utc>>,
    /// Diagnostic details
    pub debug_info: DebugInfo,
}

/// Diagnostic details attached to a report
///
/// Absent fields are omitted from the serialized form: a clean pass
/// serializes as `{}`, a failure as `{"error": ...}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DebugInfo {
    /// What tripped the detector ("stop_loss" or "pattern")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_type: Option<String>,
    /// Score of the pattern match (1.0 for a stop-loss trip)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    /// Drop from peak, in percent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drop_percentage: Option<f64>,
    /// Peak market cap over the analyzed stream, in SOL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub peak_market_cap: Option<f64>,
    /// Market cap at the triggering trade, in SOL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_market_cap: Option<f64>,
    /// Why the check could not complete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CheckReport {
    /// Report a detected rug pull
    pub fn detected(detection: Detection) -> Self {
        Self {
            rug_pulled: true,
            timestamp: Some(detection.timestamp),
            debug_info: DebugInfo {
                trigger_type: Some(detection.trigger.to_string()),
                confidence: Some(detection.confidence),
                drop_percentage: Some(detection.drop_percentage),
                peak_market_cap: Some(detection.peak_market_cap),
                current_market_cap: Some(detection.current_market_cap),
                error: None,
            },
        }
    }

    /// Report a clean pass (no rug pull signature found)
    pub fn clean() -> Self {
        Self {
            rug_pulled: false,
            timestamp: None,
            debug_info: DebugInfo::default(),
        }
    }

    /// Report a failed check
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            rug_pulled: false,
            timestamp: None,
            debug_info: DebugInfo {
                error: Some(error.into()),
                ..DebugInfo::default()
            },
        }
    }

    /// Whether the check itself failed, as opposed to a clean verdict
    pub fn failed(&self) -> bool {
        self.debug_info.error.is_some()
    }
}
