//! Rug pull detector unit tests
//!
//! Drives the detector with synthetic trade streams: hard stop-loss drops,
//! scored pattern detections near the peak, and stable streams that must
//! stay clean.

use chrono::{DateTime, Duration, TimeZone, Utc};
use rugwatch::{DetectionConfig, RugPullDetector, Trade, Trigger};

fn base_time() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).single().unwrap()
}

fn trade(offset_secs: i64, market_cap_sol: f64, sol_amount: f64) -> Trade {
    Trade {
        timestamp: base_time() + Duration::seconds(offset_secs),
        market_cap_sol,
        sol_amount,
    }
}

fn detector_with(trades: Vec<Trade>) -> RugPullDetector {
    let mut detector = RugPullDetector::new();
    for t in trades {
        detector.add_trade(t);
    }
    detector
}

#[test]
fn test_empty_stream_is_clean() {
    let detector = RugPullDetector::new();
    assert!(detector.process_trades(&DetectionConfig::default()).is_none());
}

#[test]
fn test_single_trade_is_clean() {
    let detector = detector_with(vec![trade(0, 100.0, 1.0)]);
    assert!(detector.process_trades(&DetectionConfig::default()).is_none());
}

#[test]
fn test_stable_stream_is_clean() {
    // Flat market cap, constant trade size: nothing to flag
    let trades = (0..20)
        .map(|i| trade(i * 3, 100.0 + (i % 2) as f64, 0.1))
        .collect();
    let detector = detector_with(trades);

    assert!(detector.process_trades(&DetectionConfig::default()).is_none());
}

#[test]
fn test_stop_loss_drop_is_flagged() {
    let detector = detector_with(vec![
        trade(0, 100.0, 1.0),
        trade(2, 105.0, 1.2),
        // 42.9% below the 105 peak, past the 40% stop loss
        trade(8, 60.0, 3.0),
    ]);

    let detection = detector
        .process_trades(&DetectionConfig::default())
        .expect("stop loss should trip");

    assert_eq!(detection.trigger, Trigger::StopLoss);
    assert_eq!(detection.confidence, 1.0);
    assert!(detection.drop_percentage > 40.0);
    assert_eq!(detection.peak_market_cap, 105.0);
    assert_eq!(detection.current_market_cap, 60.0);
    assert_eq!(detection.timestamp, base_time() + Duration::seconds(8));
}

#[test]
fn test_pattern_detection_near_peak() {
    // Peak at 1s, then a steady slide past the 10% drop threshold with
    // pumping trade sizes. The first trade at least 5s past the peak that
    // clears the confidence bar is the one at 7s.
    let detector = detector_with(vec![
        trade(0, 100.0, 1.0),
        trade(1, 110.0, 3.5),
        trade(3, 104.0, 1.0),
        trade(5, 100.0, 3.8),
        trade(7, 96.0, 1.0),
        trade(9, 92.0, 3.6),
    ]);

    let detection = detector
        .process_trades(&DetectionConfig::default())
        .expect("pattern should trip");

    assert_eq!(detection.trigger, Trigger::Pattern);
    assert!(detection.confidence >= 0.672);
    assert_eq!(detection.timestamp, base_time() + Duration::seconds(7));
    assert_eq!(detection.peak_market_cap, 110.0);
    assert_eq!(detection.current_market_cap, 96.0);
    assert!(detection.drop_percentage > 10.0);
}

#[test]
fn test_drop_without_volume_or_pattern_is_clean() {
    // A slow 15% slide with constant trade sizes: the price term alone
    // cannot clear the confidence bar
    let trades = (0..10)
        .map(|i| trade(i * 6, 100.0 - 1.5 * i as f64, 0.5))
        .collect();
    let detector = detector_with(trades);

    // Pattern strength fires on the run of drops, but without the volume
    // term the score tops out at 0.54
    assert!(detector.process_trades(&DetectionConfig::default()).is_none());
}

#[test]
fn test_peak_is_tracked_as_of_each_trade() {
    // The low opener precedes the pump; it must not be measured against the
    // later peak
    let detector = detector_with(vec![
        trade(0, 40.0, 1.0),
        trade(2, 70.0, 1.0),
        trade(4, 110.0, 1.0),
        trade(6, 108.0, 1.0),
    ]);

    assert!(detector.process_trades(&DetectionConfig::default()).is_none());
}

#[test]
fn test_custom_stop_loss_threshold() {
    let config = DetectionConfig {
        stop_loss_threshold: 0.05,
        ..DetectionConfig::default()
    };

    let detector = detector_with(vec![trade(0, 100.0, 1.0), trade(3, 92.0, 1.0)]);

    let detection = detector
        .process_trades(&config)
        .expect("tightened stop loss should trip");
    assert_eq!(detection.trigger, Trigger::StopLoss);
}
