//! Async adapter integration tests
//!
//! Every failure mode must come back as a well-formed report with all three
//! fields, never as an error or a panic out of the adapter.

use rugwatch::{check_rug_pull, DEFAULT_REDIS_URL};

/// Nothing listens on port 1, so connects fail fast
const UNREACHABLE_URL: &str = "redis://127.0.0.1:1";

#[tokio::test]
async fn test_unreachable_redis_yields_failure_report() {
    let report = check_rug_pull("SomeMint111111111111111111111111111111111111", Some(UNREACHABLE_URL)).await;

    assert!(!report.rug_pulled);
    assert!(report.timestamp.is_none());
    assert!(report.failed());
    assert!(report
        .debug_info
        .error
        .as_deref()
        .is_some_and(|e| !e.is_empty()));
}

#[tokio::test]
async fn test_unparseable_url_yields_failure_report() {
    let report = check_rug_pull("SomeMint", Some("not-a-redis-url")).await;

    assert!(!report.rug_pulled);
    assert!(report.timestamp.is_none());
    assert!(report.failed());
}

#[tokio::test]
async fn test_empty_mint_address_does_not_panic() {
    // No validation happens at this layer; the empty address flows through
    // and the check fails like any other
    let report = check_rug_pull("", Some(UNREACHABLE_URL)).await;

    assert!(!report.rug_pulled);
    assert!(report.failed());
}

#[tokio::test]
async fn test_omitted_url_matches_explicit_default() {
    let mint = "MintWithNoRecordedTrades11111111111111111111";

    let implicit = check_rug_pull(mint, None).await;
    let explicit = check_rug_pull(mint, Some(DEFAULT_REDIS_URL)).await;

    // With or without a local redis running, both paths must agree: either
    // the same connect error or the same "No trade data found" failure
    assert_eq!(implicit, explicit);
    assert!(implicit.failed());
}

#[tokio::test]
async fn test_concurrent_checks_are_independent() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let mint = format!("Mint{}", i);
            tokio::spawn(async move { check_rug_pull(&mint, Some(UNREACHABLE_URL)).await })
        })
        .collect();

    for handle in handles {
        let report = handle.await.expect("check task must not panic");
        assert!(!report.rug_pulled);
        assert!(report.timestamp.is_none());
        assert!(report.failed());
    }
}

#[tokio::test]
async fn test_report_serializes_with_contract_keys() {
    let report = check_rug_pull("SomeMint", Some(UNREACHABLE_URL)).await;
    let value = serde_json::to_value(&report).expect("report is serializable");

    assert!(value.get("rug_pulled").is_some());
    assert!(value.get("timestamp").is_some());
    assert!(value.get("debug_info").is_some());
    assert!(value["debug_info"].get("error").is_some());
}
