//! Integration tests for [`RollupTxLocator`].
use alloy::{
    primitives::{Address, U64},
    providers::ProviderBuilder,
    transports::mock::Asserter,
};
use orbit_constants::{nitro_testnode, testnets, ParentChain};
use orbit_rollup::{
    fetch_rollup_transaction_hash, LocateError, QueryRange, RollupTxLocator, ScanConfig,
};
use orbit_test_utils::{
    init_tracing,
    logs::{
        rollup_initialized_log, tx_hash, unrelated_log, TEST_MACHINE_HASH, TEST_ROLLUP_CHAIN_ID,
    },
    source::{MockLogSource, MockSourceError},
};
use tokio_util::sync::CancellationToken;

const ROLLUP: Address = Address::repeat_byte(0x42);

/// Base mainnet is not a supported parent chain and has no deployment height.
const UNKNOWN_CHAIN_ID: u64 = 8453;

fn ranges(source: &MockLogSource) -> Vec<(u64, u64)> {
    source
        .queries()
        .iter()
        .map(|query| match query.range() {
            QueryRange::Blocks { from, to } => (from, to),
            QueryRange::FullHistory => panic!("unexpected full history query"),
        })
        .collect()
}

#[tokio::test]
async fn finds_event_regardless_of_chunk_size() {
    init_tracing();
    let floor = testnets::SEPOLIA_DEPLOY_HEIGHT;
    let event_block = floor + 23_456;

    for chunk_size in [1_000, 3_333, 10_000, 50_001] {
        let source = MockLogSource::new(testnets::SEPOLIA_CHAIN_ID, floor + 50_000)
            .with_logs([rollup_initialized_log(ROLLUP, event_block, tx_hash(1))]);
        let config = ScanConfig::new(chunk_size).unwrap();

        let hash = RollupTxLocator::new(source.clone())
            .with_config(config)
            .fetch_transaction_hash(ROLLUP)
            .await
            .unwrap();
        assert_eq!(hash, tx_hash(1));

        // The scan stops at the chunk containing the event.
        let (from, to) = *ranges(&source).last().unwrap();
        assert!(from <= event_block && event_block <= to);
        assert_eq!(ranges(&source)[0].0, floor);
    }
}

#[tokio::test]
async fn scan_starts_at_deployment_height() {
    let chain = ParentChain::ArbitrumSepolia;
    let floor = chain.constants().rollup_creator_deploy_height();
    let source = MockLogSource::new(chain.chain_id(), floor + 15_000)
        .with_logs([rollup_initialized_log(ROLLUP, floor + 12_000, tx_hash(2))]);

    let hash = fetch_rollup_transaction_hash(ROLLUP, source.clone()).await.unwrap();
    assert_eq!(hash, tx_hash(2));
    assert_eq!(ranges(&source), vec![(floor, floor + 9_999), (floor + 10_000, floor + 15_000)]);
}

#[tokio::test]
async fn chunk_boundaries_are_clipped_to_ceiling() {
    let source = MockLogSource::new(nitro_testnode::L1_CHAIN_ID, 25_000);

    let err = fetch_rollup_transaction_hash(ROLLUP, source.clone()).await.unwrap_err();
    assert!(matches!(err, LocateError::EventNotFound { rollup } if rollup == ROLLUP));
    assert_eq!(ranges(&source), vec![(0, 9_999), (10_000, 19_999), (20_000, 25_000)]);
}

#[tokio::test]
async fn exhaustion_issues_expected_number_of_queries() {
    let floor = testnets::HOLESKY_DEPLOY_HEIGHT;
    let ceiling = floor + 123_456;
    let source = MockLogSource::new(testnets::HOLESKY_CHAIN_ID, ceiling)
        .with_logs([unrelated_log(ROLLUP, floor + 10, tx_hash(3))]);

    let err = fetch_rollup_transaction_hash(ROLLUP, source.clone()).await.unwrap_err();
    assert!(matches!(err, LocateError::EventNotFound { .. }));

    let expected = (ceiling - floor + 1).div_ceil(10_000) as usize;
    assert_eq!(source.queries().len(), expected);
    assert_eq!(ranges(&source).last().unwrap().1, ceiling);
}

#[tokio::test]
async fn ceiling_is_frozen_while_head_advances() {
    let source =
        MockLogSource::new(nitro_testnode::L2_CHAIN_ID, 25_000).with_head_advance(5_000);

    let err = fetch_rollup_transaction_hash(ROLLUP, source.clone()).await.unwrap_err();
    assert!(matches!(err, LocateError::EventNotFound { .. }));

    assert_eq!(source.block_number_calls(), 1);
    assert_eq!(source.head(), 40_000);
    assert_eq!(ranges(&source), vec![(0, 9_999), (10_000, 19_999), (20_000, 25_000)]);
}

#[tokio::test]
async fn event_after_ceiling_snapshot_is_not_found() {
    // The event lands in a block produced after the ceiling was captured.
    let source = MockLogSource::new(nitro_testnode::L1_CHAIN_ID, 100)
        .with_head_advance(1_000)
        .with_logs([rollup_initialized_log(ROLLUP, 500, tx_hash(4))]);

    let config = ScanConfig::new(50).unwrap();
    let err = RollupTxLocator::new(source.clone())
        .with_config(config)
        .fetch_transaction_hash(ROLLUP)
        .await
        .unwrap_err();
    assert!(matches!(err, LocateError::EventNotFound { .. }));
    assert_eq!(ranges(&source), vec![(0, 49), (50, 99), (100, 100)]);
}

#[tokio::test]
async fn ambiguous_chunk_fails() {
    init_tracing();
    let source = MockLogSource::new(nitro_testnode::L1_CHAIN_ID, 50_000).with_logs([
        rollup_initialized_log(ROLLUP, 12_000, tx_hash(5)),
        rollup_initialized_log(ROLLUP, 12_001, tx_hash(6)),
    ]);

    let err = fetch_rollup_transaction_hash(ROLLUP, source.clone()).await.unwrap_err();
    assert!(matches!(err, LocateError::AmbiguousEvent { rollup, count: 2 } if rollup == ROLLUP));
    // No further chunks are queried after the ambiguous one.
    assert_eq!(ranges(&source), vec![(0, 9_999), (10_000, 19_999)]);

    let msg = err.to_string();
    assert!(msg.contains(&ROLLUP.to_string()));
    assert!(msg.contains("found 2"));
}

#[tokio::test]
async fn first_matching_chunk_wins() {
    // Events in separate chunks are never both observed; the scan stops at
    // the first.
    let source = MockLogSource::new(nitro_testnode::L1_CHAIN_ID, 50_000).with_logs([
        rollup_initialized_log(ROLLUP, 5, tx_hash(7)),
        rollup_initialized_log(ROLLUP, 45_000, tx_hash(8)),
    ]);

    let hash = fetch_rollup_transaction_hash(ROLLUP, source.clone()).await.unwrap();
    assert_eq!(hash, tx_hash(7));
    assert_eq!(source.queries().len(), 1);
}

#[tokio::test]
async fn ignores_logs_from_other_contracts_and_events() {
    let other = Address::repeat_byte(0x99);
    let source = MockLogSource::new(nitro_testnode::L1_CHAIN_ID, 1_000).with_logs([
        rollup_initialized_log(other, 10, tx_hash(9)),
        unrelated_log(ROLLUP, 11, tx_hash(10)),
        rollup_initialized_log(ROLLUP, 12, tx_hash(11)),
    ]);

    let hash = fetch_rollup_transaction_hash(ROLLUP, source).await.unwrap();
    assert_eq!(hash, tx_hash(11));
}

#[tokio::test]
async fn floor_above_ceiling_scans_nothing() {
    let floor = testnets::SEPOLIA_DEPLOY_HEIGHT;
    let source = MockLogSource::new(testnets::SEPOLIA_CHAIN_ID, floor - 1);

    let err = fetch_rollup_transaction_hash(ROLLUP, source.clone()).await.unwrap_err();
    assert!(matches!(err, LocateError::EventNotFound { .. }));
    assert!(source.queries().is_empty());
}

#[tokio::test]
async fn zero_floor_still_scans_in_chunks() {
    let source = MockLogSource::new(nitro_testnode::L3_CHAIN_ID, 0)
        .with_logs([rollup_initialized_log(ROLLUP, 0, tx_hash(12))]);

    let hash = fetch_rollup_transaction_hash(ROLLUP, source.clone()).await.unwrap();
    assert_eq!(hash, tx_hash(12));
    assert_eq!(ranges(&source), vec![(0, 0)]);
    assert_eq!(source.block_number_calls(), 1);
}

#[tokio::test]
async fn unknown_chain_searches_full_history() {
    let source = MockLogSource::new(UNKNOWN_CHAIN_ID, 30_000_000)
        .with_logs([rollup_initialized_log(ROLLUP, 20_000_000, tx_hash(13))]);

    let hash = fetch_rollup_transaction_hash(ROLLUP, source.clone()).await.unwrap();
    assert_eq!(hash, tx_hash(13));

    let queries = source.queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].range(), QueryRange::FullHistory);
    assert_eq!(queries[0].address(), ROLLUP);
    assert_eq!(source.block_number_calls(), 0);
}

#[tokio::test]
async fn unknown_chain_without_event_fails() {
    let source = MockLogSource::new(UNKNOWN_CHAIN_ID, 1_000);

    let err = fetch_rollup_transaction_hash(ROLLUP, source.clone()).await.unwrap_err();
    assert!(matches!(err, LocateError::EventNotFound { .. }));
    assert_eq!(source.queries().len(), 1);
}

#[tokio::test]
async fn unknown_chain_with_duplicate_events_fails() {
    let source = MockLogSource::new(UNKNOWN_CHAIN_ID, 1_000).with_logs([
        rollup_initialized_log(ROLLUP, 1, tx_hash(14)),
        rollup_initialized_log(ROLLUP, 900, tx_hash(15)),
    ]);

    let err = fetch_rollup_transaction_hash(ROLLUP, source.clone()).await.unwrap_err();
    assert!(matches!(err, LocateError::AmbiguousEvent { count: 2, .. }));
    assert_eq!(source.queries().len(), 1);
}

#[tokio::test]
async fn query_failure_aborts_scan() {
    let source = MockLogSource::new(nitro_testnode::L1_CHAIN_ID, 100_000)
        .with_failure_on_query(1)
        .with_logs([rollup_initialized_log(ROLLUP, 90_000, tx_hash(16))]);

    let err = fetch_rollup_transaction_hash(ROLLUP, source.clone()).await.unwrap_err();
    assert!(err.is_query());
    assert_eq!(err.as_query(), Some(&MockSourceError::Transport(1)));
    assert_eq!(err.rollup(), None);
    assert_eq!(source.queries().len(), 2);
}

#[tokio::test]
async fn cancelled_before_start() {
    let source = MockLogSource::new(nitro_testnode::L1_CHAIN_ID, 100_000);
    let token = CancellationToken::new();
    token.cancel();

    let err = RollupTxLocator::new(source.clone())
        .with_cancellation(token)
        .fetch_transaction_hash(ROLLUP)
        .await
        .unwrap_err();
    assert!(matches!(err, LocateError::Cancelled { rollup } if rollup == ROLLUP));
    assert!(source.queries().is_empty());
    assert_eq!(source.block_number_calls(), 0);
}

#[tokio::test]
async fn uncancelled_token_does_not_interfere() {
    let source = MockLogSource::new(nitro_testnode::L1_CHAIN_ID, 100)
        .with_logs([rollup_initialized_log(ROLLUP, 50, tx_hash(17))]);

    let hash = RollupTxLocator::new(source)
        .with_cancellation(CancellationToken::new())
        .fetch_transaction_hash(ROLLUP)
        .await
        .unwrap();
    assert_eq!(hash, tx_hash(17));
}

#[tokio::test]
async fn missing_transaction_hash_fails() {
    let mut log = rollup_initialized_log(ROLLUP, 50, tx_hash(18));
    log.transaction_hash = None;
    let source = MockLogSource::new(nitro_testnode::L1_CHAIN_ID, 100).with_logs([log]);

    let err = fetch_rollup_transaction_hash(ROLLUP, source).await.unwrap_err();
    assert!(matches!(err, LocateError::MissingTransactionHash { rollup } if rollup == ROLLUP));
}

#[tokio::test]
async fn fetch_initialization_decodes_event() {
    let source = MockLogSource::new(nitro_testnode::L1_CHAIN_ID, 100)
        .with_logs([rollup_initialized_log(ROLLUP, 42, tx_hash(19))]);

    let init = RollupTxLocator::new(source).fetch_initialization(ROLLUP).await.unwrap();
    assert_eq!(init.transaction_hash(), tx_hash(19));
    assert_eq!(init.block_number(), Some(42));
    assert_eq!(init.machine_hash(), TEST_MACHINE_HASH);
    assert_eq!(init.chain_id(), TEST_ROLLUP_CHAIN_ID);
}

#[tokio::test]
async fn provider_backed_search() {
    let asserter = Asserter::new();
    let provider = ProviderBuilder::new().connect_mocked_client(asserter.clone());

    asserter.push_success(&U64::from(nitro_testnode::L1_CHAIN_ID));
    asserter.push_success(&U64::from(5));
    asserter.push_success(&vec![rollup_initialized_log(ROLLUP, 3, tx_hash(20))]);

    let hash = fetch_rollup_transaction_hash(ROLLUP, provider).await.unwrap();
    assert_eq!(hash, tx_hash(20));
}

#[tokio::test]
async fn provider_error_is_propagated() {
    let asserter = Asserter::new();
    let provider = ProviderBuilder::new().connect_mocked_client(asserter.clone());

    asserter.push_success(&U64::from(nitro_testnode::L1_CHAIN_ID));
    asserter.push_success(&U64::from(5));
    asserter.push_failure_msg("query returned more than 10000 results");

    let err = fetch_rollup_transaction_hash(ROLLUP, provider).await.unwrap_err();
    assert!(err.is_query());
    assert!(err.to_string().contains("more than 10000 results"));
}
