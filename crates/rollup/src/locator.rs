use crate::{BlockChunks, LocateError, LogQuery, QueryRange, RollupLogSource, ScanConfig};
use alloy::{
    primitives::{Address, B256},
    rpc::types::Log,
    sol_types::SolEvent,
};
use core::future::Future;
use orbit_bindings::RollupCore::RollupInitialized;
use orbit_constants::rollup_creator_deploy_height;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};

/// The decoded `RollupInitialized` event of a rollup, together with the
/// transaction that emitted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollupInitialization {
    transaction_hash: B256,
    block_number: Option<u64>,
    event: RollupInitialized,
}

impl RollupInitialization {
    /// Get the hash of the transaction that created the rollup.
    pub const fn transaction_hash(&self) -> B256 {
        self.transaction_hash
    }

    /// Get the parent chain block in which the rollup was created.
    pub const fn block_number(&self) -> Option<u64> {
        self.block_number
    }

    /// Get the decoded event.
    pub const fn event(&self) -> &RollupInitialized {
        &self.event
    }

    /// Get the hash of the initial machine state.
    pub const fn machine_hash(&self) -> B256 {
        self.event.machine_hash()
    }

    /// Get the chain id of the rollup.
    pub const fn chain_id(&self) -> u64 {
        self.event.chain_id()
    }
}

/// Finds the transaction that created a rollup contract.
///
/// The locator resolves the chain id of its [`RollupLogSource`] and looks up
/// the `RollupCreator` deployment height for that chain. If one is known, it
/// snapshots the latest block number once and queries logs forward from the
/// deployment height in ranges of at most [`ScanConfig::chunk_size`] blocks,
/// stopping at the first range containing the event. Blocks produced after the
/// snapshot are never queried. Chains without a known deployment height are
/// searched with a single query over their full history.
///
/// Finding more than one `RollupInitialized` event is always an error.
#[derive(Debug, Clone)]
pub struct RollupTxLocator<S> {
    source: S,
    config: ScanConfig,
    cancel: Option<CancellationToken>,
}

impl<S> RollupTxLocator<S> {
    /// Create a new locator with the default [`ScanConfig`].
    pub fn new(source: S) -> Self {
        Self { source, config: ScanConfig::default(), cancel: None }
    }

    /// Set the scan configuration.
    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = config;
        self
    }

    /// Abort the search with [`LocateError::Cancelled`] when the token is
    /// cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Get a reference to the log source.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Get a reference to the scan configuration.
    pub const fn config(&self) -> &ScanConfig {
        &self.config
    }
}

impl<S> RollupTxLocator<S>
where
    S: RollupLogSource,
{
    /// Get the hash of the transaction that emitted the `RollupInitialized`
    /// event of the given rollup contract.
    #[instrument(skip_all, fields(%rollup))]
    pub async fn fetch_transaction_hash(
        &self,
        rollup: Address,
    ) -> Result<B256, LocateError<S::Error>> {
        let log = self.find_initialized_log(rollup).await?;
        log.transaction_hash.ok_or(LocateError::MissingTransactionHash { rollup })
    }

    /// Find and decode the `RollupInitialized` event of the given rollup
    /// contract.
    #[instrument(skip_all, fields(%rollup))]
    pub async fn fetch_initialization(
        &self,
        rollup: Address,
    ) -> Result<RollupInitialization, LocateError<S::Error>> {
        let log = self.find_initialized_log(rollup).await?;
        let transaction_hash =
            log.transaction_hash.ok_or(LocateError::MissingTransactionHash { rollup })?;
        let event = RollupInitialized::decode_log_data(&log.inner.data)
            .map_err(|source| LocateError::Decode { rollup, source })?;
        Ok(RollupInitialization { transaction_hash, block_number: log.block_number, event })
    }

    async fn find_initialized_log(&self, rollup: Address) -> Result<Log, LocateError<S::Error>> {
        let chain_id = self.guard(rollup, self.source.chain_id()).await?;

        let Some(floor) = rollup_creator_deploy_height(chain_id) else {
            debug!(chain_id, "no known deployment height, searching full history");
            return self.find_in_full_history(rollup).await;
        };

        let ceiling = self.guard(rollup, self.source.latest_block_number()).await?;
        let chunks = BlockChunks::new(floor, ceiling, self.config.chunk_size());
        debug!(chain_id, floor, ceiling, chunks = chunks.remaining(), "scanning for event");

        for range in chunks {
            let (from, to) = range.into_inner();
            debug!(from, to, "querying logs");

            let query = LogQuery::rollup_initialized(rollup, QueryRange::Blocks { from, to });
            let logs = self.guard(rollup, self.source.query_logs(&query)).await?;
            if let Some(log) = single_log(rollup, logs)? {
                return Ok(log);
            }
        }

        Err(LocateError::EventNotFound { rollup })
    }

    async fn find_in_full_history(&self, rollup: Address) -> Result<Log, LocateError<S::Error>> {
        let query = LogQuery::rollup_initialized(rollup, QueryRange::FullHistory);
        let logs = self.guard(rollup, self.source.query_logs(&query)).await?;
        single_log(rollup, logs)?.ok_or(LocateError::EventNotFound { rollup })
    }

    /// Await a source call, racing it against the cancellation token.
    async fn guard<T, F>(&self, rollup: Address, fut: F) -> Result<T, LocateError<S::Error>>
    where
        F: Future<Output = Result<T, S::Error>>,
    {
        let Some(token) = &self.cancel else {
            return fut.await.map_err(LocateError::Query);
        };

        tokio::select! {
            biased;
            _ = token.cancelled() => Err(LocateError::Cancelled { rollup }),
            res = fut => res.map_err(LocateError::Query),
        }
    }
}

/// Reduce a query result to at most one log. More than one is an error.
fn single_log<E>(rollup: Address, mut logs: Vec<Log>) -> Result<Option<Log>, LocateError<E>> {
    match logs.len() {
        0 | 1 => Ok(logs.pop()),
        count => {
            warn!(%rollup, count, "found multiple RollupInitialized events");
            Err(LocateError::AmbiguousEvent { rollup, count })
        }
    }
}

/// Get the hash of the transaction that created the given rollup contract,
/// using the default [`ScanConfig`].
///
/// See [`RollupTxLocator`] for details of the search.
pub async fn fetch_rollup_transaction_hash<S>(
    rollup: Address,
    source: S,
) -> Result<B256, LocateError<S::Error>>
where
    S: RollupLogSource,
{
    RollupTxLocator::new(source).fetch_transaction_hash(rollup).await
}
