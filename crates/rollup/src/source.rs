use alloy::{
    eips::BlockNumberOrTag,
    primitives::{Address, B256},
    providers::Provider,
    rpc::types::{Filter, Log},
    sol_types::SolEvent,
    transports::{TransportError, TransportResult},
};
use core::future::Future;
use orbit_bindings::RollupCore::RollupInitialized;

/// The block range covered by a [`LogQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryRange {
    /// An inclusive range of block numbers.
    Blocks {
        /// First block of the range.
        from: u64,
        /// Last block of the range.
        to: u64,
    },
    /// The full history of the chain, from the earliest block to the latest
    /// block at query time.
    FullHistory,
}

impl QueryRange {
    /// True if the block is covered by this range. Every block is covered by
    /// [`QueryRange::FullHistory`].
    pub const fn contains(&self, block_number: u64) -> bool {
        match self {
            Self::Blocks { from, to } => *from <= block_number && block_number <= *to,
            Self::FullHistory => true,
        }
    }
}

/// A log query for a single event emitted by a single contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogQuery {
    address: Address,
    event_signature: B256,
    range: QueryRange,
}

impl LogQuery {
    /// Create a new query.
    pub const fn new(address: Address, event_signature: B256, range: QueryRange) -> Self {
        Self { address, event_signature, range }
    }

    /// Query for the `RollupInitialized` event of the given rollup contract.
    pub const fn rollup_initialized(rollup: Address, range: QueryRange) -> Self {
        Self::new(rollup, RollupInitialized::SIGNATURE_HASH, range)
    }

    /// Get the emitting contract address.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Get the event signature hash, i.e. the first topic.
    pub const fn event_signature(&self) -> B256 {
        self.event_signature
    }

    /// Get the block range.
    pub const fn range(&self) -> QueryRange {
        self.range
    }

    /// True if the log was emitted by the queried contract, carries the
    /// queried event signature, and falls within the queried range.
    ///
    /// Logs without a block number only match [`QueryRange::FullHistory`].
    pub fn matches(&self, log: &Log) -> bool {
        let in_range = match log.block_number {
            Some(number) => self.range.contains(number),
            None => matches!(self.range, QueryRange::FullHistory),
        };
        in_range
            && log.inner.address == self.address
            && log.inner.data.topics().first() == Some(&self.event_signature)
    }

    /// Convert the query to an RPC [`Filter`].
    pub fn filter(&self) -> Filter {
        let filter = Filter::new().address(self.address).event_signature(self.event_signature);
        match self.range {
            QueryRange::Blocks { from, to } => filter.from_block(from).to_block(to),
            QueryRange::FullHistory => {
                filter.from_block(BlockNumberOrTag::Earliest).to_block(BlockNumberOrTag::Latest)
            }
        }
    }
}

impl From<&LogQuery> for Filter {
    fn from(query: &LogQuery) -> Self {
        query.filter()
    }
}

/// Read access to a chain's block height and logs.
///
/// This is the only network capability the locator needs. It is implemented
/// for every alloy [`Provider`], and can be implemented by hand to test
/// against a fake chain.
pub trait RollupLogSource {
    /// The error type returned by the source.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Get the chain id the source is connected to.
    fn chain_id(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send;

    /// Get the latest block number known to the source.
    fn latest_block_number(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send;

    /// Fetch all logs matching the query.
    fn query_logs(
        &self,
        query: &LogQuery,
    ) -> impl Future<Output = Result<Vec<Log>, Self::Error>> + Send;
}

impl<P> RollupLogSource for P
where
    P: Provider,
{
    type Error = TransportError;

    async fn chain_id(&self) -> TransportResult<u64> {
        self.get_chain_id().await
    }

    async fn latest_block_number(&self) -> TransportResult<u64> {
        self.get_block_number().await
    }

    async fn query_logs(&self, query: &LogQuery) -> TransportResult<Vec<Log>> {
        self.get_logs(&query.filter()).await
    }
}
