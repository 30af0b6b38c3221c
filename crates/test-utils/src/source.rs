//! A fake [`RollupLogSource`] backed by an in-memory list of logs.

use alloy::rpc::types::Log;
use orbit_rollup::{LogQuery, RollupLogSource};
use std::sync::{Arc, Mutex, MutexGuard};

/// Errors produced by [`MockLogSource`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MockSourceError {
    /// A simulated transport failure on the n-th log query.
    #[error("simulated transport failure on log query {0}")]
    Transport(usize),
}

#[derive(Debug)]
struct MockState {
    chain_id: u64,
    head: u64,
    head_advance: u64,
    logs: Vec<Log>,
    fail_on_query: Option<usize>,
    queries: Vec<LogQuery>,
    block_number_calls: usize,
}

/// A [`RollupLogSource`] serving logs from memory.
///
/// Clones share state, so a test can hand one clone to the code under test
/// and inspect the recorded queries through another.
#[derive(Debug, Clone)]
pub struct MockLogSource {
    state: Arc<Mutex<MockState>>,
}

impl MockLogSource {
    /// Create a new source for the given chain with the given head block.
    pub fn new(chain_id: u64, head: u64) -> Self {
        let state = MockState {
            chain_id,
            head,
            head_advance: 0,
            logs: Vec::new(),
            fail_on_query: None,
            queries: Vec::new(),
            block_number_calls: 0,
        };
        Self { state: Arc::new(Mutex::new(state)) }
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }

    /// Add logs to the chain.
    pub fn with_logs(self, logs: impl IntoIterator<Item = Log>) -> Self {
        self.state().logs.extend(logs);
        self
    }

    /// Advance the chain head by `blocks` after every log query.
    pub fn with_head_advance(self, blocks: u64) -> Self {
        self.state().head_advance = blocks;
        self
    }

    /// Fail the `n`-th log query (zero-indexed).
    pub fn with_failure_on_query(self, n: usize) -> Self {
        self.state().fail_on_query = Some(n);
        self
    }

    /// Get all log queries received so far, in order.
    pub fn queries(&self) -> Vec<LogQuery> {
        self.state().queries.clone()
    }

    /// Get the number of block number requests received so far.
    pub fn block_number_calls(&self) -> usize {
        self.state().block_number_calls
    }

    /// Get the current head block.
    pub fn head(&self) -> u64 {
        self.state().head
    }
}

impl RollupLogSource for MockLogSource {
    type Error = MockSourceError;

    async fn chain_id(&self) -> Result<u64, Self::Error> {
        Ok(self.state().chain_id)
    }

    async fn latest_block_number(&self) -> Result<u64, Self::Error> {
        let mut state = self.state();
        state.block_number_calls += 1;
        Ok(state.head)
    }

    async fn query_logs(&self, query: &LogQuery) -> Result<Vec<Log>, Self::Error> {
        let mut state = self.state();
        let n = state.queries.len();
        state.queries.push(*query);
        state.head += state.head_advance;

        if state.fail_on_query == Some(n) {
            return Err(MockSourceError::Transport(n));
        }

        Ok(state.logs.iter().filter(|log| query.matches(log)).cloned().collect())
    }
}
