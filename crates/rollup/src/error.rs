use alloy::primitives::Address;

/// Errors returned while locating the `RollupInitialized` event of a rollup.
///
/// `E` is the error type of the underlying
/// [`RollupLogSource`](crate::RollupLogSource), surfaced unchanged in
/// [`LocateError::Query`].
#[derive(Debug, thiserror::Error)]
pub enum LocateError<E> {
    /// More than one `RollupInitialized` event was found. Each rollup
    /// contract is initialized exactly once.
    #[error(
        "expected to find 1 RollupInitialized event for rollup address {rollup} but found {count}"
    )]
    AmbiguousEvent {
        /// The rollup contract address.
        rollup: Address,
        /// The number of matching events.
        count: usize,
    },
    /// The scan completed without finding a `RollupInitialized` event.
    #[error("no RollupInitialized event found for rollup address {rollup}")]
    EventNotFound {
        /// The rollup contract address.
        rollup: Address,
    },
    /// The matching log does not carry a transaction hash, e.g. because it
    /// belongs to a pending block.
    #[error("no transaction hash found in RollupInitialized event for rollup address {rollup}")]
    MissingTransactionHash {
        /// The rollup contract address.
        rollup: Address,
    },
    /// The matching log could not be decoded as a `RollupInitialized` event.
    #[error("failed to decode RollupInitialized event for rollup address {rollup}: {source}")]
    Decode {
        /// The rollup contract address.
        rollup: Address,
        /// The decoding error.
        #[source]
        source: alloy::sol_types::Error,
    },
    /// The search was cancelled before it completed.
    #[error("search for the RollupInitialized event of rollup address {rollup} was cancelled")]
    Cancelled {
        /// The rollup contract address.
        rollup: Address,
    },
    /// The block number or log query failed.
    #[error(transparent)]
    Query(E),
}

impl<E> LocateError<E> {
    /// Get the rollup address the error refers to, if any.
    pub const fn rollup(&self) -> Option<Address> {
        match self {
            Self::AmbiguousEvent { rollup, .. }
            | Self::EventNotFound { rollup }
            | Self::MissingTransactionHash { rollup }
            | Self::Decode { rollup, .. }
            | Self::Cancelled { rollup } => Some(*rollup),
            Self::Query(_) => None,
        }
    }

    /// True if the error was caused by the underlying query.
    pub const fn is_query(&self) -> bool {
        matches!(self, Self::Query(_))
    }

    /// Get the underlying query error, if this is one.
    pub const fn as_query(&self) -> Option<&E> {
        match self {
            Self::Query(err) => Some(err),
            _ => None,
        }
    }
}
