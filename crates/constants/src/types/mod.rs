mod chains;
pub use chains::{ParentChain, ParseChainError};

use alloy::primitives::Address;

/// Per-network constants for a parent chain.
///
/// These are the static contract-interface metadata for a chain on which
/// rollups may be created: where the creator contracts live, and the earliest
/// block at which the `RollupCreator` could have been deployed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParentChainConstants {
    /// Parent chain ID.
    chain_id: u64,
    /// Earliest block at which the `RollupCreator` could have been deployed.
    rollup_creator_deploy_height: u64,
    /// `RollupCreator` contract address.
    rollup_creator: Address,
    /// `TokenBridgeCreator` contract address.
    token_bridge_creator: Address,
}

impl std::fmt::Display for ParentChainConstants {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ chain_id: {}, deploy_height: {}, rollup_creator: {}, token_bridge_creator: {} }}",
            self.chain_id,
            self.rollup_creator_deploy_height,
            self.rollup_creator,
            self.token_bridge_creator
        )
    }
}

impl ParentChainConstants {
    /// Create a new set of parent chain constants.
    pub const fn new(
        chain_id: u64,
        rollup_creator_deploy_height: u64,
        rollup_creator: Address,
        token_bridge_creator: Address,
    ) -> Self {
        Self { chain_id, rollup_creator_deploy_height, rollup_creator, token_bridge_creator }
    }

    /// Get the chain ID.
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Get the earliest block at which the `RollupCreator` could have been
    /// deployed.
    pub const fn rollup_creator_deploy_height(&self) -> u64 {
        self.rollup_creator_deploy_height
    }

    /// Get the `RollupCreator` address.
    pub const fn rollup_creator(&self) -> Address {
        self.rollup_creator
    }

    /// Get the `TokenBridgeCreator` address.
    pub const fn token_bridge_creator(&self) -> Address {
        self.token_bridge_creator
    }

    /// True if the creator contracts are deployed on this chain.
    pub const fn is_deployed(&self) -> bool {
        !self.rollup_creator.const_eq(&Address::ZERO)
    }
}

/// Look up the earliest block at which the `RollupCreator` could have been
/// deployed on the chain with the given id.
///
/// Returns `None` for chains without a known floor, in which case callers
/// must search from genesis.
pub const fn rollup_creator_deploy_height(chain_id: u64) -> Option<u64> {
    match ParentChain::from_chain_id(chain_id) {
        Some(chain) => Some(chain.constants().rollup_creator_deploy_height()),
        None => None,
    }
}
