//! Constants for the Arbitrum One and Arbitrum Nova parent chains.

use crate::ParentChainConstants;
use alloy::primitives::{address, Address};

/// Name for Arbitrum One.
pub const ARBITRUM_ONE_NAME: &str = "Arbitrum One";
/// Chain ID for Arbitrum One.
pub const ARBITRUM_ONE_CHAIN_ID: u64 = 42161;
/// Earliest block at which the `RollupCreator` could have been deployed on
/// Arbitrum One.
pub const ARBITRUM_ONE_DEPLOY_HEIGHT: u64 = 150_599_584;
/// `TokenBridgeCreator` contract address on Arbitrum One.
pub const ARBITRUM_ONE_TOKEN_BRIDGE_CREATOR: Address =
    address!("0x2f5624dc8800dfA0A82AC03509Ef8bb8E7Ac000e");

/// Name for Arbitrum Nova.
pub const ARBITRUM_NOVA_NAME: &str = "Arbitrum Nova";
/// Chain ID for Arbitrum Nova.
pub const ARBITRUM_NOVA_CHAIN_ID: u64 = 42170;
/// Earliest block at which the `RollupCreator` could have been deployed on
/// Arbitrum Nova.
pub const ARBITRUM_NOVA_DEPLOY_HEIGHT: u64 = 47_798_739;
/// `TokenBridgeCreator` contract address on Arbitrum Nova.
pub const ARBITRUM_NOVA_TOKEN_BRIDGE_CREATOR: Address =
    address!("0x8B9D9490a68B1F16ac8A21DdAE5Fd7aB9d708c14");

/// `RollupCreator` contract address, shared by Arbitrum One and Nova.
pub const ROLLUP_CREATOR: Address = address!("0x9CAd81628aB7D8e239F1A5B497313341578c5F71");

/// Parent chain constants for Arbitrum One.
pub const ARBITRUM_ONE: ParentChainConstants = ParentChainConstants::new(
    ARBITRUM_ONE_CHAIN_ID,
    ARBITRUM_ONE_DEPLOY_HEIGHT,
    ROLLUP_CREATOR,
    ARBITRUM_ONE_TOKEN_BRIDGE_CREATOR,
);

/// Parent chain constants for Arbitrum Nova.
pub const ARBITRUM_NOVA: ParentChainConstants = ParentChainConstants::new(
    ARBITRUM_NOVA_CHAIN_ID,
    ARBITRUM_NOVA_DEPLOY_HEIGHT,
    ROLLUP_CREATOR,
    ARBITRUM_NOVA_TOKEN_BRIDGE_CREATOR,
);
