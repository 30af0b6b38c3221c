//! Constants for the public testnets: Sepolia, Holesky and Arbitrum Sepolia.

use crate::ParentChainConstants;
use alloy::primitives::{address, Address};

/// Name for Sepolia.
pub const SEPOLIA_NAME: &str = "Sepolia";
/// Chain ID for Sepolia.
pub const SEPOLIA_CHAIN_ID: u64 = 11_155_111;
/// Earliest `RollupCreator` deployment block on Sepolia.
pub const SEPOLIA_DEPLOY_HEIGHT: u64 = 4_741_823;
/// `RollupCreator` contract address on Sepolia.
pub const SEPOLIA_ROLLUP_CREATOR: Address = address!("0xfBD0B034e6305788007f6e0123cc5EaE701a5751");
/// `TokenBridgeCreator` contract address on Sepolia.
pub const SEPOLIA_TOKEN_BRIDGE_CREATOR: Address =
    address!("0x7edb2dfBeEf9417e0454A80c51EE0C034e45a570");

/// Name for Holesky.
pub const HOLESKY_NAME: &str = "Holesky";
/// Chain ID for Holesky.
pub const HOLESKY_CHAIN_ID: u64 = 17000;
/// Earliest `RollupCreator` deployment block on Holesky.
pub const HOLESKY_DEPLOY_HEIGHT: u64 = 1_083_992;
/// `RollupCreator` contract address on Holesky.
pub const HOLESKY_ROLLUP_CREATOR: Address = address!("0xB512078282F462Ba104231ad856464Ceb0a7747e");
/// `TokenBridgeCreator` contract address on Holesky.
pub const HOLESKY_TOKEN_BRIDGE_CREATOR: Address =
    address!("0xac890ED9bC2494C053cE701F138958df95966d94");

/// Name for Arbitrum Sepolia.
pub const ARBITRUM_SEPOLIA_NAME: &str = "Arbitrum Sepolia";
/// Chain ID for Arbitrum Sepolia.
pub const ARBITRUM_SEPOLIA_CHAIN_ID: u64 = 421_614;
/// Earliest `RollupCreator` deployment block on Arbitrum Sepolia.
pub const ARBITRUM_SEPOLIA_DEPLOY_HEIGHT: u64 = 654_628;
/// `RollupCreator` contract address on Arbitrum Sepolia.
pub const ARBITRUM_SEPOLIA_ROLLUP_CREATOR: Address =
    address!("0x06E341073b2749e0Bb9912461351f716DeCDa9b0");
/// `TokenBridgeCreator` contract address on Arbitrum Sepolia.
pub const ARBITRUM_SEPOLIA_TOKEN_BRIDGE_CREATOR: Address =
    address!("0x56C486D3786fA26cc61473C499A36Eb9CC1FbD8E");

/// Parent chain constants for Sepolia.
pub const SEPOLIA: ParentChainConstants = ParentChainConstants::new(
    SEPOLIA_CHAIN_ID,
    SEPOLIA_DEPLOY_HEIGHT,
    SEPOLIA_ROLLUP_CREATOR,
    SEPOLIA_TOKEN_BRIDGE_CREATOR,
);

/// Parent chain constants for Holesky.
pub const HOLESKY: ParentChainConstants = ParentChainConstants::new(
    HOLESKY_CHAIN_ID,
    HOLESKY_DEPLOY_HEIGHT,
    HOLESKY_ROLLUP_CREATOR,
    HOLESKY_TOKEN_BRIDGE_CREATOR,
);

/// Parent chain constants for Arbitrum Sepolia.
pub const ARBITRUM_SEPOLIA: ParentChainConstants = ParentChainConstants::new(
    ARBITRUM_SEPOLIA_CHAIN_ID,
    ARBITRUM_SEPOLIA_DEPLOY_HEIGHT,
    ARBITRUM_SEPOLIA_ROLLUP_CREATOR,
    ARBITRUM_SEPOLIA_TOKEN_BRIDGE_CREATOR,
);
