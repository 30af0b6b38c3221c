//! Constants for Ethereum Mainnet as a parent chain.

use crate::ParentChainConstants;
use alloy::primitives::{address, Address};

/// Name for the parent chain.
pub const NAME: &str = "Ethereum";
/// Chain ID for Ethereum Mainnet.
pub const CHAIN_ID: u64 = 1;
/// Earliest block at which the `RollupCreator` could have been deployed.
pub const ROLLUP_CREATOR_DEPLOY_HEIGHT: u64 = 18_736_164;
/// `RollupCreator` contract address on Ethereum Mainnet.
pub const ROLLUP_CREATOR: Address = address!("0x90D68B056c411015eaE3EC0b98AD94E2C91419F1");
/// `TokenBridgeCreator` contract address on Ethereum Mainnet.
pub const TOKEN_BRIDGE_CREATOR: Address = address!("0x60D9A46F24D5a35b95A78Dd3E793e55D94EE0660");

/// Parent chain constants for Ethereum Mainnet.
pub const MAINNET: ParentChainConstants = ParentChainConstants::new(
    CHAIN_ID,
    ROLLUP_CREATOR_DEPLOY_HEIGHT,
    ROLLUP_CREATOR,
    TOKEN_BRIDGE_CREATOR,
);
