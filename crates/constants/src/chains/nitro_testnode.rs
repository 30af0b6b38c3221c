//! Constants for the local nitro-testnode chains.
//!
//! The testnode starts every chain from genesis, so all deployment floors are
//! zero. The L3 contracts are not deployed by default and carry the zero
//! address.

use crate::ParentChainConstants;
use alloy::primitives::{address, Address};

/// Name for the testnode L1.
pub const L1_NAME: &str = "Nitro Testnode L1";
/// Chain ID for the testnode L1.
pub const L1_CHAIN_ID: u64 = 1337;
/// `RollupCreator` contract address on the testnode L1.
pub const L1_ROLLUP_CREATOR: Address = address!("0x596eAbE0291D4cdAfAC7ef53D16C92Bf6922b5e0");
/// `TokenBridgeCreator` contract address on the testnode L1.
pub const L1_TOKEN_BRIDGE_CREATOR: Address =
    address!("0x54B4D4e578E10178a6cA602bdb6df0F213296Af4");

/// Name for the testnode L2.
pub const L2_NAME: &str = "Nitro Testnode L2";
/// Chain ID for the testnode L2.
pub const L2_CHAIN_ID: u64 = 412_346;
/// `RollupCreator` contract address on the testnode L2.
pub const L2_ROLLUP_CREATOR: Address = address!("0x3BaF9f08bAD68869eEdEa90F2Cc546Bd80F1A651");
/// `TokenBridgeCreator` contract address on the testnode L2.
pub const L2_TOKEN_BRIDGE_CREATOR: Address =
    address!("0x38F35Af53bF913c439eaB06A367e09D6eb253492");

/// Name for the testnode L3.
pub const L3_NAME: &str = "Nitro Testnode L3";
/// Chain ID for the testnode L3.
pub const L3_CHAIN_ID: u64 = 333_333;

/// Deployment height shared by every testnode chain.
pub const DEPLOY_HEIGHT: u64 = 0;

/// Parent chain constants for the testnode L1.
pub const L1: ParentChainConstants =
    ParentChainConstants::new(L1_CHAIN_ID, DEPLOY_HEIGHT, L1_ROLLUP_CREATOR, L1_TOKEN_BRIDGE_CREATOR);

/// Parent chain constants for the testnode L2.
pub const L2: ParentChainConstants =
    ParentChainConstants::new(L2_CHAIN_ID, DEPLOY_HEIGHT, L2_ROLLUP_CREATOR, L2_TOKEN_BRIDGE_CREATOR);

/// Parent chain constants for the testnode L3.
pub const L3: ParentChainConstants =
    ParentChainConstants::new(L3_CHAIN_ID, DEPLOY_HEIGHT, Address::ZERO, Address::ZERO);
