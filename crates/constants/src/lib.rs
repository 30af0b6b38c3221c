//! Orbit parent chain constants.
//!
//! This crate contains the static per-network data used when creating and
//! inspecting rollups: the supported parent chains, the addresses of the
//! creator contracts on each of them, and the earliest block at which the
//! `RollupCreator` could have been deployed.
//!

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod chains;
pub use chains::{arbitrum, mainnet, nitro_testnode, testnets};

mod types;
pub use types::{rollup_creator_deploy_height, ParentChain, ParentChainConstants, ParseChainError};

use alloy::primitives::{address, Address};

/// `ArbGasInfo` precompile address, present on every Nitro chain.
pub const ARB_GAS_INFO: Address = address!("0x000000000000000000000000000000000000006C");

/// `ArbOwner` precompile address, present on every Nitro chain.
pub const ARB_OWNER: Address = address!("0x0000000000000000000000000000000000000070");

/// `ArbOwnerPublic` precompile address, present on every Nitro chain.
pub const ARB_OWNER_PUBLIC: Address = address!("0x000000000000000000000000000000000000006b");
