//! Orbit contract bindings.
//!
//! [`alloy::sol!`] interfaces for the rollup contracts, the rollup and token
//! bridge creators deployed on each parent chain, and the Nitro precompiles.

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
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod bindings;
pub use bindings::{
    ArbGasInfo, ArbOwner, ArbOwnerPublic, RollupCore, RollupCreator, TokenBridgeCreator, ERC20,
};
