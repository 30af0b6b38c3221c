//! Orbit rollup helpers.
//!
//! Finds the transaction that created a rollup contract. Every rollup emits a
//! single `RollupInitialized` event when it is created; [`RollupTxLocator`]
//! scans the parent chain for that event, in bounded block ranges starting at
//! the `RollupCreator` deployment height of the chain, and returns the hash of
//! the transaction that emitted it.
//!
//! ```no_run
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use alloy::{primitives::address, providers::ProviderBuilder};
//! use orbit_rollup::RollupTxLocator;
//!
//! let provider = ProviderBuilder::new().connect_http("http://localhost:8545".parse()?);
//! let rollup = address!("0x1111111111111111111111111111111111111111");
//! let tx_hash = RollupTxLocator::new(provider).fetch_transaction_hash(rollup).await?;
//! # let _ = tx_hash;
//! # Ok(())
//! # }
//! ```

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

mod chunks;
pub use chunks::BlockChunks;

mod config;
pub use config::{ConfigError, ScanConfig, CHUNK_SIZE_ENV, DEFAULT_CHUNK_SIZE};

mod error;
pub use error::LocateError;

mod locator;
pub use locator::{fetch_rollup_transaction_hash, RollupInitialization, RollupTxLocator};

mod source;
pub use source::{LogQuery, QueryRange, RollupLogSource};
