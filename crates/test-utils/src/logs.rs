//! Builders for RPC logs.

use alloy::{
    primitives::{Address, Log as PrimitiveLog, LogData, B256, U256},
    rpc::types::Log,
    sol_types::SolEvent,
};
use orbit_bindings::RollupCore::RollupInitialized;

/// Chain id carried by the `RollupInitialized` events built here.
pub const TEST_ROLLUP_CHAIN_ID: u64 = 412_346;

/// Machine hash carried by the `RollupInitialized` events built here.
pub const TEST_MACHINE_HASH: B256 = B256::repeat_byte(0xab);

/// A deterministic transaction hash derived from `n`.
pub fn tx_hash(n: u64) -> B256 {
    B256::left_padding_from(&n.to_be_bytes())
}

/// Build a mined log emitted by `address` with the given data.
pub fn mined_log(address: Address, data: LogData, block_number: u64, transaction_hash: B256) -> Log {
    Log {
        inner: PrimitiveLog { address, data },
        block_number: Some(block_number),
        transaction_hash: Some(transaction_hash),
        ..Default::default()
    }
}

/// Build a `RollupInitialized` log emitted by `rollup` in `block_number`.
pub fn rollup_initialized_log(rollup: Address, block_number: u64, transaction_hash: B256) -> Log {
    let event = RollupInitialized {
        machineHash: TEST_MACHINE_HASH,
        chainId: U256::from(TEST_ROLLUP_CHAIN_ID),
    };
    mined_log(rollup, event.encode_log_data(), block_number, transaction_hash)
}

/// Build a log emitted by `address` with an unrelated event signature.
pub fn unrelated_log(address: Address, block_number: u64, transaction_hash: B256) -> Log {
    let data = LogData::new_unchecked(vec![B256::repeat_byte(0xee)], Default::default());
    mined_log(address, data, block_number, transaction_hash)
}
