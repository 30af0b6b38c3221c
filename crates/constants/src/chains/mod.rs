/// Ethereum Mainnet constants.
pub mod mainnet;

/// Arbitrum One and Arbitrum Nova constants.
pub mod arbitrum;

/// Public testnet constants.
pub mod testnets;

/// Local nitro-testnode constants.
pub mod nitro_testnode;
