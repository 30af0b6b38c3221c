use crate::{
    chains::{arbitrum, mainnet, nitro_testnode, testnets},
    ParentChainConstants,
};
use std::str::FromStr;

/// The list of known chains as a string.
const KNOWN_CHAINS: &str = "mainnet, arbitrum-one, arbitrum-nova, sepolia, holesky, \
    arbitrum-sepolia, nitro-testnode-l1, nitro-testnode-l2, nitro-testnode-l3";

/// Error type for resolving a [`ParentChain`] from a name or chain id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseChainError {
    /// The chain name is not supported.
    #[error("chain name {0} is not parseable. supported chains: {KNOWN_CHAINS}")]
    ChainNotSupported(String),
    /// The chain id is not supported as a parent chain.
    #[error("chain id {0} is not a supported parent chain. supported chains: {KNOWN_CHAINS}")]
    UnsupportedChainId(u64),
}

/// Parent chains on which the rollup creator contracts are deployed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ParentChain {
    /// Ethereum Mainnet.
    Mainnet,
    /// Arbitrum One.
    ArbitrumOne,
    /// Arbitrum Nova.
    ArbitrumNova,
    /// Sepolia testnet.
    Sepolia,
    /// Holesky testnet.
    Holesky,
    /// Arbitrum Sepolia testnet.
    ArbitrumSepolia,
    /// Local nitro-testnode L1.
    NitroTestnodeL1,
    /// Local nitro-testnode L2.
    NitroTestnodeL2,
    /// Local nitro-testnode L3.
    NitroTestnodeL3,
}

impl ParentChain {
    /// Every supported parent chain.
    pub const ALL: [Self; 9] = [
        Self::Mainnet,
        Self::ArbitrumOne,
        Self::ArbitrumNova,
        Self::Sepolia,
        Self::Holesky,
        Self::ArbitrumSepolia,
        Self::NitroTestnodeL1,
        Self::NitroTestnodeL2,
        Self::NitroTestnodeL3,
    ];

    /// Resolve a parent chain from its chain id.
    pub const fn from_chain_id(chain_id: u64) -> Option<Self> {
        match chain_id {
            mainnet::CHAIN_ID => Some(Self::Mainnet),
            arbitrum::ARBITRUM_ONE_CHAIN_ID => Some(Self::ArbitrumOne),
            arbitrum::ARBITRUM_NOVA_CHAIN_ID => Some(Self::ArbitrumNova),
            testnets::SEPOLIA_CHAIN_ID => Some(Self::Sepolia),
            testnets::HOLESKY_CHAIN_ID => Some(Self::Holesky),
            testnets::ARBITRUM_SEPOLIA_CHAIN_ID => Some(Self::ArbitrumSepolia),
            nitro_testnode::L1_CHAIN_ID => Some(Self::NitroTestnodeL1),
            nitro_testnode::L2_CHAIN_ID => Some(Self::NitroTestnodeL2),
            nitro_testnode::L3_CHAIN_ID => Some(Self::NitroTestnodeL3),
            _ => None,
        }
    }

    /// Get the hard-coded constants for this chain.
    pub const fn constants(&self) -> ParentChainConstants {
        match self {
            Self::Mainnet => mainnet::MAINNET,
            Self::ArbitrumOne => arbitrum::ARBITRUM_ONE,
            Self::ArbitrumNova => arbitrum::ARBITRUM_NOVA,
            Self::Sepolia => testnets::SEPOLIA,
            Self::Holesky => testnets::HOLESKY,
            Self::ArbitrumSepolia => testnets::ARBITRUM_SEPOLIA,
            Self::NitroTestnodeL1 => nitro_testnode::L1,
            Self::NitroTestnodeL2 => nitro_testnode::L2,
            Self::NitroTestnodeL3 => nitro_testnode::L3,
        }
    }

    /// Get the chain id.
    pub const fn chain_id(&self) -> u64 {
        self.constants().chain_id()
    }

    /// Get the human-readable chain name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mainnet => mainnet::NAME,
            Self::ArbitrumOne => arbitrum::ARBITRUM_ONE_NAME,
            Self::ArbitrumNova => arbitrum::ARBITRUM_NOVA_NAME,
            Self::Sepolia => testnets::SEPOLIA_NAME,
            Self::Holesky => testnets::HOLESKY_NAME,
            Self::ArbitrumSepolia => testnets::ARBITRUM_SEPOLIA_NAME,
            Self::NitroTestnodeL1 => nitro_testnode::L1_NAME,
            Self::NitroTestnodeL2 => nitro_testnode::L2_NAME,
            Self::NitroTestnodeL3 => nitro_testnode::L3_NAME,
        }
    }

    /// True if this is a local testnode chain.
    pub const fn is_testnode(&self) -> bool {
        matches!(self, Self::NitroTestnodeL1 | Self::NitroTestnodeL2 | Self::NitroTestnodeL3)
    }
}

impl TryFrom<u64> for ParentChain {
    type Error = ParseChainError;

    fn try_from(chain_id: u64) -> Result<Self, Self::Error> {
        Self::from_chain_id(chain_id).ok_or(ParseChainError::UnsupportedChainId(chain_id))
    }
}

impl std::fmt::Display for ParentChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.chain_id())
    }
}

impl FromStr for ParentChain {
    type Err = ParseChainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "mainnet" | "ethereum" => Ok(Self::Mainnet),
            "arbitrum-one" => Ok(Self::ArbitrumOne),
            "arbitrum-nova" => Ok(Self::ArbitrumNova),
            "sepolia" => Ok(Self::Sepolia),
            "holesky" => Ok(Self::Holesky),
            "arbitrum-sepolia" => Ok(Self::ArbitrumSepolia),
            "nitro-testnode-l1" => Ok(Self::NitroTestnodeL1),
            "nitro-testnode-l2" => Ok(Self::NitroTestnodeL2),
            "nitro-testnode-l3" => Ok(Self::NitroTestnodeL3),
            _ => Err(ParseChainError::ChainNotSupported(s)),
        }
    }
}
