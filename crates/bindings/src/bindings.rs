#![allow(clippy::too_many_arguments)]
#![allow(missing_docs)]
use alloy::primitives::{Address, FixedBytes};

mod rollup_core {
    use super::*;

    alloy::sol!(
        #[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
        #[sol(rpc)]
        interface RollupCore {
            /// Emitted exactly once, when the rollup contract is initialized.
            event RollupInitialized(bytes32 machineHash, uint256 chainId);

            function chainId() external view returns (uint256);
            function wasmModuleRoot() external view returns (bytes32);
            function bridge() external view returns (address);
            function inbox() external view returns (address);
            function outbox() external view returns (address);
            function sequencerInbox() external view returns (address);
            function latestConfirmed() external view returns (uint64);
        }
    );

    impl Copy for RollupCore::RollupInitialized {}

    impl RollupCore::RollupInitialized {
        /// Get the hash of the initial machine state.
        pub const fn machine_hash(&self) -> FixedBytes<32> {
            self.machineHash
        }

        /// Get the chain id of the rollup (discarding high bytes).
        pub const fn chain_id(&self) -> u64 {
            self.chainId.as_limbs()[0]
        }
    }
}

mod rollup_creator {
    use super::*;

    alloy::sol!(
        #[derive(Debug, PartialEq, Eq)]
        #[sol(rpc)]
        interface RollupCreator {
            struct MaxTimeVariation {
                uint256 delayBlocks;
                uint256 futureBlocks;
                uint256 delaySeconds;
                uint256 futureSeconds;
            }

            struct Config {
                uint64 confirmPeriodBlocks;
                uint64 extraChallengeTimeBlocks;
                address stakeToken;
                uint256 baseStake;
                bytes32 wasmModuleRoot;
                address owner;
                address loserStakeEscrow;
                uint256 chainId;
                string chainConfig;
                uint64 genesisBlockNum;
                MaxTimeVariation sequencerInboxMaxTimeVariation;
            }

            struct RollupDeploymentParams {
                Config config;
                address[] validators;
                uint256 maxDataSize;
                address nativeToken;
                bool deployFactoriesToL2;
                uint256 maxFeePerGasForRetryables;
                address[] batchPosters;
                address batchPosterManager;
            }

            event OwnershipTransferred(address indexed previousOwner, address indexed newOwner);
            event RollupCreated(
                address indexed rollupAddress,
                address indexed nativeToken,
                address inboxAddress,
                address outbox,
                address rollupEventInbox,
                address challengeManager,
                address adminProxy,
                address sequencerInbox,
                address bridge,
                address dabridge,
                address upgradeExecutor,
                address validatorUtils,
                address validatorWalletCreator
            );
            event TemplatesUpdated();

            function createRollup(RollupDeploymentParams deployParams) external payable returns (address);
            function setTemplates(
                address _bridgeCreator,
                address _osp,
                address _challengeManagerLogic,
                address _rollupAdminLogic,
                address _rollupUserLogic,
                address _upgradeExecutorLogic,
                address _validatorUtils,
                address _validatorWalletCreator,
                address _l2FactoriesDeployer
            ) external;

            function bridgeCreator() external view returns (address);
            function challengeManagerTemplate() external view returns (address);
            function l2FactoriesDeployer() external view returns (address);
            function osp() external view returns (address);
            function owner() external view returns (address);
            function rollupAdminLogic() external view returns (address);
            function rollupUserLogic() external view returns (address);
            function upgradeExecutorLogic() external view returns (address);
            function validatorUtils() external view returns (address);
            function validatorWalletCreator() external view returns (address);
            function renounceOwnership() external;
            function transferOwnership(address newOwner) external;
        }
    );

    impl RollupCreator::RollupCreated {
        /// Get the address of the created rollup contract.
        pub const fn rollup(&self) -> Address {
            self.rollupAddress
        }

        /// Get the native token of the rollup. The zero address denotes ETH.
        pub const fn native_token(&self) -> Address {
            self.nativeToken
        }

        /// Get the address of the rollup's inbox.
        pub const fn inbox(&self) -> Address {
            self.inboxAddress
        }

        /// Get the address of the rollup's sequencer inbox.
        pub const fn sequencer_inbox(&self) -> Address {
            self.sequencerInbox
        }

        /// Get the address of the rollup's bridge.
        pub const fn bridge(&self) -> Address {
            self.bridge
        }

        /// Get the address of the rollup's upgrade executor.
        pub const fn upgrade_executor(&self) -> Address {
            self.upgradeExecutor
        }
    }
}

mod token_bridge_creator {
    alloy::sol!(
        #[derive(Debug, PartialEq, Eq)]
        #[sol(rpc)]
        interface TokenBridgeCreator {
            event AdminChanged(address previousAdmin, address newAdmin);
            event BeaconUpgraded(address indexed beacon);
            event Upgraded(address indexed implementation);
        }
    );
}

mod precompiles {
    alloy::sol!(
        #[derive(Debug, PartialEq, Eq)]
        #[sol(rpc)]
        interface ArbGasInfo {
            function getAmortizedCostCapBips() external view returns (uint64);
            function getCurrentTxL1GasFees() external view returns (uint256);
            function getGasAccountingParams() external view returns (uint256, uint256, uint256);
            function getGasBacklog() external view returns (uint64);
            function getGasBacklogTolerance() external view returns (uint64);
            function getL1BaseFeeEstimate() external view returns (uint256);
            function getL1BaseFeeEstimateInertia() external view returns (uint64);
            function getL1FeesAvailable() external view returns (uint256);
            function getL1GasPriceEstimate() external view returns (uint256);
            function getL1PricingSurplus() external view returns (int256);
            function getMinimumGasPrice() external view returns (uint256);
            function getPerBatchGasCharge() external view returns (int64);
            function getPricesInArbGas() external view returns (uint256, uint256, uint256);
            function getPricesInArbGasWithAggregator(address aggregator) external view returns (uint256, uint256, uint256);
            function getPricesInWei() external view returns (uint256, uint256, uint256, uint256, uint256, uint256);
            function getPricesInWeiWithAggregator(address aggregator) external view returns (uint256, uint256, uint256, uint256, uint256, uint256);
            function getPricingInertia() external view returns (uint64);
        }
    );

    alloy::sol!(
        #[derive(Debug, PartialEq, Eq)]
        #[sol(rpc)]
        interface ArbOwner {
            event OwnerActs(bytes4 indexed method, address indexed owner, bytes data);

            function addChainOwner(address newOwner) external;
            function removeChainOwner(address ownerToRemove) external;
            function isChainOwner(address addr) external view returns (bool);
            function getAllChainOwners() external view returns (address[]);
            function getInfraFeeAccount() external view returns (address);
            function getNetworkFeeAccount() external view returns (address);
            function releaseL1PricerSurplusFunds(uint256 maxWeiToRelease) external returns (uint256);
            function scheduleArbOSUpgrade(uint64 newVersion, uint64 timestamp) external;
            function setAmortizedCostCapBips(uint64 cap) external;
            function setInfraFeeAccount(address newInfraFeeAccount) external;
            function setL1BaseFeeEstimateInertia(uint64 inertia) external;
            function setL1PricePerUnit(uint256 pricePerUnit) external;
            function setL1PricingEquilibrationUnits(uint256 equilibrationUnits) external;
            function setL1PricingInertia(uint64 inertia) external;
            function setL1PricingRewardRate(uint64 weiPerUnit) external;
            function setL1PricingRewardRecipient(address recipient) external;
            function setL2BaseFee(uint256 priceInWei) external;
            function setL2GasBacklogTolerance(uint64 sec) external;
            function setL2GasPricingInertia(uint64 sec) external;
            function setMaxTxGasLimit(uint64 limit) external;
            function setMinimumL2BaseFee(uint256 priceInWei) external;
            function setNetworkFeeAccount(address newNetworkFeeAccount) external;
            function setPerBatchGasCharge(int64 cost) external;
            function setSpeedLimit(uint64 limit) external;
        }
    );

    alloy::sol!(
        #[derive(Debug, PartialEq, Eq)]
        #[sol(rpc)]
        interface ArbOwnerPublic {
            function getAllChainOwners() external view returns (address[]);
            function getInfraFeeAccount() external view returns (address);
            function getNetworkFeeAccount() external view returns (address);
            function isChainOwner(address addr) external view returns (bool);
        }
    );
}

mod erc20 {
    alloy::sol!(
        #[derive(Debug, PartialEq, Eq)]
        #[sol(rpc)]
        interface ERC20 {
            event Approval(address indexed owner, address indexed spender, uint256 value);
            event Transfer(address indexed from, address indexed to, uint256 value);

            function allowance(address owner, address spender) external view returns (uint256);
            function approve(address spender, uint256 amount) external returns (bool);
            function balanceOf(address account) external view returns (uint256);
            function decimals() external view returns (uint8);
            function name() external view returns (string);
            function symbol() external view returns (string);
            function totalSupply() external view returns (uint256);
            function transfer(address to, uint256 amount) external returns (bool);
            function transferFrom(address from, address to, uint256 amount) external returns (bool);
            function increaseAllowance(address spender, uint256 addedValue) external returns (bool);
            function decreaseAllowance(address spender, uint256 subtractedValue) external returns (bool);
        }
    );
}

pub use erc20::ERC20;
pub use precompiles::{ArbGasInfo, ArbOwner, ArbOwnerPublic};
pub use rollup_core::RollupCore;
pub use rollup_creator::RollupCreator;
pub use token_bridge_creator::TokenBridgeCreator;
