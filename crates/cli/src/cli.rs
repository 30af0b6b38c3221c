use alloy::{primitives::Address, providers::ProviderBuilder};
use clap::{Args, Parser, Subcommand};
use orbit_constants::{ParentChain, ParseChainError, ARB_GAS_INFO, ARB_OWNER, ARB_OWNER_PUBLIC};
use orbit_rollup::{RollupTxLocator, ScanConfig};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Orbit rollup utilities.
#[derive(Debug, Parser)]
#[command(name = "orbit", version, about)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Find the transaction that created a rollup contract.
    RollupTx(RollupTxArgs),
    /// Print the creator contracts and deployment height of a parent chain.
    Contracts(ContractsArgs),
}

#[derive(Debug, Args)]
struct RollupTxArgs {
    /// RPC endpoint of the parent chain.
    #[arg(long, env = "ORBIT_RPC_URL")]
    rpc_url: String,
    /// Address of the rollup contract.
    #[arg(long)]
    rollup: Address,
    /// Maximum number of blocks per log query. Defaults to
    /// `ORBIT_LOG_CHUNK_SIZE`, or 10000.
    #[arg(long)]
    chunk_size: Option<u64>,
    /// Also print the decoded `RollupInitialized` event.
    #[arg(long)]
    details: bool,
}

#[derive(Debug, Args)]
struct ContractsArgs {
    /// Parent chain name (e.g. `arbitrum-sepolia`) or chain id.
    #[arg(long, value_parser = parse_chain)]
    chain: ParentChain,
}

fn parse_chain(s: &str) -> Result<ParentChain, ParseChainError> {
    match s.trim().parse::<u64>() {
        Ok(chain_id) => ParentChain::try_from(chain_id),
        Err(_) => s.parse(),
    }
}

impl Cli {
    pub(crate) async fn run(self) -> eyre::Result<()> {
        match self.command {
            Command::RollupTx(args) => args.run().await,
            Command::Contracts(args) => {
                args.run();
                Ok(())
            }
        }
    }
}

impl RollupTxArgs {
    async fn run(self) -> eyre::Result<()> {
        let config = match self.chunk_size {
            Some(chunk_size) => ScanConfig::new(chunk_size)?,
            None => ScanConfig::from_env()?,
        };
        debug!(chunk_size = config.chunk_size(), rpc_url = %self.rpc_url, "connecting");

        let provider = ProviderBuilder::new().connect(&self.rpc_url).await?;

        let token = CancellationToken::new();
        let on_ctrl_c = token.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("interrupted, cancelling search");
                on_ctrl_c.cancel();
            }
        });

        let locator =
            RollupTxLocator::new(provider).with_config(config).with_cancellation(token);

        if self.details {
            let init = locator.fetch_initialization(self.rollup).await?;
            println!("transaction hash: {}", init.transaction_hash());
            if let Some(block_number) = init.block_number() {
                println!("block number:     {block_number}");
            }
            println!("rollup chain id:  {}", init.chain_id());
            println!("machine hash:     {}", init.machine_hash());
        } else {
            let hash = locator.fetch_transaction_hash(self.rollup).await?;
            println!("{hash}");
        }
        Ok(())
    }
}

impl ContractsArgs {
    fn run(self) {
        let constants = self.chain.constants();
        println!("chain:                  {}", self.chain);
        println!("deployment height:      {}", constants.rollup_creator_deploy_height());
        if constants.is_deployed() {
            println!("RollupCreator:          {}", constants.rollup_creator());
            println!("TokenBridgeCreator:     {}", constants.token_bridge_creator());
        } else {
            println!("RollupCreator:          not deployed");
            println!("TokenBridgeCreator:     not deployed");
        }
        println!("ArbGasInfo:             {ARB_GAS_INFO}");
        println!("ArbOwner:               {ARB_OWNER}");
        println!("ArbOwnerPublic:         {ARB_OWNER_PUBLIC}");
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parse_chain_by_name_or_id() {
        assert_eq!(parse_chain("421614"), Ok(ParentChain::ArbitrumSepolia));
        assert_eq!(parse_chain("holesky"), Ok(ParentChain::Holesky));
        assert_eq!(parse_chain("10"), Err(ParseChainError::UnsupportedChainId(10)));
    }

    #[test]
    fn parse_rollup_tx_args() {
        let cli = Cli::try_parse_from([
            "orbit",
            "rollup-tx",
            "--rpc-url",
            "http://localhost:8545",
            "--rollup",
            "0x4242424242424242424242424242424242424242",
            "--chunk-size",
            "500",
        ])
        .unwrap();
        let Command::RollupTx(args) = cli.command else { panic!("expected rollup-tx") };
        assert_eq!(args.rollup, Address::repeat_byte(0x42));
        assert_eq!(args.chunk_size, Some(500));
        assert!(!args.details);
    }

    #[test]
    fn cli_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
