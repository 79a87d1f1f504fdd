//! CLI for deploying and verifying the FundMe contract.
//!
//! Subcommands mirror the deploy pipeline:
//! - `deploy-mocks`: deploy the mock price feed (development chains only)
//! - `deploy`: deploy FundMe, verifying on live chains when a key is set
//! - `verify`: (re)submit an already recorded deployment for verification

use alloy_provider::Provider;
use clap::{Parser, Subcommand};
use deployer::{config::Config, FUND_ME_NAME};
use deployment::DeploymentStore;
use tracing::info;

#[derive(Parser)]
#[command(name = "deployer")]
#[command(about = "Deploy and verify the FundMe contract")]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Private key for signing transactions (hex string, with or without 0x prefix)
    #[arg(short = 'k', long, env = "PRIVATE_KEY")]
    private_key: String,

    /// Block explorer API key; verification is skipped when unset
    #[arg(long, env = "ETHERSCAN_API_KEY")]
    etherscan_api_key: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Deploy the MockV3Aggregator price feed (development chains only)
    DeployMocks,

    /// Deploy FundMe with the price feed for the active chain
    Deploy {
        /// Skip explorer verification even when an API key is configured
        #[arg(long)]
        skip_verify: bool,
    },

    /// Re-run explorer verification for the recorded FundMe deployment
    Verify,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_file(&cli.config)?;

    info!("Loaded config:");
    info!("  RPC URL: {}", config.rpc_url);
    info!("  Deployments dir: {}", config.deployments_dir.display());
    info!("  Confirmations: {}", config.confirmations);

    match cli.command {
        Command::DeployMocks => {
            info!("Running: deploy-mocks");

            let provider = client::create_wallet_provider(&config.rpc_url, &cli.private_key)?;
            let record = deployer::deploy_mocks(provider, &config).await?;

            info!(address = %record.address, "Mock price feed ready");
        }
        Command::Deploy { skip_verify } => {
            info!("Running: deploy");

            let api_key = if skip_verify {
                None
            } else {
                cli.etherscan_api_key.as_deref()
            };

            let provider = client::create_wallet_provider(&config.rpc_url, &cli.private_key)?;
            let record = deployer::deploy_fund_me(provider, &config, api_key).await?;

            info!(address = %record.address, tx = %record.tx_hash, "FundMe deployed");
        }
        Command::Verify => {
            info!("Running: verify");

            let api_key = cli
                .etherscan_api_key
                .ok_or_else(|| eyre::eyre!("ETHERSCAN_API_KEY is required for verify"))?;

            let provider = client::create_provider(&config.rpc_url)?;
            let chain_id = provider.get_chain_id().await?;

            let store = DeploymentStore::new(&config.deployments_dir, chain_id);
            let record = store.get(FUND_ME_NAME)?.ok_or_else(|| {
                eyre::eyre!("no recorded FundMe deployment on chain {chain_id}")
            })?;

            let status =
                deployer::verify_deployment(&record, chain_id, &api_key, &config).await?;

            info!(%status, "Verification completed");
        }
    }

    Ok(())
}
