//! Deployment orchestration for the FundMe contract.
//!
//! The pipeline mirrors the network split the tooling is built around:
//! development chains get a locally deployed mock price feed, live chains
//! use the static table in the `config` crate and go through explorer
//! verification when an API key is configured.

pub mod config;

use alloy_primitives::{Address, Bytes, I256};
use alloy_provider::Provider;
use alloy_sol_types::{sol_data, SolType, SolValue};
use crate::config::Config;
use deployment::{ContractArtifact, Deployer, DeploymentRecord, DeploymentStore};
use eyre::eyre;
use std::time::Duration;
use tracing::{info, warn};
use verify::{ExplorerClient, VerifyRequest};

/// Name the FundMe contract is registered under in the deployment store.
pub const FUND_ME_NAME: &str = "FundMe";

/// Delay before the first verification status poll. The explorer needs a
/// moment to index a fresh submission.
const VERIFY_POLL_DELAY: Duration = Duration::from_secs(5);

/// Resolve the ETH/USD price feed for the active chain.
///
/// Development chains must already have a mock feed in the deployment
/// store; live chains must be present in the static network table. Both
/// misses are fatal, a FundMe deployment cannot proceed without a feed.
pub fn select_price_feed(chain_id: u64, store: &DeploymentStore) -> eyre::Result<Address> {
    if ::config::is_development_chain(chain_id) {
        let record = store
            .get(::config::MOCK_AGGREGATOR_NAME)?
            .ok_or_else(|| {
                eyre!("no mock price feed deployed on chain {chain_id}; run deploy-mocks first")
            })?;
        Ok(record.address)
    } else {
        let profile = ::config::NetworkProfile::for_chain(chain_id).ok_or_else(|| {
            eyre!("unsupported network: chain {chain_id} has no price feed table entry")
        })?;
        Ok(profile.eth_usd_price_feed)
    }
}

/// ABI-encode the FundMe constructor arguments (the feed address).
pub fn price_feed_constructor_args(price_feed: Address) -> Bytes {
    Bytes::from(price_feed.abi_encode())
}

/// Deploy the mock price feed on a development chain.
///
/// Reuses an existing record when one is present so repeated runs stay
/// idempotent. Refuses to run against live networks.
pub async fn deploy_mocks<P>(provider: P, config: &Config) -> eyre::Result<DeploymentRecord>
where
    P: Provider + Clone,
{
    let chain_id = provider.get_chain_id().await?;
    if !::config::is_development_chain(chain_id) {
        eyre::bail!("refusing to deploy mocks on non-development chain {chain_id}");
    }

    let store = DeploymentStore::new(&config.deployments_dir, chain_id);
    if let Some(existing) = store.get(::config::MOCK_AGGREGATOR_NAME)? {
        info!(address = %existing.address, "Mock price feed already deployed, reusing");
        return Ok(existing);
    }

    let artifact = ContractArtifact::from_file(&config.artifacts.mock_aggregator)?;
    let initial_answer = I256::try_from(::config::MOCK_INITIAL_ANSWER)?;
    let args = Bytes::from(<(sol_data::Uint<8>, sol_data::Int<256>)>::abi_encode_params(&(
        ::config::MOCK_DECIMALS,
        initial_answer,
    )));

    let record = Deployer::new(provider, config.confirmations)
        .deploy(&artifact, args)
        .await?;
    store.put(&record)?;

    Ok(record)
}

/// Deploy FundMe on the active chain.
///
/// Selects the price feed per network class, deploys with it as the sole
/// constructor argument, records the deployment, and on live chains
/// submits the contract for explorer verification when an API key is
/// present. Verification failure is logged and swallowed: the contract is
/// live regardless of the explorer's answer.
pub async fn deploy_fund_me<P>(
    provider: P,
    config: &Config,
    etherscan_api_key: Option<&str>,
) -> eyre::Result<DeploymentRecord>
where
    P: Provider + Clone,
{
    let chain_id = provider.get_chain_id().await?;
    let store = DeploymentStore::new(&config.deployments_dir, chain_id);

    let price_feed = select_price_feed(chain_id, &store)?;
    info!(chain_id, %price_feed, "Deploying FundMe");

    let artifact = ContractArtifact::from_file(&config.artifacts.fund_me)?;
    let args = price_feed_constructor_args(price_feed);

    let record = Deployer::new(provider, config.confirmations)
        .deploy(&artifact, args)
        .await?;
    store.put(&record)?;

    if ::config::is_development_chain(chain_id) {
        return Ok(record);
    }

    match etherscan_api_key {
        Some(api_key) => {
            if let Err(e) = verify_deployment(&record, chain_id, api_key, config).await {
                warn!(error = %e, address = %record.address, "Verification failed; deployment is unaffected");
            }
        }
        None => {
            info!("No explorer API key configured, skipping verification");
        }
    }

    Ok(record)
}

/// Submit a recorded deployment to the block explorer and report its
/// verification status.
pub async fn verify_deployment(
    record: &DeploymentRecord,
    chain_id: u64,
    api_key: &str,
    config: &Config,
) -> eyre::Result<String> {
    let verification = config
        .verification
        .as_ref()
        .ok_or_else(|| eyre!("no [verification] section in config"))?;
    let profile = ::config::NetworkProfile::for_chain(chain_id)
        .ok_or_else(|| eyre!("no explorer known for chain {chain_id}"))?;

    let source = std::fs::read_to_string(&verification.source_path)?;

    let client = ExplorerClient::new(api_key, profile.name)?;
    let request = VerifyRequest {
        address: record.address,
        source,
        contract_name: verification.contract_name.clone(),
        compiler_version: verification.compiler_version.clone(),
        constructor_args: record.constructor_args.clone(),
    };

    let guid = client.submit(&request).await?;
    info!(%guid, address = %record.address, "Verification submitted");

    tokio::time::sleep(VERIFY_POLL_DELAY).await;

    let status = client.check(&guid).await?;
    info!(%status, "Verification status");

    Ok(status)
}
