use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level deployer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// RPC endpoint url of the target chain
    pub rpc_url: String,

    /// Root directory for deployment records
    #[serde(default = "default_deployments_dir")]
    pub deployments_dir: PathBuf,

    /// Confirmations to wait for per deployment transaction
    #[serde(default = "default_confirmations")]
    pub confirmations: u64,

    /// Compiled artifact locations
    pub artifacts: ArtifactPaths,

    /// Explorer verification inputs; verification is skipped when absent
    pub verification: Option<VerificationConfig>,
}

/// Where the compiled contract artifacts live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactPaths {
    /// FundMe artifact (hardhat-format JSON)
    pub fund_me: PathBuf,
    /// MockV3Aggregator artifact, only used on development chains
    pub mock_aggregator: PathBuf,
}

/// Inputs the explorer needs besides the deployment record itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationConfig {
    /// Flattened Solidity source of the deployed contract
    pub source_path: PathBuf,
    /// Contract name within the source
    pub contract_name: String,
    /// Full compiler version string, e.g. "v0.8.8+commit.dddeac2f"
    pub compiler_version: String,
}

const fn default_confirmations() -> u64 {
    1
}

fn default_deployments_dir() -> PathBuf {
    PathBuf::from("deployments")
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;

        Ok(config)
    }
}
