//! Block-explorer contract verification.
//!
//! Etherscan-compatible client: submit source plus ABI-encoded constructor
//! arguments for a deployed address, then check the submission status.
//! Callers decide what a failure means; in the deploy pipeline it is
//! logged and swallowed since the contract is already live.

use alloy_primitives::{hex, Address, Bytes};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum VerifyError {
    /// Transport-level failure talking to the explorer
    #[error("explorer request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The explorer answered but rejected the request
    #[error("explorer rejected request: {0}")]
    Rejected(String),
}

/// Everything the explorer needs to verify one contract.
#[derive(Debug, Clone)]
pub struct VerifyRequest {
    /// Deployed contract address
    pub address: Address,
    /// Flattened Solidity source
    pub source: String,
    /// Contract name within the source, e.g. "FundMe"
    pub contract_name: String,
    /// Full compiler version string, e.g. "v0.8.8+commit.dddeac2f"
    pub compiler_version: String,
    /// ABI-encoded constructor arguments
    pub constructor_args: Bytes,
}

/// Wire format shared by all Etherscan API responses.
#[derive(Debug, Deserialize)]
struct ExplorerResponse {
    status: String,
    #[allow(dead_code)]
    message: String,
    result: String,
}

/// Etherscan-compatible verification client.
pub struct ExplorerClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl ExplorerClient {
    /// Create a client for a named network (see [`base_url_for`]).
    pub fn new(api_key: impl Into<String>, network: &str) -> Result<Self, VerifyError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            api_key: api_key.into(),
            base_url: base_url_for(network),
            client,
        })
    }

    /// Submit a verification request. Returns the explorer's submission
    /// GUID for use with [`Self::check`].
    pub async fn submit(&self, request: &VerifyRequest) -> Result<String, VerifyError> {
        let address = request.address.to_string();
        let args_hex = hex::encode(&request.constructor_args);

        debug!(%address, contract = %request.contract_name, "Submitting verification");

        // Field name "constructorArguements" is misspelled in the Etherscan API.
        let form = [
            ("apikey", self.api_key.as_str()),
            ("module", "contract"),
            ("action", "verifysourcecode"),
            ("contractaddress", address.as_str()),
            ("sourceCode", request.source.as_str()),
            ("codeformat", "solidity-single-file"),
            ("contractname", request.contract_name.as_str()),
            ("compilerversion", request.compiler_version.as_str()),
            ("constructorArguements", args_hex.as_str()),
        ];

        let response: ExplorerResponse = self
            .client
            .post(&self.base_url)
            .form(&form)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if response.status != "1" {
            return Err(VerifyError::Rejected(response.result));
        }

        Ok(response.result)
    }

    /// Check the status of an earlier submission.
    ///
    /// Returns the explorer's status string ("Pass - Verified",
    /// "Pending in queue", ...). Rejections ("Fail - ...") surface as
    /// [`VerifyError::Rejected`].
    pub async fn check(&self, guid: &str) -> Result<String, VerifyError> {
        let response: ExplorerResponse = self
            .client
            .get(&self.base_url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("module", "contract"),
                ("action", "checkverifystatus"),
                ("guid", guid),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        // "Pending in queue" comes back with status 0 but is not a failure.
        if response.status != "1" && !response.result.contains("Pending") {
            return Err(VerifyError::Rejected(response.result));
        }

        Ok(response.result)
    }
}

/// Explorer API base URL for a network name from the static table.
pub fn base_url_for(network: &str) -> String {
    match network {
        "mainnet" => "https://api.etherscan.io/api".to_string(),
        _ => format!("https://api-{network}.etherscan.io/api"),
    }
}
