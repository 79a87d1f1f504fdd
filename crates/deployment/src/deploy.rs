//! Contract creation.

use crate::{ContractArtifact, DeploymentRecord};
use alloy_network::TransactionBuilder;
use alloy_primitives::Bytes;
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use tracing::info;

/// Submits contract creation transactions.
///
/// The provider must carry a wallet; the deployer account pays for the
/// creation transaction.
pub struct Deployer<P> {
    provider: P,
    confirmations: u64,
}

impl<P> Deployer<P>
where
    P: Provider + Clone,
{
    /// Create a deployer waiting for `confirmations` blocks per deployment.
    pub const fn new(provider: P, confirmations: u64) -> Self {
        Self {
            provider,
            confirmations,
        }
    }

    /// Deploy a contract.
    ///
    /// `constructor_args` are already ABI-encoded; they are appended to the
    /// creation bytecode. Fails if the transaction reverts or the receipt
    /// carries no contract address.
    pub async fn deploy(
        &self,
        artifact: &ContractArtifact,
        constructor_args: Bytes,
    ) -> eyre::Result<DeploymentRecord> {
        let init_code = artifact.init_code(&constructor_args);

        info!(
            contract = %artifact.contract_name,
            init_code_len = init_code.len(),
            confirmations = self.confirmations,
            "Deploying contract"
        );

        let tx = TransactionRequest::default().with_deploy_code(init_code);

        let pending_tx = self.provider.send_transaction(tx).await?;
        let tx_hash = *pending_tx.tx_hash();

        let receipt = pending_tx
            .with_required_confirmations(self.confirmations)
            .get_receipt()
            .await?;

        if !receipt.status() {
            eyre::bail!(
                "deployment of {} reverted in tx {tx_hash}",
                artifact.contract_name
            );
        }

        let address = receipt.contract_address.ok_or_else(|| {
            eyre::eyre!(
                "receipt for {} creation tx {tx_hash} has no contract address",
                artifact.contract_name
            )
        })?;

        info!(
            contract = %artifact.contract_name,
            %address,
            block = ?receipt.block_number,
            "Contract deployed"
        );

        Ok(DeploymentRecord {
            contract_name: artifact.contract_name.clone(),
            address,
            constructor_args,
            tx_hash,
            block_number: receipt.block_number,
        })
    }
}
