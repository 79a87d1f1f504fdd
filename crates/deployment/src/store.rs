//! Deployment records and the per-chain store.
//!
//! One JSON file per deployed contract, laid out as
//! `<root>/<chain_id>/<ContractName>.json`. The orchestrator reads the
//! store to find the mock feed on development chains and writes a record
//! after every deployment.

use alloy_primitives::{Address, Bytes, TxHash};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to access deployment record for {name}: {source}")]
    Io {
        name: String,
        source: std::io::Error,
    },

    #[error("corrupt deployment record for {name}: {source}")]
    Corrupt {
        name: String,
        source: serde_json::Error,
    },
}

/// Outcome of a single contract deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    /// Contract name, the store key
    pub contract_name: String,
    /// Deployed contract address
    pub address: Address,
    /// ABI-encoded constructor arguments, kept for verification
    pub constructor_args: Bytes,
    /// Creation transaction hash
    pub tx_hash: TxHash,
    /// Block the creation transaction landed in
    pub block_number: Option<u64>,
}

/// On-disk deployment store for a single chain.
#[derive(Debug, Clone)]
pub struct DeploymentStore {
    dir: PathBuf,
}

impl DeploymentStore {
    /// Open (lazily) the store for a chain under the given root directory.
    pub fn new(root: impl AsRef<Path>, chain_id: u64) -> Self {
        Self {
            dir: root.as_ref().join(chain_id.to_string()),
        }
    }

    fn record_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.json"))
    }

    /// Fetch a record by contract name. `Ok(None)` when nothing has been
    /// deployed under that name on this chain.
    pub fn get(&self, name: &str) -> Result<Option<DeploymentRecord>, StoreError> {
        let path = self.record_path(name);

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::Io {
                    name: name.to_string(),
                    source,
                })
            }
        };

        let record = serde_json::from_str(&contents).map_err(|source| StoreError::Corrupt {
            name: name.to_string(),
            source,
        })?;

        Ok(Some(record))
    }

    /// Persist a record, overwriting any previous deployment of the same
    /// contract on this chain.
    pub fn put(&self, record: &DeploymentRecord) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            name: record.contract_name.clone(),
            source,
        };

        std::fs::create_dir_all(&self.dir).map_err(io_err)?;

        let contents = serde_json::to_string_pretty(record).map_err(|source| {
            StoreError::Corrupt {
                name: record.contract_name.clone(),
                source,
            }
        })?;

        std::fs::write(self.record_path(&record.contract_name), contents).map_err(io_err)
    }
}
