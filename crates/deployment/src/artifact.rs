//! Compiled contract artifacts.
//!
//! Artifacts come out of the Solidity build as hardhat-format JSON files.
//! Only the creation bytecode is consumed here; the ABI is carried along
//! opaquely for the verification step.

use alloy_primitives::Bytes;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArtifactError {
    #[error("failed to read artifact {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse artifact {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("artifact {0} has empty bytecode (interface or abstract contract?)")]
    EmptyBytecode(String),
}

/// A compiled contract, as emitted by the Solidity toolchain.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    /// Contract name, e.g. "FundMe"
    pub contract_name: String,
    /// ABI, kept opaque
    pub abi: serde_json::Value,
    /// Creation bytecode (0x-prefixed hex in the artifact file)
    pub bytecode: Bytes,
}

impl ContractArtifact {
    /// Load an artifact from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let contents = std::fs::read_to_string(path).map_err(|source| ArtifactError::Read {
            path: display.clone(),
            source,
        })?;

        let artifact: Self =
            serde_json::from_str(&contents).map_err(|source| ArtifactError::Parse {
                path: display.clone(),
                source,
            })?;

        if artifact.bytecode.is_empty() {
            return Err(ArtifactError::EmptyBytecode(display));
        }

        Ok(artifact)
    }

    /// Assemble init code: creation bytecode followed by the ABI-encoded
    /// constructor arguments.
    pub fn init_code(&self, constructor_args: &Bytes) -> Bytes {
        let mut code = Vec::with_capacity(self.bytecode.len() + constructor_args.len());
        code.extend_from_slice(&self.bytecode);
        code.extend_from_slice(constructor_args);
        Bytes::from(code)
    }
}
