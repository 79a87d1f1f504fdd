//! The contract-deployment primitive.
//!
//! This crate provides:
//! - Compiled-artifact loading (hardhat-format JSON: name, ABI, bytecode)
//! - Deployment records and an on-disk store keyed by contract name per chain
//! - A [`Deployer`] that submits the creation transaction and waits for
//!   confirmations

pub mod artifact;
pub mod deploy;
pub mod store;

pub use artifact::{ArtifactError, ContractArtifact};
pub use deploy::Deployer;
pub use store::{DeploymentRecord, DeploymentStore, StoreError};
