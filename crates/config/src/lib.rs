//! Configuration data for the FundMe deployment tooling.
//!
//! This crate provides:
//! - The static chain ID -> network/price-feed table
//! - Development-chain classification
//! - Mock price feed constants

pub mod network;

pub use network::{
    is_development_chain, NetworkProfile, HARDHAT_CHAIN_ID, LOCALHOST_CHAIN_ID,
    MOCK_AGGREGATOR_NAME, MOCK_DECIMALS, MOCK_INITIAL_ANSWER,
};
