//! Static network table for FundMe deployments.
//!
//! Maps each supported chain ID to its name and the Chainlink ETH/USD
//! price feed the contract is constructed with.

use alloy_primitives::{address, Address};
use serde::Serialize;

/// Hardhat / anvil in-process chain.
pub const HARDHAT_CHAIN_ID: u64 = 31337;
/// Standalone localhost node (ganache and friends).
pub const LOCALHOST_CHAIN_ID: u64 = 1337;

/// Decimals reported by the mock price feed.
pub const MOCK_DECIMALS: u8 = 8;
/// Initial mock answer: 2000 USD at 8 decimals.
pub const MOCK_INITIAL_ANSWER: i64 = 200_000_000_000;

/// Name the mock feed is registered under in the deployment store.
pub const MOCK_AGGREGATOR_NAME: &str = "MockV3Aggregator";

/// A supported live network and its ETH/USD feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NetworkProfile {
    /// Chain ID
    pub chain_id: u64,
    /// Human-readable network name (also selects the explorer API host)
    pub name: &'static str,
    /// Chainlink ETH/USD price feed address
    pub eth_usd_price_feed: Address,
}

impl NetworkProfile {
    /// Ethereum mainnet.
    pub const fn mainnet() -> Self {
        Self {
            chain_id: 1,
            name: "mainnet",
            // https://etherscan.io/address/0x5f4eC3Df9cbd43714FE2740f5E3616155c5b8419
            eth_usd_price_feed: address!("0x5f4eC3Df9cbd43714FE2740f5E3616155c5b8419"),
        }
    }

    /// Goerli testnet.
    pub const fn goerli() -> Self {
        Self {
            chain_id: 5,
            name: "goerli",
            eth_usd_price_feed: address!("0xD4a33860578De61DBAbDc8BFdb98FD742fA7028e"),
        }
    }

    /// Sepolia testnet.
    pub const fn sepolia() -> Self {
        Self {
            chain_id: 11155111,
            name: "sepolia",
            // https://sepolia.etherscan.io/address/0x694AA1769357215DE4FAC081bf1f309aDC325306
            eth_usd_price_feed: address!("0x694AA1769357215DE4FAC081bf1f309aDC325306"),
        }
    }

    /// Look up the profile for a chain ID. `None` for unsupported chains.
    pub const fn for_chain(chain_id: u64) -> Option<Self> {
        match chain_id {
            1 => Some(Self::mainnet()),
            5 => Some(Self::goerli()),
            11155111 => Some(Self::sepolia()),
            _ => None,
        }
    }

    /// All supported live networks.
    pub const fn all() -> [Self; 3] {
        [Self::mainnet(), Self::goerli(), Self::sepolia()]
    }
}

/// Whether a chain ID belongs to an ephemeral development network.
///
/// Development networks get a freshly deployed mock feed instead of a
/// table entry, and never go through explorer verification.
pub const fn is_development_chain(chain_id: u64) -> bool {
    matches!(chain_id, HARDHAT_CHAIN_ID | LOCALHOST_CHAIN_ID)
}
