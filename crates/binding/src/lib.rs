//! Contract bindings for all external contracts.
//!
//! This crate consolidates the Solidity interfaces used across the project:
//! - The FundMe crowdfunding contract (fund/withdraw/query surface)
//! - The mock price feed deployed on development chains
//!
//! All bindings are generated using alloy's `sol!` macro. The contracts
//! themselves are compiled externally; only their interfaces live here.

pub mod aggregator;
pub mod fund_me;
