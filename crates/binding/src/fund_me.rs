//! FundMe contract bindings.

use alloy_sol_types::sol;

sol! {
    /// Crowdfunding contract priced against an ETH/USD feed.
    ///
    /// The contract enforces a minimum USD-denominated contribution and
    /// only lets its owner withdraw. Both rules live in the contract;
    /// callers observe them as reverts.
    #[sol(rpc)]
    interface FundMe {
        /// Contribute ETH. Reverts with "Didn't send enough" below the
        /// contract's minimum USD value.
        function fund() external payable;

        /// Withdraw the full contract balance. Owner only; resets the
        /// funder list and every per-address funded amount.
        function withdraw() external;

        /// Price feed the contract was constructed with.
        function getPriceFeed() external view returns (address);

        /// Funder address at a position in the funder list. Reverts when
        /// the index is out of range.
        function getFunder(uint256 index) external view returns (address);

        /// Cumulative amount contributed by an address.
        function getAddressToAmountFunded(address funder) external view returns (uint256);
    }
}
