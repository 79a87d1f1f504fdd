//! Price feed aggregator bindings.

use alloy_sol_types::sol;

sol! {
    /// Mock Chainlink V3 aggregator deployed on development chains.
    ///
    /// Constructed with `(decimals, initialAnswer)`; the answer can be
    /// moved mid-test via `updateAnswer`.
    #[sol(rpc)]
    interface MockV3Aggregator {
        /// Feed decimals
        function decimals() external view returns (uint8);

        /// Latest answer as set at construction or via updateAnswer
        function latestAnswer() external view returns (int256);

        /// Overwrite the feed answer
        function updateAnswer(int256 answer) external;
    }
}
