//! Unit test harness for the FundMe contract.
//!
//! Deploys a fresh mock price feed plus FundMe on a local development
//! chain and exercises fund/withdraw/query behavior. Mutually exclusive
//! with the staging harness: these tests refuse non-development chains.
//!
//! Run with a local node (e.g. `anvil`) and compiled artifacts in place:
//! ```bash
//! cargo test --package deployer --test fund_me -- --ignored
//! ```

use alloy_primitives::{
    utils::{format_ether, parse_ether},
    Address, U256,
};
use alloy_provider::Provider;
use binding::{aggregator::MockV3Aggregator, fund_me::FundMe};
use config::{is_development_chain, MOCK_DECIMALS, MOCK_INITIAL_ANSWER};
use deployer::config::Config;
use setup::{address_of, load_test_config_isolated, setup_wallet_provider, DEV_KEYS};

/// Deploy a fresh mock feed + FundMe pair and return their addresses.
///
/// Panics when pointed at anything but a development chain.
async fn fresh_deployment(tag: &str) -> (Config, Address, Address) {
    let config = load_test_config_isolated(tag);
    let provider = setup_wallet_provider(&config.rpc_url, DEV_KEYS[0]);

    let chain_id = provider.get_chain_id().await.expect("chain id");
    assert!(
        is_development_chain(chain_id),
        "unit harness only runs against development chains, got chain {chain_id}"
    );

    let mock = deployer::deploy_mocks(provider.clone(), &config)
        .await
        .expect("mock feed deployment");
    let fund_me = deployer::deploy_fund_me(provider, &config, None)
        .await
        .expect("FundMe deployment");

    (config, fund_me.address, mock.address)
}

/// Gas actually paid for a transaction, from its receipt.
fn gas_cost(receipt: &alloy_rpc_types::TransactionReceipt) -> U256 {
    U256::from(receipt.gas_used) * U256::from(receipt.effective_gas_price)
}

#[tokio::test]
#[ignore = "requires a local anvil node and compiled contract artifacts"]
async fn constructor_wires_the_mock_feed() {
    let (config, fund_me_address, mock_address) = fresh_deployment("constructor").await;
    let provider = setup_wallet_provider(&config.rpc_url, DEV_KEYS[0]);
    let fund_me = FundMe::new(fund_me_address, &provider);

    let price_feed = fund_me.getPriceFeed().call().await.expect("getPriceFeed");
    assert_eq!(price_feed, mock_address);

    // The mock itself reports the seeded round data.
    let mock = MockV3Aggregator::new(mock_address, &provider);
    assert_eq!(mock.decimals().call().await.expect("decimals"), MOCK_DECIMALS);
    let answer = mock.latestAnswer().call().await.expect("latestAnswer");
    assert_eq!(answer, alloy_primitives::I256::try_from(MOCK_INITIAL_ANSWER).unwrap());
}

#[tokio::test]
#[ignore = "requires a local anvil node and compiled contract artifacts"]
async fn fund_below_minimum_reverts_with_reason() {
    let (config, fund_me_address, _) = fresh_deployment("underfunded").await;
    let provider = setup_wallet_provider(&config.rpc_url, DEV_KEYS[0]);
    let fund_me = FundMe::new(fund_me_address, &provider);

    // No value at all is far below the contract's USD minimum.
    let err = fund_me
        .fund()
        .send()
        .await
        .expect_err("underfunded fund() must revert");

    assert!(
        err.to_string().contains("Didn't send enough"),
        "revert reason not surfaced: {err}"
    );
}

#[tokio::test]
#[ignore = "requires a local anvil node and compiled contract artifacts"]
async fn fund_updates_ledger_and_funder_list() {
    let (config, fund_me_address, _) = fresh_deployment("ledger").await;
    let provider = setup_wallet_provider(&config.rpc_url, DEV_KEYS[0]);
    let funder = address_of(DEV_KEYS[0]);
    let fund_me = FundMe::new(fund_me_address, &provider);
    let send_value = parse_ether("1").unwrap();

    fund_me
        .fund()
        .value(send_value)
        .send()
        .await
        .expect("fund() send")
        .get_receipt()
        .await
        .expect("fund() receipt");

    let funded = fund_me
        .getAddressToAmountFunded(funder)
        .call()
        .await
        .expect("getAddressToAmountFunded");
    assert_eq!(funded, send_value);

    let first_funder = fund_me
        .getFunder(U256::ZERO)
        .call()
        .await
        .expect("getFunder(0)");
    assert_eq!(first_funder, funder);
}

#[tokio::test]
#[ignore = "requires a local anvil node and compiled contract artifacts"]
async fn withdraw_moves_the_full_balance_to_the_owner() {
    let (config, fund_me_address, _) = fresh_deployment("withdraw-single").await;
    let provider = setup_wallet_provider(&config.rpc_url, DEV_KEYS[0]);
    let owner = address_of(DEV_KEYS[0]);
    let fund_me = FundMe::new(fund_me_address, &provider);
    let send_value = parse_ether("1").unwrap();

    fund_me
        .fund()
        .value(send_value)
        .send()
        .await
        .expect("fund() send")
        .get_receipt()
        .await
        .expect("fund() receipt");

    let contract_before = provider.get_balance(fund_me_address).await.unwrap();
    let owner_before = provider.get_balance(owner).await.unwrap();

    let receipt = fund_me
        .withdraw()
        .send()
        .await
        .expect("withdraw() send")
        .get_receipt()
        .await
        .expect("withdraw() receipt");

    let contract_after = provider.get_balance(fund_me_address).await.unwrap();
    let owner_after = provider.get_balance(owner).await.unwrap();

    assert_eq!(contract_after, U256::ZERO);
    // The owner gets the whole prior contract balance back, net of gas.
    assert_eq!(
        owner_after + gas_cost(&receipt),
        owner_before + contract_before,
        "balance not conserved (contract held {} ETH)",
        format_ether(contract_before)
    );
}

#[tokio::test]
#[ignore = "requires a local anvil node and compiled contract artifacts"]
async fn withdraw_resets_every_funder() {
    let (config, fund_me_address, _) = fresh_deployment("withdraw-multi").await;
    let owner_provider = setup_wallet_provider(&config.rpc_url, DEV_KEYS[0]);
    let owner = address_of(DEV_KEYS[0]);
    let send_value = parse_ether("1").unwrap();

    // Five distinct funders, same contribution each.
    for key in &DEV_KEYS[1..6] {
        let funder_provider = setup_wallet_provider(&config.rpc_url, key);
        FundMe::new(fund_me_address, &funder_provider)
            .fund()
            .value(send_value)
            .send()
            .await
            .expect("fund() send")
            .get_receipt()
            .await
            .expect("fund() receipt");
    }

    let fund_me = FundMe::new(fund_me_address, &owner_provider);
    let contract_before = owner_provider.get_balance(fund_me_address).await.unwrap();
    let owner_before = owner_provider.get_balance(owner).await.unwrap();
    assert_eq!(contract_before, send_value * U256::from(5));

    let receipt = fund_me
        .withdraw()
        .send()
        .await
        .expect("withdraw() send")
        .get_receipt()
        .await
        .expect("withdraw() receipt");

    let contract_after = owner_provider.get_balance(fund_me_address).await.unwrap();
    let owner_after = owner_provider.get_balance(owner).await.unwrap();

    assert_eq!(contract_after, U256::ZERO);
    assert_eq!(
        owner_after + gas_cost(&receipt),
        owner_before + contract_before
    );

    // The funder list is cleared...
    assert!(
        fund_me.getFunder(U256::ZERO).call().await.is_err(),
        "funder list should be empty after withdraw"
    );

    // ...and every ledger entry is zeroed.
    for key in &DEV_KEYS[1..6] {
        let funded = fund_me
            .getAddressToAmountFunded(address_of(key))
            .call()
            .await
            .expect("getAddressToAmountFunded");
        assert_eq!(funded, U256::ZERO);
    }
}

#[tokio::test]
#[ignore = "requires a local anvil node and compiled contract artifacts"]
async fn withdraw_by_non_owner_reverts() {
    let (config, fund_me_address, _) = fresh_deployment("withdraw-attacker").await;
    let owner_provider = setup_wallet_provider(&config.rpc_url, DEV_KEYS[0]);
    let send_value = parse_ether("1").unwrap();

    FundMe::new(fund_me_address, &owner_provider)
        .fund()
        .value(send_value)
        .send()
        .await
        .expect("fund() send")
        .get_receipt()
        .await
        .expect("fund() receipt");

    let attacker_provider = setup_wallet_provider(&config.rpc_url, DEV_KEYS[1]);
    let as_attacker = FundMe::new(fund_me_address, &attacker_provider);

    assert!(
        as_attacker.withdraw().send().await.is_err(),
        "withdraw must be owner-only"
    );

    // The contract keeps its balance.
    let contract_balance = owner_provider.get_balance(fund_me_address).await.unwrap();
    assert_eq!(contract_balance, send_value);
}
