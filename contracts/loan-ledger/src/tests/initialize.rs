use common::WAD;
use loan_ledger_interface::types::interest_mode::InterestMode;
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::{vec, Address, Env, IntoVal, Symbol};

use super::sut::{
    create_ledger_contract, create_token_contract, init_ledger, ledger_config,
    COLLATERALIZATION_RATIO, INITIAL_PRICE, MINIMUM_LOAN_AMOUNT, PRINCIPAL, REWARD_FEE_BPS,
};

#[test]
fn should_store_configuration() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);

    assert_eq!(sut.ledger.owner(), sut.owner);
    assert_eq!(sut.ledger.stable_asset(), sut.stable.address);
    assert_eq!(sut.ledger.collateral_asset(), sut.collateral.address);
    assert_eq!(
        sut.ledger.collateralization_ratio(),
        COLLATERALIZATION_RATIO
    );
    assert_eq!(sut.ledger.minimum_loan_amount(), MINIMUM_LOAN_AMOUNT);
    assert_eq!(sut.ledger.reward_fee(), REWARD_FEE_BPS);
    assert_eq!(sut.ledger.get_native_price(), INITIAL_PRICE);
    assert_eq!(
        sut.ledger.ledger_configuration(),
        ledger_config(&sut.stable.address, &sut.collateral.address)
    );
    assert_eq!(sut.ledger.reward_pool(), 0);
    assert_eq!(sut.ledger.loan_count(), 0);
    assert_eq!(sut.ledger.version(), 1);
}

#[test]
fn should_emit_event() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let (stable, _) = create_token_contract(&env, &token_admin);
    let (collateral, _) = create_token_contract(&env, &token_admin);
    let ledger = create_ledger_contract(&env);

    ledger.initialize(
        &owner,
        &ledger_config(&stable.address, &collateral.address),
        &INITIAL_PRICE,
    );

    let event = env.events().all().pop_back_unchecked();

    assert_eq!(
        vec![&env, event],
        vec![
            &env,
            (
                ledger.address.clone(),
                (Symbol::new(&env, "initialize"), owner.clone()).into_val(&env),
                (
                    stable.address.clone(),
                    collateral.address.clone(),
                    COLLATERALIZATION_RATIO,
                    MINIMUM_LOAN_AMOUNT,
                    REWARD_FEE_BPS,
                    INITIAL_PRICE
                )
                    .into_val(&env)
            ),
        ]
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #0)")]
fn should_fail_when_already_initialized() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);

    sut.ledger.initialize(
        &sut.borrower,
        &ledger_config(&sut.stable.address, &sut.collateral.address),
        &INITIAL_PRICE,
    );
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #1)")]
fn should_fail_when_uninitialized() {
    let env = Env::default();
    env.mock_all_auths();

    let ledger = create_ledger_contract(&env);

    ledger.get_required_collateral_amount(&PRINCIPAL);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #103)")]
fn should_fail_when_ratio_below_full_collateralization() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let (stable, _) = create_token_contract(&env, &token_admin);
    let (collateral, _) = create_token_contract(&env, &token_admin);
    let ledger = create_ledger_contract(&env);

    let mut config = ledger_config(&stable.address, &collateral.address);
    config.collateralization_ratio = 50;

    ledger.initialize(&owner, &config, &INITIAL_PRICE);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #101)")]
fn should_fail_when_price_is_zero() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let (stable, _) = create_token_contract(&env, &token_admin);
    let (collateral, _) = create_token_contract(&env, &token_admin);
    let ledger = create_ledger_contract(&env);

    ledger.initialize(
        &owner,
        &ledger_config(&stable.address, &collateral.address),
        &0,
    );
}

#[test]
fn should_accept_capped_interest_mode() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let (stable, _) = create_token_contract(&env, &token_admin);
    let (collateral, _) = create_token_contract(&env, &token_admin);
    let ledger = create_ledger_contract(&env);

    let mut config = ledger_config(&stable.address, &collateral.address);
    config.interest_mode = InterestMode::CappedAtTerm;
    config.minimum_loan_amount = 100 * WAD;

    ledger.initialize(&owner, &config, &INITIAL_PRICE);

    assert_eq!(ledger.ledger_configuration(), config);
}
