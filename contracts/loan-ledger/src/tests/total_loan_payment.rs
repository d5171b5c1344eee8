use common::WAD;
use loan_ledger_interface::types::interest_mode::InterestMode;
use loan_ledger_interface::types::loan_payment::LoanPayment;
use soroban_sdk::Env;

use super::sut::{
    active_loan, approve_repayment, fund_loan, init_ledger, request_loan, set_time, DAY,
    DURATION, LENDER_STABLE, PRINCIPAL, START,
};

#[test]
fn should_be_principal_while_requested() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);
    let loan_id = request_loan(&sut);

    set_time(&env, START + 10 * DAY);

    assert_eq!(
        sut.ledger.get_total_loan_payment(&loan_id),
        LoanPayment {
            total: PRINCIPAL,
            principal: PRINCIPAL,
            interest: 0,
        }
    );
}

#[test]
fn should_accrue_interest_pro_rata() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);
    let loan_id = active_loan(&env, &sut);

    assert_eq!(sut.ledger.get_total_loan_payment(&loan_id).interest, 0);

    set_time(&env, START + 15 * DAY);

    assert_eq!(
        sut.ledger.get_total_loan_payment(&loan_id),
        LoanPayment {
            total: 1025 * WAD,
            principal: PRINCIPAL,
            interest: 25 * WAD,
        }
    );
}

#[test]
fn should_accrue_from_funding_time() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);
    let loan_id = request_loan(&sut);

    set_time(&env, START + 15 * DAY);
    fund_loan(&env, &sut, loan_id);

    set_time(&env, START + 30 * DAY);

    assert_eq!(
        sut.ledger.get_total_loan_payment(&loan_id).interest,
        25 * WAD
    );
}

#[test]
fn should_keep_accruing_past_term_when_uncapped() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);
    let loan_id = active_loan(&env, &sut);

    set_time(&env, START + 2 * DURATION);

    assert_eq!(sut.ledger.get_total_loan_payment(&loan_id).total, 1100 * WAD);
}

#[test]
fn should_stop_accruing_at_term_when_capped() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);
    sut.ledger
        .update_interest_mode(&sut.owner, &InterestMode::CappedAtTerm);
    let loan_id = active_loan(&env, &sut);

    set_time(&env, START + 2 * DURATION);

    assert_eq!(sut.ledger.get_total_loan_payment(&loan_id).total, 1050 * WAD);
}

#[test]
fn should_keep_interest_mode_of_funded_loan() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);
    let loan_id = active_loan(&env, &sut);

    set_time(&env, START + 2 * DURATION);
    approve_repayment(&env, &sut, 1100 * WAD);
    sut.ledger
        .make_partial_repayment(&sut.borrower, &loan_id, &(1100 * WAD));

    sut.ledger
        .update_interest_mode(&sut.owner, &InterestMode::CappedAtTerm);

    assert_eq!(sut.ledger.get_total_loan_payment(&loan_id).total, 1100 * WAD);
    assert_eq!(
        sut.ledger.loans_core(&loan_id).interest_mode,
        InterestMode::Uncapped
    );

    sut.ledger.repay_loan_with_reward(&sut.borrower, &loan_id);

    // 10% of the 100 interest stays with the ledger
    assert_eq!(
        sut.stable.balance(&sut.lender),
        LENDER_STABLE - PRINCIPAL + 1090 * WAD
    );
    assert_eq!(sut.ledger.reward_pool(), 10 * WAD);
}

#[test]
fn should_pin_interest_mode_at_request() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);
    let loan_id = request_loan(&sut);

    sut.ledger
        .update_interest_mode(&sut.owner, &InterestMode::CappedAtTerm);
    fund_loan(&env, &sut, loan_id);

    set_time(&env, START + 2 * DURATION);

    assert_eq!(sut.ledger.get_total_loan_payment(&loan_id).total, 1100 * WAD);
}

#[test]
fn should_ignore_partial_repayments() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);
    let loan_id = active_loan(&env, &sut);

    set_time(&env, START + 15 * DAY);
    approve_repayment(&env, &sut, 100 * WAD);
    sut.ledger
        .make_partial_repayment(&sut.borrower, &loan_id, &(100 * WAD));

    assert_eq!(sut.ledger.get_total_loan_payment(&loan_id).total, 1025 * WAD);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #302)")]
fn should_fail_when_repaid() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);
    let loan_id = active_loan(&env, &sut);

    approve_repayment(&env, &sut, PRINCIPAL);
    sut.ledger.repay_loan_with_reward(&sut.borrower, &loan_id);

    sut.ledger.get_total_loan_payment(&loan_id);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #300)")]
fn should_fail_when_loan_not_found() {
    let env = Env::default();
    env.mock_all_auths();

    let sut = init_ledger(&env);

    sut.ledger.get_total_loan_payment(&7);
}
