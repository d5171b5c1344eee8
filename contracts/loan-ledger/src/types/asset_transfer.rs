use loan_ledger_interface::types::error::Error;
use soroban_sdk::{assert_with_error, token, Address, Env};

/// Moves one asset between accounts and the ledger's own balance
pub struct AssetTransfer<'a> {
    env: &'a Env,
    token: token::Client<'a>,
}

impl<'a> AssetTransfer<'a> {
    pub fn new(env: &'a Env, asset: &Address) -> Self {
        Self {
            env,
            token: token::Client::new(env, asset),
        }
    }

    /// Transfer authorized directly by `from`
    pub fn receive(&self, from: &Address, amount: i128) {
        if amount == 0 {
            return;
        }

        self.require_balance(from, amount);

        self.token
            .transfer(from, &self.env.current_contract_address(), &amount);
    }

    /// Transfer against an allowance previously granted to the ledger by `from`
    pub fn pull(&self, from: &Address, amount: i128) {
        if amount == 0 {
            return;
        }

        let ledger = self.env.current_contract_address();

        assert_with_error!(
            self.env,
            self.token.allowance(from, &ledger) >= amount,
            Error::InsufficientAllowance
        );
        self.require_balance(from, amount);

        self.token.transfer_from(&ledger, from, &ledger, &amount);
    }

    pub fn push(&self, to: &Address, amount: i128) {
        if amount == 0 {
            return;
        }

        self.token
            .transfer(&self.env.current_contract_address(), to, &amount);
    }

    fn require_balance(&self, who: &Address, amount: i128) {
        assert_with_error!(
            self.env,
            self.token.balance(who) >= amount,
            Error::InsufficientBalance
        );
    }
}
