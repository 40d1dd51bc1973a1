use crate::errors::Error;
use soroban_sdk::{contracttype, token, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Receipt {
    pub amount: i128,
    pub ledger: u32,
}

/// Moves value between the ledger's custody and outside accounts.
pub trait Settlement {
    fn transfer_in(&self, from: &Address, amount: i128) -> Result<Receipt, Error>;
    fn transfer_out(&self, to: &Address, amount: i128) -> Result<Receipt, Error>;
    fn balance_of(&self, account: &Address) -> i128;
}

/// Settlement over a token contract implementing the standard token
/// interface, with the ledger contract itself as custodian.
pub struct TokenSettlement<'a> {
    env: &'a Env,
    client: token::Client<'a>,
}

impl<'a> TokenSettlement<'a> {
    pub fn new(env: &'a Env, token: &Address) -> Self {
        TokenSettlement {
            env,
            client: token::Client::new(env, token),
        }
    }

    fn move_token(&self, from: &Address, to: &Address, amount: i128) -> Result<Receipt, Error> {
        match self.client.try_transfer(from, to, &amount) {
            Ok(Ok(())) => Ok(Receipt {
                amount,
                ledger: self.env.ledger().sequence(),
            }),
            _ => Err(Error::TransferFailed),
        }
    }
}

impl<'a> Settlement for TokenSettlement<'a> {
    fn transfer_in(&self, from: &Address, amount: i128) -> Result<Receipt, Error> {
        self.move_token(from, &self.env.current_contract_address(), amount)
    }

    fn transfer_out(&self, to: &Address, amount: i128) -> Result<Receipt, Error> {
        self.move_token(&self.env.current_contract_address(), to, amount)
    }

    fn balance_of(&self, account: &Address) -> i128 {
        self.client.balance(account)
    }
}
