//! Refund vault.
//!
//! Every accepted contribution is recorded against the address that paid
//! it. The records only become claimable after `finish_crowdsale` has put
//! the sale into `Refunding`; a claim pays the full record once and zeroes
//! it.

use soroban_sdk::{token, Address, Env};

use crate::sale;
use crate::storage;
use crate::types::SaleOutcome;
use crate::Error;

pub fn deposited(env: &Env, payer: &Address) -> i128 {
    storage::load_deposit(env, payer)
}

pub fn record_deposit(env: &Env, payer: &Address, amount: i128) -> Result<(), Error> {
    let total = deposited(env, payer)
        .checked_add(amount)
        .ok_or(Error::Overflow)?;
    storage::save_deposit(env, payer, total);
    Ok(())
}

/// Pay `participant` back their recorded contribution. Returns the amount.
pub fn refund(env: &Env, participant: &Address) -> Result<i128, Error> {
    let config = storage::load_config(env)?;
    let state = storage::load_state(env)?;

    if sale::soft_cap_reached(&config, &state) {
        return Err(Error::SoftCapReached);
    }
    if state.outcome != SaleOutcome::Refunding {
        return Err(Error::TooEarly);
    }

    let amount = deposited(env, participant);
    if amount <= 0 {
        return Err(Error::NothingToRefund);
    }

    storage::save_deposit(env, participant, 0);
    sale::release_escrow(env, amount)?;

    token::Client::new(env, &config.payment_token).transfer(
        &env.current_contract_address(),
        participant,
        &amount,
    );
    Ok(amount)
}
