//! # Contribution engine
//!
//! The stage state machine. Timing is re-derived from the ledger clock on
//! every call:
//!
//! - started ⇔ `now >= start_time`
//! - ended   ⇔ `now >= end_time` or `funds_raised >= hard_cap`
//!
//! A purchase fills at most the active stage. Whatever exceeds the stage's
//! remaining room is handed back to the buyer inside the same call; the next
//! stage only opens through `activate_next_stage` once the current cap is
//! filled.

use soroban_sdk::{token, Address, Env};

use crate::ledger::IssuedAssetClient;
use crate::refund;
use crate::stages;
use crate::storage;
use crate::types::{Purchase, SaleConfig, SaleState};
use crate::whitelist;
use crate::Error;

pub fn has_started(config: &SaleConfig, now: u64) -> bool {
    now >= config.start_time
}

pub fn has_ended(config: &SaleConfig, state: &SaleState, now: u64) -> bool {
    state.finalized
        || now >= config.end_time
        || state.funds_raised >= stages::hard_cap(&config.stages)
}

pub fn soft_cap_reached(config: &SaleConfig, state: &SaleState) -> bool {
    state.funds_raised >= stages::soft_cap(&config.stages)
}

/// Execute a purchase of `value` paid by `buyer` for `beneficiary`.
///
/// State is committed before any outbound transfer; a failing mint or
/// transfer aborts the whole invocation.
pub fn buy(
    env: &Env,
    buyer: &Address,
    beneficiary: &Address,
    value: i128,
) -> Result<Purchase, Error> {
    let config = storage::load_config(env)?;
    let mut state = storage::load_state(env)?;
    let now = env.ledger().timestamp();

    if has_ended(&config, &state, now) {
        return Err(Error::AlreadyEnded);
    }
    if !has_started(&config, now) {
        return Err(Error::NotActive);
    }
    if state.paused {
        return Err(Error::Paused);
    }
    if !whitelist::can_contribute(env, beneficiary, value) {
        return Err(Error::NotWhitelisted);
    }
    if value < config.min_investment {
        return Err(Error::BelowMinimum);
    }
    if value > config.max_investment {
        return Err(Error::AboveMaximum);
    }

    let stage = stages::get(&config.stages, state.active_stage)?;
    let room = stages::room(&config.stages, state.active_stage, state.funds_raised)?;
    if room == 0 {
        return Err(Error::CapExceeded);
    }

    let accepted = value.min(room);
    let refunded = value - accepted;
    let units = stages::units_for(&stage, accepted)?;

    state.funds_raised = state
        .funds_raised
        .checked_add(accepted)
        .ok_or(Error::Overflow)?;
    state.escrowed = state
        .escrowed
        .checked_add(accepted)
        .ok_or(Error::Overflow)?;
    storage::save_state(env, &state);
    whitelist::record_spend(env, beneficiary, accepted)?;
    refund::record_deposit(env, buyer, accepted)?;

    let contract = env.current_contract_address();
    let payment = token::Client::new(env, &config.payment_token);
    payment.transfer(buyer, &contract, &value);
    IssuedAssetClient::new(env, &config.share_token).mint(beneficiary, &units);
    if refunded > 0 {
        payment.transfer(&contract, buyer, &refunded);
    }

    Ok(Purchase {
        stage: state.active_stage,
        accepted,
        refunded,
        units,
    })
}

/// Move to the next stage once the active one is filled.
///
/// Returns the new stage index and the funds raised so far.
pub fn activate_next_stage(env: &Env) -> Result<(u32, i128), Error> {
    let config = storage::load_config(env)?;
    let mut state = storage::load_state(env)?;

    if state.finalized {
        return Err(Error::AlreadyFinalized);
    }
    if has_ended(&config, &state, env.ledger().timestamp()) {
        return Err(Error::AlreadyEnded);
    }
    let current = stages::get(&config.stages, state.active_stage)?;
    if state.funds_raised < current.cap {
        return Err(Error::StageCapNotFilled);
    }
    let next = state.active_stage + 1;
    if next >= config.stages.len() {
        return Err(Error::NoNextStage);
    }

    state.active_stage = next;
    storage::save_state(env, &state);
    Ok((next, state.funds_raised))
}

/// Sweep the escrow to the operating wallet. Returns the swept amount.
pub fn withdraw(env: &Env) -> Result<(Address, i128), Error> {
    let config = storage::load_config(env)?;
    let mut state = storage::load_state(env)?;

    if !soft_cap_reached(&config, &state) {
        return Err(Error::SoftCapNotReached);
    }
    let amount = state.escrowed;
    if amount == 0 {
        return Ok((config.wallet, 0));
    }

    state.escrowed = 0;
    storage::save_state(env, &state);

    token::Client::new(env, &config.payment_token).transfer(
        &env.current_contract_address(),
        &config.wallet,
        &amount,
    );
    Ok((config.wallet, amount))
}

/// Debit the escrow for a refund paid out by the refund vault.
pub fn release_escrow(env: &Env, amount: i128) -> Result<(), Error> {
    let mut state = storage::load_state(env)?;
    state.escrowed = state
        .escrowed
        .checked_sub(amount)
        .filter(|left| *left >= 0)
        .ok_or(Error::Overflow)?;
    storage::save_state(env, &state);
    Ok(())
}

/// Toggle the pause flag. Only meaningful until the sale has ended.
pub fn set_paused(env: &Env, paused: bool) -> Result<(), Error> {
    let config = storage::load_config(env)?;
    let mut state = storage::load_state(env)?;
    if has_ended(&config, &state, env.ledger().timestamp()) {
        return Err(Error::AlreadyEnded);
    }
    match (state.paused, paused) {
        (true, true) => return Err(Error::Paused),
        (false, false) => return Err(Error::NotPaused),
        _ => {}
    }
    state.paused = paused;
    storage::save_state(env, &state);
    Ok(())
}
