//! Whitelist ledger: per-participant allowance and accepted spend.
//!
//! Entries are never deleted. An allowance may be lowered, but never below
//! what the participant has already contributed.

use soroban_sdk::{Address, Env, Vec};

use crate::storage;
use crate::types::WhitelistEntry;
use crate::Error;

pub fn entry(env: &Env, participant: &Address) -> Option<WhitelistEntry> {
    storage::load_whitelist(env, participant)
}

/// Validate a new allowance against the participant's current entry.
fn updated_entry(
    env: &Env,
    participant: &Address,
    allowance: i128,
) -> Result<WhitelistEntry, Error> {
    if allowance < 0 {
        return Err(Error::InvalidAmount);
    }
    let spent = entry(env, participant).map(|e| e.spent).unwrap_or(0);
    if allowance < spent {
        return Err(Error::AllowanceBelowSpent);
    }
    Ok(WhitelistEntry { allowance, spent })
}

pub fn set_allowance(env: &Env, participant: &Address, allowance: i128) -> Result<(), Error> {
    let entry = updated_entry(env, participant, allowance)?;
    storage::save_whitelist(env, participant, &entry);
    Ok(())
}

/// Apply every pair or none: all entries are validated before the first write.
pub fn set_allowances(
    env: &Env,
    participants: &Vec<Address>,
    allowances: &Vec<i128>,
) -> Result<(), Error> {
    if participants.len() != allowances.len() {
        return Err(Error::LengthMismatch);
    }

    let mut entries: Vec<WhitelistEntry> = Vec::new(env);
    for (participant, allowance) in participants.iter().zip(allowances.iter()) {
        entries.push_back(updated_entry(env, &participant, allowance)?);
    }
    for (participant, entry) in participants.iter().zip(entries.iter()) {
        storage::save_whitelist(env, &participant, &entry);
    }
    Ok(())
}

pub fn can_contribute(env: &Env, participant: &Address, amount: i128) -> bool {
    match entry(env, participant) {
        Some(e) => e.allowance.saturating_sub(e.spent) >= amount,
        None => false,
    }
}

/// Charge `amount` of accepted contribution against the allowance.
pub fn record_spend(env: &Env, participant: &Address, amount: i128) -> Result<(), Error> {
    let mut entry = entry(env, participant).ok_or(Error::NotWhitelisted)?;
    entry.spent = entry.spent.checked_add(amount).ok_or(Error::Overflow)?;
    if entry.spent > entry.allowance {
        return Err(Error::NotWhitelisted);
    }
    storage::save_whitelist(env, participant, &entry);
    Ok(())
}
