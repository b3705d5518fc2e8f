//! # Share Token
//!
//! The issued-asset ledger driven by the staged sale. Deliberately small:
//!
//! | Operation                | Caller | Notes                                   |
//! |--------------------------|--------|-----------------------------------------|
//! | [`ShareToken::init`]     | admin  | once; sets the minting admin            |
//! | `mint`                   | admin  | rejected after `finish_minting`         |
//! | `set_transfers_locked`   | admin  | starts locked                           |
//! | `finish_minting`         | admin  | irreversible                            |
//! | `transfer`               | holder | rejected while transfers are locked     |
//! | `balance`, `total_supply`, `transfers_locked`, `minting_finished`, `admin` | queries | |
//!
//! There are no allowances. The sale contract is the admin; every balance
//! change on this ledger goes through one of the operations above.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, symbol_short, Address, Env};

mod storage;


#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidAmount = 3,
    InsufficientBalance = 4,
    TransfersLocked = 5,
    MintingFinished = 6,
    Overflow = 7,
}

#[contract]
pub struct ShareToken;

#[contractimpl]
impl ShareToken {
    /// Bind the ledger to its admin (the sale contract), which must
    /// authorize the call.
    pub fn init(env: Env, admin: Address) -> Result<(), Error> {
        admin.require_auth();
        if storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        storage::set_admin(&env, &admin);
        storage::set_transfers_locked(&env, true);
        Ok(())
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        storage::get_admin(&env).ok_or(Error::NotInitialized)
    }

    /// Create `amount` new units for `to`.
    pub fn mint(env: Env, to: Address, amount: i128) -> Result<(), Error> {
        Self::require_admin(&env)?;
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if storage::minting_finished(&env) {
            return Err(Error::MintingFinished);
        }

        let supply = storage::total_supply(&env)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        let balance = storage::balance(&env, &to)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        storage::set_total_supply(&env, supply);
        storage::set_balance(&env, &to, balance);

        env.events().publish((symbol_short!("mint"), to), amount);
        Ok(())
    }

    pub fn set_transfers_locked(env: Env, locked: bool) -> Result<(), Error> {
        Self::require_admin(&env)?;
        storage::set_transfers_locked(&env, locked);
        env.events().publish((symbol_short!("lock"),), locked);
        Ok(())
    }

    /// Freeze the supply. No later `mint` can succeed.
    pub fn finish_minting(env: Env) -> Result<(), Error> {
        Self::require_admin(&env)?;
        storage::set_minting_finished(&env);
        env.events()
            .publish((symbol_short!("mint_end"),), storage::total_supply(&env));
        Ok(())
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        if storage::transfers_locked(&env) {
            return Err(Error::TransfersLocked);
        }

        let from_balance = storage::balance(&env, &from);
        if from_balance < amount {
            return Err(Error::InsufficientBalance);
        }
        let to_balance = storage::balance(&env, &to)
            .checked_add(amount)
            .ok_or(Error::Overflow)?;
        storage::set_balance(&env, &from, from_balance - amount);
        storage::set_balance(&env, &to, to_balance);

        env.events()
            .publish((symbol_short!("transfer"), from, to), amount);
        Ok(())
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        storage::total_supply(&env)
    }

    pub fn transfers_locked(env: Env) -> bool {
        storage::transfers_locked(&env)
    }

    pub fn minting_finished(env: Env) -> bool {
        storage::minting_finished(&env)
    }

    fn require_admin(env: &Env) -> Result<(), Error> {
        let admin = storage::get_admin(env).ok_or(Error::NotInitialized)?;
        admin.require_auth();
        Ok(())
    }
}
