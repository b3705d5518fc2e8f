//! # Storage
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key               | Type      | Description                                |
//! |-------------------|-----------|--------------------------------------------|
//! | `Admin`           | `Address` | Sole minter and lock toggler (the sale)    |
//! | `TotalSupply`     | `i128`    | Sum of all minted units                    |
//! | `TransfersLocked` | `bool`    | Global transfer lock                       |
//! | `MintingFinished` | `bool`    | Supply is frozen once set                  |
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key             | Type   | Description        |
//! |-----------------|--------|--------------------|
//! | `Balance(addr)` | `i128` | Holder balance     |

use soroban_sdk::{contracttype, Address, Env};

const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const BALANCE_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    TotalSupply,
    TransfersLocked,
    MintingFinished,
    Balance(Address),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
    bump_instance(env);
}

pub fn get_admin(env: &Env) -> Option<Address> {
    bump_instance(env);
    env.storage().instance().get(&DataKey::Admin)
}

pub fn total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&DataKey::TotalSupply, &supply);
    bump_instance(env);
}

pub fn transfers_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::TransfersLocked)
        .unwrap_or(true)
}

pub fn set_transfers_locked(env: &Env, locked: bool) {
    env.storage()
        .instance()
        .set(&DataKey::TransfersLocked, &locked);
    bump_instance(env);
}

pub fn minting_finished(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::MintingFinished)
        .unwrap_or(false)
}

pub fn set_minting_finished(env: &Env) {
    env.storage()
        .instance()
        .set(&DataKey::MintingFinished, &true);
    bump_instance(env);
}

/// Read a holder balance; absent entries are zero.
pub fn balance(env: &Env, id: &Address) -> i128 {
    let key = DataKey::Balance(id.clone());
    let value: Option<i128> = env.storage().persistent().get(&key);
    match value {
        Some(balance) => {
            env.storage().persistent().extend_ttl(
                &key,
                BALANCE_LIFETIME_THRESHOLD,
                BALANCE_BUMP_AMOUNT,
            );
            balance
        }
        None => 0,
    }
}

pub fn set_balance(env: &Env, id: &Address, amount: i128) {
    let key = DataKey::Balance(id.clone());
    env.storage().persistent().set(&key, &amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}
