//! # Storage
//!
//! Provides typed helpers over Soroban's two storage tiers used by the sale:
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key              | Type              | Description                           |
//! |------------------|-------------------|---------------------------------------|
//! | `Admin`          | `Address`         | Single administrative identity        |
//! | `Config`         | `SaleConfig`      | Immutable configuration               |
//! | `State`          | `SaleState`       | Mutable sale state                    |
//! | `TeamVesting`    | `VestingSchedule` | Seeded at successful finalization     |
//! | `AdvisorVesting` | `VestingSchedule` | Seeded at successful finalization     |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                | Type             | Description                         |
//! |--------------------|------------------|-------------------------------------|
//! | `Whitelist(addr)`  | `WhitelistEntry` | Allowance and accepted spend        |
//! | `Deposit(addr)`    | `i128`           | Refundable contribution of a payer  |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! Config and State are split so that purchases rewrite only the small state
//! entry and never the stage table or wallet list.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{SaleConfig, SaleState, VestingPool, VestingSchedule, WhitelistEntry};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Administrative identity (Instance).
    Admin,
    /// Immutable sale configuration (Instance).
    Config,
    /// Mutable sale state (Instance).
    State,
    /// Team vesting schedule (Instance).
    TeamVesting,
    /// Advisor vesting schedule (Instance).
    AdvisorVesting,
    /// Whitelist entry keyed by participant (Persistent).
    Whitelist(Address),
    /// Refundable contribution keyed by payer (Persistent).
    Deposit(Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

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

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn save_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    bump_instance(env);
}

pub fn load_config(env: &Env) -> Result<SaleConfig, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn save_state(env: &Env, state: &SaleState) {
    env.storage().instance().set(&DataKey::State, state);
    bump_instance(env);
}

pub fn load_state(env: &Env) -> Result<SaleState, Error> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::State)
        .ok_or(Error::NotInitialized)
}

fn vesting_key(pool: VestingPool) -> DataKey {
    match pool {
        VestingPool::Team => DataKey::TeamVesting,
        VestingPool::Advisors => DataKey::AdvisorVesting,
    }
}

pub fn save_vesting(env: &Env, pool: VestingPool, schedule: &VestingSchedule) {
    env.storage().instance().set(&vesting_key(pool), schedule);
    bump_instance(env);
}

/// `None` until a successful finalization seeds the schedule.
pub fn load_vesting(env: &Env, pool: VestingPool) -> Option<VestingSchedule> {
    bump_instance(env);
    env.storage().instance().get(&vesting_key(pool))
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn load_whitelist(env: &Env, participant: &Address) -> Option<WhitelistEntry> {
    let key = DataKey::Whitelist(participant.clone());
    let entry: Option<WhitelistEntry> = env.storage().persistent().get(&key);
    if entry.is_some() {
        bump_persistent(env, &key);
    }
    entry
}

pub fn save_whitelist(env: &Env, participant: &Address, entry: &WhitelistEntry) {
    let key = DataKey::Whitelist(participant.clone());
    env.storage().persistent().set(&key, entry);
    bump_persistent(env, &key);
}

pub fn load_deposit(env: &Env, payer: &Address) -> i128 {
    let key = DataKey::Deposit(payer.clone());
    let amount: Option<i128> = env.storage().persistent().get(&key);
    match amount {
        Some(amount) => {
            bump_persistent(env, &key);
            amount
        }
        None => 0,
    }
}

pub fn save_deposit(env: &Env, payer: &Address, amount: i128) {
    let key = DataKey::Deposit(payer.clone());
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}
