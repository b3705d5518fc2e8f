//! # Staged Sale Contract
//!
//! A capped, whitelisted crowdsale that sells a freshly issued asset through
//! an ordered table of price stages, then either finalizes (reserved pools
//! minted, team/advisor tokens vested by cliff) or opens refunds when the
//! soft cap was missed.
//!
//! | Phase         | Entry Point(s)                                            |
//! |---------------|-----------------------------------------------------------|
//! | Bootstrap     | [`StagedSale::init`], `transfer_admin`                    |
//! | Whitelist     | `add_whitelist`, `add_whitelist_bulk`, `can_contribute`   |
//! | Contribution  | [`StagedSale::buy_tokens`], `activate_next_stage`, `pause`, `unpause` |
//! | Treasury      | `withdraw`                                                |
//! | Finalization  | [`StagedSale::finish_crowdsale`]                          |
//! | Refunds       | [`StagedSale::refund`]                                    |
//! | Vesting       | `withdraw_core_team_tokens`, `withdraw_advisor_tokens`    |
//! | Queries       | `has_started`, `has_ended`, `soft_cap_reached`, `funds_raised`, `active_stage`, `vested_team`, `vested_advisors`, … |
//!
//! ## Architecture
//!
//! Authorization lives in [`admin`], timing and stage logic in [`sale`],
//! reserved-pool minting in [`finalize`], the refund records in [`refund`],
//! cliff vesting in [`vesting`]. Storage access is fully delegated to
//! [`storage`]. The issued asset is reached only through
//! [`ledger::IssuedAssetClient`]. This file holds the public entry points and
//! event emissions.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, Vec};

mod admin;
mod config;
pub mod events;
mod finalize;
pub mod ledger;
mod refund;
mod sale;
mod stages;
mod storage;
mod types;
mod vesting;
mod whitelist;

#[cfg(test)]
mod invariants;
#[cfg(test)]
mod test_events;
#[cfg(test)]
mod test_finalize;
#[cfg(test)]
mod test_vesting;

pub use types::{
    AllocationTable, Purchase, ReservedPools, SaleConfig, SaleOutcome, SaleState, Stage, Tranche,
    VestedTranche, VestingPool, VestingSchedule, WhitelistEntry,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    Unauthorized = 1,
    NotActive = 2,
    AlreadyEnded = 3,
    TooEarly = 4,
    NotWhitelisted = 5,
    BelowMinimum = 6,
    CapExceeded = 7,
    StageCapNotFilled = 8,
    AlreadyFinalized = 9,
    SoftCapReached = 10,
    NothingToRefund = 11,
    AlreadyInitialized = 12,
    NotInitialized = 13,
    InvalidConfig = 14,
    InvalidAmount = 15,
    Paused = 16,
    NotPaused = 17,
    AboveMaximum = 18,
    NoNextStage = 19,
    SoftCapNotReached = 20,
    AllowanceBelowSpent = 21,
    LengthMismatch = 22,
    NotVesting = 23,
    TrancheNotFound = 24,
    Overflow = 25,
    StageNotFound = 26,
}

#[contract]
pub struct StagedSale;

#[contractimpl]
impl StagedSale {
    // ─────────────────────────────────────────────────────────
    // Initialisation
    // ─────────────────────────────────────────────────────────

    /// Initialise the sale with its administrator and configuration.
    ///
    /// Must be called exactly once immediately after deployment; later calls
    /// fail with `Error::AlreadyInitialized`. An inconsistent configuration
    /// fails with `Error::InvalidConfig`.
    ///
    /// The share token named in `config` is bound to this contract as its
    /// admin here; a ledger already bound elsewhere fails with
    /// `Error::AlreadyInitialized`.
    pub fn init(env: Env, admin: Address, config: SaleConfig) -> Result<(), Error> {
        admin.require_auth();
        if storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        config::validate(&config)?;

        let shares = ledger::IssuedAssetClient::new(&env, &config.share_token);
        if !matches!(
            shares.try_init(&env.current_contract_address()),
            Ok(Ok(()))
        ) {
            return Err(Error::AlreadyInitialized);
        }

        storage::set_admin(&env, &admin);
        storage::save_config(&env, &config);
        storage::save_state(&env, &SaleState::new());

        events::emit_sale_initialized(
            &env,
            events::SaleInitialized {
                admin,
                start_time: config.start_time,
                end_time: config.end_time,
                soft_cap: stages::soft_cap(&config.stages),
                hard_cap: stages::hard_cap(&config.stages),
            },
        );
        Ok(())
    }

    /// Hand the administrative role to `new_admin`.
    pub fn transfer_admin(env: Env, admin: Address, new_admin: Address) -> Result<(), Error> {
        let previous = admin::transfer(&env, &admin, &new_admin)?;
        events::emit_admin_transferred(&env, previous, new_admin);
        Ok(())
    }

    pub fn admin(env: Env) -> Result<Address, Error> {
        storage::get_admin(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Whitelist
    // ─────────────────────────────────────────────────────────

    /// Set `participant`'s cumulative contribution allowance.
    ///
    /// The allowance may not drop below what the participant already
    /// contributed (`Error::AllowanceBelowSpent`).
    pub fn add_whitelist(
        env: Env,
        admin: Address,
        participant: Address,
        allowance: i128,
    ) -> Result<(), Error> {
        admin::require_admin(&env, &admin)?;
        whitelist::set_allowance(&env, &participant, allowance)?;
        events::emit_whitelisted(&env, participant, allowance);
        Ok(())
    }

    /// Pairwise `add_whitelist` over two equal-length vectors.
    pub fn add_whitelist_bulk(
        env: Env,
        admin: Address,
        participants: Vec<Address>,
        allowances: Vec<i128>,
    ) -> Result<(), Error> {
        admin::require_admin(&env, &admin)?;
        whitelist::set_allowances(&env, &participants, &allowances)?;
        for (participant, allowance) in participants.iter().zip(allowances.iter()) {
            events::emit_whitelisted(&env, participant, allowance);
        }
        Ok(())
    }

    /// `true` iff `participant`'s remaining allowance covers `amount`.
    pub fn can_contribute(env: Env, participant: Address, amount: i128) -> bool {
        whitelist::can_contribute(&env, &participant, amount)
    }

    pub fn whitelist_entry(env: Env, participant: Address) -> Option<WhitelistEntry> {
        whitelist::entry(&env, &participant)
    }

    // ─────────────────────────────────────────────────────────
    // Contribution
    // ─────────────────────────────────────────────────────────

    /// Buy issued units for `beneficiary`, paid by `buyer`.
    ///
    /// At most the active stage's remaining room is accepted; the rest of
    /// `value` is returned to `buyer` in the same call. Units are minted at
    /// the active stage's rate.
    pub fn buy_tokens(
        env: Env,
        buyer: Address,
        beneficiary: Address,
        value: i128,
    ) -> Result<Purchase, Error> {
        buyer.require_auth();
        let purchase = sale::buy(&env, &buyer, &beneficiary, value)?;
        events::emit_tokens_purchased(&env, buyer, beneficiary, &purchase);
        Ok(purchase)
    }

    /// Open the next stage. Requires the current stage's cap to be filled.
    pub fn activate_next_stage(env: Env, admin: Address) -> Result<u32, Error> {
        admin::require_admin(&env, &admin)?;
        let (stage, funds_raised) = sale::activate_next_stage(&env)?;
        events::emit_stage_activated(&env, stage, funds_raised);
        Ok(stage)
    }

    pub fn pause(env: Env, admin: Address) -> Result<(), Error> {
        admin::require_admin(&env, &admin)?;
        sale::set_paused(&env, true)?;
        events::emit_paused(&env, admin);
        Ok(())
    }

    pub fn unpause(env: Env, admin: Address) -> Result<(), Error> {
        admin::require_admin(&env, &admin)?;
        sale::set_paused(&env, false)?;
        events::emit_unpaused(&env, admin);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────
    // Treasury
    // ─────────────────────────────────────────────────────────

    /// Sweep escrowed contributions to the operating wallet.
    ///
    /// Available any time after the soft cap is reached, repeatedly.
    /// Returns the swept amount.
    pub fn withdraw(env: Env, admin: Address) -> Result<i128, Error> {
        admin::require_admin(&env, &admin)?;
        let (wallet, amount) = sale::withdraw(&env)?;
        if amount > 0 {
            events::emit_funds_withdrawn(&env, wallet, amount);
        }
        Ok(amount)
    }

    // ─────────────────────────────────────────────────────────
    // Finalization & refunds
    // ─────────────────────────────────────────────────────────

    /// Close the sale. Callable once, after `has_ended`.
    pub fn finish_crowdsale(env: Env, admin: Address) -> Result<SaleOutcome, Error> {
        admin::require_admin(&env, &admin)?;
        let result = finalize::finish(&env)?;
        let outcome = if result.succeeded {
            SaleOutcome::Succeeded
        } else {
            SaleOutcome::Refunding
        };
        events::emit_sale_finalized(
            &env,
            events::SaleFinalized {
                succeeded: result.succeeded,
                funds_raised: result.funds_raised,
                total_supply: result.total_supply,
                pools: result.pools,
            },
        );
        Ok(outcome)
    }

    /// Return `participant`'s full contribution after a failed sale.
    pub fn refund(env: Env, participant: Address) -> Result<i128, Error> {
        participant.require_auth();
        let amount = refund::refund(&env, &participant)?;
        events::emit_refunded(&env, participant, amount);
        Ok(amount)
    }

    // ─────────────────────────────────────────────────────────
    // Vesting
    // ─────────────────────────────────────────────────────────

    /// Release newly vested team tokens to the team wallet.
    ///
    /// Nothing newly vested is a successful no-op returning 0.
    pub fn withdraw_core_team_tokens(env: Env, admin: Address) -> Result<i128, Error> {
        admin::require_admin(&env, &admin)?;
        Self::release(&env, VestingPool::Team)
    }

    /// Release newly vested advisor tokens to the bounty/advisor wallet.
    pub fn withdraw_advisor_tokens(env: Env, admin: Address) -> Result<i128, Error> {
        admin::require_admin(&env, &admin)?;
        Self::release(&env, VestingPool::Advisors)
    }

    /// Size of team tranche `index` (not netted against withdrawals).
    pub fn vested_team(env: Env, index: u32) -> Result<i128, Error> {
        vesting::vested_team(&env, index)
    }

    /// Size of the advisor pool (not netted against withdrawals).
    pub fn vested_advisors(env: Env) -> i128 {
        vesting::vested_advisors(&env)
    }

    pub fn team_withdrawn(env: Env) -> i128 {
        vesting::withdrawn(&env, VestingPool::Team)
    }

    pub fn advisors_withdrawn(env: Env) -> i128 {
        vesting::withdrawn(&env, VestingPool::Advisors)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    pub fn has_started(env: Env) -> Result<bool, Error> {
        let config = storage::load_config(&env)?;
        Ok(sale::has_started(&config, env.ledger().timestamp()))
    }

    pub fn has_ended(env: Env) -> Result<bool, Error> {
        let config = storage::load_config(&env)?;
        let state = storage::load_state(&env)?;
        Ok(sale::has_ended(&config, &state, env.ledger().timestamp()))
    }

    pub fn soft_cap_reached(env: Env) -> Result<bool, Error> {
        let config = storage::load_config(&env)?;
        let state = storage::load_state(&env)?;
        Ok(sale::soft_cap_reached(&config, &state))
    }

    pub fn funds_raised(env: Env) -> Result<i128, Error> {
        Ok(storage::load_state(&env)?.funds_raised)
    }

    pub fn active_stage(env: Env) -> Result<u32, Error> {
        Ok(storage::load_state(&env)?.active_stage)
    }

    pub fn escrowed(env: Env) -> Result<i128, Error> {
        Ok(storage::load_state(&env)?.escrowed)
    }

    pub fn is_paused(env: Env) -> Result<bool, Error> {
        Ok(storage::load_state(&env)?.paused)
    }

    pub fn is_finalized(env: Env) -> Result<bool, Error> {
        Ok(storage::load_state(&env)?.finalized)
    }

    pub fn outcome(env: Env) -> Result<SaleOutcome, Error> {
        Ok(storage::load_state(&env)?.outcome)
    }

    pub fn state(env: Env) -> Result<SaleState, Error> {
        storage::load_state(&env)
    }

    pub fn config(env: Env) -> Result<SaleConfig, Error> {
        storage::load_config(&env)
    }

    pub fn stage(env: Env, index: u32) -> Result<Stage, Error> {
        let config = storage::load_config(&env)?;
        stages::get(&config.stages, index)
    }

    pub fn stage_count(env: Env) -> Result<u32, Error> {
        Ok(storage::load_config(&env)?.stages.len())
    }

    pub fn soft_cap(env: Env) -> Result<i128, Error> {
        Ok(stages::soft_cap(&storage::load_config(&env)?.stages))
    }

    pub fn hard_cap(env: Env) -> Result<i128, Error> {
        Ok(stages::hard_cap(&storage::load_config(&env)?.stages))
    }

    /// Refundable contribution recorded for `payer`.
    pub fn deposited(env: Env, payer: Address) -> i128 {
        refund::deposited(&env, &payer)
    }

    /// Issued-asset balance of `id`, read from the ledger.
    pub fn balance_of(env: Env, id: Address) -> Result<i128, Error> {
        let config = storage::load_config(&env)?;
        Ok(ledger::IssuedAssetClient::new(&env, &config.share_token).balance(&id))
    }

    // ─────────────────────────────────────────────────────────
    // Internal Helpers
    // ─────────────────────────────────────────────────────────

    fn release(env: &Env, pool: VestingPool) -> Result<i128, Error> {
        let (wallet, amount, withdrawn) = vesting::release(env, pool)?;
        if amount > 0 {
            events::emit_vesting_released(env, pool, wallet, amount, withdrawn);
        }
        Ok(amount)
    }
}
