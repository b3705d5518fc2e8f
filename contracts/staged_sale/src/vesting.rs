//! # Vesting ledger
//!
//! Team and advisor pools are minted into the sale contract's custody at a
//! successful finalization and released to their wallets by cliff.
//!
//! For a schedule with tranches `(cliff_i, amount_i)`:
//!
//! ```text
//! vested(now) = Σ amount_i  where  start_time + cliff_i days <= now
//! due         = vested(now) − withdrawn
//! ```
//!
//! `withdrawn` is raised to `vested(now)` before the payout transfer, so a
//! repeated call inside the same cliff window pays nothing.

use soroban_sdk::{Address, Env, Vec};

use crate::ledger::IssuedAssetClient;
use crate::storage;
use crate::types::{SaleConfig, SaleOutcome, Tranche, VestedTranche, VestingPool, VestingSchedule};
use crate::Error;

pub const DAY_IN_SECONDS: u64 = 86_400;

/// `supply * share / crowdsale`, the size of a reserved slice.
pub fn pool_amount(supply: i128, share: u32, crowdsale: u32) -> Result<i128, Error> {
    if crowdsale == 0 {
        return Err(Error::InvalidConfig);
    }
    supply
        .checked_mul(i128::from(share))
        .map(|scaled| scaled / i128::from(crowdsale))
        .ok_or(Error::Overflow)
}

/// Size every tranche of `tranches` against `supply`.
pub fn seed(
    env: &Env,
    tranches: &Vec<Tranche>,
    supply: i128,
    crowdsale: u32,
) -> Result<VestingSchedule, Error> {
    let mut sized: Vec<VestedTranche> = Vec::new(env);
    for tranche in tranches.iter() {
        sized.push_back(VestedTranche {
            cliff_days: tranche.cliff_days,
            amount: pool_amount(supply, tranche.share, crowdsale)?,
        });
    }
    Ok(VestingSchedule {
        tranches: sized,
        withdrawn: 0,
    })
}

impl VestingSchedule {
    pub fn total(&self) -> i128 {
        self.tranches.iter().map(|t| t.amount).sum()
    }

    pub fn vested_at(&self, start_time: u64, now: u64) -> i128 {
        self.tranches
            .iter()
            .filter(|t| cliff_passed(start_time, t.cliff_days, now))
            .map(|t| t.amount)
            .sum()
    }
}

fn cliff_passed(start_time: u64, cliff_days: u32, now: u64) -> bool {
    let unlock = start_time.saturating_add(u64::from(cliff_days).saturating_mul(DAY_IN_SECONDS));
    now >= unlock
}

fn wallet_for(config: &SaleConfig, pool: VestingPool) -> Address {
    match pool {
        VestingPool::Team => config.team_wallet.clone(),
        VestingPool::Advisors => config.bounty_wallet.clone(),
    }
}

/// Release whatever has newly vested in `pool`.
///
/// Returns `(wallet, paid, withdrawn_total)`; `paid == 0` is a successful no-op.
pub fn release(env: &Env, pool: VestingPool) -> Result<(Address, i128, i128), Error> {
    let config = storage::load_config(env)?;
    let state = storage::load_state(env)?;
    if !state.finalized || state.outcome != SaleOutcome::Succeeded {
        return Err(Error::NotVesting);
    }
    let mut schedule = storage::load_vesting(env, pool).ok_or(Error::NotVesting)?;
    let wallet = wallet_for(&config, pool);

    let vested = schedule.vested_at(config.start_time, env.ledger().timestamp());
    let due = vested - schedule.withdrawn;
    if due <= 0 {
        return Ok((wallet, 0, schedule.withdrawn));
    }

    schedule.withdrawn = vested;
    storage::save_vesting(env, pool, &schedule);

    IssuedAssetClient::new(env, &config.share_token).transfer(
        &env.current_contract_address(),
        &wallet,
        &due,
    );
    Ok((wallet, due, vested))
}

/// Allocation of team tranche `index`, not netted against withdrawals.
pub fn vested_team(env: &Env, index: u32) -> Result<i128, Error> {
    let config = storage::load_config(env)?;
    if index >= config.allocation.team.len() {
        return Err(Error::TrancheNotFound);
    }
    Ok(storage::load_vesting(env, VestingPool::Team)
        .and_then(|s| s.tranches.get(index))
        .map(|t| t.amount)
        .unwrap_or(0))
}

/// Whole advisor allocation, not netted against withdrawals.
pub fn vested_advisors(env: &Env) -> i128 {
    storage::load_vesting(env, VestingPool::Advisors)
        .map(|s| s.total())
        .unwrap_or(0)
}

pub fn withdrawn(env: &Env, pool: VestingPool) -> i128 {
    storage::load_vesting(env, pool)
        .map(|s| s.withdrawn)
        .unwrap_or(0)
}
