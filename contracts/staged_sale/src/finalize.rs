//! Finalization: the one-time terminal transition.
//!
//! - Soft cap met: the reserved pools are minted as slices of the
//!   contribution-minted supply (team and advisors into custody, bounty and
//!   platform straight to the operating wallet), vesting is seeded, transfers are
//!   unlocked.
//! - Soft cap missed: nothing is minted, transfers stay locked and the
//!   refund vault opens.
//!
//! Minting is finished in both cases.

use soroban_sdk::Env;

use crate::ledger::IssuedAssetClient;
use crate::sale;
use crate::storage;
use crate::types::{ReservedPools, SaleOutcome, VestingPool};
use crate::vesting;
use crate::Error;

pub struct Finalization {
    pub succeeded: bool,
    pub funds_raised: i128,
    pub total_supply: i128,
    pub pools: ReservedPools,
}

pub fn finish(env: &Env) -> Result<Finalization, Error> {
    let config = storage::load_config(env)?;
    let mut state = storage::load_state(env)?;

    if state.finalized {
        return Err(Error::AlreadyFinalized);
    }
    if !sale::has_ended(&config, &state, env.ledger().timestamp()) {
        return Err(Error::TooEarly);
    }

    let succeeded = sale::soft_cap_reached(&config, &state);
    state.finalized = true;
    state.outcome = if succeeded {
        SaleOutcome::Succeeded
    } else {
        SaleOutcome::Refunding
    };
    storage::save_state(env, &state);

    let ledger = IssuedAssetClient::new(env, &config.share_token);
    let mut pools = ReservedPools {
        team: 0,
        advisors: 0,
        bounty: 0,
        platform: 0,
    };

    if succeeded {
        let allocation = &config.allocation;
        let supply = ledger.total_supply();

        let team = vesting::seed(env, &allocation.team, supply, allocation.crowdsale)?;
        let advisors = vesting::seed(env, &allocation.advisors, supply, allocation.crowdsale)?;
        pools.team = team.total();
        pools.advisors = advisors.total();
        pools.bounty = vesting::pool_amount(supply, allocation.bounty, allocation.crowdsale)?;
        pools.platform = vesting::pool_amount(supply, allocation.platform, allocation.crowdsale)?;
        storage::save_vesting(env, VestingPool::Team, &team);
        storage::save_vesting(env, VestingPool::Advisors, &advisors);

        let custody = pools
            .team
            .checked_add(pools.advisors)
            .ok_or(Error::Overflow)?;
        if custody > 0 {
            ledger.mint(&env.current_contract_address(), &custody);
        }
        let operating = pools
            .bounty
            .checked_add(pools.platform)
            .ok_or(Error::Overflow)?;
        if operating > 0 {
            ledger.mint(&config.wallet, &operating);
        }
        ledger.set_transfers_locked(&false);
    }
    ledger.finish_minting();

    Ok(Finalization {
        succeeded,
        funds_raised: state.funds_raised,
        total_supply: ledger.total_supply(),
        pools,
    })
}
