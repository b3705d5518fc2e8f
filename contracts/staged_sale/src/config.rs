//! Validation of the [`SaleConfig`] handed to `init`.
//!
//! A configuration is accepted only if it is internally consistent:
//!
//! - the window is non-empty (`start_time < end_time`);
//! - `0 < min_investment <= max_investment`;
//! - the stage table is non-empty, caps are positive and strictly increasing,
//!   rates are positive;
//! - the allocation table adds up to its denominator, the contributor share is
//!   non-zero, and cliffs within each vesting schedule strictly increase.

use soroban_sdk::Vec;

use crate::stages;
use crate::types::{AllocationTable, SaleConfig, Tranche};
use crate::Error;

pub fn validate(config: &SaleConfig) -> Result<(), Error> {
    if config.start_time >= config.end_time {
        return Err(Error::InvalidConfig);
    }
    if config.min_investment <= 0 || config.min_investment > config.max_investment {
        return Err(Error::InvalidConfig);
    }
    stages::validate(&config.stages)?;
    validate_allocation(&config.allocation)
}

fn validate_allocation(table: &AllocationTable) -> Result<(), Error> {
    if table.denominator == 0 || table.crowdsale == 0 {
        return Err(Error::InvalidConfig);
    }

    let total = u64::from(table.crowdsale)
        + u64::from(table.bounty)
        + u64::from(table.platform)
        + tranche_total(&table.team)?
        + tranche_total(&table.advisors)?;

    if total != u64::from(table.denominator) {
        return Err(Error::InvalidConfig);
    }
    Ok(())
}

/// Sum of tranche shares; rejects zero shares and non-increasing cliffs.
fn tranche_total(tranches: &Vec<Tranche>) -> Result<u64, Error> {
    let mut total = 0u64;
    let mut last_cliff: Option<u32> = None;
    for tranche in tranches.iter() {
        if tranche.share == 0 {
            return Err(Error::InvalidConfig);
        }
        if let Some(prev) = last_cliff {
            if tranche.cliff_days <= prev {
                return Err(Error::InvalidConfig);
            }
        }
        last_cliff = Some(tranche.cliff_days);
        total += u64::from(tranche.share);
    }
    Ok(total)
}
