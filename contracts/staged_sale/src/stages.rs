//! Stage table helpers.
//!
//! The table is an ordered list of cumulative caps. Stage 0's cap doubles as
//! the soft cap and the last stage's cap is the hard cap.

use soroban_sdk::Vec;

use crate::types::Stage;
use crate::Error;

/// Caps positive and strictly increasing, rates positive, at least one stage.
pub fn validate(stages: &Vec<Stage>) -> Result<(), Error> {
    if stages.is_empty() {
        return Err(Error::InvalidConfig);
    }
    let mut last_cap = 0i128;
    for stage in stages.iter() {
        if stage.rate <= 0 || stage.cap <= last_cap {
            return Err(Error::InvalidConfig);
        }
        last_cap = stage.cap;
    }
    Ok(())
}

pub fn get(stages: &Vec<Stage>, index: u32) -> Result<Stage, Error> {
    stages.get(index).ok_or(Error::StageNotFound)
}

pub fn soft_cap(stages: &Vec<Stage>) -> i128 {
    stages.first().map(|s| s.cap).unwrap_or(0)
}

pub fn hard_cap(stages: &Vec<Stage>) -> i128 {
    stages.last().map(|s| s.cap).unwrap_or(0)
}

/// Contribution value still accepted by the stage at `index`.
pub fn room(stages: &Vec<Stage>, index: u32, funds_raised: i128) -> Result<i128, Error> {
    let stage = get(stages, index)?;
    Ok(stage.cap.saturating_sub(funds_raised).max(0))
}

/// Units minted for `accepted` contribution at `stage`'s rate.
pub fn units_for(stage: &Stage, accepted: i128) -> Result<i128, Error> {
    accepted.checked_mul(stage.rate).ok_or(Error::Overflow)
}
