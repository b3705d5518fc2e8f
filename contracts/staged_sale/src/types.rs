//! # Types
//!
//! Shared data structures used across all modules of the staged sale.
//!
//! ## Config / State split
//!
//! - [`SaleConfig`]: written once by `init`; never mutated. Holds the stage
//!   table, the allocation table, the time window and every wallet.
//! - [`SaleState`]: written on purchases, stage activations, sweeps, refunds
//!   and finalization.
//!
//! ## Sale lifecycle
//!
//! ```text
//! NotStarted ──► Active(0) ──► Active(1) ──► … ──► Active(N-1) ──► Ended
//!                   │  (activate_next_stage, cap filled)            │
//!                   └────────────── end_time / hard cap ────────────┘
//! Ended ──finish_crowdsale──► Succeeded | Refunding
//! ```
//!
//! `Paused` is orthogonal: it blocks purchases, never the clock.

use soroban_sdk::{contracttype, Address, Vec};

/// One price tier: the cumulative raise ceiling and the units minted per
/// contributed unit while this tier is active.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Stage {
    pub cap: i128,
    pub rate: i128,
}

/// A vesting cliff expressed as a share of the allocation denominator.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Tranche {
    /// Days after `start_time` at which the tranche unlocks.
    pub cliff_days: u32,
    pub share: u32,
}

/// Split of the final supply between contributors and the reserved pools.
///
/// Every figure is a share of `denominator`. Reserved pools are sized
/// against the contribution-minted supply: `pool = supply * share / crowdsale`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllocationTable {
    pub denominator: u32,
    pub crowdsale: u32,
    pub bounty: u32,
    pub platform: u32,
    pub team: Vec<Tranche>,
    pub advisors: Vec<Tranche>,
}

/// Immutable sale configuration, validated and written once by `init`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleConfig {
    pub start_time: u64,
    pub end_time: u64,
    /// Per-purchase floor, in contribution units.
    pub min_investment: i128,
    /// Per-purchase ceiling, in contribution units.
    pub max_investment: i128,
    /// Asset contributions are paid in.
    pub payment_token: Address,
    /// Issued-asset ledger this sale mints into.
    pub share_token: Address,
    /// Operating wallet receiving swept contributions and the bounty and
    /// platform pools.
    pub wallet: Address,
    pub team_wallet: Address,
    /// Recorded with the configuration; nothing is paid to it directly.
    pub platform_wallet: Address,
    /// Receives vested advisor tokens.
    pub bounty_wallet: Address,
    pub stages: Vec<Stage>,
    pub allocation: AllocationTable,
}

/// Terminal result of `finish_crowdsale`.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SaleOutcome {
    /// Not finalized yet.
    Pending,
    /// Soft cap met; reserved pools minted, transfers unlocked.
    Succeeded,
    /// Soft cap missed; contributions are refundable.
    Refunding,
}

/// Mutable sale state.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleState {
    pub active_stage: u32,
    pub funds_raised: i128,
    /// Contribution value held by the contract (raised − swept − refunded).
    pub escrowed: i128,
    pub paused: bool,
    pub finalized: bool,
    pub outcome: SaleOutcome,
}

impl SaleState {
    pub fn new() -> Self {
        SaleState {
            active_stage: 0,
            funds_raised: 0,
            escrowed: 0,
            paused: false,
            finalized: false,
            outcome: SaleOutcome::Pending,
        }
    }
}

/// Per-participant allowance and cumulative accepted contribution.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WhitelistEntry {
    pub allowance: i128,
    pub spent: i128,
}

/// A tranche sized in issued units, fixed at finalization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VestedTranche {
    pub cliff_days: u32,
    pub amount: i128,
}

/// Seeded vesting schedule for one reserved pool held in custody.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VestingSchedule {
    pub tranches: Vec<VestedTranche>,
    pub withdrawn: i128,
}

/// Which custody pool a vesting call draws from.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum VestingPool {
    Team,
    Advisors,
}

/// Result of a single `buy_tokens` call.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Purchase {
    pub stage: u32,
    /// Value taken into escrow.
    pub accepted: i128,
    /// Value returned to the buyer in the same call.
    pub refunded: i128,
    /// Issued units minted to the beneficiary.
    pub units: i128,
}

/// Amounts minted by a successful finalization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReservedPools {
    pub team: i128,
    pub advisors: i128,
    pub bounty: i128,
    pub platform: i128,
}
