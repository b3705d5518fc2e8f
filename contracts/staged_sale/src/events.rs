//! # Events
//!
//! Every state change publishes one event. Topics are short symbols so the
//! indexer can classify them from the first topic alone.
//!
//! | Topic                  | Data                 |
//! |------------------------|----------------------|
//! | `("init",)`            | [`SaleInitialized`]  |
//! | `("whitelist",)`       | [`Whitelisted`]      |
//! | `("purchase", stage)`  | [`TokensPurchased`]  |
//! | `("stage", stage)`     | [`StageActivated`]   |
//! | `("withdraw",)`        | [`FundsWithdrawn`]   |
//! | `("paused",)`          | admin `Address`      |
//! | `("unpaused",)`        | admin `Address`      |
//! | `("admin",)`           | [`AdminTransferred`] |
//! | `("finalized",)`       | [`SaleFinalized`]    |
//! | `("refund",)`          | [`Refunded`]         |
//! | `("team_vest",)`       | [`VestingReleased`]  |
//! | `("adv_vest",)`        | [`VestingReleased`]  |

use soroban_sdk::{contracttype, symbol_short, Address, Env};

use crate::types::{Purchase, ReservedPools, VestingPool};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleInitialized {
    pub admin: Address,
    pub start_time: u64,
    pub end_time: u64,
    pub soft_cap: i128,
    pub hard_cap: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Whitelisted {
    pub participant: Address,
    pub allowance: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokensPurchased {
    pub buyer: Address,
    pub beneficiary: Address,
    pub amount: i128,
    pub refunded: i128,
    pub units: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StageActivated {
    pub stage: u32,
    pub funds_raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundsWithdrawn {
    pub wallet: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferred {
    pub previous: Address,
    pub admin: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleFinalized {
    pub succeeded: bool,
    pub funds_raised: i128,
    pub total_supply: i128,
    pub pools: ReservedPools,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Refunded {
    pub participant: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VestingReleased {
    pub wallet: Address,
    pub amount: i128,
    pub withdrawn: i128,
}

pub fn emit_sale_initialized(env: &Env, data: SaleInitialized) {
    env.events().publish((symbol_short!("init"),), data);
}

pub fn emit_whitelisted(env: &Env, participant: Address, allowance: i128) {
    env.events().publish(
        (symbol_short!("whitelist"),),
        Whitelisted {
            participant,
            allowance,
        },
    );
}

pub fn emit_tokens_purchased(env: &Env, buyer: Address, beneficiary: Address, purchase: &Purchase) {
    env.events().publish(
        (symbol_short!("purchase"), purchase.stage),
        TokensPurchased {
            buyer,
            beneficiary,
            amount: purchase.accepted,
            refunded: purchase.refunded,
            units: purchase.units,
        },
    );
}

pub fn emit_stage_activated(env: &Env, stage: u32, funds_raised: i128) {
    env.events().publish(
        (symbol_short!("stage"), stage),
        StageActivated {
            stage,
            funds_raised,
        },
    );
}

pub fn emit_funds_withdrawn(env: &Env, wallet: Address, amount: i128) {
    env.events()
        .publish((symbol_short!("withdraw"),), FundsWithdrawn { wallet, amount });
}

pub fn emit_paused(env: &Env, admin: Address) {
    env.events().publish((symbol_short!("paused"),), admin);
}

pub fn emit_unpaused(env: &Env, admin: Address) {
    env.events().publish((symbol_short!("unpaused"),), admin);
}

pub fn emit_admin_transferred(env: &Env, previous: Address, admin: Address) {
    env.events().publish(
        (symbol_short!("admin"),),
        AdminTransferred { previous, admin },
    );
}

pub fn emit_sale_finalized(env: &Env, data: SaleFinalized) {
    env.events().publish((symbol_short!("finalized"),), data);
}

pub fn emit_refunded(env: &Env, participant: Address, amount: i128) {
    env.events()
        .publish((symbol_short!("refund"),), Refunded { participant, amount });
}

pub fn emit_vesting_released(
    env: &Env,
    pool: VestingPool,
    wallet: Address,
    amount: i128,
    withdrawn: i128,
) {
    let topic = match pool {
        VestingPool::Team => symbol_short!("team_vest"),
        VestingPool::Advisors => symbol_short!("adv_vest"),
    };
    env.events().publish(
        (topic,),
        VestingReleased {
            wallet,
            amount,
            withdrawn,
        },
    );
}
