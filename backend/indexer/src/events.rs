//! Canonical event types emitted by the staged sale contract.
//!
//! These mirror the topics published from `contracts/staged_sale/src/events.rs`.

use serde::{Deserialize, Serialize};

/// All recognised event kinds from the sale contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// The sale was configured (`init` topic).
    SaleInitialized,
    /// A participant's allowance was set (`whitelist` topic).
    Whitelisted,
    /// Units were bought in a stage (`purchase` topic).
    TokensPurchased,
    /// The next stage was opened (`stage` topic).
    StageActivated,
    /// Escrow was swept to the operating wallet (`withdraw` topic).
    FundsWithdrawn,
    SalePaused,
    SaleUnpaused,
    /// The admin role changed hands (`admin` topic).
    AdminTransferred,
    /// The sale was closed (`finalized` topic).
    SaleFinalized,
    /// A contribution was paid back (`refund` topic).
    Refunded,
    /// Team tokens were released (`team_vest` topic).
    TeamVestingReleased,
    /// Advisor tokens were released (`adv_vest` topic).
    AdvisorVestingReleased,
    /// An event from this contract that we don't recognise yet.
    Unknown,
}

impl EventKind {
    /// Parse the leading topic symbol string produced by Soroban into an [`EventKind`].
    pub fn from_topic(topic: &str) -> Self {
        match topic {
            "init" => Self::SaleInitialized,
            "whitelist" => Self::Whitelisted,
            "purchase" => Self::TokensPurchased,
            "stage" => Self::StageActivated,
            "withdraw" => Self::FundsWithdrawn,
            "paused" => Self::SalePaused,
            "unpaused" => Self::SaleUnpaused,
            "admin" => Self::AdminTransferred,
            "finalized" => Self::SaleFinalized,
            "refund" => Self::Refunded,
            "team_vest" => Self::TeamVestingReleased,
            "adv_vest" => Self::AdvisorVestingReleased,
            _ => Self::Unknown,
        }
    }

    /// Return a short identifier string suitable for storage in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SaleInitialized => "sale_initialized",
            Self::Whitelisted => "whitelisted",
            Self::TokensPurchased => "tokens_purchased",
            Self::StageActivated => "stage_activated",
            Self::FundsWithdrawn => "funds_withdrawn",
            Self::SalePaused => "sale_paused",
            Self::SaleUnpaused => "sale_unpaused",
            Self::AdminTransferred => "admin_transferred",
            Self::SaleFinalized => "sale_finalized",
            Self::Refunded => "refunded",
            Self::TeamVestingReleased => "team_vesting_released",
            Self::AdvisorVestingReleased => "advisor_vesting_released",
            Self::Unknown => "unknown",
        }
    }

    /// Kinds whose second topic is a stage index.
    pub fn has_stage_topic(&self) -> bool {
        matches!(self, Self::TokensPurchased | Self::StageActivated)
    }
}

/// A fully decoded sale event, ready to be stored in the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleEvent {
    pub event_type: String,
    pub stage: Option<i64>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
}

/// A raw event record as stored in / read from the database.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct EventRecord {
    pub id: i64,
    pub event_type: String,
    pub stage: Option<i64>,
    pub actor: Option<String>,
    pub amount: Option<String>,
    pub ledger: i64,
    pub timestamp: i64,
    pub contract_id: String,
    pub tx_hash: Option<String>,
    pub created_at: i64,
}
