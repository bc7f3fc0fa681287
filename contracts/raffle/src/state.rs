use chance_raffle_common::types::RaffleState;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128, Uint256};
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<RaffleConfig> = Item::new("config");
pub const RAFFLE: Item<RaffleInfo> = Item::new("raffle");
/// Entries keyed by (round, slot). A player appears once per paid entry.
/// Settled rounds keep their slots and stay readable through `QueryMsg::Player`.
pub const PLAYERS: Map<(u64, u64), Addr> = Map::new("players");
/// Correlation id of the outstanding randomness request.
/// Present if and only if the raffle is `Selecting`.
pub const PENDING_REQUEST: Item<u64> = Item::new("pending_request");
pub const ROUNDS: Map<u64, RoundRecord> = Map::new("rounds");

#[cw_serde]
pub struct RaffleConfig {
    /// Minimum payment per entry
    pub entrance_fee: Uint128,
    pub denom: String,
    /// Minimum seconds between settlements
    pub interval_seconds: u64,
    pub vrf_coordinator: Addr,
    /// Gas lane for the coordinator, hex-encoded
    pub key_hash: String,
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
}

#[cw_serde]
pub struct RaffleInfo {
    pub state: RaffleState,
    /// Current round; players of earlier rounds are no longer addressable
    pub round: u64,
    pub player_count: u64,
    /// Funds held for the current round
    pub pool_balance: Uint128,
    /// Last time the raffle reopened with a fresh round
    pub last_timestamp: Timestamp,
    pub recent_winner: Option<Addr>,
    pub rounds_completed: u64,
    pub total_prizes_paid: Uint128,
}

#[cw_serde]
pub struct RoundRecord {
    pub round: u64,
    pub request_id: u64,
    pub winner: Addr,
    pub winner_index: u64,
    pub prize: Uint128,
    pub players: u64,
    pub random_word: Uint256,
    pub settled_at: Timestamp,
}

/// Settlement carried through the payout sub-message. Nothing is written
/// until the transfer has gone through.
#[cw_serde]
pub struct PendingPayout {
    pub request_id: u64,
    pub round: u64,
    pub winner: Addr,
    pub winner_index: u64,
    pub amount: Uint128,
    pub random_word: Uint256,
}
