use chance_raffle_common::types::RaffleState;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128, Uint256};

use crate::state::{RaffleConfig, RaffleInfo, RoundRecord};

#[cw_serde]
pub struct InstantiateMsg {
    pub entrance_fee: Uint128,
    pub denom: String,
    pub interval_seconds: u64,
    pub vrf_coordinator: String,
    pub key_hash: String,
    pub subscription_id: u64,
    pub request_confirmations: u16,
    pub callback_gas_limit: u32,
    pub num_words: u32,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Buy one entry. Send at least the entrance fee in the raffle denom.
    EnterRaffle {},
    /// Request randomness for the current round if upkeep is needed.
    /// Permissionless; eligibility is re-checked here. `perform_data` is the
    /// value returned by `CheckUpkeep` and is not interpreted.
    PerformUpkeep { perform_data: Option<Binary> },
    /// Randomness delivery. Coordinator only.
    FulfillRandomWords {
        request_id: u64,
        random_words: Vec<Uint256>,
    },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(RaffleConfig)]
    Config {},
    #[returns(RaffleInfo)]
    RaffleInfo {},
    #[returns(UpkeepResponse)]
    CheckUpkeep { check_data: Option<Binary> },
    #[returns(Uint128)]
    EntranceFee {},
    #[returns(u64)]
    Interval {},
    #[returns(RaffleState)]
    RaffleState {},
    /// Slot `index` of `round`, or of the current round when omitted
    #[returns(Addr)]
    Player { index: u64, round: Option<u64> },
    #[returns(u64)]
    NumberOfPlayers {},
    #[returns(Option<Addr>)]
    RecentWinner {},
    #[returns(Timestamp)]
    LastTimestamp {},
    #[returns(Option<u64>)]
    PendingRequest {},
    #[returns(u32)]
    NumWords {},
    #[returns(u16)]
    RequestConfirmations {},
    #[returns(Option<RoundRecord>)]
    Round { round: u64 },
    #[returns(RoundHistoryResponse)]
    RoundHistory {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct UpkeepResponse {
    pub upkeep_needed: bool,
    /// Echo of `check_data`, opaque to the raffle
    pub perform_data: Binary,
}

#[cw_serde]
pub struct RoundHistoryResponse {
    pub rounds: Vec<RoundRecord>,
}
