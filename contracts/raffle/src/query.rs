use cosmwasm_std::{to_json_binary, Binary, Deps, Env, Order, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{RoundHistoryResponse, UpkeepResponse};
use crate::state::{CONFIG, PENDING_REQUEST, PLAYERS, RAFFLE, ROUNDS};
use crate::upkeep::upkeep_needed;

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_raffle_info(deps: Deps) -> StdResult<Binary> {
    let raffle = RAFFLE.load(deps.storage)?;
    to_json_binary(&raffle)
}

pub fn query_check_upkeep(deps: Deps, env: Env, check_data: Option<Binary>) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    let raffle = RAFFLE.load(deps.storage)?;
    to_json_binary(&UpkeepResponse {
        upkeep_needed: upkeep_needed(&config, &raffle, env.block.time),
        perform_data: check_data.unwrap_or_default(),
    })
}

pub fn query_entrance_fee(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config.entrance_fee)
}

pub fn query_interval(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config.interval_seconds)
}

pub fn query_raffle_state(deps: Deps) -> StdResult<Binary> {
    let raffle = RAFFLE.load(deps.storage)?;
    to_json_binary(&raffle.state)
}

/// Player in slot `index` of `round` (default: the current round).
/// Errors past the last slot.
pub fn query_player(deps: Deps, index: u64, round: Option<u64>) -> StdResult<Binary> {
    let round = match round {
        Some(round) => round,
        None => RAFFLE.load(deps.storage)?.round,
    };
    let player = PLAYERS.load(deps.storage, (round, index))?;
    to_json_binary(&player)
}

pub fn query_number_of_players(deps: Deps) -> StdResult<Binary> {
    let raffle = RAFFLE.load(deps.storage)?;
    to_json_binary(&raffle.player_count)
}

pub fn query_recent_winner(deps: Deps) -> StdResult<Binary> {
    let raffle = RAFFLE.load(deps.storage)?;
    to_json_binary(&raffle.recent_winner)
}

pub fn query_last_timestamp(deps: Deps) -> StdResult<Binary> {
    let raffle = RAFFLE.load(deps.storage)?;
    to_json_binary(&raffle.last_timestamp)
}

pub fn query_pending_request(deps: Deps) -> StdResult<Binary> {
    let pending = PENDING_REQUEST.may_load(deps.storage)?;
    to_json_binary(&pending)
}

pub fn query_num_words(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config.num_words)
}

pub fn query_request_confirmations(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config.request_confirmations)
}

pub fn query_round(deps: Deps, round: u64) -> StdResult<Binary> {
    let record = ROUNDS.may_load(deps.storage, round)?;
    to_json_binary(&record)
}

pub fn query_round_history(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(20).min(100) as usize;
    let start = start_after.map(Bound::exclusive);

    let rounds: Vec<_> = ROUNDS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .filter_map(|r| r.ok())
        .map(|(_, record)| record)
        .collect();

    to_json_binary(&RoundHistoryResponse { rounds })
}
