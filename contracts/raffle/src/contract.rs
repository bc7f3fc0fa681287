use chance_raffle_common::types::RaffleState;
use cosmwasm_std::{
    entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdResult, Uint128,
};
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::execute::{self, PAYOUT_REPLY_ID, REQUEST_RANDOMNESS_REPLY_ID};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query;
use crate::state::{RaffleConfig, RaffleInfo, CONFIG, RAFFLE};

const CONTRACT_NAME: &str = "crates.io:chance-raffle";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

fn validate_instantiate(msg: &InstantiateMsg) -> Result<(), ContractError> {
    let reason = if msg.entrance_fee.is_zero() {
        "entrance_fee must be positive"
    } else if msg.denom.is_empty() {
        "denom must not be empty"
    } else if msg.interval_seconds == 0 {
        "interval_seconds must be positive"
    } else if msg.num_words == 0 {
        "num_words must be at least 1"
    } else {
        return Ok(());
    };
    Err(ContractError::InvalidConfig {
        reason: reason.to_string(),
    })
}

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    validate_instantiate(&msg)?;

    let config = RaffleConfig {
        entrance_fee: msg.entrance_fee,
        denom: msg.denom,
        interval_seconds: msg.interval_seconds,
        vrf_coordinator: deps.api.addr_validate(&msg.vrf_coordinator)?,
        key_hash: msg.key_hash,
        subscription_id: msg.subscription_id,
        request_confirmations: msg.request_confirmations,
        callback_gas_limit: msg.callback_gas_limit,
        num_words: msg.num_words,
    };
    CONFIG.save(deps.storage, &config)?;

    let raffle = RaffleInfo {
        state: RaffleState::Open,
        round: 0,
        player_count: 0,
        pool_balance: Uint128::zero(),
        last_timestamp: env.block.time,
        recent_winner: None,
        rounds_completed: 0,
        total_prizes_paid: Uint128::zero(),
    };
    RAFFLE.save(deps.storage, &raffle)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "raffle")
        .add_attribute("creator", info.sender.to_string())
        .add_attribute("entrance_fee", config.entrance_fee.to_string())
        .add_attribute("interval_seconds", config.interval_seconds.to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::EnterRaffle {} => execute::enter_raffle(deps, info),
        ExecuteMsg::PerformUpkeep { .. } => execute::perform_upkeep(deps, env, info),
        ExecuteMsg::FulfillRandomWords {
            request_id,
            random_words,
        } => execute::fulfill_random_words(deps, env, info, request_id, random_words),
    }
}

#[entry_point]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        REQUEST_RANDOMNESS_REPLY_ID => execute::handle_request_reply(deps, msg),
        PAYOUT_REPLY_ID => execute::handle_payout_reply(deps, env, msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

#[entry_point]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query::query_config(deps),
        QueryMsg::RaffleInfo {} => query::query_raffle_info(deps),
        QueryMsg::CheckUpkeep { check_data } => query::query_check_upkeep(deps, env, check_data),
        QueryMsg::EntranceFee {} => query::query_entrance_fee(deps),
        QueryMsg::Interval {} => query::query_interval(deps),
        QueryMsg::RaffleState {} => query::query_raffle_state(deps),
        QueryMsg::Player { index, round } => query::query_player(deps, index, round),
        QueryMsg::NumberOfPlayers {} => query::query_number_of_players(deps),
        QueryMsg::RecentWinner {} => query::query_recent_winner(deps),
        QueryMsg::LastTimestamp {} => query::query_last_timestamp(deps),
        QueryMsg::PendingRequest {} => query::query_pending_request(deps),
        QueryMsg::NumWords {} => query::query_num_words(deps),
        QueryMsg::RequestConfirmations {} => query::query_request_confirmations(deps),
        QueryMsg::Round { round } => query::query_round(deps, round),
        QueryMsg::RoundHistory { start_after, limit } => {
            query::query_round_history(deps, start_after, limit)
        }
    }
}

#[entry_point]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::Unauthorized {
            reason: "Cannot migrate from different contract type".to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("to_version", CONTRACT_VERSION))
}
