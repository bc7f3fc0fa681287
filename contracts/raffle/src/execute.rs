use chance_raffle_common::oracle::{find_request_id, CoordinatorExecuteMsg};
use chance_raffle_common::types::RaffleState;
use cosmwasm_std::{
    coins, from_json, to_json_binary, BankMsg, DepsMut, Env, Event, MessageInfo, Reply,
    Response, StdError, SubMsg, SubMsgResult, Uint128, Uint256, WasmMsg,
};

use crate::error::ContractError;
use crate::selection::winner_index;
use crate::state::{
    PendingPayout, RoundRecord, CONFIG, PENDING_REQUEST, PLAYERS, RAFFLE, ROUNDS,
};
use crate::upkeep::upkeep_needed;

pub const REQUEST_RANDOMNESS_REPLY_ID: u64 = 1;
pub const PAYOUT_REPLY_ID: u64 = 2;

/// Enter the current round. The whole payment goes into the pool.
pub fn enter_raffle(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut raffle = RAFFLE.load(deps.storage)?;

    if raffle.state != RaffleState::Open {
        return Err(ContractError::NotOpen);
    }

    if let Some(coin) = info.funds.iter().find(|c| c.denom != config.denom) {
        return Err(ContractError::WrongDenom {
            denom: coin.denom.clone(),
            expected: config.denom.clone(),
        });
    }
    let paid = info
        .funds
        .iter()
        .map(|c| c.amount)
        .fold(Uint128::zero(), |acc, a| acc + a);

    if paid < config.entrance_fee {
        return Err(ContractError::InsufficientPayment {
            sent: paid,
            required: config.entrance_fee,
        });
    }

    let slot = raffle.player_count;
    PLAYERS.save(deps.storage, (raffle.round, slot), &info.sender)?;
    raffle.player_count += 1;
    raffle.pool_balance += paid;
    RAFFLE.save(deps.storage, &raffle)?;

    Ok(Response::new()
        .add_attribute("action", "enter_raffle")
        .add_attribute("player", info.sender.to_string())
        .add_attribute("amount", paid.to_string())
        .add_event(
            Event::new("raffle_enter")
                .add_attribute("player", info.sender.to_string())
                .add_attribute("round", raffle.round.to_string())
                .add_attribute("slot", slot.to_string())
                .add_attribute("players", raffle.player_count.to_string())
                .add_attribute("pool_balance", raffle.pool_balance.to_string()),
        ))
}

/// Lock the round and ask the coordinator for randomness.
///
/// Anyone may call this. The request id arrives in the coordinator's
/// acknowledgement and is stored by `handle_request_reply` within the same
/// transaction.
pub fn perform_upkeep(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut raffle = RAFFLE.load(deps.storage)?;

    if !upkeep_needed(&config, &raffle, env.block.time) {
        return Err(ContractError::UpkeepNotNeeded {
            balance: raffle.pool_balance,
            players: raffle.player_count,
            state: raffle.state,
        });
    }

    raffle.state = RaffleState::Selecting;
    RAFFLE.save(deps.storage, &raffle)?;

    let request_msg = WasmMsg::Execute {
        contract_addr: config.vrf_coordinator.to_string(),
        msg: to_json_binary(&CoordinatorExecuteMsg::RequestRandomWords {
            key_hash: config.key_hash.clone(),
            subscription_id: config.subscription_id,
            request_confirmations: config.request_confirmations,
            callback_gas_limit: config.callback_gas_limit,
            num_words: config.num_words,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_submessage(SubMsg::reply_on_success(
            request_msg,
            REQUEST_RANDOMNESS_REPLY_ID,
        ))
        .add_attribute("action", "perform_upkeep")
        .add_attribute("round", raffle.round.to_string())
        .add_attribute("players", raffle.player_count.to_string())
        .add_attribute("pool_balance", raffle.pool_balance.to_string()))
}

/// Record the correlation id acknowledged by the coordinator.
pub fn handle_request_reply(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let raffle = RAFFLE.load(deps.storage)?;

    let ack = msg.result.into_result().map_err(StdError::generic_err)?;
    let request_id = find_request_id(&ack.events, &config.vrf_coordinator)
        .ok_or(ContractError::MissingRequestId)?;

    if raffle.state != RaffleState::Selecting || PENDING_REQUEST.exists(deps.storage) {
        return Err(ContractError::Std(StdError::generic_err(
            "randomness acknowledged outside of a pending selection",
        )));
    }
    PENDING_REQUEST.save(deps.storage, &request_id)?;

    Ok(Response::new()
        .add_attribute("action", "request_randomness")
        .add_attribute("request_id", request_id.to_string())
        .add_event(
            Event::new("raffle_selection_requested")
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("round", raffle.round.to_string()),
        ))
}

/// Randomness delivery from the coordinator.
///
/// Validates the correlation id and picks the winner, then sends the whole
/// pool. State is reset in `handle_payout_reply` once the transfer succeeded,
/// so nothing is written here.
pub fn fulfill_random_words(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    request_id: u64,
    random_words: Vec<Uint256>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if info.sender != config.vrf_coordinator {
        return Err(ContractError::Unauthorized {
            reason: "only the vrf coordinator can fulfill".to_string(),
        });
    }

    // Covers never-issued ids as well as ids of settled rounds
    let pending = PENDING_REQUEST.may_load(deps.storage)?;
    if pending != Some(request_id) {
        return Err(ContractError::NonexistentRequest { request_id });
    }

    let random_word = *random_words.first().ok_or(ContractError::NoRandomWords)?;

    // Entries are refused while selecting, so the round is exactly as it was
    // when the request went out.
    let raffle = RAFFLE.load(deps.storage)?;
    let index = winner_index(random_word, raffle.player_count)?;
    let winner = PLAYERS.load(deps.storage, (raffle.round, index))?;

    let payout = PendingPayout {
        request_id,
        round: raffle.round,
        winner: winner.clone(),
        winner_index: index,
        amount: raffle.pool_balance,
        random_word,
    };

    let send_msg = BankMsg::Send {
        to_address: winner.to_string(),
        amount: coins(raffle.pool_balance.u128(), &config.denom),
    };

    Ok(Response::new()
        .add_submessage(
            SubMsg::reply_always(send_msg, PAYOUT_REPLY_ID)
                .with_payload(to_json_binary(&payout)?),
        )
        .add_attribute("action", "fulfill_random_words")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("winner", winner.to_string()))
}

/// Finish settlement after the prize transfer.
///
/// A failed transfer aborts the whole fulfillment: the raffle stays
/// `Selecting` with its pending request, players and clock untouched.
pub fn handle_payout_reply(
    deps: DepsMut,
    env: Env,
    msg: Reply,
) -> Result<Response, ContractError> {
    if let SubMsgResult::Err(reason) = msg.result {
        return Err(ContractError::TransferFailed { reason });
    }

    let config = CONFIG.load(deps.storage)?;
    let payout: PendingPayout = from_json(&msg.payload)?;
    let pending = PENDING_REQUEST.may_load(deps.storage)?;
    if pending != Some(payout.request_id) {
        return Err(ContractError::NonexistentRequest {
            request_id: payout.request_id,
        });
    }

    let mut raffle = RAFFLE.load(deps.storage)?;
    let players = raffle.player_count;

    ROUNDS.save(
        deps.storage,
        payout.round,
        &RoundRecord {
            round: payout.round,
            request_id: payout.request_id,
            winner: payout.winner.clone(),
            winner_index: payout.winner_index,
            prize: payout.amount,
            players,
            random_word: payout.random_word,
            settled_at: env.block.time,
        },
    )?;

    PENDING_REQUEST.remove(deps.storage);
    raffle.state = RaffleState::Open;
    raffle.round += 1;
    raffle.player_count = 0;
    raffle.pool_balance = Uint128::zero();
    raffle.last_timestamp = raffle.last_timestamp.max(env.block.time);
    raffle.recent_winner = Some(payout.winner.clone());
    raffle.rounds_completed += 1;
    raffle.total_prizes_paid += payout.amount;
    RAFFLE.save(deps.storage, &raffle)?;

    Ok(Response::new()
        .add_attribute("action", "settle_round")
        .add_attribute("winner", payout.winner.to_string())
        .add_attribute("prize", payout.amount.to_string())
        .add_event(
            Event::new("raffle_winner_picked")
                .add_attribute("winner", payout.winner.to_string())
                .add_attribute("prize", payout.amount.to_string())
                .add_attribute("denom", config.denom)
                .add_attribute("round", payout.round.to_string())
                .add_attribute("request_id", payout.request_id.to_string())
                .add_attribute("winner_index", payout.winner_index.to_string())
                .add_attribute("players", players.to_string())
                .add_attribute("random_word", payout.random_word.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}
