use chance_raffle_common::types::RaffleState;
use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("insufficient payment: sent {sent}, entrance fee is {required}")]
    InsufficientPayment { sent: Uint128, required: Uint128 },

    #[error("must pay the entrance fee in {expected}, got {denom}")]
    WrongDenom { denom: String, expected: String },

    #[error("raffle is not open")]
    NotOpen,

    #[error("upkeep not needed (balance: {balance}, players: {players}, state: {state})")]
    UpkeepNotNeeded {
        balance: Uint128,
        players: u64,
        state: RaffleState,
    },

    #[error("nonexistent request: {request_id}")]
    NonexistentRequest { request_id: u64 },

    #[error("fulfillment carried no random words")]
    NoRandomWords,

    #[error("coordinator acknowledgement did not carry a request id")]
    MissingRequestId,

    #[error("prize transfer failed: {reason}")]
    TransferFailed { reason: String },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("unknown reply id {id}")]
    UnknownReplyId { id: u64 },
}
