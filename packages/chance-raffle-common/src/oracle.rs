use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Event};

/// Event type the coordinator emits when it accepts a request.
/// The host prefixes contract events with `wasm-`.
pub const RANDOMNESS_REQUESTED_EVENT: &str = "randomness_requested";
pub const REQUEST_ID_ATTR: &str = "request_id";
const CONTRACT_ADDR_ATTR: &str = "_contract_address";

/// Message sent to the randomness coordinator.
///
/// The oracle parameters are opaque to the raffle and passed through as
/// configured. The coordinator acknowledges with a `randomness_requested`
/// event and delivers the words later through the consumer's
/// `FulfillRandomWords` message.
#[cw_serde]
pub enum CoordinatorExecuteMsg {
    RequestRandomWords {
        /// Gas lane identifier, hex-encoded
        key_hash: String,
        subscription_id: u64,
        request_confirmations: u16,
        callback_gas_limit: u32,
        num_words: u32,
    },
}

/// Extract the correlation id from the coordinator's acknowledgement.
///
/// Only events emitted by `coordinator` are considered, so a nested contract
/// cannot inject a request id of its own.
pub fn find_request_id(events: &[Event], coordinator: &Addr) -> Option<u64> {
    let wasm_ty = format!("wasm-{}", RANDOMNESS_REQUESTED_EVENT);
    events
        .iter()
        .filter(|e| e.ty == wasm_ty)
        .filter(|e| {
            e.attributes
                .iter()
                .any(|a| a.key == CONTRACT_ADDR_ATTR && a.value == coordinator.as_str())
        })
        .find_map(|e| {
            e.attributes
                .iter()
                .find(|a| a.key == REQUEST_ID_ATTR)
                .and_then(|a| a.value.parse::<u64>().ok())
        })
}
