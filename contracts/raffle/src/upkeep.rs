use chance_raffle_common::types::RaffleState;
use cosmwasm_std::Timestamp;

use crate::state::{RaffleConfig, RaffleInfo};

/// Whether a selection round may begin at `now`.
///
/// Upkeep is needed only when all of the following hold:
/// the raffle is open, at least `interval_seconds` have passed since the last
/// settlement, there is at least one player, and the pool holds funds.
/// Read-only; `perform_upkeep` re-evaluates it rather than trusting a prior
/// `CheckUpkeep` query.
pub fn upkeep_needed(config: &RaffleConfig, raffle: &RaffleInfo, now: Timestamp) -> bool {
    let is_open = raffle.state == RaffleState::Open;
    let elapsed = now.seconds().saturating_sub(raffle.last_timestamp.seconds());
    let time_passed = elapsed >= config.interval_seconds;
    let has_players = raffle.player_count > 0;
    let has_balance = !raffle.pool_balance.is_zero();
    is_open && time_passed && has_players && has_balance
}
