use cosmwasm_std::{StdError, StdResult, Uint128, Uint256};

/// Map a random word onto a ledger slot: `random_word mod players`.
pub fn winner_index(random_word: Uint256, players: u64) -> StdResult<u64> {
    if players == 0 {
        return Err(StdError::generic_err("cannot pick a winner from an empty round"));
    }
    let slot = random_word % Uint256::from(players);
    // slot < players, so it always fits
    let slot = Uint128::try_from(slot).map_err(StdError::from)?;
    Ok(slot.u128() as u64)
}
