use cosmwasm_schema::cw_serde;

/// Lifecycle state of the raffle.
///
/// `Selecting` acts as a lock held across the randomness round trip: entries
/// and new requests are refused until the outstanding request is fulfilled.
#[cw_serde]
#[derive(Copy)]
pub enum RaffleState {
    Open,
    Selecting,
}

impl RaffleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RaffleState::Open => "open",
            RaffleState::Selecting => "selecting",
        }
    }
}

impl std::fmt::Display for RaffleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
