pub mod oracle;
pub mod types;

pub use oracle::{find_request_id, CoordinatorExecuteMsg, RANDOMNESS_REQUESTED_EVENT};
pub use types::RaffleState;
