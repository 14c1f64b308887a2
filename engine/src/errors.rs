use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("invalid bet amount {amount}, allowed range {min}..={max}")]
    InvalidBetAmount { amount: u32, min: u32, max: u32 },
    #[error("it's not seat {actual}'s turn (expected {expected:?})")]
    NotSeatsTurn { expected: Option<usize>, actual: usize },
    #[error("seat {seat} has already folded")]
    SeatFolded { seat: usize },
    #[error("seat {seat} is all-in and cannot act")]
    SeatAllIn { seat: usize },
    #[error("no such seat: {seat}")]
    UnknownSeat { seat: usize },
    #[error("no round in progress")]
    NoRoundInProgress,
    #[error("a round is already in progress")]
    RoundInProgress,
    #[error("round already complete")]
    RoundAlreadyComplete,
    #[error("cannot start a round with {active} active seats (minimum 2)")]
    InsufficientPlayers { active: usize },
    #[error("deck exhausted while dealing")]
    DeckExhausted,
    #[error("chip conservation violated: expected {expected}, found {actual}")]
    ChipConservation { expected: u64, actual: u64 },
    #[error("automated seat exceeded {0} consecutive actions")]
    PolicyLoopExceeded(usize),
}

impl EngineError {
    /// Fatal errors imply chip creation/destruction or a corrupted deck.
    /// They abort the round instead of leaving it playable; everything else
    /// is rejected before any state mutation.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            EngineError::DeckExhausted
                | EngineError::ChipConservation { .. }
                | EngineError::PolicyLoopExceeded(_)
        )
    }
}
