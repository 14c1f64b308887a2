use crate::cards::Card;
use crate::round::Phase;

/// Everything an automated seat may observe when deciding: its own hole
/// cards, the public board, and the betting numbers. Unrevealed opponent
/// cards never appear here.
#[derive(Debug, Clone)]
pub struct ObservableState {
    pub phase: Phase,
    pub hole: [Card; 2],
    pub community: Vec<Card>,
    pub high_bet: u32,
    pub current_bet: u32,
    pub pot: u32,
    pub stack: u32,
    /// Minimum legal total phase bet; betting this exactly is a call/check.
    pub min: u32,
    /// Maximum total phase bet (current bet plus the remaining stack).
    pub max: u32,
    pub big_blind: u32,
}

/// A decision returned by a seat policy. `RaiseTo` names the target total
/// phase bet; the engine translates it into committed chips and clamps it
/// into the legal range.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Decision {
    Fold,
    Call,
    RaiseTo(u32),
}

/// Pure decision function for an automated seat.
///
/// The engine resolves automated seats synchronously after each committed
/// action, through the same validated entry point as human actions, bounded
/// by [`crate::table::MAX_POLICY_STEPS`]. Implementations must stay inside
/// the advertised `[min, max]` bounds.
pub trait SeatPolicy: Send + Sync {
    fn decide(&self, view: &ObservableState) -> Decision;
    fn name(&self) -> &str;
}
