use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::EngineError;

/// An action submitted to the engine for the acting seat. Bet amounts name
/// the seat's target total phase bet; the engine deducts the difference to
/// the current bet from the stack.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Fold and forfeit the round
    Fold,
    /// Match the current minimum exactly (a check when nothing more is owed)
    Call,
    /// Bet to an explicit total; anything above the minimum is a raise
    Bet(u32),
    /// Put the entire remaining stack in
    AllIn,
}

/// A seat at the table: chip stack, current-phase bet, total round
/// investment, and the flags the betting engine steers by.
///
/// Hole cards are owner-visible only until showdown; snapshot construction
/// enforces that, not this type.
#[derive(Debug, Clone)]
pub struct Seat {
    id: usize,
    chips: u32,
    round_start_chips: u32,
    bet: u32,
    invested: u32,
    folded: bool,
    all_in: bool,
    acted: bool,
    eliminated: bool,
    hole: [Option<Card>; 2],
}

impl Seat {
    pub fn new(id: usize, chips: u32) -> Self {
        Self {
            id,
            chips,
            round_start_chips: chips,
            bet: 0,
            invested: 0,
            folded: false,
            all_in: false,
            acted: false,
            eliminated: false,
            hole: [None, None],
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }
    pub fn chips(&self) -> u32 {
        self.chips
    }
    pub fn bet(&self) -> u32 {
        self.bet
    }
    pub fn invested(&self) -> u32 {
        self.invested
    }
    pub fn round_start_chips(&self) -> u32 {
        self.round_start_chips
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn is_all_in(&self) -> bool {
        self.all_in
    }
    pub fn has_acted(&self) -> bool {
        self.acted
    }
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    /// A contender still competes for the pot at showdown.
    pub fn is_contender(&self) -> bool {
        !self.folded
    }

    /// A seat can act while it is neither folded nor all-in.
    pub fn can_act(&self) -> bool {
        !self.folded && !self.all_in
    }

    pub fn hole_cards(&self) -> [Option<Card>; 2] {
        self.hole
    }

    pub fn give_card(&mut self, c: Card) {
        if self.hole[0].is_none() {
            self.hole[0] = Some(c);
        } else if self.hole[1].is_none() {
            self.hole[1] = Some(c);
        }
    }

    pub fn clear_cards(&mut self) {
        self.hole = [None, None];
    }

    /// Moves chips from the stack into the current-phase bet and the round
    /// investment. Committing the last chip marks the seat all-in.
    pub fn commit(&mut self, amount: u32) -> Result<(), EngineError> {
        if amount > self.chips {
            return Err(EngineError::InvalidBetAmount {
                amount,
                min: 0,
                max: self.chips,
            });
        }
        self.chips -= amount;
        self.bet += amount;
        self.invested += amount;
        if self.chips == 0 {
            self.all_in = true;
        }
        Ok(())
    }

    pub fn fold(&mut self) {
        self.folded = true;
    }

    pub fn mark_acted(&mut self) {
        self.acted = true;
    }

    pub fn clear_acted(&mut self) {
        self.acted = false;
    }

    /// Sweeps the current-phase bet at a phase shift. The chips already live
    /// in `invested`; only the per-phase counter resets.
    pub fn clear_phase_bet(&mut self) {
        self.bet = 0;
    }

    /// Zeroes the round investment once the pot has been settled, so the
    /// chips are not counted twice by the conservation audit.
    pub fn clear_investment(&mut self) {
        self.invested = 0;
        self.bet = 0;
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    pub fn eliminate(&mut self) {
        self.eliminated = true;
    }

    /// Prepares the seat for a fresh round. Eliminated seats start folded so
    /// the rotation and pot logic skip them uniformly.
    pub fn reset_for_round(&mut self) {
        self.round_start_chips = self.chips;
        self.bet = 0;
        self.invested = 0;
        self.folded = self.eliminated;
        self.all_in = false;
        self.acted = false;
        self.hole = [None, None];
    }
}
