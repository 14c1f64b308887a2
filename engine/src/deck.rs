use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::EngineError;
use crate::player::Seat;
use crate::round::Phase;

/// A 52-card deck with a draw cursor and an owned seeded RNG.
///
/// The cursor only moves forward, so a card can never be dealt twice within
/// a round. [`Deck::shuffle`] rebuilds the full deck and applies a
/// Fisher-Yates permutation, resetting the cursor for the next round.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    /// Deals exactly two hole cards to every seat still in the round, one
    /// card per pass around the table. Fails only on deck exhaustion, which
    /// is unreachable with at most ten seats.
    pub fn deal_private(&mut self, seats: &mut [Seat]) -> Result<(), EngineError> {
        for _ in 0..2 {
            for seat in seats.iter_mut().filter(|s| !s.is_folded()) {
                let c = self.deal_card().ok_or(EngineError::DeckExhausted)?;
                seat.give_card(c);
            }
        }
        Ok(())
    }

    /// Appends community cards for the given phase: three at the flop, one
    /// at the turn, one at the river. Any other phase is a no-op.
    pub fn deal_community(
        &mut self,
        phase: Phase,
        community: &mut Vec<Card>,
    ) -> Result<(), EngineError> {
        let n = match phase {
            Phase::Flop => 3,
            Phase::Turn | Phase::River => 1,
            _ => 0,
        };
        for _ in 0..n {
            let c = self.deal_card().ok_or(EngineError::DeckExhausted)?;
            community.push(c);
        }
        Ok(())
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
