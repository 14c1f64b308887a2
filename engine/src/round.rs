use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::EngineError;
use crate::player::Seat;
use crate::rules::{determine_min_bet, ValidatedAction};

/// Betting phases of a round. `InitialDeal` exists only while hole cards go
/// out; betting runs Preflop through River, then Showdown settles.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    InitialDeal,
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Phase {
    pub fn next(self) -> Phase {
        match self {
            Phase::InitialDeal => Phase::Preflop,
            Phase::Preflop => Phase::Flop,
            Phase::Flop => Phase::Turn,
            Phase::Turn => Phase::River,
            Phase::River | Phase::Showdown => Phase::Showdown,
        }
    }

    /// Community cards on the board once this phase is reached.
    pub fn community_count(self) -> usize {
        match self {
            Phase::InitialDeal | Phase::Preflop => 0,
            Phase::Flop => 3,
            Phase::Turn => 4,
            Phase::River | Phase::Showdown => 5,
        }
    }
}

/// One round of play: phase, community cards, seat rotation markers, and the
/// current high bet. The round mutates exclusively through validated actions
/// applied via [`Round::apply`]; the next round is a fresh instance.
#[derive(Debug)]
pub struct Round {
    phase: Phase,
    community: Vec<Card>,
    active_seat: Option<usize>,
    dealer: usize,
    small_blind_seat: usize,
    big_blind_seat: usize,
    high_bet: u32,
    big_blind: u32,
}

impl Round {
    pub fn new(dealer: usize, small_blind_seat: usize, big_blind_seat: usize, big_blind: u32) -> Self {
        Self {
            phase: Phase::InitialDeal,
            community: Vec::with_capacity(5),
            active_seat: None,
            dealer,
            small_blind_seat,
            big_blind_seat,
            // blinds are live bets, so the big blind opens the high bet even
            // when the posting seat was too short to cover it
            high_bet: big_blind,
            big_blind,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn community(&self) -> &[Card] {
        &self.community
    }
    pub fn active_seat(&self) -> Option<usize> {
        self.active_seat
    }
    pub fn dealer(&self) -> usize {
        self.dealer
    }
    pub fn small_blind_seat(&self) -> usize {
        self.small_blind_seat
    }
    pub fn big_blind_seat(&self) -> usize {
        self.big_blind_seat
    }
    pub fn high_bet(&self) -> u32 {
        self.high_bet
    }
    pub fn big_blind(&self) -> u32 {
        self.big_blind
    }

    /// Minimum legal total phase bet for the seat (see
    /// [`determine_min_bet`]).
    pub fn min_for(&self, seat: &Seat) -> u32 {
        determine_min_bet(self.high_bet, seat.chips(), seat.bet(), self.big_blind)
    }

    /// Shuffles, deals hole cards, and opens preflop action two seats after
    /// the big blind. Blinds must already be posted.
    pub fn begin(&mut self, seats: &mut [Seat], deck: &mut Deck) -> Result<(), EngineError> {
        deck.shuffle();
        deck.deal_private(seats)?;
        self.phase = Phase::Preflop;
        let start = (self.big_blind_seat + 2) % seats.len();
        self.active_seat = self.first_eligible_from(seats, start);
        if self.runout_due(seats) {
            self.run_out(seats, deck)?;
        }
        Ok(())
    }

    /// Applies one validated action for the acting seat, then advances the
    /// turn, shifts phase, or runs the board out as the rules require.
    pub fn apply(
        &mut self,
        seats: &mut [Seat],
        deck: &mut Deck,
        seat_id: usize,
        action: ValidatedAction,
    ) -> Result<(), EngineError> {
        if self.phase == Phase::Showdown {
            return Err(EngineError::RoundAlreadyComplete);
        }
        if self.active_seat != Some(seat_id) {
            return Err(EngineError::NotSeatsTurn {
                expected: self.active_seat,
                actual: seat_id,
            });
        }

        match action {
            ValidatedAction::Fold => {
                seats[seat_id].fold();
            }
            other => {
                let target = other.amount();
                let owed = target.saturating_sub(seats[seat_id].bet());
                seats[seat_id].commit(owed)?;
                seats[seat_id].mark_acted();
                let new_bet = seats[seat_id].bet();
                if new_bet > self.high_bet {
                    // a raise re-opens action for every other live seat
                    self.high_bet = new_bet;
                    for (i, s) in seats.iter_mut().enumerate() {
                        if i != seat_id && s.can_act() {
                            s.clear_acted();
                        }
                    }
                }
            }
        }
        self.advance(seats, deck, seat_id)
    }

    /// Sweeps per-seat phase bets at a phase boundary. Chips already live in
    /// each seat's round investment; side pots are derived from that
    /// snapshot by [`crate::pot::build_pots`].
    pub fn reconcile_pot(&mut self, seats: &mut [Seat]) {
        for s in seats.iter_mut() {
            s.clear_phase_bet();
            s.clear_acted();
        }
        self.high_bet = 0;
    }

    fn advance(
        &mut self,
        seats: &mut [Seat],
        deck: &mut Deck,
        acted_seat: usize,
    ) -> Result<(), EngineError> {
        let contenders = seats.iter().filter(|s| s.is_contender()).count();
        if contenders <= 1 {
            // round ends immediately, no further card reveal
            self.active_seat = None;
            return Ok(());
        }
        if self.runout_due(seats) {
            return self.run_out(seats, deck);
        }
        if self.phase_complete(seats) {
            return self.phase_shift(seats, deck);
        }
        self.active_seat = self.next_eligible(seats, acted_seat);
        Ok(())
    }

    // Betting ends for the round when at most one seat can still act and
    // that seat has matched the high bet: remaining streets are dealt with
    // no further betting.
    fn runout_due(&self, seats: &[Seat]) -> bool {
        let mut actors = seats.iter().filter(|s| s.can_act());
        match (actors.next(), actors.next()) {
            (None, _) => true,
            (Some(a), None) => a.has_acted() && a.bet() == self.high_bet,
            _ => false,
        }
    }

    fn run_out(&mut self, seats: &mut [Seat], deck: &mut Deck) -> Result<(), EngineError> {
        self.reconcile_pot(seats);
        while self.phase != Phase::River && self.phase != Phase::Showdown {
            self.phase = self.phase.next();
            deck.deal_community(self.phase, &mut self.community)?;
        }
        self.phase = Phase::Showdown;
        self.active_seat = None;
        Ok(())
    }

    // A phase completes when every seat that can still act has matched the
    // high bet and a full action pass has occurred since the last raise.
    fn phase_complete(&self, seats: &[Seat]) -> bool {
        seats
            .iter()
            .filter(|s| s.can_act())
            .all(|s| s.has_acted() && s.bet() == self.high_bet)
    }

    fn phase_shift(&mut self, seats: &mut [Seat], deck: &mut Deck) -> Result<(), EngineError> {
        self.reconcile_pot(seats);
        self.phase = self.phase.next();
        if self.phase == Phase::Showdown {
            self.active_seat = None;
            return Ok(());
        }
        deck.deal_community(self.phase, &mut self.community)?;
        // postflop action starts left of the dealer
        let start = (self.dealer + 1) % seats.len();
        self.active_seat = self.first_eligible_from(seats, start);
        Ok(())
    }

    fn first_eligible_from(&self, seats: &[Seat], start: usize) -> Option<usize> {
        let n = seats.len();
        (0..n).map(|k| (start + k) % n).find(|&i| seats[i].can_act())
    }

    fn next_eligible(&self, seats: &[Seat], from: usize) -> Option<usize> {
        let n = seats.len();
        (1..=n).map(|k| (from + k) % n).find(|&i| seats[i].can_act())
    }
}
