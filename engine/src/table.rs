use std::collections::BTreeMap;

use crate::deck::Deck;
use crate::errors::EngineError;
use crate::hand::best_hand;
use crate::logger::{ActionRecord, HandRecord};
use crate::player::{PlayerAction, Seat};
use crate::policy::{Decision, ObservableState, SeatPolicy};
use crate::pot::{build_pots, split_award};
use crate::round::{Phase, Round};
use crate::rules::validate_action;
use crate::snapshot::{RankedHand, RoundEndEvent, RoundStateSnapshot, SeatSnapshot};

/// Upper bound on consecutive automated actions between two external calls,
/// guarding against a misbehaving policy chaining forever.
pub const MAX_POLICY_STEPS: usize = 256;

const DEFAULT_SEED: u64 = 0xA1A2_A3A4;

/// Static table parameters, fixed at construction.
#[derive(Debug, Clone)]
pub struct TableConfig {
    pub small_blind: u32,
    pub big_blind: u32,
    pub starting_stack: u32,
    /// House commission in basis points of the pot, taken once at settlement.
    pub rake_bps: u32,
    /// Deck RNG seed; `None` uses a fixed default.
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: 10,
            big_blind: 20,
            starting_stack: 20_000,
            rake_bps: 0,
            seed: None,
        }
    }
}

/// A single poker table: seat roster, dealer rotation, deck, and the round
/// in progress. Strictly sequential: one action is validated and fully
/// applied before the next is accepted, so one owning execution context per
/// table serializes everything. Independent tables share no state.
///
/// Turn timers and disconnects are handled by submitting a fold through
/// [`Table::apply_action`] like any other action, never by a privileged
/// bypass.
///
/// # Examples
///
/// ```
/// use holdem_engine::table::{Table, TableConfig};
///
/// let mut table = Table::with_uniform_stacks(TableConfig::default(), 4);
/// let snap = table.start_round().expect("round starts");
/// assert_eq!(snap.seats.len(), 4);
/// assert!(snap.active_seat_id.is_some());
/// ```
pub struct Table {
    config: TableConfig,
    seats: Vec<Seat>,
    deck: Deck,
    dealer: usize,
    round: Option<Round>,
    settled: bool,
    policies: Vec<Option<Box<dyn SeatPolicy>>>,
    round_no: u32,
    actions: Vec<ActionRecord>,
    last_event: Option<RoundEndEvent>,
    last_record: Option<HandRecord>,
    rake_collected: u32,
    chip_total: u64,
}

impl Table {
    pub fn new(config: TableConfig, stacks: &[u32]) -> Self {
        let seed = config.seed.unwrap_or(DEFAULT_SEED);
        let seats: Vec<Seat> = stacks
            .iter()
            .enumerate()
            .map(|(i, &c)| Seat::new(i, c))
            .collect();
        let chip_total = stacks.iter().map(|&c| c as u64).sum();
        let n = seats.len();
        Self {
            config,
            seats,
            deck: Deck::new_with_seed(seed),
            dealer: 0,
            round: None,
            settled: true,
            policies: (0..n).map(|_| None).collect(),
            round_no: 0,
            actions: Vec::new(),
            last_event: None,
            last_record: None,
            rake_collected: 0,
            chip_total,
        }
    }

    /// Seats `count` players with the configured starting stack each.
    pub fn with_uniform_stacks(config: TableConfig, count: usize) -> Self {
        let stacks = vec![config.starting_stack; count];
        Self::new(config, &stacks)
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn seat(&self, id: usize) -> Option<&Seat> {
        self.seats.get(id)
    }
    pub fn dealer(&self) -> usize {
        self.dealer
    }
    pub fn round_no(&self) -> u32 {
        self.round_no
    }
    pub fn rake_collected(&self) -> u32 {
        self.rake_collected
    }

    pub fn round_in_progress(&self) -> bool {
        self.round.is_some() && !self.settled
    }

    pub fn active_seat(&self) -> Option<usize> {
        match &self.round {
            Some(r) if !self.settled => r.active_seat(),
            _ => None,
        }
    }

    /// `[min, max]` bounds on the seat's total phase bet, if it may act. The
    /// maximum is the seat's current bet plus its remaining stack.
    pub fn action_bounds(&self, seat_id: usize) -> Option<(u32, u32)> {
        let round = self.round.as_ref()?;
        if self.settled || round.active_seat() != Some(seat_id) {
            return None;
        }
        let seat = self.seats.get(seat_id)?;
        Some((round.min_for(seat), seat.bet() + seat.chips()))
    }

    /// Settlement event of the most recently completed round.
    pub fn last_round_end(&self) -> Option<&RoundEndEvent> {
        self.last_event.as_ref()
    }

    /// Hand-history record of the most recently completed round, ready for a
    /// [`crate::logger::HandLogger`].
    pub fn last_hand_record(&self) -> Option<&HandRecord> {
        self.last_record.as_ref()
    }

    /// Installs a decision policy for an automated seat. Seats without a
    /// policy wait for external actions.
    pub fn set_policy(
        &mut self,
        seat_id: usize,
        policy: Box<dyn SeatPolicy>,
    ) -> Result<(), EngineError> {
        if seat_id >= self.policies.len() {
            return Err(EngineError::UnknownSeat { seat: seat_id });
        }
        self.policies[seat_id] = Some(policy);
        Ok(())
    }

    pub fn clear_policy(&mut self, seat_id: usize) {
        if let Some(slot) = self.policies.get_mut(seat_id) {
            *slot = None;
        }
    }

    /// The game is over when at most one seat retains a positive stack.
    pub fn is_game_over(&self) -> bool {
        self.live_count() <= 1
    }

    pub fn winner(&self) -> Option<usize> {
        if !self.is_game_over() {
            return None;
        }
        self.seats.iter().find(|s| s.chips() > 0).map(|s| s.id())
    }

    /// Starts a fresh round: rotated blinds are posted, the deck reshuffled,
    /// hole cards dealt, and preflop action opened. Automated seats act
    /// immediately; the returned snapshot reflects their moves.
    pub fn start_round(&mut self) -> Result<RoundStateSnapshot, EngineError> {
        if self.round_in_progress() {
            return Err(EngineError::RoundInProgress);
        }
        for s in &mut self.seats {
            if s.chips() == 0 {
                s.eliminate();
            }
        }
        let live = self.live_count();
        if live < 2 {
            return Err(EngineError::InsufficientPlayers { active: live });
        }
        for s in &mut self.seats {
            s.reset_for_round();
        }

        if !self.is_live(self.dealer) {
            self.dealer = self.next_live_after(self.dealer).unwrap_or(self.dealer);
        }
        let dealer = self.dealer;
        let (sb, bb) = if live == 2 {
            // heads-up: the button posts the small blind
            let other = self
                .next_live_after(dealer)
                .ok_or(EngineError::InsufficientPlayers { active: live })?;
            (dealer, other)
        } else {
            let sb = self
                .next_live_after(dealer)
                .ok_or(EngineError::InsufficientPlayers { active: live })?;
            let bb = self
                .next_live_after(sb)
                .ok_or(EngineError::InsufficientPlayers { active: live })?;
            (sb, bb)
        };

        // post blinds, forcing all-in when a stack cannot cover its blind
        let sb_amount = self.config.small_blind.min(self.seats[sb].chips());
        self.seats[sb].commit(sb_amount)?;
        let bb_amount = self.config.big_blind.min(self.seats[bb].chips());
        self.seats[bb].commit(bb_amount)?;

        self.round_no += 1;
        self.actions.clear();
        self.settled = false;
        let mut round = Round::new(dealer, sb, bb, self.config.big_blind);
        if let Err(e) = round.begin(&mut self.seats, &mut self.deck) {
            // refund posted blinds; the round never existed
            for s in &mut self.seats {
                let invested = s.invested();
                s.add_chips(invested);
                s.clear_investment();
            }
            self.settled = true;
            return Err(e);
        }
        self.round = Some(round);
        if let Err(e) = self.audit() {
            self.abort_round();
            return Err(e);
        }
        // blinds alone can leave everyone all-in and the board run out
        self.maybe_settle()?;
        self.resolve_automated()?;
        Ok(self.snapshot_for(None))
    }

    /// The single validated entry point for all actions: human input,
    /// turn-timer folds, and disconnect folds alike. Rejected actions leave
    /// the round untouched; fatal invariant violations abort it.
    pub fn apply_action(
        &mut self,
        seat_id: usize,
        action: PlayerAction,
    ) -> Result<RoundStateSnapshot, EngineError> {
        self.apply_action_inner(seat_id, action)?;
        self.resolve_automated()?;
        Ok(self.snapshot_for(None))
    }

    /// Broadcast-safe snapshot. `viewer` controls hole-card visibility: a
    /// seat sees only its own cards until showdown reveals the contenders'.
    pub fn snapshot_for(&self, viewer: Option<usize>) -> RoundStateSnapshot {
        let (phase, community, active) = match &self.round {
            Some(r) => (r.phase(), r.community().to_vec(), r.active_seat()),
            None => (Phase::InitialDeal, Vec::new(), None),
        };
        let mut layers = build_pots(&self.seats);
        let pot = if layers.is_empty() {
            0
        } else {
            layers.remove(0).amount
        };
        let showdown = phase == Phase::Showdown;
        let seats = self
            .seats
            .iter()
            .map(|s| SeatSnapshot {
                id: s.id(),
                chips: s.chips(),
                bet: s.bet(),
                folded: s.is_folded(),
                all_in: s.is_all_in(),
                hole: match s.hole_cards() {
                    [Some(a), Some(b)]
                        if viewer == Some(s.id()) || (showdown && s.is_contender()) =>
                    {
                        Some([a, b])
                    }
                    _ => None,
                },
            })
            .collect();
        RoundStateSnapshot {
            phase,
            community_cards: community,
            pot,
            side_pots: layers,
            seats,
            active_seat_id: if self.settled { None } else { active },
        }
    }

    fn apply_action_inner(
        &mut self,
        seat_id: usize,
        action: PlayerAction,
    ) -> Result<(), EngineError> {
        if seat_id >= self.seats.len() {
            return Err(EngineError::UnknownSeat { seat: seat_id });
        }
        if !self.round_in_progress() {
            return Err(EngineError::NoRoundInProgress);
        }
        if self.seats[seat_id].is_folded() {
            return Err(EngineError::SeatFolded { seat: seat_id });
        }
        if self.seats[seat_id].is_all_in() {
            return Err(EngineError::SeatAllIn { seat: seat_id });
        }
        let (min, max, phase) = {
            let round = match self.round.as_ref() {
                Some(r) => r,
                None => return Err(EngineError::NoRoundInProgress),
            };
            (
                round.min_for(&self.seats[seat_id]),
                self.seats[seat_id].bet() + self.seats[seat_id].chips(),
                round.phase(),
            )
        };
        let validated = validate_action(min, max, action)?;

        let applied = match self.round.as_mut() {
            Some(round) => round.apply(&mut self.seats, &mut self.deck, seat_id, validated),
            None => return Err(EngineError::NoRoundInProgress),
        };
        if let Err(e) = applied {
            if e.is_fatal() {
                self.abort_round();
            }
            return Err(e);
        }
        self.actions.push(ActionRecord {
            seat: seat_id,
            phase,
            action: validated,
        });
        if let Err(e) = self.audit() {
            self.abort_round();
            return Err(e);
        }
        self.maybe_settle()
    }

    // Resolves automated seats in a synchronous loop until a human seat is
    // active or the round ends.
    fn resolve_automated(&mut self) -> Result<(), EngineError> {
        let mut steps = 0;
        loop {
            if self.settled {
                break;
            }
            let active = match &self.round {
                Some(r) => match r.active_seat() {
                    Some(a) => a,
                    None => break,
                },
                None => break,
            };
            if self.policies[active].is_none() {
                break;
            }
            steps += 1;
            if steps > MAX_POLICY_STEPS {
                self.abort_round();
                return Err(EngineError::PolicyLoopExceeded(MAX_POLICY_STEPS));
            }
            let action = match self.observable_for(active) {
                Some(view) => {
                    let decision = match &self.policies[active] {
                        Some(p) => p.decide(&view),
                        None => break,
                    };
                    match decision {
                        Decision::Fold => PlayerAction::Fold,
                        Decision::Call => PlayerAction::Call,
                        Decision::RaiseTo(target) => {
                            PlayerAction::Bet(target.clamp(view.min, view.max))
                        }
                    }
                }
                None => PlayerAction::Fold,
            };
            match self.apply_action_inner(active, action) {
                Ok(()) => {}
                // a policy that slipped outside its bounds folds instead of
                // stalling the round
                Err(e) if !e.is_fatal() => self.apply_action_inner(active, PlayerAction::Fold)?,
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    fn observable_for(&self, seat_id: usize) -> Option<ObservableState> {
        let round = self.round.as_ref()?;
        let seat = self.seats.get(seat_id)?;
        let hole = seat.hole_cards();
        let (c1, c2) = (hole[0]?, hole[1]?);
        Some(ObservableState {
            phase: round.phase(),
            hole: [c1, c2],
            community: round.community().to_vec(),
            high_bet: round.high_bet(),
            current_bet: seat.bet(),
            pot: self.seats.iter().map(|s| s.invested()).sum(),
            stack: seat.chips(),
            min: round.min_for(seat),
            max: seat.bet() + seat.chips(),
            big_blind: round.big_blind(),
        })
    }

    fn maybe_settle(&mut self) -> Result<(), EngineError> {
        let due = match &self.round {
            Some(r) if !self.settled => {
                let contenders = self.seats.iter().filter(|s| s.is_contender()).count();
                contenders <= 1 || r.phase() == Phase::Showdown
            }
            _ => false,
        };
        if due {
            self.settle_round()?;
        }
        Ok(())
    }

    /// Sweeps the pot, ranks contenders, awards every layer independently,
    /// takes the rake, records start/end stacks, eliminates busted seats,
    /// and rotates the dealer for the next round.
    fn settle_round(&mut self) -> Result<(), EngineError> {
        let (dealer, community) = match &self.round {
            Some(r) => (r.dealer(), r.community().to_vec()),
            None => return Err(EngineError::NoRoundInProgress),
        };
        if let Some(r) = self.round.as_mut() {
            r.reconcile_pot(&mut self.seats);
        }
        let contenders: Vec<usize> = self
            .seats
            .iter()
            .filter(|s| s.is_contender())
            .map(|s| s.id())
            .collect();
        let total: u32 = self.seats.iter().map(|s| s.invested()).sum();
        let rake = (((total as u64) * (self.config.rake_bps as u64)) / 10_000) as u32;
        let rake = rake.min(total);

        let mut payouts: BTreeMap<usize, u32> = BTreeMap::new();
        let mut ranked: Vec<RankedHand> = Vec::new();

        if contenders.len() == 1 {
            // everyone else folded: instant award, no card reveal
            payouts.insert(contenders[0], total - rake);
        } else {
            for &id in &contenders {
                let hole = self.seats[id].hole_cards();
                if let (Some(c1), Some(c2)) = (hole[0], hole[1]) {
                    let mut cards = vec![c1, c2];
                    cards.extend_from_slice(&community);
                    if let Some((strength, five)) = best_hand(&cards) {
                        ranked.push(RankedHand {
                            seat_id: id,
                            category: strength.category,
                            tiebreak: strength.kickers,
                            best_five: five,
                        });
                    }
                }
            }
            ranked.sort_by(|a, b| (b.category, b.tiebreak).cmp(&(a.category, a.tiebreak)));

            let mut layers = build_pots(&self.seats);
            if let Some(first) = layers.first_mut() {
                first.amount -= rake.min(first.amount);
            }
            for layer in &layers {
                let best = ranked
                    .iter()
                    .filter(|r| layer.eligible.contains(&r.seat_id))
                    .map(|r| (r.category, r.tiebreak))
                    .max();
                let best = match best {
                    Some(b) => b,
                    None => continue,
                };
                let winners: Vec<usize> = ranked
                    .iter()
                    .filter(|r| {
                        layer.eligible.contains(&r.seat_id)
                            && (r.category, r.tiebreak) == best
                    })
                    .map(|r| r.seat_id)
                    .collect();
                for (w, amount) in split_award(layer.amount, &winners, dealer, self.seats.len())
                {
                    *payouts.entry(w).or_insert(0) += amount;
                }
            }
        }

        let paid: u64 = payouts.values().map(|&v| v as u64).sum();
        if paid + rake as u64 != total as u64 {
            self.abort_round();
            return Err(EngineError::ChipConservation {
                expected: total as u64,
                actual: paid + rake as u64,
            });
        }

        for (&id, &amount) in &payouts {
            self.seats[id].add_chips(amount);
        }
        self.rake_collected += rake;

        let mut net = BTreeMap::new();
        for s in &mut self.seats {
            s.clear_investment();
            net.insert(s.id(), s.chips() as i64 - s.round_start_chips() as i64);
            if s.chips() == 0 {
                s.eliminate();
            }
        }

        self.last_event = Some(RoundEndEvent {
            ranked_hierarchy: ranked.clone(),
            payouts: payouts.clone(),
            rake,
            net,
        });
        self.last_record = Some(HandRecord {
            round_no: self.round_no,
            seed: self.config.seed,
            actions: std::mem::take(&mut self.actions),
            board: community,
            payouts,
            rake,
            ts: None,
            showdown: ranked,
        });

        // rotate the dealer button clockwise for the next round
        self.dealer = self.next_live_after(dealer).unwrap_or(dealer);
        self.settled = true;
        self.audit()
    }

    fn abort_round(&mut self) {
        // return outstanding round investments to their stacks, so
        // conservation holds and the table can host a fresh round
        for s in &mut self.seats {
            let invested = s.invested();
            s.add_chips(invested);
            s.clear_investment();
        }
        self.round = None;
        self.settled = true;
        self.actions.clear();
    }

    // sum(stacks) + sum(round investments) + collected rake must equal the
    // chips the table opened with, at every observation point
    fn audit(&self) -> Result<(), EngineError> {
        let actual: u64 = self
            .seats
            .iter()
            .map(|s| s.chips() as u64 + s.invested() as u64)
            .sum::<u64>()
            + self.rake_collected as u64;
        if actual != self.chip_total {
            return Err(EngineError::ChipConservation {
                expected: self.chip_total,
                actual,
            });
        }
        Ok(())
    }

    fn is_live(&self, id: usize) -> bool {
        self.seats
            .get(id)
            .map(|s| !s.is_eliminated() && s.chips() > 0)
            .unwrap_or(false)
    }

    fn live_count(&self) -> usize {
        (0..self.seats.len()).filter(|&i| self.is_live(i)).count()
    }

    fn next_live_after(&self, from: usize) -> Option<usize> {
        let n = self.seats.len();
        (1..=n).map(|k| (from + k) % n).find(|&i| self.is_live(i))
    }
}
