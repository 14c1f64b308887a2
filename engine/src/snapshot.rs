use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::Category;
use crate::pot::PotLayer;
use crate::round::Phase;

/// Public view of one seat. `hole` is present only for the viewing seat, and
/// for every contender once showdown is reached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeatSnapshot {
    pub id: usize,
    pub chips: u32,
    pub bet: u32,
    pub folded: bool,
    pub all_in: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hole: Option<[Card; 2]>,
}

/// Broadcast-safe state of the table mid-round. The pot figures are derived
/// from each seat's total round investment, so
/// `sum(chips) + pot + side_pots` stays constant through the round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundStateSnapshot {
    pub phase: Phase,
    pub community_cards: Vec<Card>,
    /// The main pot.
    pub pot: u32,
    /// Side pots beyond the main pot, lowest contribution ceiling first.
    pub side_pots: Vec<PotLayer>,
    pub seats: Vec<SeatSnapshot>,
    pub active_seat_id: Option<usize>,
}

/// One contender's showdown result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedHand {
    pub seat_id: usize,
    pub category: Category,
    pub tiebreak: [u8; 5],
    pub best_five: [Card; 5],
}

/// Emitted when a round settles. Consumers (wallet ledgers, UI, history)
/// read this; the engine itself performs no I/O.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundEndEvent {
    /// Contenders ranked strongest first; empty when the round ended on folds.
    pub ranked_hierarchy: Vec<RankedHand>,
    pub payouts: BTreeMap<usize, u32>,
    pub rake: u32,
    /// Per-seat stack delta across the round (end minus start).
    pub net: BTreeMap<usize, i64>,
}
