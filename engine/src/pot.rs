use serde::{Deserialize, Serialize};

use crate::player::Seat;

/// One layer of the pot. The first layer is the main pot; later layers are
/// side pots created by all-in contribution ceilings.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PotLayer {
    pub amount: u32,
    /// Seats that can win this layer, in seat order.
    pub eligible: Vec<usize>,
}

/// Computes pot layers from a snapshot of each seat's total round
/// investment.
///
/// Layer boundaries are the distinct all-in contribution levels among the
/// contenders (non-folded seats), plus the top contender investment. Every
/// chip invested up to a boundary funds that layer, folded contributions
/// included, but only contenders whose investment reaches the boundary (or
/// who can still act this round) are eligible to win it.
pub fn build_pots(seats: &[Seat]) -> Vec<PotLayer> {
    let mut levels: Vec<u32> = seats
        .iter()
        .filter(|s| s.is_contender() && s.is_all_in() && s.invested() > 0)
        .map(|s| s.invested())
        .collect();
    if let Some(top) = seats
        .iter()
        .filter(|s| s.is_contender())
        .map(|s| s.invested())
        .max()
    {
        if top > 0 {
            levels.push(top);
        }
    }
    levels.sort_unstable();
    levels.dedup();

    let mut pots: Vec<PotLayer> = Vec::new();
    let mut prev = 0u32;
    for &level in &levels {
        let amount: u32 = seats
            .iter()
            .map(|s| s.invested().min(level) - s.invested().min(prev))
            .sum();
        let eligible: Vec<usize> = seats
            .iter()
            .filter(|s| s.is_contender() && (s.invested() >= level || s.can_act()))
            .map(|s| s.id())
            .collect();
        if amount > 0 {
            pots.push(PotLayer { amount, eligible });
        }
        prev = level;
    }

    // Folded chips above the top contender level (possible only if the last
    // aggressor folded) still belong to the pot; fold them into the top layer.
    let total: u32 = seats.iter().map(|s| s.invested()).sum();
    let assigned: u32 = pots.iter().map(|p| p.amount).sum();
    if total > assigned {
        if let Some(last) = pots.last_mut() {
            last.amount += total - assigned;
        }
    }
    pots
}

/// Splits a layer evenly among its winners. An indivisible remainder is
/// assigned one chip at a time to the winners nearest clockwise from the
/// dealer, a fixed rule so no chip is ever silently dropped.
pub fn split_award(
    amount: u32,
    winners: &[usize],
    dealer: usize,
    seat_count: usize,
) -> Vec<(usize, u32)> {
    if winners.is_empty() {
        return Vec::new();
    }
    let share = amount / winners.len() as u32;
    let mut remainder = amount % winners.len() as u32;

    let start = (dealer + 1) % seat_count;
    let mut ordered: Vec<usize> = winners.to_vec();
    ordered.sort_unstable_by_key(|&w| (w + seat_count - start) % seat_count);

    let mut payouts = Vec::with_capacity(ordered.len());
    for w in ordered {
        let extra = if remainder > 0 {
            remainder -= 1;
            1
        } else {
            0
        };
        payouts.push((w, share + extra));
    }
    payouts
}
