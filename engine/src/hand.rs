use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::cards::Card;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

/// Strength of a five-card hand. Ordering is total: category first, then
/// the kicker array compared lexicographically (entries are rank values,
/// high to low, zero-padded).
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandStrength {
    pub category: Category,
    // kickers: ordered high -> low for tiebreaks
    pub kickers: [u8; 5],
}

pub fn compare_hands(a: &HandStrength, b: &HandStrength) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.kickers.cmp(&b.kickers),
        ord => ord,
    }
}

/// Evaluates exactly five cards into a category plus tiebreak key.
pub fn evaluate_five(cards: &[Card; 5]) -> HandStrength {
    let mut rank_counts = [0u8; 15]; // 2..14 used
    for &c in cards.iter() {
        rank_counts[c.rank.value() as usize] += 1;
    }
    let flush = cards.iter().all(|c| c.suit == cards[0].suit);

    let mut unique: Vec<u8> = Vec::with_capacity(5);
    for r in 2..=14u8 {
        if rank_counts[r as usize] > 0 {
            unique.push(r);
        }
    }
    let straight_high = straight_high(&unique);

    if let Some(high) = straight_high {
        if flush {
            return HandStrength {
                category: Category::StraightFlush,
                kickers: [high, 0, 0, 0, 0],
            };
        }
    }

    // (count, rank) groups, largest group first, then highest rank first
    let mut groups: Vec<(u8, u8)> = unique
        .iter()
        .map(|&r| (rank_counts[r as usize], r))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));

    match (groups[0].0, groups.get(1).map(|g| g.0).unwrap_or(0)) {
        (4, _) => HandStrength {
            category: Category::FourOfAKind,
            kickers: [groups[0].1, groups[1].1, 0, 0, 0],
        },
        (3, 2) => HandStrength {
            category: Category::FullHouse,
            kickers: [groups[0].1, groups[1].1, 0, 0, 0],
        },
        _ if flush => HandStrength {
            category: Category::Flush,
            kickers: descending_kickers(&groups),
        },
        _ if straight_high.is_some() => HandStrength {
            category: Category::Straight,
            kickers: [straight_high.unwrap_or(0), 0, 0, 0, 0],
        },
        (3, _) => HandStrength {
            category: Category::ThreeOfAKind,
            kickers: [groups[0].1, groups[1].1, groups[2].1, 0, 0],
        },
        (2, 2) => HandStrength {
            category: Category::TwoPair,
            kickers: [groups[0].1, groups[1].1, groups[2].1, 0, 0],
        },
        (2, _) => HandStrength {
            category: Category::OnePair,
            kickers: [groups[0].1, groups[1].1, groups[2].1, groups[3].1, 0],
        },
        _ => HandStrength {
            category: Category::HighCard,
            kickers: descending_kickers(&groups),
        },
    }
}

/// Picks the strongest five-card hand out of five to seven cards, returning
/// its strength together with the cards themselves. `None` below five cards.
pub fn best_hand(cards: &[Card]) -> Option<(HandStrength, [Card; 5])> {
    let n = cards.len();
    if n < 5 {
        return None;
    }
    let mut best: Option<(HandStrength, [Card; 5])> = None;
    for a in 0..n - 4 {
        for b in a + 1..n - 3 {
            for c in b + 1..n - 2 {
                for d in c + 1..n - 1 {
                    for e in d + 1..n {
                        let five = [cards[a], cards[b], cards[c], cards[d], cards[e]];
                        let strength = evaluate_five(&five);
                        let better = match &best {
                            Some((cur, _)) => compare_hands(&strength, cur) == Ordering::Greater,
                            None => true,
                        };
                        if better {
                            best = Some((strength, five));
                        }
                    }
                }
            }
        }
    }
    best
}

/// Strength of the best five-card hand among up to seven cards.
pub fn evaluate_hand(cards: &[Card]) -> Option<HandStrength> {
    best_hand(cards).map(|(s, _)| s)
}

// unique must be ascending. Five distinct ranks form a straight when they are
// consecutive, or when they are the A-2-3-4-5 wheel (straight high 5).
fn straight_high(unique: &[u8]) -> Option<u8> {
    if unique.len() != 5 {
        return None;
    }
    if unique[4] - unique[0] == 4 {
        return Some(unique[4]);
    }
    if unique == [2, 3, 4, 5, 14] {
        return Some(5);
    }
    None
}

fn descending_kickers(groups: &[(u8, u8)]) -> [u8; 5] {
    let mut k = [0u8; 5];
    for (i, &(_, r)) in groups.iter().take(5).enumerate() {
        k[i] = r;
    }
    k
}
