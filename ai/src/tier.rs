//! Tier-based policy for automated seats.
//!
//! Buckets the seat's hand into weak/medium/strong tiers — preflop from the
//! hole cards alone, postflop from the best five-card hand — and turns the
//! tier plus pot odds into a deterministic fold/call/raise decision.

use holdem_engine::cards::Card;
use holdem_engine::hand::{evaluate_hand, Category};
use holdem_engine::policy::{Decision, ObservableState, SeatPolicy};
use holdem_engine::round::Phase;

/// Hand strength bucket the policy steers by.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Tier {
    Weak,
    Medium,
    Strong,
}

/// Deterministic tier-based policy.
///
/// # Strategy
///
/// **Preflop:** hole cards are scored on a 0-10 scale (pairs, high-card
/// combinations, suitedness, connectedness); 8+ plays as strong, 4-7 as
/// medium, the rest as weak.
///
/// **Postflop:** the best five-card hand decides the tier: full house or
/// better is strong, two pair through flush is medium, one pair or less is
/// weak.
///
/// **Sizing:** strong hands raise to the minimum plus half the pot. Medium
/// hands call when the pot odds justify it. Weak hands check when the
/// minimum is already met and fold otherwise. No randomness, so simulations
/// replay identically.
#[derive(Debug, Clone, Default)]
pub struct TierPolicy;

impl TierPolicy {
    pub fn new() -> Self {
        Self
    }

    /// Scores hole cards on a 0-10 scale.
    ///
    /// - 9-10: premium (AA-JJ, AKs)
    /// - 7-8: strong (TT-99, AK, AQ, KQs)
    /// - 5-6: medium (88-77, AJ, broadway, good suited connectors)
    /// - 3-4: marginal (small pairs, Ax, weak broadway)
    /// - 0-2: weak offsuit hands
    fn preflop_score(hole: [Card; 2]) -> u8 {
        let r1 = hole[0].rank.value();
        let r2 = hole[1].rank.value();
        let (high, low) = if r1 > r2 { (r1, r2) } else { (r2, r1) };
        let suited = hole[0].suit == hole[1].suit;

        if r1 == r2 {
            return match high {
                14 | 13 => 10,
                12 | 11 => 9,
                10 => 8,
                9 => 7,
                8 => 6,
                7 => 5,
                _ => 4,
            };
        }

        match (high, low) {
            (14, 13) => {
                if suited {
                    10
                } else {
                    8
                }
            }
            (14, 12) => {
                if suited {
                    8
                } else {
                    7
                }
            }
            (14, 11) => {
                if suited {
                    7
                } else {
                    6
                }
            }
            (14, 10) => {
                if suited {
                    6
                } else {
                    5
                }
            }
            (14, _) => {
                if suited {
                    5
                } else {
                    4
                }
            }
            (13, 12) => {
                if suited {
                    7
                } else {
                    6
                }
            }
            (13, 11) => {
                if suited {
                    6
                } else {
                    5
                }
            }
            (13, 10) | (12, 10) => {
                if suited {
                    5
                } else {
                    4
                }
            }
            (12, 11) => {
                if suited {
                    6
                } else {
                    5
                }
            }
            _ => {
                if suited && high - low <= 2 {
                    if high >= 9 {
                        5
                    } else {
                        4
                    }
                } else if high >= 11 && low >= 9 {
                    4
                } else {
                    2
                }
            }
        }
    }

    fn preflop_tier(hole: [Card; 2]) -> Tier {
        match Self::preflop_score(hole) {
            8..=10 => Tier::Strong,
            4..=7 => Tier::Medium,
            _ => Tier::Weak,
        }
    }

    /// Tiers the best five-card hand out of hole plus community cards.
    /// Falls back to the preflop tier when fewer than three board cards are
    /// out.
    fn postflop_tier(hole: [Card; 2], community: &[Card]) -> Tier {
        if community.len() < 3 {
            return Self::preflop_tier(hole);
        }
        let mut cards = vec![hole[0], hole[1]];
        cards.extend_from_slice(community);
        match evaluate_hand(&cards) {
            Some(strength) => match strength.category {
                Category::FullHouse | Category::FourOfAKind | Category::StraightFlush => {
                    Tier::Strong
                }
                Category::TwoPair
                | Category::ThreeOfAKind
                | Category::Straight
                | Category::Flush => Tier::Medium,
                Category::OnePair | Category::HighCard => Tier::Weak,
            },
            None => Self::preflop_tier(hole),
        }
    }

    /// Pot odds for calling: pot / (pot + call), 1.0 for a free action.
    fn pot_odds(pot: u32, to_call: u32) -> f32 {
        if to_call == 0 {
            return 1.0;
        }
        pot as f32 / (pot + to_call) as f32
    }
}

impl SeatPolicy for TierPolicy {
    fn decide(&self, view: &ObservableState) -> Decision {
        let tier = match view.phase {
            Phase::InitialDeal | Phase::Preflop => Self::preflop_tier(view.hole),
            _ => Self::postflop_tier(view.hole, &view.community),
        };

        let to_call = view.min.saturating_sub(view.current_bet);
        match tier {
            Tier::Strong => {
                // value raise to the minimum plus half the pot; the engine
                // clamps the target into the legal range
                let target = view.min + (view.pot / 2).max(view.big_blind);
                Decision::RaiseTo(target)
            }
            Tier::Medium => {
                if to_call == 0
                    || Self::pot_odds(view.pot, to_call) >= 0.3
                    || to_call <= view.pot / 4
                {
                    Decision::Call
                } else {
                    Decision::Fold
                }
            }
            Tier::Weak => {
                if to_call == 0 {
                    Decision::Call
                } else {
                    Decision::Fold
                }
            }
        }
    }

    fn name(&self) -> &str {
        "TierPolicy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::cards::{Rank, Suit};

    fn card(rank: Rank, suit: Suit) -> Card {
        Card { suit, rank }
    }

    fn view(hole: [Card; 2], community: Vec<Card>, phase: Phase) -> ObservableState {
        ObservableState {
            phase,
            hole,
            community,
            high_bet: 20,
            current_bet: 0,
            pot: 30,
            stack: 1_000,
            min: 20,
            max: 1_000,
            big_blind: 20,
        }
    }

    #[test]
    fn premium_pairs_score_as_strong() {
        let aces = [card(Rank::Ace, Suit::Hearts), card(Rank::Ace, Suit::Spades)];
        assert_eq!(TierPolicy::preflop_score(aces), 10);
        assert_eq!(TierPolicy::preflop_tier(aces), Tier::Strong);

        let tens = [card(Rank::Ten, Suit::Hearts), card(Rank::Ten, Suit::Clubs)];
        assert_eq!(TierPolicy::preflop_tier(tens), Tier::Strong);
    }

    #[test]
    fn suited_ace_king_outranks_offsuit() {
        let suited = [card(Rank::Ace, Suit::Hearts), card(Rank::King, Suit::Hearts)];
        let offsuit = [card(Rank::Ace, Suit::Hearts), card(Rank::King, Suit::Spades)];
        assert!(TierPolicy::preflop_score(suited) > TierPolicy::preflop_score(offsuit));
        assert_eq!(TierPolicy::preflop_tier(suited), Tier::Strong);
    }

    #[test]
    fn seven_deuce_offsuit_is_weak() {
        let trash = [card(Rank::Seven, Suit::Hearts), card(Rank::Two, Suit::Spades)];
        assert_eq!(TierPolicy::preflop_tier(trash), Tier::Weak);
    }

    #[test]
    fn full_house_tiers_strong_postflop() {
        let hole = [card(Rank::Ace, Suit::Hearts), card(Rank::Ace, Suit::Spades)];
        let board = vec![
            card(Rank::Ace, Suit::Diamonds),
            card(Rank::King, Suit::Clubs),
            card(Rank::King, Suit::Hearts),
        ];
        assert_eq!(TierPolicy::postflop_tier(hole, &board), Tier::Strong);
    }

    #[test]
    fn one_pair_tiers_weak_postflop() {
        let hole = [card(Rank::Ace, Suit::Hearts), card(Rank::Seven, Suit::Spades)];
        let board = vec![
            card(Rank::Ace, Suit::Diamonds),
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Four, Suit::Hearts),
        ];
        assert_eq!(TierPolicy::postflop_tier(hole, &board), Tier::Weak);
    }

    #[test]
    fn pot_odds_free_action_is_certain() {
        assert_eq!(TierPolicy::pot_odds(100, 0), 1.0);
        let odds = TierPolicy::pot_odds(100, 50);
        assert!((odds - 0.667).abs() < 0.01);
    }

    #[test]
    fn strong_hand_raises_over_the_minimum() {
        let policy = TierPolicy::new();
        let hole = [card(Rank::Ace, Suit::Hearts), card(Rank::Ace, Suit::Spades)];
        let v = view(hole, Vec::new(), Phase::Preflop);
        match policy.decide(&v) {
            Decision::RaiseTo(target) => assert!(target > v.min),
            other => panic!("expected a raise, got {:?}", other),
        }
    }

    #[test]
    fn weak_hand_folds_to_a_bet_but_checks_for_free() {
        let policy = TierPolicy::new();
        let hole = [card(Rank::Seven, Suit::Hearts), card(Rank::Two, Suit::Spades)];

        let facing = view(hole, Vec::new(), Phase::Preflop);
        assert_eq!(policy.decide(&facing), Decision::Fold);

        // big blind with the minimum already met
        let mut matched = view(hole, Vec::new(), Phase::Preflop);
        matched.current_bet = 20;
        assert_eq!(policy.decide(&matched), Decision::Call);
    }

    #[test]
    fn medium_hand_folds_when_priced_out() {
        let policy = TierPolicy::new();
        let hole = [card(Rank::King, Suit::Hearts), card(Rank::Nine, Suit::Hearts)];
        let board = vec![
            card(Rank::King, Suit::Diamonds),
            card(Rank::Nine, Suit::Clubs),
            card(Rank::Four, Suit::Spades),
        ];

        // two pair, but facing a bet ten times the pot
        let mut priced_out = view(hole, board.clone(), Phase::Flop);
        priced_out.pot = 60;
        priced_out.high_bet = 600;
        priced_out.min = 600;
        assert_eq!(policy.decide(&priced_out), Decision::Fold);

        // the same hand calls a pot-sized bet
        let mut affordable = view(hole, board, Phase::Flop);
        affordable.pot = 60;
        affordable.high_bet = 30;
        affordable.min = 30;
        assert_eq!(policy.decide(&affordable), Decision::Call);
    }
}
