use std::cmp::Ordering;

use holdem_engine::cards::{Card, Rank, Suit};
use holdem_engine::hand::{best_hand, compare_hands, evaluate_five, evaluate_hand, Category};

fn c(rank: Rank, suit: Suit) -> Card {
    Card { suit, rank }
}

#[test]
fn categories_resolve_from_five_cards() {
    let straight_flush = evaluate_five(&[
        c(Rank::Nine, Suit::Hearts),
        c(Rank::Eight, Suit::Hearts),
        c(Rank::Seven, Suit::Hearts),
        c(Rank::Six, Suit::Hearts),
        c(Rank::Five, Suit::Hearts),
    ]);
    assert_eq!(straight_flush.category, Category::StraightFlush);
    assert_eq!(straight_flush.kickers[0], 9);

    let quads = evaluate_five(&[
        c(Rank::King, Suit::Hearts),
        c(Rank::King, Suit::Spades),
        c(Rank::King, Suit::Clubs),
        c(Rank::King, Suit::Diamonds),
        c(Rank::Two, Suit::Hearts),
    ]);
    assert_eq!(quads.category, Category::FourOfAKind);
    assert_eq!(quads.kickers[0], 13);

    let boat = evaluate_five(&[
        c(Rank::Ten, Suit::Hearts),
        c(Rank::Ten, Suit::Spades),
        c(Rank::Ten, Suit::Clubs),
        c(Rank::Four, Suit::Diamonds),
        c(Rank::Four, Suit::Hearts),
    ]);
    assert_eq!(boat.category, Category::FullHouse);
    assert_eq!(boat.kickers[..2], [10, 4]);

    let flush = evaluate_five(&[
        c(Rank::Ace, Suit::Clubs),
        c(Rank::Jack, Suit::Clubs),
        c(Rank::Eight, Suit::Clubs),
        c(Rank::Five, Suit::Clubs),
        c(Rank::Three, Suit::Clubs),
    ]);
    assert_eq!(flush.category, Category::Flush);
    assert_eq!(flush.kickers, [14, 11, 8, 5, 3]);

    let two_pair = evaluate_five(&[
        c(Rank::Queen, Suit::Hearts),
        c(Rank::Queen, Suit::Spades),
        c(Rank::Seven, Suit::Clubs),
        c(Rank::Seven, Suit::Diamonds),
        c(Rank::Ace, Suit::Hearts),
    ]);
    assert_eq!(two_pair.category, Category::TwoPair);
    assert_eq!(two_pair.kickers[..3], [12, 7, 14]);
}

#[test]
fn ace_low_wheel_is_a_five_high_straight() {
    let wheel = evaluate_five(&[
        c(Rank::Ace, Suit::Hearts),
        c(Rank::Two, Suit::Spades),
        c(Rank::Three, Suit::Clubs),
        c(Rank::Four, Suit::Diamonds),
        c(Rank::Five, Suit::Hearts),
    ]);
    assert_eq!(wheel.category, Category::Straight);
    assert_eq!(wheel.kickers[0], 5);

    let six_high = evaluate_five(&[
        c(Rank::Two, Suit::Hearts),
        c(Rank::Three, Suit::Spades),
        c(Rank::Four, Suit::Clubs),
        c(Rank::Five, Suit::Diamonds),
        c(Rank::Six, Suit::Hearts),
    ]);
    assert_eq!(compare_hands(&six_high, &wheel), Ordering::Greater);
}

#[test]
fn ace_high_straight_does_not_wrap() {
    // Q-K-A-2-3 is no straight
    let hand = evaluate_five(&[
        c(Rank::Queen, Suit::Hearts),
        c(Rank::King, Suit::Spades),
        c(Rank::Ace, Suit::Clubs),
        c(Rank::Two, Suit::Diamonds),
        c(Rank::Three, Suit::Hearts),
    ]);
    assert_eq!(hand.category, Category::HighCard);
}

#[test]
fn category_order_is_total() {
    let hands = [
        evaluate_five(&[
            c(Rank::Ace, Suit::Hearts),
            c(Rank::Jack, Suit::Spades),
            c(Rank::Eight, Suit::Clubs),
            c(Rank::Five, Suit::Diamonds),
            c(Rank::Three, Suit::Hearts),
        ]),
        evaluate_five(&[
            c(Rank::Nine, Suit::Hearts),
            c(Rank::Nine, Suit::Spades),
            c(Rank::Eight, Suit::Clubs),
            c(Rank::Five, Suit::Diamonds),
            c(Rank::Three, Suit::Hearts),
        ]),
        evaluate_five(&[
            c(Rank::Nine, Suit::Hearts),
            c(Rank::Nine, Suit::Spades),
            c(Rank::Eight, Suit::Clubs),
            c(Rank::Eight, Suit::Diamonds),
            c(Rank::Three, Suit::Hearts),
        ]),
        evaluate_five(&[
            c(Rank::Nine, Suit::Hearts),
            c(Rank::Nine, Suit::Spades),
            c(Rank::Nine, Suit::Clubs),
            c(Rank::Eight, Suit::Diamonds),
            c(Rank::Three, Suit::Hearts),
        ]),
        evaluate_five(&[
            c(Rank::Nine, Suit::Hearts),
            c(Rank::Eight, Suit::Spades),
            c(Rank::Seven, Suit::Clubs),
            c(Rank::Six, Suit::Diamonds),
            c(Rank::Five, Suit::Hearts),
        ]),
        evaluate_five(&[
            c(Rank::Ace, Suit::Clubs),
            c(Rank::Jack, Suit::Clubs),
            c(Rank::Eight, Suit::Clubs),
            c(Rank::Five, Suit::Clubs),
            c(Rank::Three, Suit::Clubs),
        ]),
        evaluate_five(&[
            c(Rank::Nine, Suit::Hearts),
            c(Rank::Nine, Suit::Spades),
            c(Rank::Nine, Suit::Clubs),
            c(Rank::Eight, Suit::Diamonds),
            c(Rank::Eight, Suit::Hearts),
        ]),
        evaluate_five(&[
            c(Rank::Nine, Suit::Hearts),
            c(Rank::Nine, Suit::Spades),
            c(Rank::Nine, Suit::Clubs),
            c(Rank::Nine, Suit::Diamonds),
            c(Rank::Three, Suit::Hearts),
        ]),
        evaluate_five(&[
            c(Rank::Nine, Suit::Hearts),
            c(Rank::Eight, Suit::Hearts),
            c(Rank::Seven, Suit::Hearts),
            c(Rank::Six, Suit::Hearts),
            c(Rank::Five, Suit::Hearts),
        ]),
    ];
    for pair in hands.windows(2) {
        assert_eq!(compare_hands(&pair[1], &pair[0]), Ordering::Greater);
    }
}

#[test]
fn kickers_break_ties_within_a_category() {
    let better = evaluate_five(&[
        c(Rank::Ace, Suit::Hearts),
        c(Rank::King, Suit::Spades),
        c(Rank::Queen, Suit::Clubs),
        c(Rank::Jack, Suit::Diamonds),
        c(Rank::Nine, Suit::Hearts),
    ]);
    let worse = evaluate_five(&[
        c(Rank::Ace, Suit::Spades),
        c(Rank::King, Suit::Hearts),
        c(Rank::Queen, Suit::Diamonds),
        c(Rank::Jack, Suit::Clubs),
        c(Rank::Eight, Suit::Spades),
    ]);
    assert_eq!(compare_hands(&better, &worse), Ordering::Greater);

    let same = evaluate_five(&[
        c(Rank::Ace, Suit::Clubs),
        c(Rank::King, Suit::Clubs),
        c(Rank::Queen, Suit::Spades),
        c(Rank::Jack, Suit::Spades),
        c(Rank::Nine, Suit::Diamonds),
    ]);
    assert_eq!(compare_hands(&better, &same), Ordering::Equal);
}

#[test]
fn best_hand_finds_the_flush_in_seven_cards() {
    let cards = [
        c(Rank::Ace, Suit::Hearts),
        c(Rank::Ten, Suit::Hearts),
        c(Rank::Seven, Suit::Hearts),
        c(Rank::Four, Suit::Hearts),
        c(Rank::Two, Suit::Hearts),
        c(Rank::Ace, Suit::Spades),
        c(Rank::Ace, Suit::Clubs),
    ];
    let (strength, five) = best_hand(&cards).unwrap();
    assert_eq!(strength.category, Category::Flush);
    assert!(five.iter().all(|card| card.suit == Suit::Hearts));
    for card in &five {
        assert!(cards.contains(card));
    }
}

#[test]
fn best_hand_prefers_the_board_straight_over_a_pair() {
    let cards = [
        c(Rank::Two, Suit::Hearts),
        c(Rank::Two, Suit::Spades),
        c(Rank::Six, Suit::Clubs),
        c(Rank::Seven, Suit::Diamonds),
        c(Rank::Eight, Suit::Hearts),
        c(Rank::Nine, Suit::Clubs),
        c(Rank::Ten, Suit::Diamonds),
    ];
    let strength = evaluate_hand(&cards).unwrap();
    assert_eq!(strength.category, Category::Straight);
    assert_eq!(strength.kickers[0], 10);
}

#[test]
fn fewer_than_five_cards_do_not_evaluate() {
    let cards = [
        c(Rank::Ace, Suit::Hearts),
        c(Rank::King, Suit::Spades),
        c(Rank::Queen, Suit::Clubs),
        c(Rank::Jack, Suit::Diamonds),
    ];
    assert!(evaluate_hand(&cards).is_none());
    assert!(best_hand(&cards).is_none());
}
