//! # holdem-engine: Multiway Texas Hold'em Round Engine
//!
//! A deterministic Texas Hold'em round engine for up to ten seats: deck and
//! card modeling, private/community dealing, a betting state machine with
//! side-pot accounting, a 7-card showdown comparator, and a pluggable
//! decision policy hook for automated seats. Reproducible RNG makes every
//! round replayable; the engine performs no I/O of its own.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and deck construction
//! - [`deck`] - Deterministic shuffling and dealing with ChaCha20 RNG
//! - [`round`] - The round aggregate: phases, turn order, bet application
//! - [`table`] - Seat roster, blind rotation, the validated action entry point
//! - [`hand`] - Poker hand evaluation and strength comparison
//! - [`pot`] - Side-pot layering and split-award math
//! - [`player`] - Seat state, actions, and stack management
//! - [`rules`] - Betting validation and minimum-bet sizing
//! - [`policy`] - Observable state and the automated-seat decision trait
//! - [`snapshot`] - Broadcast-safe state snapshots and round-end events
//! - [`logger`] - Hand-history records and JSONL serialization
//! - [`errors`] - Error taxonomy for engine operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::player::PlayerAction;
//! use holdem_engine::table::{Table, TableConfig};
//!
//! let mut table = Table::with_uniform_stacks(TableConfig::default(), 3);
//! let snapshot = table.start_round().expect("enough seats");
//!
//! // The engine tells you whose turn it is and what they may do
//! let seat = snapshot.active_seat_id.expect("someone is active");
//! let (min, _max) = table.action_bounds(seat).expect("bounds for the actor");
//! table.apply_action(seat, PlayerAction::Bet(min)).expect("a call is legal");
//! ```
//!
//! ## Hand Evaluation
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_engine::hand::{evaluate_hand, Category};
//!
//! let cards = [
//!     Card { suit: Suit::Hearts, rank: Rank::Ace },
//!     Card { suit: Suit::Hearts, rank: Rank::King },
//!     Card { suit: Suit::Hearts, rank: Rank::Queen },
//!     Card { suit: Suit::Hearts, rank: Rank::Jack },
//!     Card { suit: Suit::Hearts, rank: Rank::Ten },
//!     Card { suit: Suit::Clubs, rank: Rank::Two },
//!     Card { suit: Suit::Diamonds, rank: Rank::Three },
//! ];
//!
//! let strength = evaluate_hand(&cards).expect("seven cards evaluate");
//! assert_eq!(strength.category, Category::StraightFlush);
//! ```
//!
//! ## Deterministic Rounds
//!
//! All card order is reproducible from the table seed:
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//!
//! let mut a = Deck::new_with_seed(42);
//! let mut b = Deck::new_with_seed(42);
//! a.shuffle();
//! b.shuffle();
//! assert_eq!(a.deal_card(), b.deal_card());
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod player;
pub mod policy;
pub mod pot;
pub mod round;
pub mod rules;
pub mod snapshot;
pub mod table;
