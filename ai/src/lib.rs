//! # holdem-ai: Automated Opponents for the Hold'em Engine
//!
//! Decision policies for automated seats at a [`holdem_engine`] table.
//! Policies are pure functions over the engine's observable state: no I/O,
//! no randomness, the same view always produces the same decision.
//!
//! ## Core Components
//!
//! - [`SeatPolicy`] - The engine's decision trait, re-exported here
//! - [`tier`] - Tier-based policy: hand strength buckets plus pot odds
//! - [`create_policy`] - Factory function for creating policies by name
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_ai::create_policy;
//! use holdem_engine::table::{Table, TableConfig};
//!
//! let mut table = Table::with_uniform_stacks(TableConfig::default(), 3);
//! table.set_policy(1, create_policy("tier")).expect("seat exists");
//! table.set_policy(2, create_policy("tier")).expect("seat exists");
//!
//! // Automated seats act on their own as the round progresses
//! let snapshot = table.start_round().expect("round starts");
//! assert!(snapshot.active_seat_id.is_none() || snapshot.active_seat_id == Some(0));
//! ```
//!
//! ## Policy Types
//!
//! Currently supported policy names:
//! - `"tier"` - Deterministic tier-based policy for automated tables

pub use holdem_engine::policy::{Decision, ObservableState, SeatPolicy};

pub mod tier;

/// Factory function to create seat policies by name.
///
/// # Supported Policies
///
/// - `"tier"` - Tier-based policy (see [`tier::TierPolicy`])
///
/// # Example
///
/// ```rust
/// use holdem_ai::create_policy;
///
/// let policy = create_policy("tier");
/// assert_eq!(policy.name(), "TierPolicy");
/// ```
///
/// # Panics
///
/// Panics if an unknown policy name is requested. Currently only "tier" is
/// supported.
pub fn create_policy(name: &str) -> Box<dyn SeatPolicy> {
    match name {
        "tier" => Box::new(tier::TierPolicy::new()),
        _ => panic!("Unknown policy: {}", name),
    }
}
