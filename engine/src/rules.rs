use serde::{Deserialize, Serialize};

use crate::errors::EngineError;
use crate::player::PlayerAction as A;

/// A player action after validation, with its amount resolved. Amounts name
/// the seat's resulting total phase bet; the difference to the seat's
/// current bet is what leaves the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidatedAction {
    Fold,
    /// Match the minimum exactly (a check when nothing more is owed)
    Call(u32),
    /// Raise: a total strictly above the minimum
    Bet(u32),
    /// The seat's whole stack goes in
    AllIn(u32),
}

impl ValidatedAction {
    /// Target total phase bet (zero for a fold).
    pub fn amount(&self) -> u32 {
        match self {
            ValidatedAction::Fold => 0,
            ValidatedAction::Call(a) | ValidatedAction::Bet(a) | ValidatedAction::AllIn(a) => *a,
        }
    }
}

/// Minimum legal total phase bet: the high bet, floored at the big blind,
/// clamped down to everything the seat can still put in (current bet plus
/// stack) when the stack cannot cover it — forced all-in sizing.
///
/// # Examples
///
/// ```
/// use holdem_engine::rules::determine_min_bet;
///
/// // Must match the 100 high bet
/// assert_eq!(determine_min_bet(100, 1_000, 20, 20), 100);
/// // Big blind has already matched: the minimum is its own bet (a check)
/// assert_eq!(determine_min_bet(20, 1_000, 20, 20), 20);
/// // Short stack: the minimum collapses to the stack itself
/// assert_eq!(determine_min_bet(100, 50, 0, 20), 50);
/// ```
pub fn determine_min_bet(high_bet: u32, stack: u32, current_bet: u32, big_blind: u32) -> u32 {
    let ceiling = current_bet.saturating_add(stack);
    high_bet.max(big_blind).min(ceiling)
}

/// Validates a player action against the current bounds and resolves its
/// total. `min` comes from [`determine_min_bet`], `max` is the seat's
/// current bet plus its remaining stack. Nothing is mutated here; rejection
/// leaves the round untouched.
///
/// # Errors
///
/// [`EngineError::InvalidBetAmount`] when an explicit bet lies outside
/// `[min, max]`.
///
/// # Examples
///
/// ```
/// use holdem_engine::player::PlayerAction;
/// use holdem_engine::rules::{validate_action, ValidatedAction};
///
/// let v = validate_action(100, 1_000, PlayerAction::Call).unwrap();
/// assert_eq!(v, ValidatedAction::Call(100));
///
/// // Targeting the whole stack is an all-in
/// let v = validate_action(100, 1_000, PlayerAction::Bet(1_000)).unwrap();
/// assert_eq!(v, ValidatedAction::AllIn(1_000));
///
/// assert!(validate_action(100, 1_000, PlayerAction::Bet(50)).is_err());
/// ```
pub fn validate_action(min: u32, max: u32, action: A) -> Result<ValidatedAction, EngineError> {
    match action {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Call => {
            if min >= max {
                Ok(ValidatedAction::AllIn(max))
            } else {
                Ok(ValidatedAction::Call(min))
            }
        }
        A::Bet(amount) => {
            if amount < min || amount > max {
                Err(EngineError::InvalidBetAmount { amount, min, max })
            } else if amount == max {
                Ok(ValidatedAction::AllIn(amount))
            } else if amount == min {
                Ok(ValidatedAction::Call(amount))
            } else {
                Ok(ValidatedAction::Bet(amount))
            }
        }
        A::AllIn => Ok(ValidatedAction::AllIn(max)),
    }
}
