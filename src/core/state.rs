//! The calculator state snapshot.
//!
//! A state is an immutable value. Every input event produces a new
//! snapshot; nothing is mutated in place.

use super::operand::Operand;
use super::operation::Operation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of an in-progress calculation.
///
/// `Default` is the singular empty state: no operands, no operation and
/// `overwrite` off.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{CalculatorState, Phase};
///
/// let state = CalculatorState::empty();
/// assert!(state.is_empty());
/// assert_eq!(state.phase(), Phase::Empty);
/// ```
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Left operand of the pending operation
    pub previous_operand: Option<Operand>,
    /// Operand being typed, or the last result
    pub current_operand: Option<Operand>,
    /// Pending operation
    pub operation: Option<Operation>,
    /// Next digit replaces `current_operand` instead of extending it
    pub overwrite: bool,
}

impl CalculatorState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Classify the state for display and logging (pure).
    pub fn phase(&self) -> Phase {
        if self.overwrite && self.current_operand.is_some() {
            return Phase::ShowingResult;
        }
        match (&self.previous_operand, &self.current_operand) {
            (None, None) => Phase::Empty,
            (None, Some(_)) => Phase::EnteringFirst,
            (Some(_), None) => Phase::OperatorChosen,
            (Some(_), Some(_)) => Phase::EnteringSecond,
        }
    }
}

/// Coarse position of a state within a calculation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing entered
    Empty,
    /// Typing the left operand
    EnteringFirst,
    /// Operation chosen, right operand not started
    OperatorChosen,
    /// Typing the right operand
    EnteringSecond,
    /// Displaying the result of an evaluation
    ShowingResult,
}

impl Phase {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "Empty",
            Self::EnteringFirst => "EnteringFirst",
            Self::OperatorChosen => "OperatorChosen",
            Self::EnteringSecond => "EnteringSecond",
            Self::ShowingResult => "ShowingResult",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
