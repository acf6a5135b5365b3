//! Record of the most recent transition.

use crate::core::{CalculatorState, InputEvent};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single dispatched event.
///
/// Records are immutable values describing a move from one state to
/// another at a specific point in time.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use keycalc::core::{CalculatorState, InputEvent};
/// use keycalc::session::TransitionRecord;
///
/// let record = TransitionRecord {
///     event: InputEvent::Clear,
///     from: CalculatorState::empty(),
///     to: CalculatorState::empty(),
///     timestamp: Utc::now(),
/// };
/// assert!(record.is_noop());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The event that was dispatched
    pub event: InputEvent,
    /// The state before the event
    pub from: CalculatorState,
    /// The state after the event
    pub to: CalculatorState,
    /// When the event was dispatched
    pub timestamp: DateTime<Utc>,
}

impl TransitionRecord {
    /// True when the event left the state unchanged.
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}
