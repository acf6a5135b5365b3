//! Calculator session that owns the current state.

use crate::core::{CalculatorState, InputEvent};
use crate::display::{DisplayConfig, Readout};
use crate::engine::transition;
use crate::keymap::event_for_key;
use crate::session::record::TransitionRecord;
use chrono::Utc;
use tracing::{debug, trace};
use uuid::Uuid;

/// A calculator session.
///
/// Holds the current state, the single snapshot before it, and the record
/// of the last dispatched event. Nothing older is kept, and nothing is
/// persisted when the session is dropped.
///
/// # Example
///
/// ```rust
/// use keycalc::session::Calculator;
///
/// let mut calculator = Calculator::new();
/// for key in ["1", "2", "+", "3", "Enter"] {
///     calculator.press_key(key);
/// }
///
/// assert_eq!(calculator.readout().current.as_deref(), Some("15"));
/// ```
#[derive(Clone, Debug)]
pub struct Calculator {
    id: Uuid,
    current: CalculatorState,
    previous: Option<CalculatorState>,
    last_transition: Option<TransitionRecord>,
    config: DisplayConfig,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Start a session in the empty state with the default display config.
    pub fn new() -> Self {
        Self::with_config(DisplayConfig::default())
    }

    /// Start a session in the empty state.
    pub fn with_config(config: DisplayConfig) -> Self {
        let id = Uuid::new_v4();
        debug!(session = %id, "calculator session started");
        Self {
            id,
            current: CalculatorState::empty(),
            previous: None,
            last_transition: None,
            config,
        }
    }

    /// Session identifier used to correlate log lines.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Get current state (pure)
    pub fn state(&self) -> &CalculatorState {
        &self.current
    }

    /// The state before the last dispatched event (pure)
    pub fn previous(&self) -> Option<&CalculatorState> {
        self.previous.as_ref()
    }

    /// Record of the last dispatched event (pure)
    pub fn last_transition(&self) -> Option<&TransitionRecord> {
        self.last_transition.as_ref()
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Render the current state.
    pub fn readout(&self) -> Readout {
        Readout::render(&self.current, &self.config)
    }

    /// Apply an event and return the new state.
    pub fn dispatch(&mut self, event: InputEvent) -> &CalculatorState {
        let next = transition(&self.current, &event);
        let record = TransitionRecord {
            event,
            from: self.current.clone(),
            to: next.clone(),
            timestamp: Utc::now(),
        };

        debug!(
            session = %self.id,
            event = %event,
            from = %record.from.phase(),
            to = %record.to.phase(),
            changed = !record.is_noop(),
            "dispatched"
        );

        self.previous = Some(std::mem::replace(&mut self.current, next));
        self.last_transition = Some(record);
        &self.current
    }

    /// Map a keyboard key and dispatch it. Unrecognized keys are ignored
    /// and return `None`.
    pub fn press_key(&mut self, key: &str) -> Option<&CalculatorState> {
        match event_for_key(key) {
            Some(event) => Some(self.dispatch(event)),
            None => {
                trace!(session = %self.id, key, "ignored unrecognized key");
                None
            }
        }
    }

    /// Return to the empty state.
    pub fn reset(&mut self) -> &CalculatorState {
        self.dispatch(InputEvent::Clear)
    }
}
