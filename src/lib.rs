//! Keycalc: a pure functional keypad calculator engine
//!
//! Keycalc follows a "pure core, imperative shell" layout. The calculator's
//! behaviour is a single deterministic function from a state snapshot and an
//! input event to the next snapshot. Owning that snapshot, logging, and
//! mapping keys to events happen in a thin shell around it.
//!
//! # Core Concepts
//!
//! - **State**: the immutable [`CalculatorState`] snapshot
//! - **Events**: the five [`InputEvent`] kinds a keypad can produce
//! - **Transition**: [`transition`], total and side-effect free
//! - **Display**: [`format_operand`] and the two-line [`Readout`]
//! - **Session**: [`Calculator`], which owns the current state
//!
//! Chained operations evaluate left to right without precedence, so
//! `2 + 3 * 4` is `(2 + 3) * 4`.
//!
//! # Example
//!
//! ```rust
//! use keycalc::core::{CalculatorState, Digit, InputEvent, Operation};
//! use keycalc::display::{DisplayConfig, Readout};
//! use keycalc::engine::transition;
//!
//! let state = CalculatorState::empty();
//! let state = transition(&state, &InputEvent::AddDigit(Digit::try_from('9').unwrap()));
//! let state = transition(&state, &InputEvent::ChooseOperation(Operation::Multiply));
//! let state = transition(&state, &InputEvent::AddDigit(Digit::try_from('9').unwrap()));
//!
//! let readout = Readout::render(&state, &DisplayConfig::default());
//! assert_eq!(readout.previous.as_deref(), Some("9 *"));
//! assert_eq!(readout.current.as_deref(), Some("9"));
//!
//! let state = transition(&state, &InputEvent::Evaluate);
//! assert_eq!(state.current_operand.unwrap().as_str(), "81");
//! ```

pub mod core;
pub mod display;
pub mod engine;
pub mod invariants;
pub mod keymap;
pub mod session;

// Re-export commonly used types
pub use crate::core::{CalculatorState, Digit, InputEvent, Operand, Operation};
pub use display::{format_operand, DisplayConfig, Readout};
pub use engine::transition;
pub use session::Calculator;
