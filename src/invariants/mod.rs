//! Validation-based invariant checks for calculator states.
//!
//! Uses Stillwater's `Validation` type so a broken state reports every
//! violated invariant at once rather than only the first.
//!
//! Every state reachable from `CalculatorState::empty()` through
//! [`transition`](crate::engine::transition) satisfies these checks. They
//! exist for hosts that build or deserialize states by hand, and for tests.
//!
//! # Example
//!
//! ```rust
//! use keycalc::core::{CalculatorState, Operand};
//! use keycalc::invariants::{validate, InvariantViolation};
//! use stillwater::validation::Validation;
//!
//! let state = CalculatorState {
//!     current_operand: Some(Operand::parse("-3").unwrap()),
//!     ..CalculatorState::empty()
//! };
//!
//! match validate(&state) {
//!     Validation::Failure(errors) => assert!(errors
//!         .iter()
//!         .any(|e| matches!(e, InvariantViolation::ResultNotOverwritable { .. }))),
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

pub mod rules;
pub mod violations;

pub use rules::{validate, Checked};
pub use violations::{InvariantViolation, Slot};
