//! Pure calculator logic.
//!
//! - `transition`: maps a state and an input event to the next state
//! - `evaluate`: computes a single pending operation
//!
//! Both functions are total and deterministic. Malformed or out-of-order
//! input is absorbed as a no-op; the only degraded outcome is an empty
//! result when an operand cannot be parsed.

mod evaluate;
mod transition;

pub use evaluate::{canonical_number, evaluate};
pub use transition::transition;
