//! The imperative shell around the pure engine.
//!
//! A [`Calculator`] owns the one mutable thing in the crate: the current
//! state snapshot. Every dispatched event replaces it with the value the
//! pure [`transition`](crate::engine::transition) function returns, and the
//! move is logged through `tracing`.

mod calculator;
mod record;

pub use calculator::Calculator;
pub use record::TransitionRecord;
