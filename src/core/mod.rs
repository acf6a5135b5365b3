//! Core calculator types.
//!
//! This module contains the plain data the engine works on:
//! - Typed inputs (`Digit`, `Operation`, `InputEvent`)
//! - Numeric strings (`Operand`)
//! - The immutable `CalculatorState` snapshot
//!
//! Nothing here has side effects.

mod error;
mod event;
mod operand;
mod operation;
mod state;

pub use error::InputError;
pub use event::{Digit, InputEvent};
pub use operand::Operand;
pub use operation::Operation;
pub use state::{CalculatorState, Phase};
