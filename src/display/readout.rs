//! The two-line calculator readout.

use super::config::DisplayConfig;
use super::format::format_operand;
use crate::core::CalculatorState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the calculator shows: the pending left operand with its operation
/// on the upper line, the operand being typed (or the result) below.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{CalculatorState, Operand, Operation};
/// use keycalc::display::{DisplayConfig, Readout};
///
/// let state = CalculatorState {
///     previous_operand: Some(Operand::parse("1234").unwrap()),
///     current_operand: Some(Operand::parse("5.").unwrap()),
///     operation: Some(Operation::Multiply),
///     overwrite: false,
/// };
///
/// let readout = Readout::render(&state, &DisplayConfig::default());
/// assert_eq!(readout.previous.as_deref(), Some("1,234 *"));
/// assert_eq!(readout.current.as_deref(), Some("5."));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readout {
    /// Upper line: formatted previous operand and operation symbol
    pub previous: Option<String>,
    /// Lower line: formatted current operand
    pub current: Option<String>,
}

impl Readout {
    /// Render a state (pure).
    pub fn render(state: &CalculatorState, config: &DisplayConfig) -> Self {
        let previous = format_operand(state.previous_operand.as_ref(), config).map(|formatted| {
            match state.operation {
                Some(op) => format!("{formatted} {op}"),
                None => formatted,
            }
        });

        Self {
            previous,
            current: format_operand(state.current_operand.as_ref(), config),
        }
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.previous.as_deref().unwrap_or(""))?;
        write!(f, "{}", self.current.as_deref().unwrap_or(""))
    }
}
