//! Binary arithmetic operations.

use super::error::InputError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four keypad operations.
///
/// Operations are applied with plain IEEE-754 semantics: division by zero
/// yields an infinite or NaN value rather than an error.
///
/// # Example
///
/// ```rust
/// use keycalc::core::Operation;
///
/// let op = Operation::try_from('*').unwrap();
/// assert_eq!(op, Operation::Multiply);
/// assert_eq!(op.apply(6.0, 7.0), 42.0);
/// assert!(Operation::Divide.apply(1.0, 0.0).is_infinite());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// All operations in keypad order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// The symbol shown on the keypad and next to the previous operand.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Apply the operation to two parsed operands (pure).
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<char> for Operation {
    type Error = InputError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' => Ok(Self::Multiply),
            '/' => Ok(Self::Divide),
            other => Err(InputError::UnknownOperation(other.to_string())),
        }
    }
}

impl FromStr for Operation {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Self::try_from(symbol),
            _ => Err(InputError::UnknownOperation(s.to_string())),
        }
    }
}
