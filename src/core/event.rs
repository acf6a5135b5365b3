//! Input events consumed by the transition function.

use super::error::InputError;
use super::operation::Operation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single keypad digit: `0`-`9` or the decimal point.
///
/// # Example
///
/// ```rust
/// use keycalc::core::Digit;
///
/// let seven = Digit::try_from('7').unwrap();
/// assert_eq!(seven.as_char(), '7');
/// assert!(Digit::try_from('x').is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Digit(char);

impl Digit {
    pub const ZERO: Digit = Digit('0');
    pub const POINT: Digit = Digit('.');

    /// Every digit in keypad order, ending with the decimal point.
    pub const ALL: [Digit; 11] = [
        Digit('0'),
        Digit('1'),
        Digit('2'),
        Digit('3'),
        Digit('4'),
        Digit('5'),
        Digit('6'),
        Digit('7'),
        Digit('8'),
        Digit('9'),
        Digit('.'),
    ];

    pub fn as_char(self) -> char {
        self.0
    }

    pub fn is_point(self) -> bool {
        self.0 == '.'
    }
}

impl TryFrom<char> for Digit {
    type Error = InputError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_digit() || c == '.' {
            Ok(Digit(c))
        } else {
            Err(InputError::InvalidDigit(c))
        }
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> char {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The five kinds of input the calculator reacts to.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum InputEvent {
    /// Append a digit or decimal point to the current operand.
    AddDigit(Digit),
    /// Pick the pending operation, chaining if one is already pending.
    ChooseOperation(Operation),
    /// Reset to the empty state.
    Clear,
    /// Backspace.
    RemoveDigit,
    /// Compute the pending operation.
    Evaluate,
}

impl InputEvent {
    /// Short name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddDigit(_) => "AddDigit",
            Self::ChooseOperation(_) => "ChooseOperation",
            Self::Clear => "Clear",
            Self::RemoveDigit => "RemoveDigit",
            Self::Evaluate => "Evaluate",
        }
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddDigit(digit) => write!(f, "AddDigit({digit})"),
            Self::ChooseOperation(op) => write!(f, "ChooseOperation({op})"),
            other => f.write_str(other.name()),
        }
    }
}
