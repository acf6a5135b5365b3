//! Invariant violations.

use thiserror::Error;

/// Which operand slot a violation refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Previous,
    Current,
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Previous => f.write_str("previous"),
            Self::Current => f.write_str("current"),
        }
    }
}

/// Ways a calculator state can be inconsistent
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvariantViolation {
    #[error("{slot} operand \"{text}\" is not a well-formed number")]
    MalformedOperand { slot: Slot, text: String },

    #[error("operation is {operation} but previous operand is {previous}")]
    OperationMismatch {
        operation: &'static str,
        previous: &'static str,
    },

    #[error("overwrite is set with no operand to overwrite")]
    OverwriteWithoutOperand,

    #[error("current operand \"{text}\" is an evaluation result but overwrite is off")]
    ResultNotOverwritable { text: String },
}
