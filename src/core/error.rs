//! Errors raised when constructing core values from untyped input.

use thiserror::Error;

/// Errors that can occur when building digits, operations or operands
/// from raw characters and strings.
///
/// The transition function never produces these. They only surface at
/// the boundary where a host turns keystrokes or text into typed values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InputError {
    #[error("'{0}' is not a digit or decimal point")]
    InvalidDigit(char),

    #[error("Unknown operation '{0}', expected one of + - * /")]
    UnknownOperation(String),

    #[error("Malformed operand \"{0}\"")]
    MalformedOperand(String),
}
