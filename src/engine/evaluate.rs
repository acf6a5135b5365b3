//! Evaluation of a single pending operation.

use crate::core::{Operand, Operation};
use tracing::warn;

/// Compute `previous <operation> current` and return the result as an operand.
///
/// Operands that fail to parse, or parse to NaN, produce the empty operand
/// instead of an error. Division by zero is left to IEEE-754 and comes back
/// as `Infinity`, `-Infinity` or `NaN`.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{Operand, Operation};
/// use keycalc::engine::evaluate;
///
/// let twelve = Operand::parse("12").unwrap();
/// let three = Operand::parse("3").unwrap();
/// assert_eq!(evaluate(&twelve, &three, Operation::Add).as_str(), "15");
///
/// let point = Operand::parse(".").unwrap();
/// assert!(evaluate(&point, &three, Operation::Add).is_empty());
/// ```
pub fn evaluate(previous: &Operand, current: &Operand, operation: Operation) -> Operand {
    let (Some(lhs), Some(rhs)) = (parse_number(previous), parse_number(current)) else {
        warn!(
            previous = %previous,
            current = %current,
            "operands did not parse, evaluation yields an empty result"
        );
        return Operand::empty();
    };

    Operand::from_result(canonical_number(operation.apply(lhs, rhs)))
}

/// Render a float the way results are shown: `Infinity`, `-Infinity` and
/// `NaN` for non-finite values, otherwise the shortest decimal that round
/// trips, without exponent notation.
pub fn canonical_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        // -0 shows as 0
        "0".to_string()
    } else {
        value.to_string()
    }
}

fn parse_number(operand: &Operand) -> Option<f64> {
    operand
        .as_str()
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
}
