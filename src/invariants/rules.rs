//! Invariant checks using Validation.

use crate::core::{CalculatorState, Operand};
use crate::invariants::violations::{InvariantViolation, Slot};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of checking one or more invariants
pub type Checked = Validation<(), NonEmptyVec<InvariantViolation>>;

/// Check every invariant, accumulating ALL violations.
///
/// Returns `Validation::Success(())` for consistent states and
/// `Validation::Failure` listing every broken invariant otherwise.
///
/// # Example
///
/// ```rust
/// use keycalc::core::CalculatorState;
/// use keycalc::invariants::validate;
///
/// assert!(validate(&CalculatorState::empty()).is_success());
///
/// let broken = CalculatorState { overwrite: true, ..CalculatorState::empty() };
/// assert!(validate(&broken).is_failure());
/// ```
pub fn validate(state: &CalculatorState) -> Checked {
    let checks = vec![
        well_formed(Slot::Previous, state.previous_operand.as_ref()),
        well_formed(Slot::Current, state.current_operand.as_ref()),
        operation_matches_previous(state),
        overwrite_has_operand(state),
        result_is_overwritable(state),
    ];

    Validation::all_vec(checks).map(|_| ())
}

fn well_formed(slot: Slot, operand: Option<&Operand>) -> Checked {
    match operand {
        Some(operand) if !operand.is_well_formed() => {
            Validation::fail(InvariantViolation::MalformedOperand {
                slot,
                text: operand.as_str().to_string(),
            })
        }
        _ => Validation::success(()),
    }
}

fn operation_matches_previous(state: &CalculatorState) -> Checked {
    match (&state.operation, &state.previous_operand) {
        (Some(_), None) => Validation::fail(InvariantViolation::OperationMismatch {
            operation: "set",
            previous: "absent",
        }),
        (None, Some(_)) => Validation::fail(InvariantViolation::OperationMismatch {
            operation: "absent",
            previous: "set",
        }),
        _ => Validation::success(()),
    }
}

fn overwrite_has_operand(state: &CalculatorState) -> Checked {
    if state.overwrite && state.previous_operand.is_none() && state.current_operand.is_none() {
        Validation::fail(InvariantViolation::OverwriteWithoutOperand)
    } else {
        Validation::success(())
    }
}

fn result_is_overwritable(state: &CalculatorState) -> Checked {
    match &state.current_operand {
        Some(current) if !current.is_entry() && !state.overwrite => {
            Validation::fail(InvariantViolation::ResultNotOverwritable {
                text: current.as_str().to_string(),
            })
        }
        _ => Validation::success(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;

    fn operand(text: &str) -> Option<Operand> {
        Some(Operand::parse(text).unwrap())
    }

    #[test]
    fn empty_state_is_valid() {
        assert!(validate(&CalculatorState::empty()).is_success());
    }

    #[test]
    fn pending_operation_is_valid() {
        let state = CalculatorState {
            previous_operand: operand("12"),
            current_operand: operand("3."),
            operation: Some(Operation::Add),
            overwrite: false,
        };
        assert!(validate(&state).is_success());
    }

    #[test]
    fn shown_result_is_valid() {
        let state = CalculatorState {
            current_operand: operand("-Infinity"),
            overwrite: true,
            ..CalculatorState::empty()
        };
        assert!(validate(&state).is_success());
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let state = CalculatorState {
            previous_operand: None,
            current_operand: operand("-3"),
            operation: Some(Operation::Subtract),
            overwrite: false,
        };

        match validate(&state) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);

                let has_mismatch = errors
                    .iter()
                    .any(|e| matches!(e, InvariantViolation::OperationMismatch { .. }));
                let has_result = errors
                    .iter()
                    .any(|e| matches!(e, InvariantViolation::ResultNotOverwritable { .. }));

                assert!(has_mismatch);
                assert!(has_result);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn previous_without_operation_is_flagged() {
        let state = CalculatorState {
            previous_operand: operand("4"),
            ..CalculatorState::empty()
        };

        let result = validate(&state);
        assert!(result.is_failure());
        if let Validation::Failure(errors) = result {
            assert!(errors.iter().any(|e| *e
                == InvariantViolation::OperationMismatch {
                    operation: "absent",
                    previous: "set",
                }));
        }
    }

    #[test]
    fn overwrite_without_operand_is_flagged() {
        let state = CalculatorState {
            overwrite: true,
            ..CalculatorState::empty()
        };

        let result = validate(&state);
        if let Validation::Failure(errors) = result {
            assert_eq!(errors.len(), 1);
            assert!(errors
                .iter()
                .all(|e| matches!(e, InvariantViolation::OverwriteWithoutOperand)));
        } else {
            panic!("Expected failure");
        }
    }

    #[test]
    fn violation_messages_name_the_slot() {
        let violation = InvariantViolation::MalformedOperand {
            slot: Slot::Current,
            text: "1..2".to_string(),
        };
        assert_eq!(
            violation.to_string(),
            "current operand \"1..2\" is not a well-formed number"
        );
    }
}
