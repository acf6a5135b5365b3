//! The calculator's state-transition function.

use super::evaluate::evaluate;
use crate::core::{CalculatorState, Digit, InputEvent, Operand, Operation};

/// Produce the state that follows `state` after `event` (pure).
///
/// Every event is accepted. Input that makes no sense in the current state
/// (a stray operator, a second decimal point, evaluating half an
/// expression) returns the state unchanged.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{CalculatorState, Digit, InputEvent, Operation};
/// use keycalc::engine::transition;
///
/// let events = [
///     InputEvent::AddDigit(Digit::try_from('2').unwrap()),
///     InputEvent::ChooseOperation(Operation::Add),
///     InputEvent::AddDigit(Digit::try_from('3').unwrap()),
///     InputEvent::ChooseOperation(Operation::Multiply),
///     InputEvent::AddDigit(Digit::try_from('4').unwrap()),
///     InputEvent::Evaluate,
/// ];
///
/// let state = events
///     .iter()
///     .fold(CalculatorState::empty(), |state, event| transition(&state, event));
///
/// assert_eq!(state.current_operand.unwrap().as_str(), "20");
/// assert!(state.overwrite);
/// ```
pub fn transition(state: &CalculatorState, event: &InputEvent) -> CalculatorState {
    match event {
        InputEvent::AddDigit(digit) => add_digit(state, *digit),
        InputEvent::ChooseOperation(op) => choose_operation(state, *op),
        InputEvent::Clear => CalculatorState::empty(),
        InputEvent::RemoveDigit => remove_digit(state),
        InputEvent::Evaluate => evaluate_pending(state),
    }
}

fn add_digit(state: &CalculatorState, digit: Digit) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: Some(Operand::from_digit(digit)),
            overwrite: false,
            ..state.clone()
        };
    }

    match &state.current_operand {
        Some(current) if digit == Digit::ZERO && current.is_zero() => state.clone(),
        Some(current) if digit.is_point() && current.has_point() => state.clone(),
        Some(current) => CalculatorState {
            current_operand: Some(current.push(digit)),
            ..state.clone()
        },
        None => CalculatorState {
            current_operand: Some(Operand::from_digit(digit)),
            ..state.clone()
        },
    }
}

fn choose_operation(state: &CalculatorState, op: Operation) -> CalculatorState {
    match (&state.previous_operand, &state.current_operand) {
        (None, None) => state.clone(),
        (Some(_), None) => CalculatorState {
            operation: Some(op),
            ..state.clone()
        },
        (None, Some(current)) => CalculatorState {
            previous_operand: Some(current.clone()),
            current_operand: None,
            operation: Some(op),
            ..state.clone()
        },
        (Some(previous), Some(current)) => {
            // Left-to-right chaining: settle the pending operation first.
            let result = match state.operation {
                Some(pending) => evaluate(previous, current, pending),
                None => Operand::empty(),
            };
            CalculatorState {
                previous_operand: Some(result),
                current_operand: None,
                operation: Some(op),
                ..state.clone()
            }
        }
    }
}

fn remove_digit(state: &CalculatorState) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: None,
            overwrite: false,
            ..state.clone()
        };
    }

    match &state.current_operand {
        None => state.clone(),
        Some(current) => CalculatorState {
            current_operand: current.pop(),
            ..state.clone()
        },
    }
}

fn evaluate_pending(state: &CalculatorState) -> CalculatorState {
    let (Some(previous), Some(current), Some(op)) = (
        &state.previous_operand,
        &state.current_operand,
        state.operation,
    ) else {
        return state.clone();
    };

    CalculatorState {
        previous_operand: None,
        current_operand: Some(evaluate(previous, current, op)),
        operation: None,
        overwrite: true,
    }
}
