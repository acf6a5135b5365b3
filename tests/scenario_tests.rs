//! End-to-end keypad scenarios driven through a calculator session.

use keycalc::core::{CalculatorState, Operand, Phase};
use keycalc::display::DisplayConfig;
use keycalc::session::Calculator;

fn press_all(calculator: &mut Calculator, keys: &[&str]) {
    for key in keys {
        calculator.press_key(key);
    }
}

fn current(calculator: &Calculator) -> Option<&str> {
    calculator.state().current_operand.as_ref().map(Operand::as_str)
}

#[test]
fn twelve_plus_three_is_fifteen() {
    let mut calculator = Calculator::new();
    press_all(&mut calculator, &["1", "2", "+", "3", "Enter"]);

    let state = calculator.state();
    assert_eq!(current(&calculator), Some("15"));
    assert_eq!(state.previous_operand, None);
    assert_eq!(state.operation, None);
    assert!(state.overwrite);
    assert_eq!(state.phase(), Phase::ShowingResult);
}

#[test]
fn chained_operations_have_no_precedence() {
    let mut calculator = Calculator::new();
    press_all(&mut calculator, &["2", "+", "3", "*", "4", "="]);

    assert_eq!(current(&calculator), Some("20"));
}

#[test]
fn evaluate_without_operation_changes_nothing() {
    let mut calculator = Calculator::new();
    press_all(&mut calculator, &["4", "2"]);
    let before = calculator.state().clone();

    calculator.press_key("Enter");

    assert_eq!(calculator.state(), &before);
    assert!(calculator.last_transition().unwrap().is_noop());
}

#[test]
fn duplicate_leading_zero_and_point_are_ignored() {
    let mut calculator = Calculator::new();
    press_all(&mut calculator, &["0", "0"]);
    assert_eq!(current(&calculator), Some("0"));

    calculator.press_key("Escape");
    press_all(&mut calculator, &["1", ".", "2", "."]);
    assert_eq!(current(&calculator), Some("1.2"));
}

#[test]
fn typing_after_result_starts_new_operand() {
    let mut calculator = Calculator::new();
    press_all(&mut calculator, &["9", "-", "4", "=", "7"]);

    assert_eq!(current(&calculator), Some("7"));
    assert!(!calculator.state().overwrite);
}

#[test]
fn backspace_walks_operand_back_to_absent() {
    let mut calculator = Calculator::new();
    press_all(&mut calculator, &["5"]);

    calculator.press_key("Backspace");
    assert_eq!(current(&calculator), None);

    calculator.press_key("Backspace");
    assert!(calculator.state().is_empty());
    assert!(calculator.last_transition().unwrap().is_noop());
}

#[test]
fn changing_operator_before_second_operand() {
    let mut calculator = Calculator::new();
    press_all(&mut calculator, &["8", "+", "-", "3", "="]);

    assert_eq!(current(&calculator), Some("5"));
}

#[test]
fn division_by_zero_shows_infinity() {
    let mut calculator = Calculator::new();
    press_all(&mut calculator, &["1", "/", "0", "="]);

    assert_eq!(calculator.readout().current.as_deref(), Some("Infinity"));
}

#[test]
fn zero_divided_by_zero_shows_nan() {
    let mut calculator = Calculator::new();
    press_all(&mut calculator, &["0", "/", "0", "="]);

    assert_eq!(calculator.readout().current.as_deref(), Some("NaN"));
}

#[test]
fn lone_point_evaluates_to_empty_display() {
    let mut calculator = Calculator::new();
    press_all(&mut calculator, &[".", "+", "1", "="]);

    assert_eq!(current(&calculator), Some(""));
    assert_eq!(calculator.readout().current.as_deref(), Some(""));
}

#[test]
fn negative_results_continue_chaining() {
    let mut calculator = Calculator::new();
    press_all(&mut calculator, &["2", "-", "5", "=", "*", "3", "="]);

    assert_eq!(current(&calculator), Some("-9"));
}

#[test]
fn readout_groups_large_numbers() {
    let mut calculator = Calculator::new();
    press_all(&mut calculator, &["1", "2", "3", "4", ".", "5"]);

    assert_eq!(calculator.readout().current.as_deref(), Some("1,234.5"));

    press_all(&mut calculator, &["*", "1", "0", "0", "0"]);
    let readout = calculator.readout();
    assert_eq!(readout.previous.as_deref(), Some("1,234.5 *"));
    assert_eq!(readout.current.as_deref(), Some("1,000"));

    calculator.press_key("Enter");
    assert_eq!(calculator.readout().current.as_deref(), Some("1,234,500"));
}

#[test]
fn trailing_point_is_displayed() {
    let mut calculator = Calculator::new();
    press_all(&mut calculator, &["1", "2", "3", "4", "."]);

    assert_eq!(calculator.readout().current.as_deref(), Some("1,234."));
}

#[test]
fn configured_separators_apply_to_readout() {
    let config = DisplayConfig::from_json_str(
        r#"{ "grouping_separator": ".", "decimal_point": "," }"#,
    )
    .unwrap();
    let mut calculator = Calculator::with_config(config);
    press_all(&mut calculator, &["9", "8", "7", "6", ".", "5"]);

    assert_eq!(calculator.readout().current.as_deref(), Some("9.876,5"));
}

#[test]
fn escape_clears_from_any_phase() {
    let mut calculator = Calculator::new();
    press_all(&mut calculator, &["3", "*", "3", "="]);
    calculator.press_key("escape");

    assert_eq!(calculator.state(), &CalculatorState::empty());
}
