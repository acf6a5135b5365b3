//! Numeric strings held by the calculator.

use super::error::InputError;
use super::event::Digit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric string being typed or produced by evaluation.
///
/// Operands come in two shapes:
///
/// - *entry* form, built by typing: one or more ASCII digits with at most
///   one `.` anywhere (`"0"`, `"12."`, `".5"`);
/// - *result* form, built by evaluation: an optionally negative decimal,
///   `Infinity`, `-Infinity`, `NaN`, or the empty string when evaluation
///   could not parse its inputs.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{Digit, Operand};
///
/// let operand = Operand::from_digit(Digit::try_from('1').unwrap())
///     .push(Digit::POINT)
///     .push(Digit::try_from('5').unwrap());
/// assert_eq!(operand.as_str(), "1.5");
/// assert!(operand.has_point());
/// assert!(operand.is_entry());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Operand(String);

impl Operand {
    /// A fresh operand holding a single typed digit.
    pub fn from_digit(digit: Digit) -> Self {
        Operand(digit.as_char().to_string())
    }

    /// The operand evaluation yields when its inputs cannot be parsed.
    pub fn empty() -> Self {
        Operand(String::new())
    }

    /// Build an operand from an evaluation result string.
    pub(crate) fn from_result(text: String) -> Self {
        debug_assert!(is_result_form(&text), "not a result string: {text:?}");
        Operand(text)
    }

    /// Parse text in either entry or result form.
    pub fn parse(text: &str) -> Result<Self, InputError> {
        if is_entry_form(text) || is_result_form(text) {
            Ok(Operand(text.to_string()))
        } else {
            Err(InputError::MalformedOperand(text.to_string()))
        }
    }

    /// Append a digit, returning a new operand (pure).
    ///
    /// Callers are responsible for refusing a second `.`; see
    /// [`Operand::has_point`].
    pub fn push(&self, digit: Digit) -> Self {
        let mut text = self.0.clone();
        text.push(digit.as_char());
        Operand(text)
    }

    /// Drop the last character. Returns `None` when nothing would remain.
    pub fn pop(&self) -> Option<Self> {
        let mut text = self.0.clone();
        text.pop();
        if text.is_empty() {
            None
        } else {
            Some(Operand(text))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn has_point(&self) -> bool {
        self.0.contains('.')
    }

    /// True for exactly `"0"`, the operand that refuses another leading zero.
    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    /// True when the operand could have been produced by typing alone.
    pub fn is_entry(&self) -> bool {
        is_entry_form(&self.0)
    }

    /// True when the operand is in either well-formed shape.
    pub fn is_well_formed(&self) -> bool {
        is_entry_form(&self.0) || is_result_form(&self.0)
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Operand {
    type Error = InputError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Operand::parse(&text)
    }
}

impl From<Operand> for String {
    fn from(operand: Operand) -> String {
        operand.0
    }
}

fn is_entry_form(text: &str) -> bool {
    !text.is_empty()
        && text.chars().all(|c| c.is_ascii_digit() || c == '.')
        && text.matches('.').count() <= 1
}

fn is_result_form(text: &str) -> bool {
    match text {
        "" | "NaN" | "Infinity" | "-Infinity" => true,
        _ => {
            let unsigned = text.strip_prefix('-').unwrap_or(text);
            let (integer, fraction) = match unsigned.split_once('.') {
                Some((integer, fraction)) => (integer, Some(fraction)),
                None => (unsigned, None),
            };
            !integer.is_empty()
                && integer.chars().all(|c| c.is_ascii_digit())
                && fraction.is_none_or(|f| !f.is_empty() && f.chars().all(|c| c.is_ascii_digit()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit(c: char) -> Digit {
        Digit::try_from(c).unwrap()
    }

    #[test]
    fn push_appends_without_mutating() {
        let one = Operand::from_digit(digit('1'));
        let twelve = one.push(digit('2'));

        assert_eq!(one.as_str(), "1");
        assert_eq!(twelve.as_str(), "12");
    }

    #[test]
    fn pop_drops_last_character() {
        let operand = Operand::parse("123").unwrap();
        assert_eq!(operand.pop().unwrap().as_str(), "12");
    }

    #[test]
    fn pop_of_single_character_is_none() {
        let operand = Operand::from_digit(digit('7'));
        assert!(operand.pop().is_none());
    }

    #[test]
    fn entry_form_allows_one_point() {
        assert!(Operand::parse("1.5").unwrap().is_entry());
        assert!(Operand::parse(".").unwrap().is_entry());
        assert!(Operand::parse("12.").unwrap().is_entry());
        assert!(Operand::parse("1.2.3").is_err());
    }

    #[test]
    fn result_forms_are_accepted() {
        for text in ["", "NaN", "Infinity", "-Infinity", "-3", "-0.25", "15"] {
            let operand = Operand::parse(text).unwrap();
            assert!(operand.is_well_formed(), "{text:?}");
        }
        assert!(!Operand::parse("-3").unwrap().is_entry());
        assert!(!Operand::empty().is_entry());
    }

    #[test]
    fn malformed_text_is_rejected() {
        for text in ["abc", "1,000", "--1", "1e5", "+2", "-", "-.5"] {
            assert_eq!(
                Operand::parse(text),
                Err(InputError::MalformedOperand(text.to_string())),
                "{text:?}"
            );
        }
    }

    #[test]
    fn zero_detection_is_exact() {
        assert!(Operand::parse("0").unwrap().is_zero());
        assert!(!Operand::parse("0.").unwrap().is_zero());
        assert!(!Operand::parse("00").unwrap().is_zero());
    }

    #[test]
    fn operand_serializes_as_plain_string() {
        let operand = Operand::parse("12.5").unwrap();
        let json = serde_json::to_string(&operand).unwrap();
        assert_eq!(json, "\"12.5\"");

        let deserialized: Operand = serde_json::from_str(&json).unwrap();
        assert_eq!(operand, deserialized);
        assert!(serde_json::from_str::<Operand>("\"1..2\"").is_err());
    }
}
