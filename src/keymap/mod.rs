//! Keyboard and keypad input mapping.
//!
//! Hosts translate raw key names and button presses into [`InputEvent`]s
//! here. Unrecognized keys map to `None` and should simply be dropped.

use crate::core::{Digit, InputEvent, Operation};
use serde::{Deserialize, Serialize};

/// Map a keyboard key name to an input event.
///
/// Single characters cover digits, `.`, the four operators and `=`.
/// Named keys (`Enter`, `Escape`, `Backspace`) are matched case-insensitively.
///
/// # Example
///
/// ```rust
/// use keycalc::core::InputEvent;
/// use keycalc::keymap::event_for_key;
///
/// assert_eq!(event_for_key("enter"), Some(InputEvent::Evaluate));
/// assert_eq!(event_for_key("Escape"), Some(InputEvent::Clear));
/// assert_eq!(event_for_key("Shift"), None);
/// ```
pub fn event_for_key(key: &str) -> Option<InputEvent> {
    Button::for_key(key).map(|button| button.event())
}

/// One key on the on-screen keypad.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Button {
    /// `CE`: clear everything
    Clear,
    /// `C`: remove the last digit
    Delete,
    Digit(Digit),
    Operation(Operation),
    Equals,
}

impl Button {
    /// The text printed on the key.
    pub fn label(&self) -> String {
        match self {
            Self::Clear => "CE".to_string(),
            Self::Delete => "C".to_string(),
            Self::Digit(digit) => digit.to_string(),
            Self::Operation(op) => op.to_string(),
            Self::Equals => "=".to_string(),
        }
    }

    /// The event a press of this key produces.
    pub fn event(&self) -> InputEvent {
        match self {
            Self::Clear => InputEvent::Clear,
            Self::Delete => InputEvent::RemoveDigit,
            Self::Digit(digit) => InputEvent::AddDigit(*digit),
            Self::Operation(op) => InputEvent::ChooseOperation(*op),
            Self::Equals => InputEvent::Evaluate,
        }
    }

    /// Keypad keys occupying two grid columns.
    pub fn is_wide(&self) -> bool {
        matches!(self, Self::Clear | Self::Equals)
    }

    /// The on-screen key a keyboard key corresponds to, if any.
    pub fn for_key(key: &str) -> Option<Button> {
        let mut chars = key.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return match c {
                '=' => Some(Self::Equals),
                _ => Digit::try_from(c)
                    .map(Self::Digit)
                    .or_else(|_| Operation::try_from(c).map(Self::Operation))
                    .ok(),
            };
        }

        match key.to_ascii_lowercase().as_str() {
            "enter" => Some(Self::Equals),
            "escape" => Some(Self::Clear),
            "backspace" => Some(Self::Delete),
            _ => None,
        }
    }
}

/// The keypad in grid order, four columns wide.
pub const KEYPAD: [Button; 18] = [
    Button::Clear,
    Button::Delete,
    Button::Operation(Operation::Divide),
    Button::Digit(Digit::ALL[1]),
    Button::Digit(Digit::ALL[2]),
    Button::Digit(Digit::ALL[3]),
    Button::Operation(Operation::Multiply),
    Button::Digit(Digit::ALL[4]),
    Button::Digit(Digit::ALL[5]),
    Button::Digit(Digit::ALL[6]),
    Button::Operation(Operation::Add),
    Button::Digit(Digit::ALL[7]),
    Button::Digit(Digit::ALL[8]),
    Button::Digit(Digit::ALL[9]),
    Button::Operation(Operation::Subtract),
    Button::Digit(Digit::POINT),
    Button::Digit(Digit::ZERO),
    Button::Equals,
];
