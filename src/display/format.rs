//! Operand formatting with digit grouping.

use super::config::DisplayConfig;
use crate::core::Operand;

/// Format an operand for display.
///
/// Only the integer part is grouped. Whatever follows the decimal point,
/// including nothing at all, is reattached verbatim so a half-typed
/// `"1234."` still shows its trailing point.
///
/// Non-finite results (`Infinity`, `-Infinity`, `NaN`) are shown as-is, not
/// as symbols, and the empty result renders as the empty string.
///
/// # Example
///
/// ```rust
/// use keycalc::core::Operand;
/// use keycalc::display::{format_operand, DisplayConfig};
///
/// let config = DisplayConfig::default();
/// let operand = Operand::parse("1234.5").unwrap();
///
/// assert_eq!(format_operand(Some(&operand), &config).as_deref(), Some("1,234.5"));
/// assert_eq!(format_operand(None, &config), None);
/// ```
pub fn format_operand(operand: Option<&Operand>, config: &DisplayConfig) -> Option<String> {
    let operand = operand?;
    let text = operand.as_str();

    if text.is_empty() {
        return Some(String::new());
    }

    let formatted = match text.split_once('.') {
        Some((integer, fraction)) => format!(
            "{}{}{}",
            format_integer(integer, config),
            config.decimal_point,
            fraction
        ),
        None => format_integer(text, config),
    };
    Some(formatted)
}

/// Group the integer part of an operand. Non-numeric text such as
/// `Infinity` passes through untouched.
fn format_integer(integer: &str, config: &DisplayConfig) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return integer.to_string();
    }
    if digits.is_empty() && !sign.is_empty() {
        return integer.to_string();
    }

    let significant = digits.trim_start_matches('0');
    let significant = if significant.is_empty() { "0" } else { significant };

    format!("{sign}{}", group_digits(significant, config))
}

fn group_digits(digits: &str, config: &DisplayConfig) -> String {
    // A hand-built config may skip validate(); group size 0 means no grouping.
    if config.group_size == 0 {
        return digits.to_string();
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / config.group_size);
    for (i, c) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % config.group_size == 0 {
            grouped.push(config.grouping_separator);
        }
        grouped.push(c);
    }
    grouped
}
