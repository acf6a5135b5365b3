//! Rendering operands for a two-line display.
//!
//! Formatting is pure: the same operand and configuration always give the
//! same text. Digit grouping touches the integer part only.

mod config;
mod format;
mod readout;

pub use config::{ConfigError, DisplayConfig};
pub use format::format_operand;
pub use readout::Readout;
