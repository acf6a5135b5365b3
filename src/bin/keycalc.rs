//! Terminal host for the keycalc engine.
//!
//! Reads keys, dispatches them to a calculator session and prints the
//! two-line readout.
//!
//! Run with: cargo run -- --keys "12+3="

use anyhow::{Context, Result};
use clap::Parser;
use keycalc::display::DisplayConfig;
use keycalc::keymap::{Button, KEYPAD};
use keycalc::session::Calculator;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Keypad calculator driven from the terminal
#[derive(Parser, Debug)]
#[command(name = "keycalc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Display configuration file (JSON)
    #[arg(short, long, env = "KEYCALC_CONFIG")]
    config: Option<PathBuf>,

    /// Replay these keys one character at a time and print the final readout
    #[arg(short, long)]
    keys: Option<String>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => DisplayConfig::load(path)
            .with_context(|| format!("loading display config from {}", path.display()))?,
        None => DisplayConfig::default(),
    };
    let mut calculator = Calculator::with_config(config);

    match &cli.keys {
        Some(keys) => {
            for key in keys.chars() {
                calculator.press_key(&key.to_string());
            }
            println!("{}", calculator.readout());
        }
        None => interactive(&mut calculator)?,
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("keycalc=debug"),
        _ => EnvFilter::new("keycalc=trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn interactive(calculator: &mut Calculator) -> Result<()> {
    print_keypad();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line.context("reading keys from stdin")?;
        for token in line.split_whitespace() {
            press_token(calculator, token);
        }
        writeln!(stdout, "{}", calculator.readout())?;
        stdout.flush()?;
    }

    info!(session = %calculator.id(), "input closed, session ended");
    Ok(())
}

/// A token is either a named key (`Enter`, `Escape`, `Backspace`) or a
/// run of single-character keys such as `12+3=`.
fn press_token(calculator: &mut Calculator, token: &str) {
    if token.chars().count() > 1 && Button::for_key(token).is_some() {
        calculator.press_key(token);
        return;
    }
    for key in token.chars() {
        calculator.press_key(&key.to_string());
    }
}

fn print_keypad() {
    let mut row = String::new();
    let mut columns = 0;
    for button in KEYPAD {
        let width = if button.is_wide() { 10 } else { 5 };
        row.push_str(&format!("[{:^width$}]", button.label(), width = width - 2));
        columns += if button.is_wide() { 2 } else { 1 };
        if columns == 4 {
            println!("{row}");
            row.clear();
            columns = 0;
        }
    }
    println!("Keys: digits . + - * / = Enter Escape Backspace (one line at a time)");
}
