//! Warnings, prompts and summaries printed by the CLI.

use std::io::Write;

use gerasenha::{Length, Pattern, Strength};

use super::quiet;
use crate::terminal::strength_meter;

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Warning on stderr (yellow), suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Error on stderr (red), always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        eprintln!("*** {count} password(s) copied to clipboard ***");
    }
}

/// Clipboard is unavailable: fall back to the terminal? In quiet or
/// non-interactive mode the fallback is silent.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

pub fn passwords_written(count: usize, path: &str) {
    if !quiet::enabled() {
        eprintln!("{count} password(s) \u{2192} {path}");
    }
}

/// Entropy and strength line on stderr, so stdout stays pipeable.
pub fn strength_summary(length: Length, pattern: Pattern, entropy: u32) {
    if quiet::enabled() {
        return;
    }
    let strength = Strength::from_entropy(entropy);
    eprintln!(
        "{} {entropy} bits, {strength} ({length} chars from {}: {pattern})",
        strength_meter(strength),
        pattern.alphabet_size(),
    );
}
