//! Terminal output utilities.
//!
//! Box drawing, the strength meter and ANSI helpers. Lines end in `\r\n` so
//! they render correctly while raw mode is on.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};
use gerasenha::Strength;

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

// ============================================================================
// Strength Meter
// ============================================================================

/// Bar color per tier, red through blue.
pub fn strength_color(strength: Strength) -> Color {
    match strength {
        Strength::Useless => Color::Rgb { r: 0xff, g: 0x00, b: 0x00 },
        Strength::Weak => Color::Rgb { r: 0xff, g: 0x7f, b: 0x00 },
        Strength::Acceptable => Color::Rgb { r: 0x00, g: 0x7f, b: 0x00 },
        Strength::Good => Color::Rgb { r: 0x00, g: 0x7f, b: 0xff },
        Strength::Great => Color::Rgb { r: 0x00, g: 0x00, b: 0xff },
    }
}

/// Five-cell bar filled up to the tier: `■■■□□`.
pub fn strength_meter(strength: Strength) -> String {
    let filled = strength.tier() as usize;
    let empty = Strength::ALL.len() - filled;
    format!(
        "{}{}",
        "■".repeat(filled).with(strength_color(strength)),
        "□".repeat(empty)
    )
}

// ============================================================================
// Box Drawing (64 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 64;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        print!("┌{}┐\r\n", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH.saturating_sub(2 + title_part.chars().count());
        print!("┌{}{}┐\r\n", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    print!("│ {}{} │\r\n", content, " ".repeat(padding));
}

pub fn box_rule() {
    print!("├{}┤\r\n", "─".repeat(BOX_WIDTH - 2));
}

pub fn box_bottom() {
    print!("└{}┘\r\n", "─".repeat(BOX_WIDTH - 2));
    flush();
}

/// Display width, skipping ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ignores_escapes() {
        assert_eq!(console_width("\x1b[31mred\x1b[0m"), 3);
        assert_eq!(console_width("■■□"), 3);
    }

    #[test]
    fn meter_fills_to_tier() {
        for strength in Strength::ALL {
            let meter = strength_meter(strength);
            assert_eq!(console_width(&meter), 5);
            assert_eq!(meter.matches('■').count(), strength.tier() as usize);
        }
    }
}
