//! Terminal output utilities.
//!
//! Box drawing, number formatting, entropy estimates, ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const DIM: &str = "\x1b[90m";

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

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}\x1b[?25h");
    flush();
}

// ============================================================================
// Styled Output Helpers
// ============================================================================

pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

pub fn print_success(msg: &str) {
    println!("{GREEN}{msg}{RESET}");
}

/// Print a horizontal rule (box style).
pub fn print_rule() {
    println!("├{}┤", "─".repeat(BOX_WIDTH - 2));
}

// ============================================================================
// Number Formatting
// ============================================================================

pub fn format_number(num: usize) -> String {
    let s = num.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i).is_multiple_of(3) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;
pub const BOX_INNER: usize = BOX_WIDTH - 4;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        println!("┌{}┐", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(title_part.chars().count());
        println!("┌{}{}┐", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let display_len = console_width(content);

    if display_len <= BOX_INNER {
        let padding = BOX_INNER - display_len;
        println!("│ {}{} │", content, " ".repeat(padding));
    } else {
        println!("│ {} │", content);
    }
}

/// Print box content wrapped at the inner width, for long unbroken strings.
pub fn box_wrapped(content: &str) {
    if content.is_empty() {
        box_line("");
        return;
    }
    let chars: Vec<char> = content.chars().collect();
    for chunk in chars.chunks(BOX_INNER) {
        box_line(&chunk.iter().collect::<String>());
    }
}

/// Print centered box content line: │          content          │
pub fn box_line_center(content: &str) {
    let display_len = console_width(content);

    if display_len <= BOX_INNER {
        let total_padding = BOX_INNER - display_len;
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        println!(
            "│ {}{}{} │",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        );
    } else {
        println!("│ {} │", content);
    }
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    println!("└{}┘", "─".repeat(BOX_WIDTH - 2));
}

/// Print a help option with flag and description, auto-wrapping if needed.
pub fn box_opt(flag: &str, desc: &str) {
    let flag_col = 27;
    let desc_col = BOX_INNER - flag_col;

    let flag_padded = if flag.len() < flag_col {
        format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
    } else {
        flag[..flag_col].to_string()
    };

    let lines = wrap_words(desc, desc_col);

    match lines.first() {
        Some(first) => {
            let padding = desc_col.saturating_sub(first.len());
            println!("│ {}{}{} │", flag_padded, first, " ".repeat(padding));
        }
        None => println!("│ {}{} │", flag_padded, " ".repeat(desc_col)),
    }

    let indent = " ".repeat(flag_col);
    for line in lines.iter().skip(1) {
        let padding = desc_col.saturating_sub(line.len());
        println!("│ {}{}{} │", indent, line, " ".repeat(padding));
    }
}

fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }
    lines
}

/// Display width ignoring ANSI escape codes.
fn console_width(s: &str) -> usize {
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

/// Slider bar for a value within `min..=max`: ━━━━━━●──────
pub fn slider(value: usize, min: usize, max: usize, width: usize) -> String {
    let span = max.saturating_sub(min).max(1);
    let pos = value.clamp(min, max) - min;
    let filled = pos * width.saturating_sub(1) / span;
    format!(
        "{}●{}",
        "━".repeat(filled),
        "─".repeat(width.saturating_sub(filled + 1))
    )
}

// ============================================================================
// Entropy Calculation
// ============================================================================

/// Calculate password entropy in bits.
pub fn calculate_entropy(password_length: usize, charset_size: usize) -> f64 {
    if charset_size == 0 {
        return 0.0;
    }
    password_length as f64 * (charset_size as f64).log2()
}

pub fn entropy_strength(bits: f64) -> &'static str {
    match bits as u32 {
        0..=35 => "Weak",
        36..=59 => "Fair",
        60..=127 => "Strong",
        _ => "Very Strong",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn console_width_skips_escape_codes() {
        assert_eq!(console_width("plain"), 5);
        assert_eq!(console_width(&format!("{RED}red{RESET}")), 3);
    }

    #[test]
    fn entropy_scales_with_length_and_charset() {
        assert_eq!(calculate_entropy(10, 0), 0.0);
        assert_eq!(calculate_entropy(0, 94), 0.0);
        assert!((calculate_entropy(8, 2) - 8.0).abs() < f64::EPSILON);
        assert!((calculate_entropy(16, 94) - 16.0 * 94f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn strength_grades() {
        assert_eq!(entropy_strength(0.0), "Weak");
        assert_eq!(entropy_strength(40.0), "Fair");
        assert_eq!(entropy_strength(104.9), "Strong");
        assert_eq!(entropy_strength(200.0), "Very Strong");
    }

    #[test]
    fn slider_marks_position() {
        assert_eq!(slider(1, 1, 5, 5), "●────");
        assert_eq!(slider(5, 1, 5, 5), "━━━━●");
        assert_eq!(slider(3, 1, 5, 5), "━━●──");
        assert_eq!(slider(99, 1, 5, 5), "━━━━●");
    }

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap_words("one two three four", 9);
        assert_eq!(lines, vec!["one two", "three", "four"]);
    }
}
