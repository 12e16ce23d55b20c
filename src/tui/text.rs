use super::form::{Alert, Form, MAX_LENGTH, MIN_LENGTH};
use crate::pass::CharacterClass;
use crate::pass::output::entropy_bits;
use crate::terminal::{
    DIM, RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_top, box_wrapped,
    entropy_strength, flush, print_error, print_rule, print_success, slider,
};

const SLIDER_WIDTH: usize = 52;

fn toggle_key(class: CharacterClass) -> char {
    match class {
        CharacterClass::Digits => 'd',
        CharacterClass::Uppercase => 'u',
        CharacterClass::Lowercase => 'l',
        CharacterClass::Symbols => 's',
    }
}

pub fn print_form(form: &Form) {
    box_top("Passform");
    box_line_center("Random password generator");
    box_line("");

    box_line(&format!("{UNDERLINE}Length{RESET}:"));
    box_line(&format!(
        "  {:>3}  {}",
        form.length,
        slider(form.length, MIN_LENGTH, MAX_LENGTH, SLIDER_WIDTH)
    ));
    box_line("");

    box_line(&format!("{UNDERLINE}Characters{RESET}:"));
    for class in CharacterClass::ALL {
        let mark = if form.classes.contains(class) { 'x' } else { ' ' };
        box_line(&format!(
            "  [{mark}] {}) {:<10} {DIM}{}{RESET}",
            toggle_key(class),
            class.label(),
            class.chars()
        ));
    }
    box_line("");

    print_rule();
    if form.password.is_empty() {
        box_line(&format!("{DIM}(no character classes selected){RESET}"));
    } else {
        box_wrapped(&form.password);
    }
    print_rule();

    let bits = entropy_bits(&form.request());
    box_line(&format!(
        "{:.1} bits ({}) • Source: {}",
        bits,
        entropy_strength(bits),
        form.source.description()
    ));
    box_bottom();

    match form.alert {
        Some(Alert::Copied) => print_success("Password copied"),
        Some(Alert::CopyFailed) => print_error("Failed to copy password"),
        None => println!(),
    }
    println!(
        "{DIM} ←/→ ±1  ↑/↓ ±8  0-9 type length  Enter/r new  c copy  e source  q quit{RESET}"
    );
    flush();
}

pub fn print_help() {
    box_top("Passform");
    box_line_center("Random password generator");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments (or with -i). Toggle");
    box_line("     character classes and adjust the length; the password");
    box_line("     regenerates on every change.");
    box_line("  2) Client: Pass flags directly (e.g., -l 20 -n 5) to generate");
    box_line("     passwords without the form.");
    box_line("");
    box_line("USAGE:");
    box_line("  passform [OPTIONS]");
    box_line("");
    box_line("OPTIONS:");
    box_line(" Password:");
    box_opt("  -l, --length <N>", "Characters per password (default: 16)");
    box_opt("  -n, --number <N>", "How many to generate (default: 1)");
    box_opt("      --digits", "Use only the named classes. Combine with --upper, --lower, --symbols.");
    box_opt("      --no-digits", "Remove a class. Also --no-upper, --no-lower, --no-symbols (alias --no-special).");
    box_line("");
    box_line(" Output:");
    box_opt("  -o, --output [FILE]", "Append to file (default: passwords.txt)");
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -e, --entropy", "Show the entropy estimate");
    box_opt("  -q, --quiet", "Suppress all output except passwords");
    box_line("");
    box_line(" Settings:");
    box_opt("  -s, --saved", "Start from saved settings");
    box_opt("      --save", "Save the effective settings as defaults");
    box_opt("  -i, --interactive", "Open the interactive form with these settings");
    box_line("");
    box_line(" Randomness:");
    box_opt("      --source <NAME>", "thread (default), urandom or hardware");
    box_opt("  -u, --urandom", "Use the OS random source. Pick this for credentials.");
    box_opt("      --hw", "Use the CPU cycle counter mixer");
    box_line("");
    box_line(" Info:");
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passform                   Interactive form");
    box_line("  passform -l 20 -n 3        Three passwords, 20 characters each");
    box_line("  passform --digits -l 6     Six-digit PIN");
    box_line("  passform --no-symbols -b   Alphanumeric, copied to clipboard");
    box_line("  passform -u -l 32 -e       OS randomness, with entropy estimate");
    box_line("");
    box_bottom();
    println!();
}
