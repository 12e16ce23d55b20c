use std::env;

mod cli;
mod exits;
mod pass;
mod rng;
mod settings;
mod terminal;
mod tui;

use cli::{prompts, quiet};
use settings::Settings;

fn main() {
    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 if quiet::is_interactive() && quiet::stdout_is_tty() => {
            let settings = Settings::load_from_file().unwrap_or_else(|e| {
                prompts::settings_load_failed(&e.to_string());
                Settings::default()
            });
            tui::run(settings);
        }
        _ => cli::run(args),
    }
}
