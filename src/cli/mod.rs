//! Command-line mode.

mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{Context, Exit};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

/// Run CLI mode, exiting with status 2 on bad arguments and 1 on failure.
pub fn run(args: Vec<String>) {
    let mut ctx = match Context::new(&args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("Run with --help for usage.");
            std::process::exit(2);
        }
    };

    if let Err(Exit::Failed(msg)) = ctx.run() {
        prompts::error(&msg);
        std::process::exit(1);
    }
}
