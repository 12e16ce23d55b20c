//! Interactive password form.

mod form;
mod text;

use copypasta::ClipboardContext;

use crate::rng::Rand;
use crate::settings::Settings;
use crate::terminal::{clear, copy_to, print_error, read_key, reset_terminal};

use form::{Effect, Form, message_for};

pub use text::print_help;

/// Run the interactive form until the user quits.
pub fn run(settings: Settings) {
    reset_terminal();

    let mut form = Form::new(&settings);
    let mut rng = Rand::new(form.source);
    let mut clipboard: Option<ClipboardContext> = None;
    form.regenerate(&mut rng);

    loop {
        clear();
        text::print_form(&form);

        let key = match read_key() {
            Ok(key) => key,
            Err(e) => {
                print_error(&format!("Failed to read input: {e}"));
                break;
            }
        };
        let Some(msg) = message_for(key) else {
            continue;
        };

        match form.update(msg, &mut rng) {
            Some(Effect::Quit) => break,
            Some(Effect::Reseed) => {
                rng = Rand::new(form.source);
                form.regenerate(&mut rng);
            }
            Some(Effect::Copy) => {
                let ok = copy(&mut clipboard, &form.password);
                form.copy_finished(ok);
            }
            None => {}
        }
    }

    clear();
    reset_terminal();
}

fn copy(clipboard: &mut Option<ClipboardContext>, password: &str) -> bool {
    if clipboard.is_none() {
        *clipboard = ClipboardContext::new().ok();
    }
    clipboard
        .as_mut()
        .is_some_and(|ctx| copy_to(ctx, password).is_ok())
}
