//! CLI context - bundles settings, flags, and clipboard state.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, ParseError, prompts, quiet};
use crate::pass::{self, output};
use crate::rng::Rand;
use crate::settings::Settings;
use crate::terminal::copy_to;
use crate::tui::{self, print_help};

/// Why the CLI stopped before (or instead of) generating.
pub enum Exit {
    /// Early exit - not an error, just done.
    Done,
    Failed(String),
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub clipboard: Option<Box<dyn ClipboardProvider>>,
    pub flags: CliFlags,
}

impl Context {
    /// Create a new context by parsing command-line arguments.
    pub fn new(args: &[String]) -> Result<Self, ParseError> {
        let flags = super::parse(args)?;
        quiet::set(flags.quiet);

        let settings = if flags.saved {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::settings_load_failed(&e.to_string());
                Settings::default()
            })
        } else {
            Settings::default()
        };

        Ok(Self {
            settings,
            clipboard: None,
            flags,
        })
    }

    /// Run CLI. Returns `Err(Exit::Done)` for early exits, `Ok(())` on completion.
    pub fn run(&mut self) -> Result<(), Exit> {
        self.handle_info_flags()?;
        self.apply_flags()?;
        self.handle_save();
        if self.flags.interactive {
            tui::run(self.settings.clone());
            return Err(Exit::Done);
        }
        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Exit> {
        if self.flags.help {
            print_help();
            return Err(Exit::Done);
        }
        if self.flags.version {
            println!("passform {}", env!("CARGO_PKG_VERSION"));
            return Err(Exit::Done);
        }
        Ok(())
    }

    /// Apply CLI flags to settings.
    fn apply_flags(&mut self) -> Result<(), Exit> {
        if let Some(len) = self.flags.length {
            self.settings.pass_length = len;
        }
        if let Some(num) = self.flags.number {
            self.settings.number_of_passwords = num;
        }
        if let Some(source) = self.flags.source {
            self.settings.source = source;
        }
        self.settings.classes = self.flags.classes(self.settings.classes);

        if let Some(ref path) = self.flags.output {
            self.settings.output_file_path = output::resolve_path(path);
        }

        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(c) => {
                    self.clipboard = Some(Box::new(c));
                    self.settings.to_clipboard = true;
                }
                Err(_) => {
                    if !prompts::clipboard_fallback_prompt() {
                        return Err(Exit::Done);
                    }
                    self.settings.to_clipboard = false;
                }
            }
        }
        Ok(())
    }

    fn handle_save(&self) {
        if !self.flags.save {
            return;
        }
        match self.settings.save_to_file() {
            Ok(()) => prompts::settings_saved(),
            Err(e) => prompts::warn(&format!("Failed to save settings: {e}")),
        }
    }

    /// Generate passwords and handle output.
    pub fn generate_output(&mut self) -> Result<(), Exit> {
        let request = self.settings.request();
        let count = self.settings.number_of_passwords;
        let mut rng = Rand::new(self.settings.source);

        if request.classes.is_empty() {
            prompts::empty_alphabet();
        }
        if self.flags.entropy {
            output::print_entropy(&request, &self.settings.source.description());
        }

        if self.settings.to_clipboard {
            let mut passwords = pass::generate_batch(&request, count, &mut rng);
            let copied = match self.clipboard.as_mut() {
                Some(ctx) => copy_to(ctx.as_mut(), &passwords),
                None => Err("clipboard unavailable".to_string()),
            };
            passwords.zeroize();
            copied.map_err(|e| Exit::Failed(format!("Clipboard error: {e}")))?;
            prompts::clipboard_copied();
        } else if !self.settings.output_file_path.is_empty() {
            let path = &self.settings.output_file_path;
            let full_path = output::to_file(path, &request, count, &mut rng)
                .map_err(|e| Exit::Failed(format!("Failed to write {path}: {e}")))?;
            prompts::passwords_written(count, &full_path.display().to_string());
        } else {
            output::to_terminal(&request, count, &mut rng)
                .map_err(|e| Exit::Failed(format!("Failed to write passwords: {e}")))?;
        }
        Ok(())
    }
}
