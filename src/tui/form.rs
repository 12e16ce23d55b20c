//! Interactive form state.
//!
//! Key presses map to a `Message`; `Form::update` applies it and regenerates
//! the password. Side effects the form cannot perform itself (clipboard,
//! swapping the random source, quitting) come back as an `Effect` for the
//! event loop.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;
use zeroize::Zeroize;

use crate::pass::{CharacterClass, ClassSet, GenerationRequest, generate};
use crate::rng::Source;
use crate::settings::Settings;

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 128;
const STEP: isize = 8;
const MAX_ENTRY_DIGITS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Toggle(CharacterClass),
    Nudge(isize),
    Digit(char),
    Backspace,
    Regenerate,
    Copy,
    CycleSource,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Copy,
    Reseed,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alert {
    Copied,
    CopyFailed,
}

pub struct Form {
    pub length: usize,
    pub classes: ClassSet,
    pub source: Source,
    pub password: String,
    pub alert: Option<Alert>,
    entry: String,
}

impl Form {
    pub fn new(settings: &Settings) -> Self {
        Self {
            length: settings.pass_length.clamp(MIN_LENGTH, MAX_LENGTH),
            classes: settings.classes,
            source: settings.source,
            password: String::new(),
            alert: None,
            entry: String::new(),
        }
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.length, self.classes)
    }

    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.password.zeroize();
        self.password = generate(&self.request(), rng);
        self.alert = None;
    }

    fn set_length(&mut self, length: usize) {
        self.length = length.clamp(MIN_LENGTH, MAX_LENGTH);
    }

    pub fn update<R: Rng + ?Sized>(&mut self, msg: Message, rng: &mut R) -> Option<Effect> {
        if !matches!(msg, Message::Digit(_) | Message::Backspace) {
            self.entry.clear();
        }

        match msg {
            Message::Toggle(class) => self.classes.toggle(class),
            Message::Nudge(delta) => self.set_length(self.length.saturating_add_signed(delta)),
            Message::Digit(d) => {
                if self.entry.len() < MAX_ENTRY_DIGITS {
                    self.entry.push(d);
                }
                if let Ok(n) = self.entry.parse() {
                    self.set_length(n);
                }
            }
            Message::Backspace => {
                self.entry.pop();
                if let Ok(n) = self.entry.parse() {
                    self.set_length(n);
                }
            }
            Message::Regenerate => {}
            Message::Copy => return Some(Effect::Copy),
            Message::CycleSource => {
                self.source = self.source.next();
                return Some(Effect::Reseed);
            }
            Message::Quit => return Some(Effect::Quit),
        }

        self.regenerate(rng);
        None
    }

    pub fn copy_finished(&mut self, ok: bool) {
        self.alert = Some(if ok { Alert::Copied } else { Alert::CopyFailed });
    }
}

impl Drop for Form {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

/// Map a key press to a form message.
pub fn message_for(key: KeyEvent) -> Option<Message> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Some(Message::Quit),
            _ => None,
        };
    }

    let msg = match key.code {
        KeyCode::Char('d') => Message::Toggle(CharacterClass::Digits),
        KeyCode::Char('u') => Message::Toggle(CharacterClass::Uppercase),
        KeyCode::Char('l') => Message::Toggle(CharacterClass::Lowercase),
        KeyCode::Char('s') => Message::Toggle(CharacterClass::Symbols),
        KeyCode::Char(c @ '0'..='9') => Message::Digit(c),
        KeyCode::Left | KeyCode::Char('-') => Message::Nudge(-1),
        KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => Message::Nudge(1),
        KeyCode::Down => Message::Nudge(-STEP),
        KeyCode::Up => Message::Nudge(STEP),
        KeyCode::Backspace => Message::Backspace,
        KeyCode::Enter | KeyCode::Char('r') => Message::Regenerate,
        KeyCode::Char('c') => Message::Copy,
        KeyCode::Char('e') => Message::CycleSource,
        KeyCode::Esc | KeyCode::Char('q') => Message::Quit,
        _ => return None,
    };
    Some(msg)
}
