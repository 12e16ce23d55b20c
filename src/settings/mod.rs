//! Password generation settings.

mod file;

use crate::pass::{ClassSet, GenerationRequest};
use crate::rng::Source;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub pass_length: usize,
    pub number_of_passwords: usize,
    pub classes: ClassSet,
    pub source: Source,
    pub output_file_path: String,
    pub to_clipboard: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        file::load(&file::default_path())
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(&file::default_path(), self)
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest::new(self.pass_length, self.classes)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 16,
            number_of_passwords: 1,
            classes: ClassSet::all(),
            source: Source::default(),
            output_file_path: String::new(),
            to_clipboard: false,
        }
    }
}
