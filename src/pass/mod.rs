//! Password generation and output.

pub mod charset;
mod generate;
pub mod output;

pub use charset::{CharacterClass, ClassSet};
pub use generate::{
    GenerateError, GenerationRequest, generate, generate_batch, parse_length, write_batch,
};
