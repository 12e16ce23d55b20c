use thiserror::Error;

use super::CliFlags;
use crate::pass::{CharacterClass, GenerateError, parse_length};
use crate::rng::Source;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error(transparent)]
    InvalidLength(#[from] GenerateError),

    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Unknown random source: {0} (expected thread, urandom or hardware)")]
    UnknownSource(String),

    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

fn value<'a>(args: &'a [String], i: &mut usize) -> Result<&'a str, ParseError> {
    let flag = &args[*i];
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.clone()))
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "--save" => flags.save = true,
            "-e" | "--entropy" => flags.entropy = true,
            "-i" | "--interactive" => flags.interactive = true,
            "-u" | "--urandom" => flags.source = Some(Source::Urandom),
            "--hw" => flags.source = Some(Source::Hardware),
            "--digits" => flags.only.insert(CharacterClass::Digits),
            "--upper" => flags.only.insert(CharacterClass::Uppercase),
            "--lower" => flags.only.insert(CharacterClass::Lowercase),
            "--symbols" => flags.only.insert(CharacterClass::Symbols),
            "--no-digits" => flags.exclude.insert(CharacterClass::Digits),
            "--no-upper" => flags.exclude.insert(CharacterClass::Uppercase),
            "--no-lower" => flags.exclude.insert(CharacterClass::Lowercase),
            "--no-symbols" | "--no-special" => flags.exclude.insert(CharacterClass::Symbols),
            "-l" | "--length" => {
                flags.length = Some(parse_length(value(args, &mut i)?)?);
            }
            "-n" | "--number" => {
                let raw = value(args, &mut i)?;
                flags.number = Some(
                    raw.parse()
                        .map_err(|_| ParseError::InvalidNumber(raw.to_string()))?,
                );
            }
            "--source" => {
                let raw = value(args, &mut i)?;
                flags.source = Some(
                    raw.parse()
                        .map_err(|_| ParseError::UnknownSource(raw.to_string()))?,
                );
            }
            "-o" | "--output" => {
                // Check if next arg exists and isn't another flag
                if i + 1 < args.len() && !args[i + 1].starts_with('-') {
                    i += 1;
                    flags.output = Some(args[i].clone());
                } else {
                    flags.output = Some(".".to_string());
                }
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}
