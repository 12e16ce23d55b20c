//! Settings file persistence.
//!
//! One line of comma-separated fields; `|` escapes `,` and `|` inside values.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::Settings;
use crate::pass::{CharacterClass, ClassSet, parse_length};
use crate::rng::Source;

const FIELDS: usize = 8;

pub fn save(path: &Path, settings: &Settings) -> io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let classes = &settings.classes;
    let data = format!(
        "{},{},{},{},{},{},{},{}\n",
        settings.pass_length,
        settings.number_of_passwords,
        classes.contains(CharacterClass::Digits),
        classes.contains(CharacterClass::Uppercase),
        classes.contains(CharacterClass::Lowercase),
        classes.contains(CharacterClass::Symbols),
        settings.source,
        escape(&settings.output_file_path),
    );

    file.write_all(data.as_bytes())
}

/// Load settings. A missing or empty file yields the defaults.
pub fn load(path: &Path) -> io::Result<Settings> {
    let mut settings = Settings::default();

    let file = match OpenOptions::new().read(true).open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(settings),
        Err(e) => return Err(e),
    };

    let mut line = String::new();
    BufReader::new(file).read_line(&mut line)?;
    let line = line.trim_end_matches(['\r', '\n']);
    if line.is_empty() {
        return Ok(settings);
    }

    let parts = split_escaped(line, ',');
    if parts.len() != FIELDS {
        return Err(invalid(format!(
            "expected {FIELDS} fields, found {}",
            parts.len()
        )));
    }

    settings.pass_length = parse_length(&parts[0]).map_err(|e| invalid(e.to_string()))?;
    settings.number_of_passwords = parts[1]
        .parse::<usize>()
        .map_err(|_| invalid(format!("invalid password count: {}", parts[1])))?;

    let mut classes = ClassSet::empty();
    for (class, field) in CharacterClass::ALL.into_iter().zip(&parts[2..6]) {
        let enabled: bool = field
            .parse()
            .map_err(|_| invalid(format!("invalid flag for {}: {field}", class.label())))?;
        if enabled {
            classes.insert(class);
        }
    }
    settings.classes = classes;

    settings.source = parts[6]
        .parse::<Source>()
        .map_err(|s| invalid(format!("unknown random source: {s}")))?;
    settings.output_file_path = parts[7].clone();

    Ok(settings)
}

pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    Path::new(&home).join(".config/passform/settings")
}

fn invalid(msg: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c == ',' || c == '|' {
            out.push('|');
        }
        out.push(c);
    }
    out
}

fn split_escaped(s: &str, delimiter: char) -> Vec<String> {
    let mut parts = vec![];
    let mut current = String::new();
    let mut escape_next = false;

    for c in s.chars() {
        if escape_next {
            current.push(c);
            escape_next = false;
        } else if c == '|' {
            escape_next = true;
        } else if c == delimiter {
            parts.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    parts.push(current);

    parts
}
