//! Password generation.

use std::io::{self, Write};

use rand::Rng;
use thiserror::Error;
use zeroize::Zeroize;

use super::charset::{self, Alphabet, ClassSet};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Invalid length: {0} (expected a non-negative integer)")]
    InvalidLength(String),
}

/// Requested length and enabled classes for one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub classes: ClassSet,
}

impl GenerationRequest {
    pub fn new(length: usize, classes: ClassSet) -> Self {
        Self { length, classes }
    }
}

/// Parse a user-supplied length.
pub fn parse_length(s: &str) -> Result<usize, GenerateError> {
    s.trim()
        .parse::<usize>()
        .map_err(|_| GenerateError::InvalidLength(s.to_string()))
}

/// Generate a single password.
pub fn generate<R: Rng + ?Sized>(request: &GenerationRequest, rng: &mut R) -> String {
    let alphabet = charset::build(request.classes);
    generate_from_alphabet(&alphabet, request.length, rng)
}

/// Sample `length` characters uniformly, with replacement.
/// An empty alphabet yields an empty password.
pub fn generate_from_alphabet<R: Rng + ?Sized>(
    alphabet: &Alphabet,
    length: usize,
    rng: &mut R,
) -> String {
    if alphabet.is_empty() {
        return String::new();
    }
    let chars = alphabet.as_bytes();
    (0..length)
        .map(|_| chars[rng.gen_range(0..chars.len())] as char)
        .collect()
}

/// Write `count` passwords, one per line.
pub fn write_batch<R: Rng + ?Sized, W: Write>(
    request: &GenerationRequest,
    count: usize,
    rng: &mut R,
    out: &mut W,
) -> io::Result<()> {
    let alphabet = charset::build(request.classes);
    let mut buf = String::new();

    for _ in 0..count {
        buf.push_str(&generate_from_alphabet(&alphabet, request.length, rng));
        buf.push('\n');
        let written = out.write_all(buf.as_bytes());
        buf.zeroize();
        written?;
    }
    out.flush()
}

/// Generate `count` passwords joined by newlines (clipboard output).
pub fn generate_batch<R: Rng + ?Sized>(
    request: &GenerationRequest,
    count: usize,
    rng: &mut R,
) -> String {
    let alphabet = charset::build(request.classes);
    let mut passwords = String::new();
    for n in 0..count {
        if n > 0 {
            passwords.push('\n');
        }
        let mut pass = generate_from_alphabet(&alphabet, request.length, rng);
        passwords.push_str(&pass);
        pass.zeroize();
    }
    passwords
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::charset::{CharacterClass, DIGITS, SYMBOLS};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    fn only(class: CharacterClass) -> ClassSet {
        ClassSet::empty().with(class)
    }

    #[test]
    fn output_has_requested_length_and_alphabet_chars() {
        let mut rng = rng();
        let alphabet = charset::build(ClassSet::all());
        for length in [1, 7, 16, 64, 500] {
            let pass = generate(&GenerationRequest::new(length, ClassSet::all()), &mut rng);
            assert_eq!(pass.chars().count(), length);
            assert!(pass.bytes().all(|b| alphabet.as_bytes().contains(&b)));
        }
    }

    #[test]
    fn empty_classes_yield_empty_password() {
        let mut rng = rng();
        for length in [0, 1, 20, 1000] {
            let pass = generate(&GenerationRequest::new(length, ClassSet::empty()), &mut rng);
            assert_eq!(pass, "");
        }
    }

    #[test]
    fn zero_length_yields_empty_password() {
        let mut rng = rng();
        assert_eq!(generate(&GenerationRequest::new(0, ClassSet::all()), &mut rng), "");
    }

    #[test]
    fn digits_only() {
        let mut rng = rng();
        let pass = generate(&GenerationRequest::new(20, only(CharacterClass::Digits)), &mut rng);
        assert_eq!(pass.len(), 20);
        assert!(pass.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn single_class_restricts_output() {
        let mut rng = rng();
        for class in CharacterClass::ALL {
            let pass = generate(&GenerationRequest::new(200, only(class)), &mut rng);
            assert!(
                pass.chars().all(|c| class.chars().contains(c)),
                "{} leaked outside its class: {pass}",
                class.label()
            );
        }
    }

    #[test]
    fn symbols_only_draws_from_symbol_table() {
        let mut rng = rng();
        let pass = generate(&GenerationRequest::new(300, only(CharacterClass::Symbols)), &mut rng);
        assert!(pass.chars().all(|c| SYMBOLS.contains(c)));
    }

    #[test]
    fn digit_frequencies_are_roughly_uniform() {
        let mut rng = rng();
        let draws = 100_000;
        let pass = generate(&GenerationRequest::new(draws, only(CharacterClass::Digits)), &mut rng);

        let mut counts = [0usize; 10];
        for b in pass.bytes() {
            counts[(b - b'0') as usize] += 1;
        }
        let expected = draws / DIGITS.len();
        for (digit, count) in counts.iter().enumerate() {
            let deviation = count.abs_diff(expected);
            assert!(
                deviation < expected / 10,
                "digit {digit} drawn {count} times, expected about {expected}"
            );
        }
    }

    #[test]
    fn negative_length_is_rejected() {
        assert_eq!(
            parse_length("-5"),
            Err(GenerateError::InvalidLength("-5".into()))
        );
    }

    #[test]
    fn parse_length_rejects_non_integers() {
        assert_eq!(parse_length("24"), Ok(24));
        assert_eq!(parse_length(" 8 "), Ok(8));
        assert_eq!(parse_length("0"), Ok(0));
        assert!(matches!(parse_length("-3"), Err(GenerateError::InvalidLength(_))));
        assert!(matches!(parse_length("4.5"), Err(GenerateError::InvalidLength(_))));
        assert!(matches!(parse_length("abc"), Err(GenerateError::InvalidLength(_))));
    }

    #[test]
    fn write_batch_emits_one_line_per_password() {
        let mut rng = rng();
        let mut out = Vec::new();
        let request = GenerationRequest::new(12, ClassSet::all());
        write_batch(&request, 5, &mut rng, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|line| line.len() == 12));
    }

    #[test]
    fn generate_batch_joins_with_newlines() {
        let mut rng = rng();
        let request = GenerationRequest::new(6, only(CharacterClass::Lowercase));
        let passwords = generate_batch(&request, 3, &mut rng);
        assert!(!passwords.ends_with('\n'));
        assert_eq!(passwords.lines().count(), 3);
        assert!(passwords.lines().all(|l| l.len() == 6));
    }

    #[test]
    fn write_batch_with_empty_alphabet_ignores_huge_length() {
        let mut rng = rng();
        let mut out = Vec::new();
        let request = GenerationRequest::new(usize::MAX, ClassSet::empty());
        write_batch(&request, 2, &mut rng, &mut out).unwrap();
        assert_eq!(out, b"\n\n");
    }

    #[test]
    fn generate_batch_with_empty_alphabet_ignores_huge_length() {
        let mut rng = rng();
        let request = GenerationRequest::new(1 << 40, ClassSet::empty());
        assert_eq!(generate_batch(&request, 1, &mut rng), "");
        assert_eq!(generate_batch(&request, 3, &mut rng), "\n\n");

        let request = GenerationRequest::new(usize::MAX, ClassSet::empty());
        assert_eq!(generate_batch(&request, 2, &mut rng), "\n");
    }
}
