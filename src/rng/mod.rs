//! Random sources for password generation.
//!
//! Sampling always goes through `rand::Rng::gen_range`, so every source yields
//! unbiased indices. `Thread` is the default; `Urandom` reads the OS source
//! directly and is the one to pick for credentials.

mod hw;

use std::fmt;
use std::str::FromStr;

use rand::RngCore;
use rand::rngs::{OsRng, ThreadRng};

pub use hw::HwRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Source {
    #[default]
    Thread,
    Urandom,
    Hardware,
}

impl Source {
    pub const ALL: [Source; 3] = [Source::Thread, Source::Urandom, Source::Hardware];

    pub fn name(self) -> &'static str {
        match self {
            Source::Thread => "thread",
            Source::Urandom => "urandom",
            Source::Hardware => "hardware",
        }
    }

    pub fn description(self) -> String {
        match self {
            Source::Thread => "thread-local ChaCha (OS seeded)".to_string(),
            Source::Urandom => "OS random (/dev/urandom)".to_string(),
            Source::Hardware => format!("hardware ({})", hw::source_name()),
        }
    }

    /// Next source in display order, wrapping around.
    pub fn next(self) -> Self {
        let i = Source::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Source::ALL[(i + 1) % Source::ALL.len()]
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Source {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "os" => Ok(Source::Urandom),
            "hw" => Ok(Source::Hardware),
            other => Source::ALL
                .into_iter()
                .find(|source| source.name() == other)
                .ok_or_else(|| other.to_string()),
        }
    }
}

/// Random generator backed by the selected source.
pub enum Rand {
    Thread(ThreadRng),
    Urandom(OsRng),
    Hardware(HwRng),
}

impl Rand {
    pub fn new(source: Source) -> Self {
        match source {
            Source::Thread => Rand::Thread(rand::thread_rng()),
            Source::Urandom => Rand::Urandom(OsRng),
            Source::Hardware => Rand::Hardware(HwRng::new()),
        }
    }
}

impl RngCore for Rand {
    fn next_u32(&mut self) -> u32 {
        match self {
            Rand::Thread(r) => r.next_u32(),
            Rand::Urandom(r) => r.next_u32(),
            Rand::Hardware(r) => r.next_u32(),
        }
    }

    fn next_u64(&mut self) -> u64 {
        match self {
            Rand::Thread(r) => r.next_u64(),
            Rand::Urandom(r) => r.next_u64(),
            Rand::Hardware(r) => r.next_u64(),
        }
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        match self {
            Rand::Thread(r) => r.fill_bytes(dest),
            Rand::Urandom(r) => r.fill_bytes(dest),
            Rand::Hardware(r) => r.fill_bytes(dest),
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        match self {
            Rand::Thread(r) => r.try_fill_bytes(dest),
            Rand::Urandom(r) => r.try_fill_bytes(dest),
            Rand::Hardware(r) => r.try_fill_bytes(dest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::{ClassSet, GenerationRequest, generate};

    #[test]
    fn source_names_round_trip() {
        for source in Source::ALL {
            assert_eq!(source.name().parse::<Source>(), Ok(source));
        }
        assert_eq!("HW".parse::<Source>(), Ok(Source::Hardware));
        assert_eq!("dice".parse::<Source>(), Err("dice".to_string()));
    }

    #[test]
    fn next_cycles_through_every_source() {
        let mut source = Source::default();
        for _ in 0..Source::ALL.len() {
            source = source.next();
        }
        assert_eq!(source, Source::default());
        assert_eq!(Source::Thread.next(), Source::Urandom);
        assert_eq!(Source::Hardware.next(), Source::Thread);
    }

    #[test]
    fn every_source_generates_valid_passwords() {
        let request = GenerationRequest::new(32, ClassSet::all());
        for source in Source::ALL {
            let mut rng = Rand::new(source);
            let pass = generate(&request, &mut rng);
            assert_eq!(pass.len(), 32, "{source}");
            assert!(pass.bytes().all(|b| b.is_ascii_graphic()));
        }
    }
}
