use crate::pass::{CharacterClass, ClassSet};
use crate::rng::Source;

#[derive(Debug, Default, PartialEq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub save: bool,
    pub entropy: bool,
    pub interactive: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    /// Classes named with `--digits`, `--upper`, ...; replaces the base set.
    pub only: ClassSet,
    /// Classes named with `--no-digits`, `--no-upper`, ...
    pub exclude: ClassSet,
    pub source: Option<Source>,
    pub output: Option<String>,
}

impl CliFlags {
    /// Apply class selection to a base set: `only` replaces it when given,
    /// then `exclude` removes from the result.
    pub fn classes(&self, base: ClassSet) -> ClassSet {
        let mut classes = if self.only.is_empty() { base } else { self.only };
        for class in CharacterClass::ALL {
            if self.exclude.contains(class) {
                classes.remove(class);
            }
        }
        classes
    }
}
