//! Character classes and alphabet assembly.

pub const DIGITS: &str = "0123456789";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A named, fixed set of characters usable in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Digits,
    Uppercase,
    Lowercase,
    Symbols,
}

impl CharacterClass {
    /// Every class, in alphabet order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Digits,
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Symbols,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Digits => DIGITS,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Digits => "Digits",
            CharacterClass::Uppercase => "Uppercase",
            CharacterClass::Lowercase => "Lowercase",
            CharacterClass::Symbols => "Symbols",
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        match self {
            CharacterClass::Digits => 0b0001,
            CharacterClass::Uppercase => 0b0010,
            CharacterClass::Lowercase => 0b0100,
            CharacterClass::Symbols => 0b1000,
        }
    }
}

/// Set of enabled character classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassSet(u8);

impl ClassSet {
    pub const fn empty() -> Self {
        ClassSet(0)
    }

    pub const fn all() -> Self {
        ClassSet(0b1111)
    }

    pub fn with(mut self, class: CharacterClass) -> Self {
        self.insert(class);
        self
    }

    pub fn insert(&mut self, class: CharacterClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharacterClass) {
        self.0 &= !class.bit();
    }

    pub fn toggle(&mut self, class: CharacterClass) {
        self.0 ^= class.bit();
    }

    pub fn contains(&self, class: CharacterClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Enabled classes in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(move |class| self.contains(*class))
    }
}

impl FromIterator<CharacterClass> for ClassSet {
    fn from_iter<I: IntoIterator<Item = CharacterClass>>(iter: I) -> Self {
        iter.into_iter().fold(ClassSet::empty(), ClassSet::with)
    }
}

/// Concatenated characters of the enabled classes. May be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet(String);

impl Alphabet {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every class table is ASCII, so one byte is one character.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

/// Build the alphabet for the enabled classes.
pub fn build(classes: ClassSet) -> Alphabet {
    let mut chars = String::with_capacity(size(classes));
    for class in classes.iter() {
        chars.push_str(class.chars());
    }
    Alphabet(chars)
}

/// Alphabet size without building it (for entropy calculation).
pub fn size(classes: ClassSet) -> usize {
    classes.iter().map(|class| class.chars().len()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_table_sizes() {
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(SYMBOLS.len(), 32);
        assert!(SYMBOLS.chars().all(|c| c.is_ascii_punctuation()));
    }

    #[test]
    fn empty_set_builds_empty_alphabet() {
        let alphabet = build(ClassSet::empty());
        assert!(alphabet.is_empty());
        assert_eq!(size(ClassSet::empty()), 0);
    }

    #[test]
    fn all_classes_concatenate_in_fixed_order() {
        let alphabet = build(ClassSet::all());
        assert_eq!(alphabet.len(), 94);
        assert_eq!(size(ClassSet::all()), 94);
        let expected = format!("{DIGITS}{UPPERCASE}{LOWERCASE}{SYMBOLS}");
        assert_eq!(alphabet.as_bytes(), expected.as_bytes());
    }

    #[test]
    fn order_does_not_depend_on_insertion_order() {
        let a: ClassSet = [CharacterClass::Symbols, CharacterClass::Digits]
            .into_iter()
            .collect();
        let b = ClassSet::empty()
            .with(CharacterClass::Digits)
            .with(CharacterClass::Symbols);
        assert_eq!(a, b);
        assert_eq!(build(a).as_bytes(), format!("{DIGITS}{SYMBOLS}").as_bytes());
    }

    #[test]
    fn build_is_idempotent() {
        let classes = ClassSet::empty()
            .with(CharacterClass::Lowercase)
            .with(CharacterClass::Uppercase);
        assert_eq!(build(classes), build(classes));
        assert_eq!(
            build(classes).as_bytes(),
            format!("{UPPERCASE}{LOWERCASE}").as_bytes()
        );
    }

    #[test]
    fn toggle_and_remove() {
        let mut classes = ClassSet::all();
        classes.toggle(CharacterClass::Symbols);
        assert!(!classes.contains(CharacterClass::Symbols));
        classes.toggle(CharacterClass::Symbols);
        assert!(classes.contains(CharacterClass::Symbols));

        for class in CharacterClass::ALL {
            classes.remove(class);
        }
        assert!(classes.is_empty());
    }
}
