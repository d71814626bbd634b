//! Character classes, patterns and alphabet building.

use std::fmt;

use super::error::{Argument, GenerateError};

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const SYMBOLS: &str = "!#$%&*+?@";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharClass {
    /// Alphabet order: lowercase, uppercase, digits, symbols.
    pub const ALL: [CharClass; 4] = [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digit,
        CharClass::Symbol,
    ];

    /// Flag value in the integer pattern.
    pub const fn bit(self) -> u8 {
        match self {
            CharClass::Lowercase => 1,
            CharClass::Uppercase => 2,
            CharClass::Digit => 4,
            CharClass::Symbol => 8,
        }
    }

    pub const fn chars(self) -> &'static str {
        match self {
            CharClass::Lowercase => LOWERCASE,
            CharClass::Uppercase => UPPERCASE,
            CharClass::Digit => DIGITS,
            CharClass::Symbol => SYMBOLS,
        }
    }

    pub const fn size(self) -> usize {
        self.chars().len()
    }

    pub const fn label(self) -> &'static str {
        match self {
            CharClass::Lowercase => "lowercase",
            CharClass::Uppercase => "uppercase",
            CharClass::Digit => "digits",
            CharClass::Symbol => "symbols",
        }
    }

    pub fn contains(self, c: char) -> bool {
        self.chars().contains(c)
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Set of enabled character classes.
///
/// A pattern built from an integer is always non-empty. One built by toggling
/// classes may be empty; generation rejects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pattern(u8);

impl Pattern {
    pub const MIN: i64 = 1;
    pub const MAX: i64 = 15;

    pub const EMPTY: Pattern = Pattern(0);
    /// Lowercase, uppercase and digits.
    pub const ALPHANUMERIC: Pattern = Pattern(7);
    pub const ALL: Pattern = Pattern(15);

    /// Decode an integer bitmask. Bits 0-3 select lowercase, uppercase,
    /// digits and symbols; the value must lie in `1..=15`.
    pub fn from_bits(bits: impl Into<i128>) -> Result<Self, GenerateError> {
        let bits = bits.into();
        if bits < i128::from(Self::MIN) || bits > i128::from(Self::MAX) {
            return Err(GenerateError::Range {
                arg: Argument::Pattern,
                value: bits,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Pattern(bits as u8))
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, class: CharClass) -> bool {
        self.0 & class.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn insert(&mut self, class: CharClass) {
        self.0 |= class.bit();
    }

    pub fn remove(&mut self, class: CharClass) {
        self.0 &= !class.bit();
    }

    pub fn toggle(&mut self, class: CharClass) {
        self.0 ^= class.bit();
    }

    /// Enabled classes in alphabet order.
    pub fn classes(self) -> impl Iterator<Item = CharClass> {
        CharClass::ALL.into_iter().filter(move |c| self.contains(*c))
    }

    pub fn alphabet_size(self) -> usize {
        self.classes().map(CharClass::size).sum()
    }
}

impl FromIterator<CharClass> for Pattern {
    fn from_iter<I: IntoIterator<Item = CharClass>>(iter: I) -> Self {
        let mut pattern = Pattern::EMPTY;
        for class in iter {
            pattern.insert(class);
        }
        pattern
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let labels: Vec<&str> = self.classes().map(CharClass::label).collect();
        f.write_str(&labels.join(", "))
    }
}

/// Build the alphabet for `pattern`. Bytes are all ASCII.
pub fn build(pattern: Pattern) -> Vec<u8> {
    pattern
        .classes()
        .flat_map(|class| class.chars().bytes())
        .collect()
}
