//! Entropy to strength tier.
//!
//! Thresholds follow Tyler Akins' password checker scale.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    Useless = 1,
    Weak = 2,
    Acceptable = 3,
    Good = 4,
    Great = 5,
}

impl Strength {
    pub const ALL: [Strength; 5] = [
        Strength::Useless,
        Strength::Weak,
        Strength::Acceptable,
        Strength::Good,
        Strength::Great,
    ];

    pub fn from_entropy(bits: u32) -> Self {
        match bits {
            0..=27 => Strength::Useless,
            28..=35 => Strength::Weak,
            36..=59 => Strength::Acceptable,
            60..=127 => Strength::Good,
            _ => Strength::Great,
        }
    }

    /// Tier from 1 (useless) to 5 (great).
    pub fn tier(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Strength::Useless => "Useless",
            Strength::Weak => "Weak",
            Strength::Acceptable => "Acceptable",
            Strength::Good => "Good",
            Strength::Great => "Great",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
