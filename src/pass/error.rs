//! Argument validation errors.

use std::fmt;

use thiserror::Error;

/// Which argument of a generation request failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    Length,
    Pattern,
}

impl fmt::Display for Argument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Length => write!(f, "length"),
            Argument::Pattern => write!(f, "pattern"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The argument is not an integer.
    Type,
    /// The argument is an integer outside its closed interval.
    Range,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("{arg} must be an integer, got {found}")]
    Type { arg: Argument, found: String },

    #[error("{arg} must be between {min} and {max}, got {value}")]
    Range {
        arg: Argument,
        value: i128,
        min: i64,
        max: i64,
    },
}

impl GenerateError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GenerateError::Type { .. } => ErrorKind::Type,
            GenerateError::Range { .. } => ErrorKind::Range,
        }
    }

    pub fn argument(&self) -> Argument {
        match self {
            GenerateError::Type { arg, .. } | GenerateError::Range { arg, .. } => *arg,
        }
    }
}
