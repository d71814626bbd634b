//! Password generation.

use std::fmt;

use serde_json::Value;
use zeroize::Zeroize;

use super::charset::{self, Pattern};
use super::error::{Argument, GenerateError};
use super::{Strength, get_entropy};
use crate::rand::Rand;

/// Validated password length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Length(u8);

impl Length {
    pub const MIN: i64 = 4;
    pub const MAX: i64 = 64;
    pub const DEFAULT: Length = Length(8);

    pub fn new(value: impl Into<i128>) -> Result<Self, GenerateError> {
        let value = value.into();
        if value < i128::from(Self::MIN) || value > i128::from(Self::MAX) {
            return Err(GenerateError::Range {
                arg: Argument::Length,
                value,
                min: Self::MIN,
                max: Self::MAX,
            });
        }
        Ok(Length(value as u8))
    }

    /// Nearest valid length.
    pub fn clamped(value: i64) -> Self {
        Length(value.clamp(Self::MIN, Self::MAX) as u8)
    }

    pub const fn get(self) -> usize {
        self.0 as usize
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A generated password and its entropy estimate. The password buffer is
/// wiped on drop.
pub struct Generated {
    password: String,
    entropy: u32,
}

impl Generated {
    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn entropy(&self) -> u32 {
        self.entropy
    }

    pub fn strength(&self) -> Strength {
        Strength::from_entropy(self.entropy)
    }

    /// Take ownership of the password; wiping it becomes the caller's job.
    pub fn into_parts(mut self) -> (String, u32) {
        (std::mem::take(&mut self.password), self.entropy)
    }
}

impl fmt::Debug for Generated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generated")
            .field("password", &format_args!("<{} chars>", self.password.len()))
            .field("entropy", &self.entropy)
            .finish()
    }
}

impl Drop for Generated {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

/// Generate a password from integer arguments.
///
/// `pattern` is a bitmask: lowercase=1, uppercase=2, digits=4, symbols=8.
/// Length is checked before pattern; out-of-range values fail with
/// [`ErrorKind::Range`](super::ErrorKind::Range).
pub fn generate(length: i64, pattern: i64) -> Result<Generated, GenerateError> {
    let length = Length::new(length)?;
    let pattern = Pattern::from_bits(pattern)?;
    Rand::with(|rng| generate_with(length, pattern, rng))
}

/// Generate with length 8 and every character class.
pub fn generate_default() -> Generated {
    let alphabet = charset::build(Pattern::ALL);
    Rand::with(|rng| draw(&alphabet, Length::DEFAULT, rng))
}

/// Generate from dynamically typed arguments. Anything that is not an
/// integer (floats, strings, booleans, null, arrays, objects) fails with
/// [`ErrorKind::Type`](super::ErrorKind::Type).
pub fn generate_value(length: &Value, pattern: &Value) -> Result<Generated, GenerateError> {
    let (length, pattern) = validate(length, pattern)?;
    Rand::with(|rng| generate_with(length, pattern, rng))
}

/// Check dynamically typed arguments in order: length type, length range,
/// pattern type, pattern range.
pub fn validate(length: &Value, pattern: &Value) -> Result<(Length, Pattern), GenerateError> {
    let length = Length::new(integer(Argument::Length, length)?)?;
    let pattern = Pattern::from_bits(integer(Argument::Pattern, pattern)?)?;
    Ok((length, pattern))
}

/// Generate from validated inputs with an explicit random source. Fails only
/// for an empty pattern.
pub fn generate_with(
    length: Length,
    pattern: Pattern,
    rng: &mut Rand,
) -> Result<Generated, GenerateError> {
    if pattern.is_empty() {
        return Err(GenerateError::Range {
            arg: Argument::Pattern,
            value: 0,
            min: Pattern::MIN,
            max: Pattern::MAX,
        });
    }
    let alphabet = charset::build(pattern);
    Ok(draw(&alphabet, length, rng))
}

fn draw(alphabet: &[u8], length: Length, rng: &mut Rand) -> Generated {
    let mut bytes: Vec<u8> = (0..length.get())
        .map(|_| alphabet[rng.below(alphabet.len())])
        .collect();
    let password = String::from_utf8_lossy(&bytes).into_owned();
    bytes.zeroize();

    Generated {
        password,
        entropy: get_entropy(alphabet.len(), length.get()),
    }
}

fn integer(arg: Argument, value: &Value) -> Result<i128, GenerateError> {
    let number = match value {
        Value::Number(n) => n
            .as_i64()
            .map(i128::from)
            .or_else(|| n.as_u64().map(i128::from)),
        _ => None,
    };
    number.ok_or_else(|| GenerateError::Type {
        arg,
        found: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::pass::ErrorKind;

    fn belongs(password: &str, pattern: Pattern) -> bool {
        let alphabet = charset::build(pattern);
        password.bytes().all(|b| alphabet.contains(&b))
    }

    #[test]
    fn every_valid_combination() {
        let mut rng = Rand::seeded(2020);
        for length in Length::MIN..=Length::MAX {
            for bits in Pattern::MIN..=Pattern::MAX {
                let pattern = Pattern::from_bits(bits).unwrap();
                let generated =
                    generate_with(Length::new(length).unwrap(), pattern, &mut rng).unwrap();
                assert_eq!(generated.password().len() as i64, length);
                assert!(belongs(generated.password(), pattern));
            }
        }
    }

    #[test]
    fn defaults() {
        let generated = generate_default();
        assert_eq!(generated.password().len(), 8);
        assert_eq!(generated.entropy(), 49);
        assert!(belongs(generated.password(), Pattern::ALL));
    }

    #[test]
    fn length_range() {
        for length in [3, 65, 0, -4] {
            let err = generate(length, 15).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Range);
            assert_eq!(err.argument(), Argument::Length);
        }
    }

    #[test]
    fn pattern_range() {
        for pattern in [0, 16] {
            let err = generate(8, pattern).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Range);
            assert_eq!(err.argument(), Argument::Pattern);
        }
    }

    #[test]
    fn length_checked_before_pattern() {
        let err = generate(3, 0).unwrap_err();
        assert_eq!(err.argument(), Argument::Length);

        let err = generate_value(&json!(8.5), &json!("x")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Type);
        assert_eq!(err.argument(), Argument::Length);

        let err = generate_value(&json!(100), &json!("x")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert_eq!(err.argument(), Argument::Length);
    }

    #[test]
    fn non_integers_are_type_errors() {
        for bad in [json!("8"), json!(8.0), json!(true), json!(null), json!([8]), json!({})] {
            let err = generate_value(&bad, &json!(15)).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Type, "{bad}");

            let err = generate_value(&json!(8), &bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Type, "{bad}");
            assert_eq!(err.argument(), Argument::Pattern);
        }
    }

    #[test]
    fn huge_integers_are_range_errors() {
        let err = generate_value(&json!(u64::MAX), &json!(15)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn value_path_generates() {
        let generated = generate_value(&json!(16), &json!(4)).unwrap();
        assert_eq!(generated.password().len(), 16);
        assert!(generated.password().bytes().all(|b| b.is_ascii_digit()));
        assert_eq!(generated.entropy(), 53);
    }

    #[test]
    fn empty_pattern_is_rejected() {
        let mut rng = Rand::seeded(1);
        let err = generate_with(Length::DEFAULT, Pattern::EMPTY, &mut rng).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn same_seed_same_password() {
        let pattern = Pattern::ALL;
        let a = generate_with(Length::DEFAULT, pattern, &mut Rand::seeded(5)).unwrap();
        let b = generate_with(Length::DEFAULT, pattern, &mut Rand::seeded(5)).unwrap();
        assert_eq!(a.password(), b.password());
    }

    #[test]
    fn clamped_length() {
        assert_eq!(Length::clamped(1).get(), 4);
        assert_eq!(Length::clamped(100).get(), 64);
        assert_eq!(Length::clamped(20).get(), 20);
    }

    #[test]
    fn debug_hides_password() {
        let generated = generate(12, 1).unwrap();
        let debug = format!("{generated:?}");
        assert!(!debug.contains(generated.password()));
        assert!(debug.contains("12 chars"));
    }

    #[test]
    fn into_parts_keeps_password() {
        let generated = generate(10, 2).unwrap();
        let expected = generated.password().to_owned();
        let (password, entropy) = generated.into_parts();
        assert_eq!(password, expected);
        assert_eq!(entropy, 47);
    }
}
