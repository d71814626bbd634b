//! Pseudo-random password generation with an entropy-based strength estimate.
//!
//! A password is drawn uniformly from the alphabet formed by the selected
//! character classes. The entropy reported alongside it is
//! `floor(length * log2(alphabet size))`, which assumes every position is an
//! independent draw from the full alphabet. No class is guaranteed to appear.
//!
//! ```
//! let generated = gerasenha::pass::generate(12, 7).unwrap();
//! assert_eq!(generated.password().len(), 12);
//! assert_eq!(generated.entropy(), 71);
//! ```

pub mod pass;
pub mod rand;

pub use pass::{
    CharClass, ErrorKind, GenerateError, Generated, Length, Pattern, Strength, generate,
    generate_default, generate_value, generate_with, get_entropy,
};
