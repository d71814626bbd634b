//! Password generation and strength estimation.

pub mod charset;
mod entropy;
mod error;
mod generate;
mod strength;

pub use charset::{CharClass, Pattern};
pub use entropy::get_entropy;
pub use error::{Argument, ErrorKind, GenerateError};
pub use generate::{
    Generated, Length, generate, generate_default, generate_value, generate_with, validate,
};
pub use strength::Strength;
