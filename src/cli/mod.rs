//! Command-line front end.

mod context;
mod flags;
mod output;
pub mod prompts;
pub mod quiet;

use std::process::ExitCode;

use clap::Parser;
use gerasenha::GenerateError;
use thiserror::Error;

use crate::settings::SettingsError;

pub use context::Context;
pub use flags::CliFlags;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Usage(#[from] clap::Error),

    #[error("{0}")]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("clipboard error: {0}")]
    Clipboard(String),
}

impl CliError {
    /// Process status: 2 for rejected generator arguments, 1 otherwise.
    pub fn status(&self) -> u8 {
        match self {
            CliError::Generate(_) => 2,
            _ => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.status())
    }
}

/// Parse `args` and run the requested action.
pub fn run(args: Vec<String>) -> Result<(), CliError> {
    let flags = CliFlags::try_parse_from(args)?;
    Context::new(flags).run()
}
