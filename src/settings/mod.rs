//! Saved generation defaults.

mod file;

use std::path::{Path, PathBuf};

use gerasenha::{Length, Pattern};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("settings file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: Length,
    pub pattern: Pattern,
    pub number_of_passwords: usize,
    pub output_file_path: String,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, SettingsError> {
        Self::load_from(&file::default_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let mut settings = Settings::default();
        file::load(&mut settings, path)?;
        Ok(settings)
    }

    /// Saved settings, or defaults with a warning when the file can't be read.
    pub fn load_or_default() -> Self {
        Self::load_from_file().unwrap_or_else(|e| {
            crate::cli::prompts::warn(&format!("Failed to load settings: {e}"));
            Settings::default()
        })
    }

    pub fn save_to_file(&self) -> Result<(), SettingsError> {
        self.save_to(&file::default_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        file::save(self, path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: Length::DEFAULT,
            pattern: Pattern::ALPHANUMERIC,
            number_of_passwords: 1,
            output_file_path: String::new(),
        }
    }
}
