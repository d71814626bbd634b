//! Settings file persistence.
//!
//! One line: `length,pattern,number,output_path`. The path is last and may
//! itself contain commas.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use gerasenha::{Length, Pattern};

use super::{Settings, SettingsError};

const FIELDS: usize = 4;

pub fn save(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    let io_err = |source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(io_err)?;

    let data = format!(
        "{},{},{},{}\n",
        settings.pass_length,
        settings.pattern.bits(),
        settings.number_of_passwords,
        settings.output_file_path,
    );
    file.write_all(data.as_bytes()).map_err(io_err)?;
    log::debug!("saved settings to {}", path.display());
    Ok(())
}

/// Read `path` into `settings`. A missing file is created with the current
/// values; a malformed one is rewritten with them. Fields that fail to parse
/// or validate keep their current value.
pub fn load(settings: &mut Settings, path: &Path) -> Result<(), SettingsError> {
    if !path.exists() {
        log::debug!("no settings at {}, writing defaults", path.display());
        return save(settings, path);
    }

    let file = OpenOptions::new()
        .read(true)
        .open(path)
        .map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let mut line = String::new();
    BufReader::new(file)
        .read_line(&mut line)
        .map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let line = line.trim_end_matches(['\r', '\n']);
    let parts: Vec<&str> = line.splitn(FIELDS, ',').collect();
    if parts.len() != FIELDS {
        log::warn!("malformed settings at {}, resetting", path.display());
        return save(settings, path);
    }

    if let Some(length) = parts[0]
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|v| Length::new(v).ok())
    {
        settings.pass_length = length;
    }
    if let Some(pattern) = parts[1]
        .trim()
        .parse::<i64>()
        .ok()
        .and_then(|v| Pattern::from_bits(v).ok())
    {
        settings.pattern = pattern;
    }
    settings.number_of_passwords = parts[2]
        .trim()
        .parse()
        .ok()
        .filter(|&n| n > 0)
        .unwrap_or(settings.number_of_passwords);
    settings.output_file_path = parts[3].to_string();

    log::debug!("loaded settings from {}: {settings:?}", path.display());
    Ok(())
}

#[inline]
pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(home).join(".config/gerasenha/settings")
}
