//! CLI context: flags, saved settings and clipboard state.

use std::num::IntErrorKind;
use std::path::Path;

use copypasta::{ClipboardContext, ClipboardProvider};
use serde_json::Value;
use zeroize::Zeroize;

use gerasenha::rand::{self, Rand};
use gerasenha::{GenerateError, Length, Pattern, generate_default, generate_with, get_entropy};

use super::flags::MAX_PASSWORDS;
use super::{CliError, CliFlags, output, prompts, quiet};
use crate::settings::Settings;
use crate::tui;

/// Passwords rendered before each write.
const BATCH: usize = 1024;

pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    clipboard: Option<ClipboardContext>,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        quiet::set(flags.quiet);

        let settings = if flags.default {
            Settings::default()
        } else {
            Settings::load_or_default()
        };

        Self {
            settings,
            flags,
            clipboard: None,
        }
    }

    pub fn run(&mut self) -> Result<(), CliError> {
        if self.flags.self_test {
            return self_test();
        }
        if self.flags.interactive {
            return tui::run(self.settings.clone());
        }

        let (length, pattern) = self.resolve()?;
        self.apply_flags(length, pattern)?;
        if self.flags.board && !self.open_clipboard() {
            return Ok(());
        }
        self.generate_output(length, pattern)
    }

    /// Effective length and pattern: flags over saved settings. Text from
    /// the command line goes through the same validation as any other
    /// dynamically typed caller.
    pub fn resolve(&self) -> Result<(Length, Pattern), GenerateError> {
        let length = match self.flags.length.as_deref() {
            Some(text) => {
                text_value(text).or_else(|wide| Length::new(wide).map(|l| Value::from(l.get())))?
            }
            None => Value::from(self.settings.pass_length.get()),
        };
        let pattern = match (self.flags.class_pattern(), self.flags.pattern.as_deref()) {
            (Some(pattern), _) => Value::from(pattern.bits()),
            (None, Some(text)) => match text_value(text) {
                Ok(value) => value,
                Err(wide) => {
                    // length errors still come first
                    gerasenha::pass::validate(&length, &Value::from(Pattern::MIN))?;
                    Pattern::from_bits(wide).map(|p| Value::from(p.bits()))?
                }
            },
            (None, None) => Value::from(self.settings.pattern.bits()),
        };
        gerasenha::pass::validate(&length, &pattern)
    }

    fn count(&self) -> usize {
        self.flags
            .number
            .unwrap_or(self.settings.number_of_passwords)
            .clamp(1, MAX_PASSWORDS)
    }

    fn apply_flags(&mut self, length: Length, pattern: Pattern) -> Result<(), CliError> {
        if let Some(path) = &self.flags.output {
            self.settings.output_file_path = path.display().to_string();
        } else if self.flags.stdout {
            self.settings.output_file_path.clear();
        }

        if self.flags.save {
            self.settings.pass_length = length;
            self.settings.pattern = pattern;
            self.settings.number_of_passwords = self.count();
            self.settings.save_to_file()?;
            log::info!("saved defaults: length {length}, pattern {}", pattern.bits());
        }
        Ok(())
    }

    /// Returns false when the user declined the terminal fallback.
    fn open_clipboard(&mut self) -> bool {
        match ClipboardContext::new() {
            Ok(ctx) => {
                self.clipboard = Some(ctx);
                true
            }
            Err(e) => {
                log::debug!("clipboard unavailable: {e}");
                prompts::clipboard_fallback_prompt()
            }
        }
    }

    /// Generate `count` passwords and route them, rendering and writing in
    /// batches. Clipboard output is gathered and set once at the end.
    pub fn generate_output(&mut self, length: Length, pattern: Pattern) -> Result<(), CliError> {
        let count = self.count();
        let json = self.flags.json;

        let mut batch = String::with_capacity(BATCH.min(count) * (length.get() + 1));
        let mut gathered = String::new();
        let written = Rand::with(|rng| -> Result<(), CliError> {
            let mut remaining = count;
            while remaining > 0 {
                let n = remaining.min(BATCH);
                for _ in 0..n {
                    let generated = generate_with(length, pattern, rng)?;
                    output::render(&generated, json, &mut batch)?;
                }
                self.write_batch(&batch, &mut gathered)?;
                batch.zeroize();
                remaining -= n;
            }
            Ok(())
        });
        batch.zeroize();

        let finished = written.and_then(|()| self.finish(&gathered, count));
        gathered.zeroize();
        finished?;

        if !json {
            let entropy = get_entropy(pattern.alphabet_size(), length.get());
            prompts::strength_summary(length, pattern, entropy);
        }
        Ok(())
    }

    fn write_batch(&self, batch: &str, gathered: &mut String) -> Result<(), CliError> {
        if self.clipboard.is_some() {
            gathered.push_str(batch);
        } else if !self.settings.output_file_path.is_empty() {
            output::append_to_file(Path::new(&self.settings.output_file_path), batch)?;
        } else {
            output::to_stdout(batch)?;
        }
        Ok(())
    }

    fn finish(&mut self, gathered: &str, count: usize) -> Result<(), CliError> {
        if let Some(ctx) = self.clipboard.as_mut() {
            ctx.set_contents(gathered.trim_end().to_owned())
                .map_err(|e| CliError::Clipboard(e.to_string()))?;
            if let Ok(mut retrieved) = ctx.get_contents() {
                retrieved.zeroize();
            }
            prompts::clipboard_copied(count);
        } else if !self.settings.output_file_path.is_empty() {
            let full_path = std::fs::canonicalize(&self.settings.output_file_path)
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| self.settings.output_file_path.clone());
            log::debug!("appended {count} password(s) to {full_path}");
            prompts::passwords_written(count, &full_path);
        }
        Ok(())
    }
}

/// Command-line text as a dynamic value. Integer text (`8`, `+8`, `08`) is an
/// integer; `Err` carries one too wide for a JSON number. Other JSON literals
/// keep their type, anything else is a string.
fn text_value(text: &str) -> Result<Value, i128> {
    let trimmed = text.trim();
    match trimmed.parse::<i128>() {
        Ok(n) => {
            if let Ok(v) = i64::try_from(n) {
                Ok(Value::from(v))
            } else if let Ok(v) = u64::try_from(n) {
                Ok(Value::from(v))
            } else {
                Err(n)
            }
        }
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Err(i128::MAX),
        Err(e) if *e.kind() == IntErrorKind::NegOverflow => Err(i128::MIN),
        Err(_) => {
            Ok(serde_json::from_str(trimmed).unwrap_or_else(|_| Value::String(text.to_owned())))
        }
    }
}

/// Ten passwords with the library defaults.
fn self_test() -> Result<(), CliError> {
    let mut report = format!(
        "Generating 10 pseudo-random passwords of {} characters (seed: {}).\n",
        Length::DEFAULT,
        rand::entropy_source(),
    );
    for j in 1..=10 {
        let generated = generate_default();
        report.push_str(&format!("{j}\t- {}\n", generated.password()));
    }
    let printed = output::to_stdout(&report);
    report.zeroize();
    printed.map_err(CliError::from)
}
