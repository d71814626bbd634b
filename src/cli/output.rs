//! Rendering and routing of generated passwords.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use gerasenha::Generated;
use serde::Serialize;
use zeroize::Zeroize;

#[derive(Serialize)]
struct Record<'a> {
    password: &'a str,
    entropy: u32,
    strength: u8,
    label: &'static str,
}

/// Append one line for `generated` to `buf`: the bare password, or a JSON
/// object when `json` is set.
pub fn render(generated: &Generated, json: bool, buf: &mut String) -> serde_json::Result<()> {
    if json {
        let strength = generated.strength();
        let mut line = serde_json::to_string(&Record {
            password: generated.password(),
            entropy: generated.entropy(),
            strength: strength.tier(),
            label: strength.label(),
        })?;
        buf.push_str(&line);
        line.zeroize();
    } else {
        buf.push_str(generated.password());
    }
    buf.push('\n');
    Ok(())
}

pub fn append_to_file(path: &Path, data: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()
}

pub fn to_stdout(data: &str) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(data.as_bytes())?;
    out.flush()
}
