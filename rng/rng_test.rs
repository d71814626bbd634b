//! RNG test binary - streams generator output to stdout for statistical testing.
//!
//! Usage:
//!   ./rng_test              # hardware-seeded generator
//!   ./rng_test --seed 42    # fixed seed, reproducible stream
//!   ./rng_test --chars 1    # password characters for pattern 1 instead of raw bytes
//!
//! Pipe to test suites:
//!   ./rng_test | dieharder -a -g 200
//!   ./rng_test | RNG_test stdin -tlmax 1TB

use std::io::{self, Write};
use std::process::ExitCode;

use gerasenha::pass::charset;
use gerasenha::rand::Rand;
use gerasenha::{GenerateError, Pattern};

const BUF_SIZE: usize = 65536;

enum Mode {
    Bytes,
    Chars(Vec<u8>),
}

fn parse_args(args: &[String]) -> Result<(Option<u64>, Mode), String> {
    let mut seed = None;
    let mut mode = Mode::Bytes;
    let mut iter = args.iter().skip(1);

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                seed = Some(value.parse().map_err(|_| format!("invalid seed: {value}"))?);
            }
            "--chars" => {
                let value = iter.next().ok_or("--chars needs a pattern")?;
                let bits: i64 = value.parse().map_err(|_| format!("invalid pattern: {value}"))?;
                let pattern = Pattern::from_bits(bits).map_err(|e: GenerateError| e.to_string())?;
                mode = Mode::Chars(charset::build(pattern));
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok((seed, mode))
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    let (seed, mode) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::from(2);
        }
    };

    let mut rng = seed.map(Rand::seeded).unwrap_or_default();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut buf = [0u8; BUF_SIZE];

    loop {
        match &mode {
            Mode::Bytes => {
                for chunk in buf.chunks_exact_mut(8) {
                    chunk.copy_from_slice(&rng.next_u64().to_le_bytes());
                }
            }
            Mode::Chars(alphabet) => {
                for b in buf.iter_mut() {
                    *b = alphabet[rng.below(alphabet.len())];
                }
            }
        }

        // Broken pipe ends the stream
        if out.write_all(&buf).is_err() {
            return ExitCode::SUCCESS;
        }
    }
}
