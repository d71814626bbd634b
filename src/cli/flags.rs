use std::path::PathBuf;

use clap::Parser;
use clap::builder::RangedU64ValueParser;
use gerasenha::{CharClass, Pattern};

/// Upper bound for `--number` and for a saved count.
pub const MAX_PASSWORDS: usize = 1_000_000;

/// Pseudo-random password generator.
///
/// Character classes combine like flags: lowercase=1, uppercase=2,
/// digits=4, symbols=8. Run without arguments on a terminal for the
/// interactive screen.
#[derive(Parser, Debug, Default)]
#[command(name = "gerasenha", author, version)]
pub struct CliFlags {
    /// Password length, 4 to 64
    #[arg(short, long, value_name = "N", allow_hyphen_values = true)]
    pub length: Option<String>,

    /// Character class bitmask, 1 to 15
    #[arg(short, long, value_name = "MASK", allow_hyphen_values = true)]
    pub pattern: Option<String>,

    /// Include lowercase letters (replaces --pattern)
    #[arg(long)]
    pub lower: bool,

    /// Include uppercase letters (replaces --pattern)
    #[arg(long)]
    pub upper: bool,

    /// Include digits (replaces --pattern)
    #[arg(long)]
    pub digits: bool,

    /// Include symbols !#$%&*+?@ (replaces --pattern)
    #[arg(long)]
    pub symbols: bool,

    /// Number of passwords to generate, up to 1000000
    #[arg(
        short,
        long,
        value_name = "COUNT",
        value_parser = RangedU64ValueParser::<usize>::new().range(0..=MAX_PASSWORDS as u64)
    )]
    pub number: Option<usize>,

    /// Append passwords to a file instead of printing them. With --save the
    /// path becomes the default; --stdout clears it
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print to stdout even if an output file is saved. With --save the
    /// saved path is cleared
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,

    /// Copy passwords to the clipboard
    #[arg(short, long)]
    pub board: bool,

    /// Print one JSON object per password
    #[arg(short, long)]
    pub json: bool,

    /// Suppress warnings and the strength summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Open the interactive screen
    #[arg(short, long)]
    pub interactive: bool,

    /// Print ten 8-character passwords and exit
    #[arg(long)]
    pub self_test: bool,

    /// Save length, pattern and count as defaults
    #[arg(short, long, conflicts_with = "default")]
    pub save: bool,

    /// Ignore saved defaults for this run
    #[arg(short, long)]
    pub default: bool,
}

impl CliFlags {
    /// Pattern from the class switches, or `None` when none was given.
    pub fn class_pattern(&self) -> Option<Pattern> {
        let selected = [
            (self.lower, CharClass::Lowercase),
            (self.upper, CharClass::Uppercase),
            (self.digits, CharClass::Digit),
            (self.symbols, CharClass::Symbol),
        ];
        let pattern: Pattern = selected
            .into_iter()
            .filter_map(|(on, class)| on.then_some(class))
            .collect();
        (!pattern.is_empty()).then_some(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliFlags {
        CliFlags::try_parse_from(std::iter::once("gerasenha").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn class_switches_sum_like_checkboxes() {
        let flags = parse(&["--symbols", "--digits"]);
        assert_eq!(flags.class_pattern().unwrap().bits(), 8 + 4);

        let flags = parse(&["--lower", "--upper", "--digits", "--symbols"]);
        assert_eq!(flags.class_pattern(), Some(Pattern::ALL));
    }

    #[test]
    fn no_switches_no_pattern() {
        assert_eq!(parse(&["-p", "3"]).class_pattern(), None);
    }

    #[test]
    fn raw_values_are_kept_as_text() {
        let flags = parse(&["-l", "-3", "-p", "abc", "-n", "4"]);
        assert_eq!(flags.length.as_deref(), Some("-3"));
        assert_eq!(flags.pattern.as_deref(), Some("abc"));
        assert_eq!(flags.number, Some(4));
    }

    #[test]
    fn number_is_bounded() {
        assert_eq!(parse(&["-n", "1000000"]).number, Some(MAX_PASSWORDS));
        for bad in ["1000001", "18446744073709551615", "-1"] {
            let result = CliFlags::try_parse_from(["gerasenha", "-n", bad].iter().copied());
            assert!(result.is_err(), "{bad}");
        }
    }

    #[test]
    fn stdout_conflicts_with_output() {
        assert!(parse(&["--stdout"]).stdout);
        let result =
            CliFlags::try_parse_from(["gerasenha", "--stdout", "-o", "out.txt"].iter().copied());
        assert!(result.is_err());
    }

    #[test]
    fn save_conflicts_with_default() {
        let result =
            CliFlags::try_parse_from(["gerasenha", "--save", "--default"].iter().copied());
        assert!(result.is_err());
    }
}
