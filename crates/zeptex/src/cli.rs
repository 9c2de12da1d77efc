#![forbid(unsafe_code)]

//! Command-line argument parsing.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports an environment variable override for the buffer capacity.

use std::env;
use std::path::PathBuf;
use std::process;

use zeptex_core::line_buffer::DEFAULT_MAX_LINES;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
Zeptex — a minimal full-screen, command-driven text editor

USAGE:
    zeptex [FILE]

ARGS:
    FILE        File to load; omit to start with an empty buffer.
                Without a file, `w` with no path is a no-op.

OPTIONS:
    --help, -h       Show this help message
    --version, -V    Show version

COMMANDS (typed at the prompt, confirmed with Enter):
    i N TEXT    Insert TEXT before line N
    a TEXT      Append TEXT after the last line
    d N         Delete line N
    w [FILE]    Save, to FILE or the opened file
    q           Quit

    Arrow up/down scroll by one row; backspace edits the pending command.

ENVIRONMENT VARIABLES:
    ZEPTEX_MAX_LINES    Buffer capacity in lines (default: 1000)";

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opts {
    /// File to load, if any.
    pub file: Option<PathBuf>,
    /// Buffer capacity in lines.
    pub max_lines: usize,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            file: None,
            max_lines: DEFAULT_MAX_LINES,
        }
    }
}

/// What `parse_from` decided, before side effects are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    /// Run the editor with these options.
    Run(Opts),
    /// Print the help text and exit 0.
    Help,
    /// Print the version and exit 0.
    Version,
    /// Reject the invocation: message for stderr, exit 2.
    Error(String),
}

/// Parse command-line arguments and environment variables.
///
/// Exits the process for `--help`, `--version`, and argument errors.
pub fn parse() -> Opts {
    match parse_from(env::args().skip(1)) {
        Parsed::Run(mut opts) => {
            // Environment override, applied after flag parsing.
            if let Ok(val) = env::var("ZEPTEX_MAX_LINES")
                && let Ok(n) = val.parse::<usize>()
                && n > 0
            {
                opts.max_lines = n;
            }
            opts
        }
        Parsed::Help => {
            println!("{HELP_TEXT}");
            process::exit(0);
        }
        Parsed::Version => {
            println!("zeptex {VERSION}");
            process::exit(0);
        }
        Parsed::Error(message) => {
            eprintln!("{message}");
            eprintln!("Run with --help for usage information.");
            process::exit(2);
        }
    }
}

/// Pure parsing over an argument iterator, for testability.
pub fn parse_from<I>(args: I) -> Parsed
where
    I: IntoIterator<Item = String>,
{
    let mut opts = Opts::default();

    for arg in args {
        match arg.as_str() {
            "--help" | "-h" => return Parsed::Help,
            "--version" | "-V" => return Parsed::Version,
            other if other.starts_with('-') && other.len() > 1 => {
                return Parsed::Error(format!("Unknown argument: {other}"));
            }
            path => {
                if opts.file.is_some() {
                    return Parsed::Error(format!("Unexpected extra argument: {path}"));
                }
                opts.file = Some(PathBuf::from(path));
            }
        }
    }

    Parsed::Run(opts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_means_empty_session() {
        assert_eq!(parse_from(args(&[])), Parsed::Run(Opts::default()));
    }

    #[test]
    fn single_positional_is_the_file() {
        match parse_from(args(&["notes.txt"])) {
            Parsed::Run(opts) => assert_eq!(opts.file, Some(PathBuf::from("notes.txt"))),
            other => panic!("unexpected parse: {other:?}"),
        }
    }

    #[test]
    fn help_and_version_flags() {
        assert_eq!(parse_from(args(&["--help"])), Parsed::Help);
        assert_eq!(parse_from(args(&["-h"])), Parsed::Help);
        assert_eq!(parse_from(args(&["--version"])), Parsed::Version);
        assert_eq!(parse_from(args(&["-V"])), Parsed::Version);
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert!(matches!(
            parse_from(args(&["--frobnicate"])),
            Parsed::Error(_)
        ));
    }

    #[test]
    fn extra_positional_is_rejected() {
        assert!(matches!(
            parse_from(args(&["a.txt", "b.txt"])),
            Parsed::Error(_)
        ));
    }

    #[test]
    fn version_string_nonempty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn help_text_lists_the_commands() {
        for needle in ["i N TEXT", "d N", "w [FILE]", "q"] {
            assert!(HELP_TEXT.contains(needle), "missing {needle:?}");
        }
    }
}
