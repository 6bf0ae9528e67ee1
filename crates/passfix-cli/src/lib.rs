// passfix-cli: shared utilities for CLI tools.

use std::io::{self, BufRead, Write};
use std::process;

use passfix_check::PasswordChecker;
use passfix_core::LengthPolicy;
use passfix_core::policy::{DEFAULT_MAX_LEN, DEFAULT_MIN_LEN};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable overriding the default minimum length.
pub const MIN_LENGTH_ENV: &str = "PASSFIX_MIN_LENGTH";

/// Environment variable overriding the default maximum length.
pub const MAX_LENGTH_ENV: &str = "PASSFIX_MAX_LENGTH";

/// Install a stderr log subscriber filtered by `RUST_LOG` (default: warn).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse `--min-length N` / `--max-length N` (or the `=N` forms) and build
/// a checker from them.
///
/// Resolution order for each bound:
/// 1. command-line flag
/// 2. `PASSFIX_MIN_LENGTH` / `PASSFIX_MAX_LENGTH` environment variable
/// 3. built-in default (6 and 20)
///
/// Returns `(checker, remaining_args)`.
pub fn parse_checker(args: &[String]) -> Result<(PasswordChecker, Vec<String>), String> {
    parse_checker_with_env(args, |name| std::env::var(name).ok())
}

/// [`parse_checker`] with an injectable environment lookup.
pub fn parse_checker_with_env<F>(
    args: &[String],
    env: F,
) -> Result<(PasswordChecker, Vec<String>), String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut min_flag = None;
    let mut max_flag = None;
    let mut remaining = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--min-length=") {
            min_flag = Some(val.to_string());
        } else if let Some(val) = arg.strip_prefix("--max-length=") {
            max_flag = Some(val.to_string());
        } else if arg == "--min-length" || arg == "--max-length" {
            let val = iter
                .next()
                .ok_or_else(|| format!("{arg} requires a value"))?
                .clone();
            if arg == "--min-length" {
                min_flag = Some(val);
            } else {
                max_flag = Some(val);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    let min_len = resolve_bound("--min-length", min_flag, env(MIN_LENGTH_ENV), DEFAULT_MIN_LEN)?;
    let max_len = resolve_bound("--max-length", max_flag, env(MAX_LENGTH_ENV), DEFAULT_MAX_LEN)?;
    let policy = LengthPolicy::new(min_len, max_len).map_err(|e| e.to_string())?;
    debug!(min_len, max_len, "resolved length policy");

    Ok((PasswordChecker::new(policy), remaining))
}

fn resolve_bound(
    name: &str,
    flag: Option<String>,
    env_value: Option<String>,
    default: usize,
) -> Result<usize, String> {
    match flag.or(env_value) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| format!("invalid value for {name}: {raw:?}")),
        None => Ok(default),
    }
}

/// Read passwords from a reader, one per line.
///
/// A trailing `\r` is stripped. Empty lines are kept: the empty password is
/// a valid input.
pub fn read_passwords<R: BufRead>(reader: R) -> impl Iterator<Item = Result<String, String>> {
    reader.lines().map(|line| {
        line.map(|mut l| {
            if l.ends_with('\r') {
                l.pop();
            }
            l
        })
        .map_err(|e| format!("failed to read stdin: {e}"))
    })
}

/// Run `handle` on every password read from `reader`, writing to `out`.
///
/// Stops at the first unreadable line (e.g. invalid UTF-8) or write failure.
/// `out` is flushed in every case, so results for the lines before the
/// failure are still emitted; the failure is then returned to the caller.
pub fn process_passwords<R, W, F>(reader: R, out: &mut W, mut handle: F) -> Result<(), String>
where
    R: BufRead,
    W: Write,
    F: FnMut(&mut W, &str) -> io::Result<()>,
{
    let mut result = Ok(());
    for line in read_passwords(reader) {
        let password = match line {
            Ok(p) => p,
            Err(e) => {
                result = Err(e);
                break;
            }
        };
        if let Err(e) = handle(out, &password) {
            result = Err(format!("failed to write output: {e}"));
            break;
        }
    }
    out.flush().map_err(|e| format!("failed to write output: {e}"))?;
    result
}

/// Reject any argument not listed in `known`.
///
/// Call after [`parse_checker`] has consumed the policy flags.
pub fn reject_unknown(args: &[String], known: &[&str]) -> Result<(), String> {
    match args.iter().find(|a| !known.contains(&a.as_str())) {
        Some(arg) => Err(format!("unrecognized argument: {arg} (see --help)")),
        None => Ok(()),
    }
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
