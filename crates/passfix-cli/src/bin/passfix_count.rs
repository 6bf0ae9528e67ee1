// passfix-count: Count the edits each password needs to become strong.
//
// Reads passwords from stdin (one per line) and prints the minimum number of
// single-character inserts, deletes and replacements for each:
//   <edits>\t<password>
//
// Usage:
//   passfix-count [--min-length N] [--max-length N] [-q]
//
// Options:
//   --min-length N   Minimum password length (default 6, env PASSFIX_MIN_LENGTH)
//   --max-length N   Maximum password length (default 20, env PASSFIX_MAX_LENGTH)
//   -q, --quiet      Print only the edit count
//   -h, --help       Print help

use std::io::{self, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if passfix_cli::wants_help(&args) {
        println!("passfix-count: Count the edits each password needs to become strong.");
        println!();
        println!("Usage: passfix-count [--min-length N] [--max-length N] [-q]");
        println!();
        println!("Reads passwords from stdin (one per line). Prints:");
        println!("  <edits>\\t<password>");
        println!();
        println!("Options:");
        println!("  --min-length N   Minimum password length (default 6, env PASSFIX_MIN_LENGTH)");
        println!("  --max-length N   Maximum password length (default 20, env PASSFIX_MAX_LENGTH)");
        println!("  -q, --quiet      Print only the edit count");
        println!("  -h, --help       Print this help");
        return;
    }

    passfix_cli::init_logging();

    let (checker, args) =
        passfix_cli::parse_checker(&args).unwrap_or_else(|e| passfix_cli::fatal(&e));
    passfix_cli::reject_unknown(&args, &["-q", "--quiet"])
        .unwrap_or_else(|e| passfix_cli::fatal(&e));
    let quiet = args.iter().any(|a| a == "-q" || a == "--quiet");

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let result = passfix_cli::process_passwords(io::stdin().lock(), &mut out, |out, password| {
        let edits = checker.evaluate(password);
        if quiet {
            writeln!(out, "{edits}")
        } else {
            writeln!(out, "{edits}\t{password}")
        }
    });
    if let Err(e) = result {
        passfix_cli::fatal(&e);
    }
}
