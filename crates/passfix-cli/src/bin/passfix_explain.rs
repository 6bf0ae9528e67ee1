// passfix-explain: Show how each password's edit count is reached.
//
// Reads passwords from stdin (one per line) and prints the length, class and
// run deficiencies together with the merged edit count. With --json, prints
// one JSON object per line instead.
//
// Usage:
//   passfix-explain [--min-length N] [--max-length N] [--json]
//
// Options:
//   --min-length N   Minimum password length (default 6, env PASSFIX_MIN_LENGTH)
//   --max-length N   Maximum password length (default 20, env PASSFIX_MAX_LENGTH)
//   --json           Print JSON lines
//   -h, --help       Print help

use std::io::{self, Write};

use passfix_check::Assessment;

fn write_text<W: Write>(out: &mut W, password: &str, a: &Assessment) -> io::Result<()> {
    writeln!(out, "{password:?}")?;
    writeln!(
        out,
        "  length:    {} chars (allowed {}..={}), +{} / -{}",
        a.char_count,
        a.policy.min_len(),
        a.policy.max_len(),
        a.signals.length.inserts,
        a.signals.length.deletes
    )?;

    let missing: Vec<&str> = a.missing_classes.iter().map(|c| c.label()).collect();
    if missing.is_empty() {
        writeln!(out, "  classes:   complete")?;
    } else {
        writeln!(out, "  classes:   missing {}", missing.join(", "))?;
    }

    if a.offending_runs.is_empty() {
        writeln!(out, "  runs:      none")?;
    } else {
        for run in &a.offending_runs {
            writeln!(
                out,
                "  runs:      {:?} x{} at {} ({} replacements)",
                run.ch,
                run.len,
                run.start,
                run.replacements()
            )?;
        }
    }

    let c = &a.combination;
    writeln!(
        out,
        "  merged:    class/insert {}, non-k runs {}, insert side {}, delete side {}",
        c.class_or_insert, c.non_k_replacements, c.insert_side, c.delete_merged
    )?;
    writeln!(out, "  edits:     {}", a.edits)
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if passfix_cli::wants_help(&args) {
        println!("passfix-explain: Show how each password's edit count is reached.");
        println!();
        println!("Usage: passfix-explain [--min-length N] [--max-length N] [--json]");
        println!();
        println!("Reads passwords from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  --min-length N   Minimum password length (default 6, env PASSFIX_MIN_LENGTH)");
        println!("  --max-length N   Maximum password length (default 20, env PASSFIX_MAX_LENGTH)");
        println!("  --json           Print one JSON object per line");
        println!("  -h, --help       Print this help");
        return;
    }

    passfix_cli::init_logging();

    let (checker, args) =
        passfix_cli::parse_checker(&args).unwrap_or_else(|e| passfix_cli::fatal(&e));
    passfix_cli::reject_unknown(&args, &["--json"]).unwrap_or_else(|e| passfix_cli::fatal(&e));
    let json = args.iter().any(|a| a == "--json");

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let result = passfix_cli::process_passwords(io::stdin().lock(), &mut out, |out, password| {
        let assessment = checker.assess(password);
        if json {
            serde_json::to_writer(&mut *out, &assessment).map_err(io::Error::other)?;
            writeln!(out)
        } else {
            write_text(out, password, &assessment)
        }
    });
    if let Err(e) = result {
        passfix_cli::fatal(&e);
    }
}
