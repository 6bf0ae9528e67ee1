//! Golden tests: known passwords with their expected edit counts.
//!
//! Cases live in `tests/golden/cases.json`. Each case has a `password`, an
//! optional `policy` (defaults to 6..=20) and the expected `edits`.

use std::path::PathBuf;

use passfix_check::{LengthPolicy, PasswordChecker};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct GoldenCase {
    description: String,
    password: String,
    #[serde(default)]
    policy: LengthPolicy,
    edits: usize,
}

fn load_cases() -> Vec<GoldenCase> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/golden/cases.json");
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read golden file {}: {}", path.display(), e));
    serde_json::from_str(&contents)
        .unwrap_or_else(|e| panic!("failed to parse golden file {}: {}", path.display(), e))
}

#[test]
fn golden_edit_counts() {
    let cases = load_cases();
    assert!(!cases.is_empty(), "golden file has no cases");

    let mut failures = Vec::new();
    for case in &cases {
        let checker = PasswordChecker::new(case.policy);
        let got = checker.evaluate(&case.password);
        if got != case.edits {
            failures.push(format!(
                "{} ({:?}): expected {}, got {}",
                case.description, case.password, case.edits, got
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "{} of {} golden cases failed:\n{}",
        failures.len(),
        cases.len(),
        failures.join("\n")
    );
}

#[test]
fn golden_assessments_agree() {
    for case in load_cases() {
        let checker = PasswordChecker::new(case.policy);
        let assessment = checker.assess(&case.password);
        assert_eq!(assessment.edits, case.edits, "{}", case.description);
        assert_eq!(
            assessment.is_strong(),
            checker.is_strong(&case.password),
            "{}",
            case.description
        );
    }
}
