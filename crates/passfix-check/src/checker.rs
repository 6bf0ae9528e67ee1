// PasswordChecker: top-level entry point for edit counting.
//
// Runs the three analyzers over the password's characters and hands their
// signals to the combiner. The checker only holds the length policy, so it
// is `Copy` and can be shared freely between threads.

use passfix_core::{CharClass, LengthPolicy};
use serde::Serialize;
use tracing::debug;

use crate::classes::ClassPresence;
use crate::combine::{Combination, Signals, combine};
use crate::length::length_adjustment;
use crate::runs::{Run, RunSummary, runs};

/// Edit counter for a fixed length policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordChecker {
    policy: LengthPolicy,
}

/// Full breakdown of how an edit count was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    /// Password length in characters.
    pub char_count: usize,
    pub policy: LengthPolicy,
    pub signals: Signals,
    /// Required classes with no occurrence, in lowercase/uppercase/digit order.
    pub missing_classes: Vec<CharClass>,
    /// Runs of three or more identical characters, left to right.
    pub offending_runs: Vec<Run>,
    pub combination: Combination,
    /// Minimum number of edits; equal to `combination.edits`.
    pub edits: usize,
}

impl Assessment {
    /// The password already satisfies every rule.
    pub fn is_strong(&self) -> bool {
        self.edits == 0
    }
}

impl PasswordChecker {
    pub fn new(policy: LengthPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &LengthPolicy {
        &self.policy
    }

    /// Derive the three deficiency signals of a password.
    pub fn signals(&self, password: &[char]) -> Signals {
        Signals {
            length: length_adjustment(password.len(), &self.policy),
            missing_classes: ClassPresence::scan(password).missing_count(),
            runs: RunSummary::from_runs(runs(password)),
        }
    }

    /// Minimum number of single-character edits that make `password` strong.
    ///
    /// Total over all strings, including the empty string.
    pub fn evaluate(&self, password: &str) -> usize {
        let chars: Vec<char> = password.chars().collect();
        let signals = self.signals(&chars);
        let edits = combine(&signals).edits;
        debug!(
            len = chars.len(),
            inserts = signals.length.inserts,
            deletes = signals.length.deletes,
            missing_classes = signals.missing_classes,
            k_replacements = signals.runs.k_replacements,
            k_runs = signals.runs.k_runs,
            non_k_replacements = signals.runs.non_k_replacements,
            edits,
            "evaluated password"
        );
        edits
    }

    /// Evaluate a password and keep every intermediate value.
    pub fn assess(&self, password: &str) -> Assessment {
        let chars: Vec<char> = password.chars().collect();
        let signals = self.signals(&chars);
        let combination = combine(&signals);
        debug!(len = chars.len(), edits = combination.edits, "assessed password");

        Assessment {
            char_count: chars.len(),
            policy: self.policy,
            signals,
            missing_classes: ClassPresence::scan(&chars).missing(),
            offending_runs: runs(&chars).filter(Run::is_offending).collect(),
            combination,
            edits: combination.edits,
        }
    }

    /// Whether `password` already satisfies every rule (zero edits needed).
    pub fn is_strong(&self, password: &str) -> bool {
        let chars: Vec<char> = password.chars().collect();
        self.signals(&chars).is_clear()
    }
}

/// Evaluate a password against the default 6..=20 policy.
pub fn evaluate(password: &str) -> usize {
    PasswordChecker::default().evaluate(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_password() {
        assert_eq!(evaluate(""), 6);
    }

    #[test]
    fn already_strong() {
        assert_eq!(evaluate("1337C0d3"), 0);
        assert!(PasswordChecker::default().is_strong("1337C0d3"));
    }

    #[test]
    fn two_k_runs_missing_uppercase() {
        assert_eq!(evaluate("aaa111"), 2);
    }

    #[test]
    fn twenty_five_identical() {
        assert_eq!(evaluate(&"a".repeat(25)), 13);
    }

    #[test]
    fn long_run_with_and_without_k_run() {
        assert_eq!(evaluate(&format!("{}17Aa", "a".repeat(17))), 6);
        assert_eq!(evaluate(&format!("{}17Aa", "a".repeat(18))), 7);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // Six bytes, three characters
        assert_eq!(evaluate("\u{00E9}\u{00E9}\u{00E9}"), 3);
    }

    #[test]
    fn custom_policy() {
        let checker = PasswordChecker::new(LengthPolicy::new(8, 12).unwrap());
        assert_eq!(checker.evaluate("aB3"), 5);
        assert_eq!(checker.evaluate("aB3aB3aB3aB3aB3"), 3);
        assert_eq!(checker.evaluate("aB3aB3aB"), 0);
    }

    #[test]
    fn deterministic() {
        let checker = PasswordChecker::default();
        let pw = "FFFFFFFFFFFFFFF11111111111111111111AAA";
        assert_eq!(checker.evaluate(pw), checker.evaluate(pw));
        assert_eq!(checker.evaluate(pw), 28);
    }

    #[test]
    fn assessment_breakdown() {
        let a = PasswordChecker::default().assess("aaa111");
        assert_eq!(a.char_count, 6);
        assert_eq!(a.missing_classes, vec![CharClass::Uppercase]);
        assert_eq!(a.offending_runs.len(), 2);
        assert_eq!(a.offending_runs[1].ch, '1');
        assert_eq!(a.offending_runs[1].start, 3);
        assert_eq!(a.signals.runs.k_runs, 2);
        assert_eq!(a.edits, 2);
        assert!(!a.is_strong());
    }

    #[test]
    fn assessment_matches_evaluate() {
        let checker = PasswordChecker::default();
        for pw in ["", "a", "aaaaaa", "ABABABABABABABABABAB1", "A1234567890aaabbbbccccc"] {
            assert_eq!(checker.assess(pw).edits, checker.evaluate(pw), "{pw}");
        }
    }

    #[test]
    fn assessment_signals_match_direct_derivation() {
        let checker = PasswordChecker::new(LengthPolicy::new(8, 12).unwrap());
        for pw in ["", "aaa111", "aB3", "aB3aB3aB3aB3aB3", "zzzzzzzzzzzzzzzz1"] {
            let chars: Vec<char> = pw.chars().collect();
            let a = checker.assess(pw);
            assert_eq!(a.signals, checker.signals(&chars), "{pw}");
            assert_eq!(a.missing_classes.len(), a.signals.missing_classes, "{pw}");
            let offending: usize = a.offending_runs.iter().map(Run::replacements).sum();
            assert_eq!(offending, a.signals.runs.total_replacements(), "{pw}");
        }
    }

    #[test]
    fn assessment_serializes() {
        let a = PasswordChecker::default().assess("aaaB1");
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["edits"], 1);
        assert_eq!(json["char_count"], 5);
        assert_eq!(json["missing_classes"], serde_json::json!([]));
        assert_eq!(json["offending_runs"][0]["len"], 3);
        assert_eq!(json["policy"]["max_len"], 20);
    }
}
