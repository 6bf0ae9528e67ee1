// Run analysis: maximal runs of identical consecutive characters
//
// A run of `n >= 3` identical characters needs `n / 3` replacements to break
// every triple. Runs whose length is an exact multiple of three are tracked
// apart from the rest because a single delete lowers their cost by one,
// while a delete spent on any other run does not.

use serde::Serialize;
use tracing::trace;

/// Shortest run that violates the no-triples rule.
pub const MIN_OFFENDING_RUN: usize = 3;

/// A maximal block of identical consecutive characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Run {
    /// The repeated character.
    pub ch: char,
    /// Character index of the first position of the run.
    pub start: usize,
    /// Number of characters in the run (always >= 1).
    pub len: usize,
}

/// Cost classification of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RunClass {
    /// One or two characters; costs nothing.
    Short,
    /// Length is a positive multiple of three.
    MultipleOfThree,
    /// Length is at least four and not a multiple of three.
    Remainder,
}

impl Run {
    pub fn class(&self) -> RunClass {
        if self.len < MIN_OFFENDING_RUN {
            RunClass::Short
        } else if self.len % 3 == 0 {
            RunClass::MultipleOfThree
        } else {
            RunClass::Remainder
        }
    }

    /// Replacements needed to break every triple inside the run.
    pub fn replacements(&self) -> usize {
        self.len / 3
    }

    /// Whether the run contains at least one triple.
    pub fn is_offending(&self) -> bool {
        self.len >= MIN_OFFENDING_RUN
    }

    /// Character index one past the end of the run.
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Iterator over the maximal runs of a password, left to right.
///
/// The yielded runs partition the input: every position belongs to exactly
/// one run.
pub struct Runs<'a> {
    chars: &'a [char],
    pos: usize,
}

impl Iterator for Runs<'_> {
    type Item = Run;

    fn next(&mut self) -> Option<Run> {
        let &ch = self.chars.get(self.pos)?;
        let start = self.pos;
        let len = self.chars[start..]
            .iter()
            .take_while(|&&c| c == ch)
            .count();
        self.pos += len;
        Some(Run { ch, start, len })
    }
}

/// Split a password into its maximal runs.
pub fn runs(password: &[char]) -> Runs<'_> {
    Runs {
        chars: password,
        pos: 0,
    }
}

/// Aggregated replacement cost of all offending runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Sum of `len / 3` over runs whose length is a multiple of three.
    pub k_replacements: usize,
    /// Number of runs whose length is a multiple of three.
    pub k_runs: usize,
    /// Sum of `len / 3` over offending runs whose length is not a multiple of three.
    pub non_k_replacements: usize,
}

impl RunSummary {
    /// Aggregate a sequence of runs. Short runs are skipped.
    pub fn from_runs<I>(runs: I) -> Self
    where
        I: IntoIterator<Item = Run>,
    {
        let mut summary = Self::default();
        for run in runs {
            match run.class() {
                RunClass::Short => continue,
                RunClass::MultipleOfThree => {
                    summary.k_replacements += run.replacements();
                    summary.k_runs += 1;
                }
                RunClass::Remainder => {
                    summary.non_k_replacements += run.replacements();
                }
            }
            trace!(
                ch = ?run.ch,
                start = run.start,
                len = run.len,
                class = ?run.class(),
                "offending run"
            );
        }
        summary
    }

    /// Total replacements if every offending run were fixed by replacement only.
    pub fn total_replacements(&self) -> usize {
        self.k_replacements + self.non_k_replacements
    }

    /// No run of three or more identical characters exists.
    pub fn is_clear(&self) -> bool {
        self.total_replacements() == 0
    }
}

impl FromIterator<Run> for RunSummary {
    fn from_iter<I: IntoIterator<Item = Run>>(iter: I) -> Self {
        Self::from_runs(iter)
    }
}

/// Scan a password and aggregate its run costs.
pub fn summarize_runs(password: &[char]) -> RunSummary {
    RunSummary::from_runs(runs(password))
}
