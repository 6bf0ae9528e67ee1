// Cost combination: merge the length, class and run signals into one count
//
// A single edit can fix more than one problem. An inserted character can be
// a missing class and can also break a run; a deleted character shortens the
// password and can also shrink a run whose length is a multiple of three.
// Overlapping remedies are merged with `shared_remedy` (max), and only the
// disjoint insert side and delete side are added.

use serde::Serialize;

use crate::length::LengthAdjustment;
use crate::runs::RunSummary;

/// The three independent deficiency signals of a password.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Signals {
    pub length: LengthAdjustment,
    pub missing_classes: usize,
    pub runs: RunSummary,
}

impl Signals {
    /// Every deficiency is zero; the password already satisfies the policy.
    pub fn is_clear(&self) -> bool {
        self.length.is_zero() && self.missing_classes == 0 && self.runs.is_clear()
    }
}

/// Intermediate quantities of a combination, plus the final edit count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Combination {
    /// Edits that insert or replace to fix missing classes and short length.
    pub class_or_insert: usize,
    /// Deletes charged on the delete side.
    pub delete_merged: usize,
    /// Non-k run replacements after folding in what the k-run discount leaves.
    pub non_k_replacements: usize,
    /// Edits charged on the insert/replace side.
    pub insert_side: usize,
    /// Minimum number of edits.
    pub edits: usize,
}

/// Merge two requirements that the same edits can satisfy at once.
///
/// Each edit counted by the smaller requirement can be chosen so that it
/// also counts toward the larger one, so the cost is the larger of the two
/// and never their sum.
#[inline]
pub fn shared_remedy(a: usize, b: usize) -> usize {
    a.max(b)
}

/// Combine the signals into the minimum edit count.
pub fn combine(signals: &Signals) -> Combination {
    let LengthAdjustment { inserts, deletes } = signals.length;
    let RunSummary {
        k_replacements,
        k_runs,
        mut non_k_replacements,
    } = signals.runs;

    // Inserted characters can be drawn from the missing classes.
    let class_or_insert = shared_remedy(signals.missing_classes, inserts);

    // One delete per k-run turns it into a cheaper remainder run; what is
    // left of its replacement cost moves to the non-k bucket.
    let delete_merged = if k_runs == 0 {
        shared_remedy(k_replacements, deletes)
    } else {
        non_k_replacements += k_replacements.saturating_sub(k_runs);
        deletes
    };

    // Replacements that break runs can also supply missing classes.
    let insert_side = shared_remedy(non_k_replacements, class_or_insert);

    let edits = if deletes == 0 {
        // No deletes to spend, so k-runs keep their full replacement cost.
        shared_remedy(insert_side, k_replacements)
    } else {
        insert_side + delete_merged
    };

    Combination {
        class_or_insert,
        delete_merged,
        non_k_replacements,
        insert_side,
        edits,
    }
}
