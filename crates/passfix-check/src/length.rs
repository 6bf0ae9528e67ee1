// Length analysis: inserts or deletes forced by the policy bounds

use passfix_core::LengthPolicy;
use serde::Serialize;

/// Edits required purely to bring the character count within bounds.
///
/// At most one field is nonzero because a policy always has
/// `min_len <= max_len`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LengthAdjustment {
    /// Characters that must be inserted (`min_len - len`).
    pub inserts: usize,
    /// Characters that must be deleted (`len - max_len`).
    pub deletes: usize,
}

impl LengthAdjustment {
    pub fn is_zero(&self) -> bool {
        self.inserts == 0 && self.deletes == 0
    }
}

/// Compute the length adjustment for a password of `len` characters.
pub fn length_adjustment(len: usize, policy: &LengthPolicy) -> LengthAdjustment {
    LengthAdjustment {
        inserts: policy.min_len().saturating_sub(len),
        deletes: len.saturating_sub(policy.max_len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn too_short() {
        let adj = length_adjustment(2, &LengthPolicy::default());
        assert_eq!(adj, LengthAdjustment { inserts: 4, deletes: 0 });
    }

    #[test]
    fn empty_needs_minimum() {
        let adj = length_adjustment(0, &LengthPolicy::default());
        assert_eq!(adj.inserts, 6);
        assert_eq!(adj.deletes, 0);
    }

    #[test]
    fn within_bounds() {
        let policy = LengthPolicy::default();
        assert!(length_adjustment(6, &policy).is_zero());
        assert!(length_adjustment(13, &policy).is_zero());
        assert!(length_adjustment(20, &policy).is_zero());
    }

    #[test]
    fn too_long() {
        let adj = length_adjustment(25, &LengthPolicy::default());
        assert_eq!(adj, LengthAdjustment { inserts: 0, deletes: 5 });
    }

    #[test]
    fn custom_policy() {
        let policy = LengthPolicy::new(12, 12).unwrap();
        assert_eq!(length_adjustment(10, &policy).inserts, 2);
        assert_eq!(length_adjustment(15, &policy).deletes, 3);
        assert!(length_adjustment(12, &policy).is_zero());
    }
}
