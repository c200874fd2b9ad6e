//! Constant-`k` enumeration kernel ("mbleven"): for `k` in {1, 2, 3}, the set
//! of edit scripts of length <= k is small enough to enumerate directly and
//! try each one against the inputs, which is far cheaper than a full DP
//! table when `k` is tiny.
//!
//! The pattern tables are not hardcoded. They are derived from their
//! definition: for every budget from `ell` (the length difference) up to
//! `k`, every operation multiset of that budget with net insertions ℓ,
//! generated and deduplicated at dispatch time. Trying every budget up to
//! `k` (not just `k` itself) is required because the true distance can be
//! smaller than `k`, and a script that uses fewer edits than the cap is
//! still a valid witness. Deriving rather than copying a fixed table
//! sidesteps any ambiguity about which revision of a hand-maintained table
//! is canonical, and `tests/cross_kernel.rs` verifies the result against
//! Wagner-Fischer exhaustively.

use crate::buffer::CodePoints;
use itertools::Itertools;
use std::collections::HashSet;

/// One non-free edit operation in a candidate script.
///
/// Matching (`K`eep) pairs are never represented explicitly: they are
/// consumed greedily between operations during evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Op {
    /// Substitute: consume one code point from each side.
    Replace,
    /// Insert into `s` (equivalently: skip one code point of `t`).
    Insert,
    /// Delete from `s`.
    Delete,
}

/// All distinct orderings of operation multisets `(r, i, d)` with
/// `r + i + d == budget` and `i - d == ell`.
fn patterns_for(budget: usize, ell: usize) -> Vec<Vec<Op>> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for d in 0..=budget {
        let i = ell + d;
        if i + d > budget {
            continue;
        }
        let r = budget - i - d;
        let mut multiset = Vec::with_capacity(budget);
        multiset.extend(std::iter::repeat(Op::Replace).take(r));
        multiset.extend(std::iter::repeat(Op::Insert).take(i));
        multiset.extend(std::iter::repeat(Op::Delete).take(d));

        for perm in multiset.iter().copied().permutations(budget) {
            if seen.insert(perm.clone()) {
                out.push(perm);
            }
        }
    }

    out
}

/// Evaluates one candidate pattern against `(s, t)`, greedily consuming
/// matching pairs between (and after) pattern symbols. Returns the number of
/// edits used on success, or `None` if the pattern cannot account for `s`
/// and `t` exactly.
fn eval_pattern(pattern: &[Op], s: &[u32], t: &[u32]) -> Option<usize> {
    let n = s.len();
    let m = t.len();
    let mut i = 0usize;
    let mut j = 0usize;
    let mut edits = 0usize;

    let greedy = |i: &mut usize, j: &mut usize| {
        while *i < n && *j < m && s[*i] == t[*j] {
            *i += 1;
            *j += 1;
        }
    };

    for &op in pattern {
        greedy(&mut i, &mut j);
        match op {
            Op::Replace => {
                if i < n && j < m {
                    i += 1;
                    j += 1;
                    edits += 1;
                } else {
                    return None;
                }
            }
            Op::Insert => {
                if j < m {
                    j += 1;
                    edits += 1;
                } else {
                    return None;
                }
            }
            Op::Delete => {
                if i < n {
                    i += 1;
                    edits += 1;
                } else {
                    return None;
                }
            }
        }
    }

    greedy(&mut i, &mut j);
    (i == n && j == m).then_some(edits)
}

/// Runs the mbleven kernel for bound `k` in {1, 2, 3}. `s` must be no longer
/// than `t` (the dispatcher's normalization invariant); callers outside this
/// crate go through [`crate::debug_distance`], which validates `k`.
///
/// A true distance of `d <= k` may be reached by a script using fewer than
/// `k` edits (e.g. distance 1 when `k = 2`), so every budget from `ell`
/// (the minimum possible, forced by the length difference) up to `k` is
/// tried, not just `k` itself; the smallest edit count across all of them
/// wins. Returns the true distance if it is <= k, else k + 1.
pub fn distance(s: CodePoints, t: CodePoints, k: usize) -> usize {
    debug_assert!((1..=3).contains(&k));
    debug_assert!(s.len() <= t.len());

    let ell = t.len() - s.len();
    if ell > k {
        return k + 1;
    }

    let s = s.as_slice();
    let t = t.as_slice();
    let mut best = k + 1;
    for budget in ell..=k {
        for pattern in patterns_for(budget, ell) {
            if let Some(cost) = eval_pattern(&pattern, s, t) {
                best = best.min(cost);
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cp(s: &str) -> Vec<u32> {
        s.chars().map(|c| c as u32).collect()
    }

    fn dist(a: &str, b: &str, k: usize) -> usize {
        let a = cp(a);
        let b = cp(b);
        distance(CodePoints::new(&a), CodePoints::new(&b), k)
    }

    #[test]
    fn pattern_counts_match_worked_examples() {
        assert_eq!(patterns_for(1, 0).len(), 1);
        assert_eq!(patterns_for(1, 1).len(), 1);
        assert_eq!(patterns_for(2, 0).len(), 3);
        assert_eq!(patterns_for(2, 1).len(), 2);
        assert_eq!(patterns_for(2, 2).len(), 1);
        assert_eq!(patterns_for(3, 0).len(), 7);
        assert_eq!(patterns_for(3, 1).len(), 6);
        assert_eq!(patterns_for(3, 2).len(), 3);
        assert_eq!(patterns_for(3, 3).len(), 1);
    }

    #[test]
    fn bounded_concrete_scenarios() {
        assert_eq!(dist("abcdef", "azcdef", 2), 1);
        assert_eq!(dist("abcdef", "azcdzf", 1), 2);
    }

    #[test]
    fn exceeds_bound_clamps_to_k_plus_one() {
        // "kitten" -> "sitting" is distance 3; asking mbleven for k=1 must
        // fail every pattern and report k+1.
        assert_eq!(dist("kitten", "sitting", 1), 2);
    }

    #[test]
    fn identical_strings_zero_edits() {
        assert_eq!(dist("abc", "abc", 3), 0);
    }
}
