//! Myers'99 bit-parallel kernel: single-word variant for patterns that fit
//! in one 64-bit word, and a blocked variant for longer patterns.

pub mod blocked;
pub mod peq;
pub mod single;

use crate::buffer::CodePoints;

/// Computes the exact (or `k`-clamped) distance, choosing the single-word
/// or blocked variant by `s.len()` (`s` must already be the shorter,
/// "pattern" side -- the dispatcher's job).
pub fn distance(s: CodePoints, t: CodePoints, k: Option<usize>) -> usize {
    if s.len() <= peq::WORD_BITS {
        if s.is_empty() {
            return t.len().min(k.map_or(usize::MAX, |k| k + 1));
        }
        single::distance(s, t, k)
    } else {
        blocked::distance(s, t, k)
    }
}
