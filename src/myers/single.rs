//! Myers'99 bit-parallel kernel, single-word variant (`s.len() <= 64`).
//!
//! This is the Hyyrö/Myers recurrence, following
//! `pa_bitpacking::myers::compute_block` / the edlib-derived
//! `pa_bitpacking::compute_block_edlib` in `pa_bitpacking::lib`: those
//! operate over a fixed 4-symbol DNA `Profile`, folding the equality bit
//! lookup into a trait method; here the lookup is `Peq[c]`, an arbitrary
//! alphabet's pattern-equality table (`crate::myers::peq::SingleWordPeq`),
//! and the block/carry structure collapses because one word covers the
//! whole pattern.

use super::peq::SingleWordPeq;
use crate::buffer::CodePoints;

/// Computes the exact distance when `s.len() <= 64`.
///
/// If `k` is given, may return `k + 1` early once the running score can no
/// longer end at or below `k` (each remaining column changes the score by at
/// most one). This is a pure speed optimization, not a change in the
/// contract: the dispatcher clamps the result regardless.
pub fn distance(s: CodePoints, t: CodePoints, k: Option<usize>) -> usize {
    let n = s.len();
    debug_assert!(n <= 64);

    if n == 0 {
        return match k {
            Some(k) => t.len().min(k + 1),
            None => t.len(),
        };
    }

    let peq = SingleWordPeq::build(s.as_slice());

    let mut pv: u64 = if n == 64 { u64::MAX } else { (1u64 << n) - 1 };
    let mut mv: u64 = 0;
    let mut score: i64 = n as i64;

    let last_bit: u64 = 1u64 << (n - 1);
    let m = t.len();

    for (j, &c) in t.as_slice().iter().enumerate() {
        let eq = peq.eq(c);
        let xv = eq | mv;
        let xh = (((eq & pv).wrapping_add(pv)) ^ pv) | eq;
        let ph = mv | !(xh | pv);
        let mh = pv & xh;

        if ph & last_bit != 0 {
            score += 1;
        } else if mh & last_bit != 0 {
            score -= 1;
        }

        let ph = (ph << 1) | 1;
        pv = (mh << 1) | !(xv | ph);
        mv = ph & xv;

        if let Some(k) = k {
            let remaining = (m - 1 - j) as i64;
            if score - remaining > k as i64 {
                return k + 1;
            }
        }
    }

    score as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cp(s: &str) -> Vec<u32> {
        s.chars().map(|c| c as u32).collect()
    }

    fn dist(a: &str, b: &str) -> usize {
        let a = cp(a);
        let b = cp(b);
        distance(CodePoints::new(&a), CodePoints::new(&b), None)
    }

    #[test]
    fn matches_wagner_fischer_on_small_inputs() {
        for (a, b, expect) in [
            ("kitten", "sitting", 3),
            ("saturday", "sunday", 3),
            ("abc", "abc", 0),
            ("", "abc", 3),
        ] {
            assert_eq!(dist(a, b), expect, "{a} {b}");
        }
    }

    #[test]
    fn sixty_four_code_point_pattern() {
        let s = "a".repeat(64);
        let t = "a".repeat(63) + "b";
        let s: Vec<u32> = s.chars().map(|c| c as u32).collect();
        let t: Vec<u32> = t.chars().map(|c| c as u32).collect();
        assert_eq!(
            distance(CodePoints::new(&s), CodePoints::new(&t), None),
            1
        );
    }
}
