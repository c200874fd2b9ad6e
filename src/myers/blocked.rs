//! Myers'99 bit-parallel kernel, blocked variant (`s.len() > 64`).
//!
//! Generalizes the single-word recurrence across `ceil(n / 64)` blocks,
//! carrying a single-bit horizontal delta (`hin` -> `hout`, each in
//! `{-1, 0, +1}`) from block `b` to block `b + 1` within one column, the way
//! `pa_bitpacking`'s per-block column scans (`scalar::col`,
//! `lib::nw_edlib`/`nw_better`) carry a horizontal delta `h` across the
//! characters of the shorter sequence. Unlike those DNA-specific column
//! scans, which assume `b.len() % W == 0` (see `nw_edlib`'s assertion),
//! this generalizes to a pattern whose length is not a multiple of the
//! word width: only the last block is partial, and the score is read from
//! that block's true last-row bit rather than its top bit.

use super::peq::{BlockedPeq, WORD_BITS};
use crate::buffer::CodePoints;

/// One block's local recurrence step. Returns `(pv_out, mv_out, phw, mhw)`,
/// where `phw`/`mhw` are the bits shifted out of the top of the block
/// (the carry to the next block), encoded the same way as `ph0`/`mh0`.
#[inline(always)]
fn compute_block(pv: u64, mv: u64, ph0: u64, mh0: u64, eq: u64) -> (u64, u64, u64, u64) {
    let xv = eq | mv;
    let eq = eq | mh0;
    let xh = (((eq & pv).wrapping_add(pv)) ^ pv) | eq;
    let ph = mv | !(xh | pv);
    let mh = pv & xh;
    let phw = ph >> (WORD_BITS - 1);
    let mhw = mh >> (WORD_BITS - 1);
    let ph = (ph << 1) | ph0;
    let mh = (mh << 1) | mh0;
    let pv_out = mh | !(xv | ph);
    let mv_out = ph & xv;
    (pv_out, mv_out, phw, mhw)
}

/// Computes the exact distance when `s.len() > 64`.
///
/// Correctness requires every block up to and including the one holding
/// row `n - 1` to be updated on every column; this implementation does not
/// attempt the optional active-block-frontier speedup, trading some
/// throughput for a much smaller surface to get right.
pub fn distance(s: CodePoints, t: CodePoints, k: Option<usize>) -> usize {
    let n = s.len();
    debug_assert!(n > WORD_BITS);

    let peq = BlockedPeq::build(s.as_slice());
    let blocks = peq.blocks();
    let last_block = blocks - 1;
    let last_bit = ((n - 1) % WORD_BITS) as u32;

    let mut pv = vec![u64::MAX; blocks];
    let active_in_last = ((n - 1) % WORD_BITS) + 1;
    pv[last_block] = if active_in_last == WORD_BITS {
        u64::MAX
    } else {
        (1u64 << active_in_last) - 1
    };
    let mut mv = vec![0u64; blocks];

    let mut score: i64 = n as i64;
    let m = t.len();

    for (j, &c) in t.as_slice().iter().enumerate() {
        // hin for block 0 is always +1 at the top of the column.
        let mut ph0: u64 = 1;
        let mut mh0: u64 = 0;

        for b in 0..blocks {
            let eq = peq.eq_block(c, b);
            if b == last_block {
                // Read the score delta from the true last row of the
                // pattern before it is shifted out of view.
                let xv = eq | mv[b];
                let eq2 = eq | mh0;
                let xh = (((eq2 & pv[b]).wrapping_add(pv[b])) ^ pv[b]) | eq2;
                let ph = mv[b] | !(xh | pv[b]);
                let mh = pv[b] & xh;

                let bit = 1u64 << last_bit;
                if ph & bit != 0 {
                    score += 1;
                } else if mh & bit != 0 {
                    score -= 1;
                }

                let ph = (ph << 1) | ph0;
                let mh = (mh << 1) | mh0;
                pv[b] = mh | !(xv | ph);
                mv[b] = ph & xv;
            } else {
                let (pv_out, mv_out, phw, mhw) = compute_block(pv[b], mv[b], ph0, mh0, eq);
                pv[b] = pv_out;
                mv[b] = mv_out;
                ph0 = phw;
                mh0 = mhw;
            }
        }

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
    fn long_strings_single_edit() {
        let a = "x".repeat(200);
        let mut b: Vec<char> = a.chars().collect();
        b[150] = 'y';
        let b: String = b.into_iter().collect();
        assert_eq!(dist(&a, &b), 1);
    }

    #[test]
    fn non_multiple_of_word_width() {
        // 130 is not a multiple of 64; exercises the partial last block.
        let a = "z".repeat(130);
        let b = "z".repeat(128);
        assert_eq!(dist(&a, &b), 2);
    }

    #[test]
    fn agrees_with_wagner_fischer_on_random_like_inputs() {
        use crate::wagner_fischer;
        let a: Vec<u32> = (0..300u32).map(|i| i % 5).collect();
        let b: Vec<u32> = (0..290u32).map(|i| (i + 1) % 5).collect();
        let s = CodePoints::new(&a);
        let t = CodePoints::new(&b);
        assert_eq!(distance(s, t, None), wagner_fischer::distance(s, t));
    }
}
