//! The pattern-equality table: code point -> bitmask of positions in `s`
//! (the shorter string, "pattern") where that code point occurs.
//!
//! Generalizes `pa_bitpacking::profile` (a `[B; 4]` array fixed to a
//! 4-symbol DNA alphabet) to an arbitrary alphabet: a hash map keyed by
//! 32-bit code point, one word per 64-code-point block of `s`. Unknown
//! code points map to all-zero words, so they simply never match.

use rustc_hash::FxHashMap;

pub const WORD_BITS: usize = u64::BITS as usize;

/// Peq for a pattern that fits in a single word (`s.len() <= 64`).
#[derive(Debug, Default)]
pub struct SingleWordPeq {
    table: FxHashMap<u32, u64>,
}

impl SingleWordPeq {
    pub fn build(s: &[u32]) -> Self {
        debug_assert!(s.len() <= WORD_BITS);
        let mut table: FxHashMap<u32, u64> = FxHashMap::default();
        for (i, &c) in s.iter().enumerate() {
            *table.entry(c).or_insert(0) |= 1u64 << i;
        }
        SingleWordPeq { table }
    }

    #[inline]
    pub fn eq(&self, c: u32) -> u64 {
        self.table.get(&c).copied().unwrap_or(0)
    }
}

/// Peq for a pattern spanning multiple 64-bit blocks (`s.len() > 64`).
/// `table[c]` is the per-block mask array for code point `c`.
#[derive(Debug, Default)]
pub struct BlockedPeq {
    table: FxHashMap<u32, Vec<u64>>,
    blocks: usize,
}

impl BlockedPeq {
    pub fn build(s: &[u32]) -> Self {
        let blocks = s.len().div_ceil(WORD_BITS);
        let mut table: FxHashMap<u32, Vec<u64>> = FxHashMap::default();
        for (i, &c) in s.iter().enumerate() {
            let entry = table.entry(c).or_insert_with(|| vec![0u64; blocks]);
            entry[i / WORD_BITS] |= 1u64 << (i % WORD_BITS);
        }
        BlockedPeq { table, blocks }
    }

    #[inline]
    pub fn blocks(&self) -> usize {
        self.blocks
    }

    #[inline]
    pub fn eq_block(&self, c: u32, block: usize) -> u64 {
        self.table
            .get(&c)
            .map(|masks| masks[block])
            .unwrap_or(0)
    }
}
