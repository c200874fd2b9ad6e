//! Exact and `k`-bounded Levenshtein distance over sequences of Unicode code
//! points.
//!
//! Three kernels do the actual work -- classical Wagner-Fischer dynamic
//! programming, a constant-`k` pattern enumeration ("mbleven") for small
//! bounds, and a Myers'99 bit-parallel recurrence for everything else -- and
//! [`dispatch`] picks whichever is cheapest for a given call. See
//! `DESIGN.md` for where each piece is grounded.

pub mod buffer;
mod dispatch;
mod error;
pub mod mbleven;
pub mod myers;
pub mod wagner_fischer;

pub use buffer::{CodePointBuf, CodePoints};
pub use error::Error;

/// Selects one kernel for the debug interface. Kept as an enum rather than
/// a bare integer tag: the boundary layer (e.g. `src/bin/levcheck.rs`, or a
/// future language binding) is what accepts a raw tag or name and maps it
/// here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Kernel {
    WagnerFischer,
    Mbleven,
    Myers,
}

/// Computes the exact Levenshtein distance between `a` and `b`.
///
/// ```
/// use levenshtein_core::levenshtein;
/// let a: Vec<u32> = "kitten".chars().map(|c| c as u32).collect();
/// let b: Vec<u32> = "sitting".chars().map(|c| c as u32).collect();
/// assert_eq!(levenshtein(&a, &b), 3);
/// ```
pub fn levenshtein<'a>(a: impl Into<CodePoints<'a>>, b: impl Into<CodePoints<'a>>) -> usize {
    dispatch::distance(a.into(), b.into(), None)
}

/// Computes `min(levenshtein(a, b), k + 1)` without doing more work than
/// necessary to tell the two apart once they diverge by more than `k`.
///
/// ```
/// use levenshtein_core::levenshtein_bounded;
/// let a: Vec<u32> = "abcdef".chars().map(|c| c as u32).collect();
/// let b: Vec<u32> = "azcdef".chars().map(|c| c as u32).collect();
/// assert_eq!(levenshtein_bounded(&a, &b, 2), 1);
/// assert_eq!(levenshtein_bounded(&a, &b, 0), 1);
/// ```
pub fn levenshtein_bounded<'a>(
    a: impl Into<CodePoints<'a>>,
    b: impl Into<CodePoints<'a>>,
    k: usize,
) -> usize {
    dispatch::distance(a.into(), b.into(), Some(k))
}

/// Runs exactly one kernel, bypassing the dispatcher. Used by regression
/// tests to cross-check kernels against one another, and by
/// `src/bin/levcheck.rs` to expose the same cross-check from the command
/// line.
///
/// `Kernel::Mbleven` requires `k` in `{1, 2, 3}` and returns
/// [`Error::MblevenBoundOutOfRange`] otherwise.
pub fn debug_distance<'a>(
    method: Kernel,
    a: impl Into<CodePoints<'a>>,
    b: impl Into<CodePoints<'a>>,
    k: Option<usize>,
) -> Result<usize, Error> {
    dispatch::run_kernel(method, a.into(), b.into(), k)
}
