//! The dispatcher: normalizes the two inputs and picks the cheapest kernel
//! that can answer the call, then clamps the result to `k + 1` when a bound
//! was given.
//!
//! Grounded on the same "normalize-then-route" shape as
//! `pa_bitpacking::search::search` (decide layout/profile up front, run one
//! code path) and the top-level `align()` entry points of `astarpa`, which
//! normalize arguments before handing off to a chosen aligner.

use crate::buffer::CodePoints;
use crate::mbleven;
use crate::myers;
use crate::wagner_fischer;

const MYERS_WORD_BITS: usize = crate::myers::peq::WORD_BITS;

/// Arranges `(a, b)` so the first element is no longer than the second.
fn normalize<'a>(a: CodePoints<'a>, b: CodePoints<'a>) -> (CodePoints<'a>, CodePoints<'a>) {
    if a.len() <= b.len() {
        (a, b)
    } else {
        (b, a)
    }
}

/// Core entry point shared by [`crate::levenshtein`] and
/// [`crate::levenshtein_bounded`]. `k = None` means unbounded.
pub fn distance(a: CodePoints, b: CodePoints, k: Option<usize>) -> usize {
    let (s, t) = normalize(a, b);
    let n = s.len();
    let m = t.len();
    let ell = m - n;

    if let Some(k) = k {
        if ell > k {
            return k + 1;
        }
    }

    if n == 0 {
        return match k {
            Some(k) => m.min(k + 1),
            None => m,
        };
    }

    match k {
        Some(0) => usize::from(s.as_slice() != t.as_slice()),
        Some(k @ 1..=3) => mbleven::distance(s, t, k),
        Some(k) => {
            if m <= MYERS_WORD_BITS {
                myers::single::distance(s, t, Some(k))
            } else {
                myers::blocked::distance(s, t, Some(k))
            }
        }
        None => {
            if m <= MYERS_WORD_BITS {
                myers::single::distance(s, t, None)
            } else {
                myers::blocked::distance(s, t, None)
            }
        }
    }
}

/// Runs exactly one named kernel, bypassing dispatch. Used by the debug
/// interface to cross-check kernels against one another.
pub fn run_kernel(
    kernel: crate::Kernel,
    a: CodePoints,
    b: CodePoints,
    k: Option<usize>,
) -> Result<usize, crate::Error> {
    use crate::Kernel::*;

    let (s, t) = normalize(a, b);

    match kernel {
        WagnerFischer => Ok(wagner_fischer::distance(s, t)),
        Mbleven => match k {
            Some(k) if (1..=3).contains(&k) => {
                let n = s.len();
                let m = t.len();
                if n == 0 {
                    return Ok(m.min(k + 1));
                }
                let ell = m - n;
                if ell > k {
                    return Ok(k + 1);
                }
                Ok(mbleven::distance(s, t, k))
            }
            Some(k) => Err(crate::Error::MblevenBoundOutOfRange { k: Some(k) }),
            None => Err(crate::Error::MblevenBoundOutOfRange { k: None }),
        },
        Myers => {
            if s.is_empty() {
                return Ok(match k {
                    Some(k) => t.len().min(k + 1),
                    None => t.len(),
                });
            }
            let m = t.len();
            let raw = if m <= MYERS_WORD_BITS {
                myers::single::distance(s, t, k)
            } else {
                myers::blocked::distance(s, t, k)
            };
            Ok(match k {
                Some(k) => raw.min(k + 1),
                None => raw,
            })
        }
    }
}
