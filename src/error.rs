//! Boundary-layer error type.
//!
//! Every kernel is total on its declared inputs; the only way to hit an
//! `Error` is to misuse the debug interface, which accepts a kernel
//! selector and bound that the type system cannot fully constrain on its
//! own.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("mbleven kernel requires k in {{1, 2, 3}}, got {k:?}")]
    MblevenBoundOutOfRange { k: Option<usize> },
}
