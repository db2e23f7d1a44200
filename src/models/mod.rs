//! The TTR/D curve.
//!
//! Kept as small, pure functions so the fitting code can call them in tight loops.

pub mod ttr;

pub use ttr::*;
