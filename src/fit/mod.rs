//! vocd-D fitting.
//!
//! Responsibilities:
//!
//! - build per-size observation tables from random segments
//! - seed D from the closed-form per-size estimates
//! - refine the seed against the TTR curve by bounded hill climbing
//! - average the refined value over repeated trials

pub mod minimizer;
pub mod objective;
pub mod observations;
pub mod trials;

pub use minimizer::*;
pub use objective::*;
pub use observations::*;
pub use trials::*;
