//! Reporting utilities: formatted terminal output for estimates and observation tables.

pub mod format;

pub use format::*;
