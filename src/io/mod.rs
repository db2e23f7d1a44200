//! Input/output helpers.
//!
//! - text loading + whitespace tokenization (`ingest`)
//! - result exports (JSON/CSV) (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
