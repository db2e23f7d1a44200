//! Random segment sampling over a token sequence.

pub mod sampler;

pub use sampler::*;
