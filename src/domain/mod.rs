//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the sample-size range and estimation parameters (`SampleRange`, `EstimateParams`)
//! - per-size observations and per-trial outputs (`Observation`, `SeedStats`, `TrialResult`)
//! - the final estimate (`VocdEstimate`) and run configuration (`RunConfig`)

pub mod types;

pub use types::*;
