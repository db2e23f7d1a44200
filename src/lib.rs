//! `vocd` library crate.
//!
//! Estimates the vocd-D lexical diversity measure from a token sequence by fitting
//! the theoretical TTR curve to TTRs of random segments.
//!
//! The binary (`vocd`) is a thin wrapper around this library so that:
//!
//! - the estimator is testable without spawning processes
//! - the core (`models`, `data`, `fit`) can be used on already tokenized input

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod fit;
pub mod io;
pub mod models;
pub mod report;

pub use domain::{EstimateParams, Observation, SampleRange, VocdEstimate};
pub use error::{AppError, EstimateError};
pub use fit::{estimate, estimate_vocd};
