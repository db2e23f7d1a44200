//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` defaults and parses CLI arguments
//! - reads and tokenizes the input texts
//! - runs the estimator
//! - prints reports and writes optional exports

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Command, EstimateArgs, InputArgs};
use crate::domain::{EstimateParams, RunConfig, SampleRange, TextSource};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `vocd` binary.
pub fn run() -> Result<(), AppError> {
    // A missing `.env` is the common case.
    dotenvy::dotenv().ok();

    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Estimate(args) => handle_estimate(args),
        Command::Observe(args) => handle_observe(args),
    }
}

fn handle_estimate(args: EstimateArgs) -> Result<(), AppError> {
    let config = run_config_from_args(&args);
    let run = pipeline::run_estimate(&config)?;

    println!("{}", crate::report::format_run_summary(&run.texts, &config));

    if let Some(path) = &config.export_json {
        crate::io::export::write_results_json(path, &run, &config)?;
        tracing::info!(path = %path.display(), "Wrote results JSON");
    }
    if let Some(path) = &config.export_csv {
        crate::io::export::write_observations_csv(path, &run)?;
        tracing::info!(path = %path.display(), "Wrote observations CSV");
    }

    Ok(())
}

fn handle_observe(args: InputArgs) -> Result<(), AppError> {
    let config = RunConfig {
        show_observations: true,
        export_json: None,
        export_csv: None,
        ..base_config(&args)
    };
    let tables = pipeline::run_observe(&config)?;

    println!("{}", crate::report::format_observe(&tables, &config));
    Ok(())
}

pub fn run_config_from_args(args: &EstimateArgs) -> RunConfig {
    RunConfig {
        show_observations: args.observations,
        export_json: args.export_json.clone(),
        export_csv: args.export_csv.clone(),
        ..base_config(&args.input)
    }
}

fn base_config(args: &InputArgs) -> RunConfig {
    let mut sources: Vec<TextSource> = args.files.iter().map(|p| source_from_path(p)).collect();
    if args.demo {
        sources.push(TextSource::Demo);
    }

    RunConfig {
        sources,
        params: EstimateParams {
            range: SampleRange::new(args.from, args.to, args.step),
            no_samples: args.samples,
        },
        seed: args.seed,
        show_observations: false,
        export_json: None,
        export_csv: None,
    }
}

fn source_from_path(path: &Path) -> TextSource {
    if path.as_os_str() == "-" {
        TextSource::Stdin
    } else {
        TextSource::File(path.to_path_buf())
    }
}

/// Rewrite argv so `vocd` defaults to `vocd estimate`.
///
/// Rules:
/// - `vocd`                        -> `vocd estimate --demo`
/// - `vocd --x ...` / `vocd - ...` -> `vocd estimate --x ...`
/// - `vocd a.txt ...`              -> `vocd estimate a.txt ...` when `a.txt` exists
/// - `vocd --help/--version/-h`    -> unchanged (show top-level help/version)
/// - anything else                 -> unchanged, so clap reports unknown subcommands
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("estimate".to_string());
        argv.push("--demo".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "estimate" | "observe");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, stdin, or an existing file, treat it as "estimate" input.
    if arg1.starts_with('-') || Path::new(&arg1).is_file() {
        argv.insert(1, "estimate".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}

/// Log filter for the binary.
///
/// `RUST_LOG` (passed in as `rust_log`) is used as given; invalid directives are
/// skipped. Without it, only warnings from this crate are shown.
pub fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    match rust_log {
        Some(directives) if !directives.trim().is_empty() => EnvFilter::builder().parse_lossy(directives),
        _ => EnvFilter::new("vocd=warn"),
    }
}
