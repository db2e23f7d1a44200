//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the fitting code stays clean and testable
//! - output changes are localized

use crate::app::pipeline::{TextEstimate, TextObservations};
use crate::domain::{Observation, RunConfig, TrialResult};
use crate::models::predicted_ttr;

/// Format the run header plus one block per text.
pub fn format_run_summary(texts: &[TextEstimate], config: &RunConfig) -> String {
    let mut out = String::new();

    out.push_str("=== vocd - lexical diversity (D) ===\n");
    out.push_str(&format_params(config));
    out.push('\n');

    for text in texts {
        out.push_str(&format_text_estimate(text, config.show_observations));
        out.push('\n');
    }

    out
}

/// Format the estimate for one text: header line, per-trial diagnostics, optional tables.
pub fn format_text_estimate(text: &TextEstimate, show_observations: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} | tokens={} types={} seed={}\n",
        text.source, text.stats.tokens, text.stats.types, text.seed
    ));
    out.push_str(&format_trials(&text.estimate.trials));
    out.push_str(&format!("D = {:.2}\n", text.estimate.d));

    if show_observations {
        for trial in &text.estimate.trials {
            out.push_str(&format!("\nTrial {} observations:\n", trial.index));
            out.push_str(&format_observations(&trial.observations, Some(trial.d_min)));
        }
    }

    out
}

/// Per-trial diagnostics table.
pub fn format_trials(trials: &[TrialResult]) -> String {
    let mut out = String::new();
    push_line(
        &mut out,
        format!(
            "{:<6} {:>10} {:>10} {:>9} {:>10} {:>12}",
            "trial", "d_av", "d_std", "discard", "d_min", "residual"
        ),
    );
    push_line(
        &mut out,
        format!("{:-<6} {:-<10} {:-<10} {:-<9} {:-<10} {:-<12}", "", "", "", "", "", ""),
    );
    for t in trials {
        push_line(
            &mut out,
            format!(
                "{:<6} {:>10.3} {:>10.3} {:>9} {:>10.3} {:>12.3e}",
                t.index, t.seed.d_av, t.seed.d_std, t.seed.discarded, t.d_min, t.min_residual
            ),
        );
    }
    out
}

/// Observation table; with `fitted_d`, adds the curve's TTR at each size.
pub fn format_observations(rows: &[Observation], fitted_d: Option<f64>) -> String {
    let mut out = String::new();
    push_line(
        &mut out,
        format!("{:>4} {:>8} {:>8} {:>10} {:>8}", "N", "TTR", "SD", "D", "fit"),
    );
    push_line(&mut out, format!("{:->4} {:->8} {:->8} {:->10} {:->8}", "", "", "", "", ""));

    for o in rows {
        let d = o.d.map(|d| format!("{d:.3}")).unwrap_or_else(|| "-".to_string());
        let fit = fitted_d
            .map(|d| format!("{:.4}", predicted_ttr(d, o.n as f64)))
            .unwrap_or_default();
        push_line(
            &mut out,
            format!("{:>4} {:>8.4} {:>8.4} {:>10} {:>8}", o.n, o.ttr, o.sd, d, fit),
        );
    }
    out
}

/// Format the output of the `observe` command.
pub fn format_observe(texts: &[TextObservations], config: &RunConfig) -> String {
    let mut out = String::new();

    out.push_str("=== vocd - observations ===\n");
    out.push_str(&format_params(config));

    for text in texts {
        out.push('\n');
        out.push_str(&format!(
            "{} | tokens={} types={} seed={}\n",
            text.source, text.stats.tokens, text.stats.types, text.seed
        ));
        out.push_str(&format_observations(&text.observations, None));
        match &text.seed_stats {
            Ok(s) => out.push_str(&format!(
                "d_av={:.3} d_std={:.3} discarded={}/{}\n",
                s.d_av, s.d_std, s.discarded, s.total
            )),
            Err(e) => out.push_str(&format!("(no seed) {e}\n")),
        }
    }

    out
}

fn format_params(config: &RunConfig) -> String {
    let r = config.params.range;
    format!(
        "Sizes: N={}..={} step {} | trials={} | segments/size={}\n",
        r.from,
        r.to,
        r.step,
        crate::domain::TRIALS,
        crate::domain::SEGMENTS_PER_SIZE
    )
}

fn push_line(out: &mut String, line: String) {
    out.push_str(line.trim_end());
    out.push('\n');
}
