//! Shot Power and Serve Distance: four strong-foot and four weak-foot
//! trials, same metric pattern with different key prefixes.
//!
//! Averages are strict (one missing trial nulls the average) while the
//! per-foot maxima tolerate gaps; the asymmetry and ratio metrics
//! inherit the strictness of the averages they build on.

use super::trial_fields;
use crate::models::{MetricMap, PairedTrialsInput, ProfileInputs, ScoreMap};
use crate::numeric;

const TRIALS_PER_FOOT: usize = 4;

pub(super) fn shot_power(scores: &ScoreMap, inputs: &mut ProfileInputs, metrics: &mut MetricMap) {
    let trials = paired_trials(scores);
    paired_metrics("shot_power", &trials, metrics);
    inputs.shot_power = Some(trials);
}

pub(super) fn serve_distance(
    scores: &ScoreMap,
    inputs: &mut ProfileInputs,
    metrics: &mut MetricMap,
) {
    let trials = paired_trials(scores);
    paired_metrics("serve_distance", &trials, metrics);
    inputs.serve_distance = Some(trials);
}

fn paired_trials(scores: &ScoreMap) -> PairedTrialsInput {
    PairedTrialsInput {
        strong: trial_fields(scores, "strong", TRIALS_PER_FOOT),
        weak: trial_fields(scores, "weak", TRIALS_PER_FOOT),
    }
}

fn paired_metrics(prefix: &str, trials: &PairedTrialsInput, metrics: &mut MetricMap) {
    let strong_avg = numeric::mean(&trials.strong);
    let weak_avg = numeric::mean(&trials.weak);
    let strong_max = numeric::max_of(&trials.strong);
    let weak_max = numeric::max_of(&trials.weak);

    metrics.insert(format!("{prefix}_strong_avg"), strong_avg);
    metrics.insert(format!("{prefix}_weak_avg"), weak_avg);
    metrics.insert(format!("{prefix}_strong_max"), strong_max);
    metrics.insert(format!("{prefix}_weak_max"), weak_max);
    metrics.insert(
        format!("{prefix}_weak_strong_ratio"),
        numeric::safe_ratio(weak_avg, strong_avg),
    );
    metrics.insert(
        format!("{prefix}_asymmetry_pct"),
        numeric::safe_asymmetry_pct(strong_avg, weak_avg),
    );
    metrics.insert(
        format!("{prefix}_max_asymmetry_pct"),
        numeric::safe_asymmetry_pct(strong_max, weak_max),
    );
}
