//! Timed sprint disciplines: the 5-10-5 agility shuttle and the
//! Reaction Sprint with its two independent time series. Times are
//! all-or-nothing: a missing trial nulls the whole series.

use super::trial_fields;
use crate::models::{MetricMap, ProfileInputs, ReactionSprintInput, ScoreMap, TrialTimesInput};
use crate::numeric;

const SHUTTLE_TRIALS: usize = 3;
const SPRINT_TRIALS: usize = 3;

pub(super) fn five_ten_five(scores: &ScoreMap, inputs: &mut ProfileInputs, metrics: &mut MetricMap) {
    let trials = trial_fields(scores, "trial", SHUTTLE_TRIALS);

    // best time is the minimum
    let best = numeric::min_of_all(&trials);
    let worst = numeric::max_of_all(&trials);
    metrics.insert("five_ten_five_best_time".into(), best);
    metrics.insert("five_ten_five_avg_time".into(), numeric::mean(&trials));
    metrics.insert("five_ten_five_worst_time".into(), worst);
    metrics.insert("five_ten_five_consistency_range".into(), numeric::delta(worst, best));

    inputs.five_ten_five = Some(TrialTimesInput { trials });
}

pub(super) fn reaction_sprint(scores: &ScoreMap, inputs: &mut ProfileInputs, metrics: &mut MetricMap) {
    let reaction = trial_fields(scores, "reaction", SPRINT_TRIALS);
    let total = trial_fields(scores, "total", SPRINT_TRIALS);

    time_series("reaction_sprint_reaction", &reaction, metrics);
    time_series("reaction_sprint_total", &total, metrics);

    inputs.reaction_sprint = Some(ReactionSprintInput { reaction, total });
}

fn time_series(prefix: &str, times: &[Option<f64>], metrics: &mut MetricMap) {
    let best = numeric::min_of_all(times);
    let worst = numeric::max_of_all(times);
    metrics.insert(format!("{prefix}_best"), best);
    metrics.insert(format!("{prefix}_avg"), numeric::mean(times));
    metrics.insert(format!("{prefix}_worst"), worst);
    metrics.insert(format!("{prefix}_consistency_range"), numeric::delta(worst, best));
}
