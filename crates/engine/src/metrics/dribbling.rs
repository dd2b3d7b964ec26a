//! Ball-carrying disciplines: Figure 8 loop counts, Passing Gates hit
//! counts, and the round-based 1v1 test.

use crate::models::{FigureEightInput, MetricMap, PassingGatesInput, ProfileInputs, RoundsInput, ScoreMap};
use crate::normalize::{self, num_field};
use crate::numeric;

pub(super) fn figure_eight(scores: &ScoreMap, inputs: &mut ProfileInputs, metrics: &mut MetricMap) {
    let strong = num_field(scores, "strong");
    let weak = num_field(scores, "weak");
    let both = num_field(scores, "both");

    metrics.insert("figure8_strong_count".into(), strong);
    metrics.insert("figure8_weak_count".into(), weak);
    metrics.insert("figure8_both_count".into(), both);
    metrics.insert(
        "figure8_weak_strong_ratio".into(),
        numeric::safe_ratio(weak, strong),
    );
    metrics.insert(
        "figure8_both_strong_ratio".into(),
        numeric::safe_ratio(both, strong),
    );
    metrics.insert(
        "figure8_asymmetry_pct".into(),
        numeric::safe_asymmetry_pct(strong, weak),
    );

    inputs.figure8 = Some(FigureEightInput { strong, weak, both });
}

pub(super) fn passing_gates(scores: &ScoreMap, inputs: &mut ProfileInputs, metrics: &mut MetricMap) {
    let strong_hits = num_field(scores, "strong_hits");
    let weak_hits = num_field(scores, "weak_hits");
    let total_hits = numeric::sum_of_all(&[strong_hits, weak_hits]);

    metrics.insert("passing_gates_strong_hits".into(), strong_hits);
    metrics.insert("passing_gates_weak_hits".into(), weak_hits);
    metrics.insert("passing_gates_total_hits".into(), total_hits);
    metrics.insert(
        "passing_gates_weak_strong_ratio".into(),
        numeric::safe_ratio(weak_hits, strong_hits),
    );
    metrics.insert(
        "passing_gates_asymmetry_pct".into(),
        numeric::safe_asymmetry_pct(strong_hits, weak_hits),
    );
    metrics.insert(
        "passing_gates_weak_share_pct".into(),
        numeric::safe_ratio(weak_hits, total_hits).map(|share| share * 100.0),
    );

    inputs.passing_gates = Some(PassingGatesInput { strong_hits, weak_hits });
}

/// 1v1 uses the strict family throughout: one unrecorded round nulls
/// every aggregate.
pub(super) fn one_v_one(scores: &ScoreMap, inputs: &mut ProfileInputs, metrics: &mut MetricMap) {
    let rounds = normalize::round_scores(scores);

    let best = numeric::max_of_all(&rounds);
    let worst = numeric::min_of_all(&rounds);
    metrics.insert("one_v_one_avg_score".into(), numeric::mean(&rounds));
    metrics.insert("one_v_one_total_score".into(), numeric::sum_of_all(&rounds));
    metrics.insert("one_v_one_best_round".into(), best);
    metrics.insert("one_v_one_worst_round".into(), worst);
    metrics.insert("one_v_one_consistency_range".into(), numeric::delta(best, worst));

    inputs.one_v_one = Some(RoundsInput { rounds });
}
