//! Ball-touch disciplines: Juggling attempts and the named-entry Skill
//! Moves test.

use super::trial_fields;
use crate::models::{JugglingInput, MetricMap, MovesInput, ProfileInputs, ScoreMap};
use crate::normalize;
use crate::numeric;

const JUGGLING_ATTEMPTS: usize = 4;

/// Juggling mixes the families: the best attempt tolerates gaps, every
/// other aggregate is strict.
pub(super) fn juggling(scores: &ScoreMap, inputs: &mut ProfileInputs, metrics: &mut MetricMap) {
    let attempts = trial_fields(scores, "attempt", JUGGLING_ATTEMPTS);

    metrics.insert("juggling_best_attempt".into(), numeric::max_of(&attempts));
    metrics.insert("juggling_top2_sum".into(), numeric::sum_top2_of_four(&attempts));
    metrics.insert("juggling_avg_attempts".into(), numeric::mean(&attempts));
    metrics.insert("juggling_total_attempts".into(), numeric::sum_of_all(&attempts));
    metrics.insert(
        "juggling_consistency_range".into(),
        numeric::delta(numeric::max_of_all(&attempts), numeric::min_of_all(&attempts)),
    );

    inputs.juggling = Some(JugglingInput { attempts });
}

pub(super) fn skill_moves(scores: &ScoreMap, inputs: &mut ProfileInputs, metrics: &mut MetricMap) {
    let moves = normalize::move_entries(scores);
    let ratings: Vec<Option<f64>> = moves.iter().map(|entry| entry.score).collect();

    let best = numeric::max_of_all(&ratings);
    let worst = numeric::min_of_all(&ratings);
    metrics.insert("skill_moves_avg_rating".into(), numeric::mean(&ratings));
    metrics.insert("skill_moves_total_rating".into(), numeric::sum_of_all(&ratings));
    metrics.insert("skill_moves_best_rating".into(), best);
    metrics.insert("skill_moves_worst_rating".into(), worst);
    metrics.insert("skill_moves_rating_range".into(), numeric::delta(best, worst));

    inputs.skill_moves = Some(MovesInput { moves });
}
