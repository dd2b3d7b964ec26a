//! Per-discipline metric calculators.
//!
//! Each calculator normalizes its record's score payload, stores the
//! normalized form under its discipline key in [`ProfileInputs`], and
//! writes named metrics into the flat metric map. Metric keys are
//! globally unique strings prefixed by the discipline key.
//!
//! The strict/tolerant null-handling split is intentional and differs
//! per discipline; see each calculator for which family it uses.

mod dribbling;
mod lower_body;
mod speed;
mod stability;
mod striking;
mod touch;

use crate::discipline::Discipline;
use crate::models::{MetricMap, ProfileInputs, ScoreMap};

/// Runs the calculator for one discipline's latest record.
pub fn compute(
    discipline: Discipline,
    scores: &ScoreMap,
    inputs: &mut ProfileInputs,
    metrics: &mut MetricMap,
) {
    match discipline {
        Discipline::ShotPower => striking::shot_power(scores, inputs, metrics),
        Discipline::ServeDistance => striking::serve_distance(scores, inputs, metrics),
        Discipline::FigureEight => dribbling::figure_eight(scores, inputs, metrics),
        Discipline::PassingGates => dribbling::passing_gates(scores, inputs, metrics),
        Discipline::OneVOne => dribbling::one_v_one(scores, inputs, metrics),
        Discipline::Juggling => touch::juggling(scores, inputs, metrics),
        Discipline::SkillMoves => touch::skill_moves(scores, inputs, metrics),
        Discipline::FiveTenFive => speed::five_ten_five(scores, inputs, metrics),
        Discipline::ReactionSprint => speed::reaction_sprint(scores, inputs, metrics),
        Discipline::SingleLegHop => lower_body::single_leg_hop(scores, inputs, metrics),
        Discipline::DoubleLegJumps => lower_body::double_leg_jumps(scores, inputs, metrics),
        Discipline::AnkleDorsiflexion => stability::ankle_dorsiflexion(scores, inputs, metrics),
        Discipline::CorePlank => stability::core_plank(scores, inputs, metrics),
    }
}

/// Collects `<prefix>_1 ..= <prefix>_<count>` fixed trial fields.
fn trial_fields(scores: &ScoreMap, prefix: &str, count: usize) -> Vec<Option<f64>> {
    (1..=count)
        .map(|i| crate::normalize::num_field(scores, &format!("{prefix}_{i}")))
        .collect()
}

/// The asymmetry between two paired maxima, measured against whichever
/// side is larger. `None` when either side has no value.
fn larger_side_asymmetry_pct(left: Option<f64>, right: Option<f64>) -> Option<f64> {
    use crate::numeric::safe_asymmetry_pct;
    match (left, right) {
        (Some(l), Some(r)) if l >= r => safe_asymmetry_pct(Some(l), Some(r)),
        (Some(l), Some(r)) => safe_asymmetry_pct(Some(r), Some(l)),
        _ => None,
    }
}
