//! Mobility and core disciplines: Ankle Dorsiflexion (measured per
//! side, converted to centimeters) and the Core Plank hold.

use super::larger_side_asymmetry_pct;
use crate::models::{AnkleDorsiflexionInput, CorePlankInput, MetricMap, ProfileInputs, ScoreMap};
use crate::normalize::num_field;
use crate::numeric;

const CM_PER_INCH: f64 = 2.54;

pub(super) fn ankle_dorsiflexion(
    scores: &ScoreMap,
    inputs: &mut ProfileInputs,
    metrics: &mut MetricMap,
) {
    let left = num_field(scores, "left");
    let right = num_field(scores, "right");

    let left_cm = left.map(|v| v * CM_PER_INCH);
    let right_cm = right.map(|v| v * CM_PER_INCH);
    metrics.insert("ankle_dorsiflexion_left_cm".into(), left_cm);
    metrics.insert("ankle_dorsiflexion_right_cm".into(), right_cm);
    metrics.insert(
        "ankle_dorsiflexion_avg_cm".into(),
        numeric::mean(&[left_cm, right_cm]),
    );
    metrics.insert(
        "ankle_dorsiflexion_asymmetry_pct".into(),
        larger_side_asymmetry_pct(left_cm, right_cm),
    );
    metrics.insert(
        "ankle_dorsiflexion_left_right_diff_cm".into(),
        numeric::delta(left_cm, right_cm),
    );

    inputs.ankle_dorsiflexion = Some(AnkleDorsiflexionInput { left, right });
}

pub(super) fn core_plank(scores: &ScoreMap, inputs: &mut ProfileInputs, metrics: &mut MetricMap) {
    let hold_seconds = num_field(scores, "hold_seconds");
    let good_form = num_field(scores, "good_form");

    metrics.insert("core_plank_hold_seconds".into(), hold_seconds);
    metrics.insert("core_plank_good_form".into(), good_form);
    // a hold without good form counts for nothing
    let hold_good_form = match good_form {
        Some(flag) if flag != 0.0 => hold_seconds,
        _ => Some(0.0),
    };
    metrics.insert("core_plank_hold_good_form_seconds".into(), hold_good_form);

    inputs.core_plank = Some(CorePlankInput {
        hold_seconds,
        good_form,
    });
}
