//! Lower-body power disciplines: the Single Leg Hop with three trials
//! per side and the Double Leg Jumps endurance test with cumulative
//! counts at the 10s/20s/30s marks.

use super::{larger_side_asymmetry_pct, trial_fields};
use crate::models::{DoubleLegJumpsInput, MetricMap, ProfileInputs, ScoreMap, SingleLegHopInput};
use crate::normalize::num_field;
use crate::numeric;

const HOP_TRIALS: usize = 3;

pub(super) fn single_leg_hop(scores: &ScoreMap, inputs: &mut ProfileInputs, metrics: &mut MetricMap) {
    let left = trial_fields(scores, "left", HOP_TRIALS);
    let right = trial_fields(scores, "right", HOP_TRIALS);

    let left_max = numeric::max_of(&left);
    let right_max = numeric::max_of(&right);
    metrics.insert("single_leg_hop_left_max".into(), left_max);
    metrics.insert("single_leg_hop_right_max".into(), right_max);
    metrics.insert("single_leg_hop_left_avg".into(), numeric::mean(&left));
    metrics.insert("single_leg_hop_right_avg".into(), numeric::mean(&right));
    // asymmetry is measured against whichever leg jumped further
    metrics.insert(
        "single_leg_hop_asymmetry_pct".into(),
        larger_side_asymmetry_pct(left_max, right_max),
    );
    metrics.insert(
        "single_leg_hop_left_consistency_range".into(),
        numeric::delta(numeric::max_of_all(&left), numeric::min_of_all(&left)),
    );
    metrics.insert(
        "single_leg_hop_right_consistency_range".into(),
        numeric::delta(numeric::max_of_all(&right), numeric::min_of_all(&right)),
    );

    inputs.single_leg_hop = Some(SingleLegHopInput { left, right });
}

pub(super) fn double_leg_jumps(scores: &ScoreMap, inputs: &mut ProfileInputs, metrics: &mut MetricMap) {
    let count_10s = num_field(scores, "count_10s");
    let count_20s = num_field(scores, "count_20s");
    let count_30s = num_field(scores, "count_30s");

    let first = count_10s;
    let mid = numeric::delta(count_20s, count_10s);
    let last = numeric::delta(count_30s, count_20s);
    metrics.insert("double_leg_jumps_first_10s_count".into(), first);
    metrics.insert("double_leg_jumps_mid_10s_count".into(), mid);
    metrics.insert("double_leg_jumps_last_10s_count".into(), last);
    // dropoff relative to the first window, same guard as asymmetry
    metrics.insert(
        "double_leg_jumps_dropoff_pct".into(),
        numeric::safe_asymmetry_pct(first, last),
    );

    inputs.double_leg_jumps = Some(DoubleLegJumpsInput {
        count_10s,
        count_20s,
        count_30s,
    });
}

#[cfg(test)]
mod tests {
    use crate::discipline::Discipline;
    use crate::metrics::compute;
    use crate::models::{MetricMap, ProfileInputs};
    use serde_json::json;

    fn run(discipline: Discipline, value: serde_json::Value) -> (ProfileInputs, MetricMap) {
        let mut inputs = ProfileInputs::default();
        let mut metrics = MetricMap::new();
        compute(
            discipline,
            value.as_object().unwrap(),
            &mut inputs,
            &mut metrics,
        );
        (inputs, metrics)
    }

    #[test]
    fn test_single_leg_hop() {
        let (_, metrics) = run(
            Discipline::SingleLegHop,
            json!({
                "left_1": 140, "left_2": 150, "left_3": 145,
                "right_1": 120, "right_2": 125, "right_3": 118,
            }),
        );

        assert_eq!(metrics["single_leg_hop_left_max"], Some(150.0));
        assert_eq!(metrics["single_leg_hop_right_max"], Some(125.0));
        assert_eq!(metrics["single_leg_hop_left_avg"], Some(145.0));
        assert_eq!(
            metrics["single_leg_hop_asymmetry_pct"],
            Some((150.0 - 125.0) / 150.0 * 100.0)
        );
        assert_eq!(metrics["single_leg_hop_left_consistency_range"], Some(10.0));
        assert_eq!(metrics["single_leg_hop_right_consistency_range"], Some(7.0));
    }

    #[test]
    fn test_single_leg_hop_asymmetry_follows_larger_side() {
        let (_, metrics) = run(
            Discipline::SingleLegHop,
            json!({
                "left_1": 120, "left_2": 118, "left_3": 121,
                "right_1": 150, "right_2": 148, "right_3": 145,
            }),
        );
        assert_eq!(
            metrics["single_leg_hop_asymmetry_pct"],
            Some((150.0 - 121.0) / 150.0 * 100.0)
        );
    }

    #[test]
    fn test_single_leg_hop_tolerant_max_strict_avg() {
        let (_, metrics) = run(
            Discipline::SingleLegHop,
            json!({
                "left_1": 140, "left_3": 145,
                "right_1": 120, "right_2": 125, "right_3": 118,
            }),
        );

        assert_eq!(metrics["single_leg_hop_left_max"], Some(145.0));
        assert_eq!(metrics["single_leg_hop_left_avg"], None);
        assert_eq!(metrics["single_leg_hop_left_consistency_range"], None);
        assert_eq!(metrics["single_leg_hop_right_avg"], Some(121.0));
        // asymmetry uses the tolerant maxima, so it survives the gap
        assert_eq!(
            metrics["single_leg_hop_asymmetry_pct"],
            Some((145.0 - 125.0) / 145.0 * 100.0)
        );
    }

    #[test]
    fn test_double_leg_jumps_windows() {
        let (inputs, metrics) = run(
            Discipline::DoubleLegJumps,
            json!({ "count_10s": 20, "count_20s": 35, "count_30s": 45 }),
        );

        assert_eq!(metrics["double_leg_jumps_first_10s_count"], Some(20.0));
        assert_eq!(metrics["double_leg_jumps_mid_10s_count"], Some(15.0));
        assert_eq!(metrics["double_leg_jumps_last_10s_count"], Some(10.0));
        assert_eq!(metrics["double_leg_jumps_dropoff_pct"], Some(50.0));
        assert_eq!(inputs.double_leg_jumps.unwrap().count_20s, Some(35.0));
    }

    #[test]
    fn test_double_leg_jumps_missing_checkpoint() {
        let (_, metrics) = run(
            Discipline::DoubleLegJumps,
            json!({ "count_10s": 20, "count_30s": 45 }),
        );

        assert_eq!(metrics["double_leg_jumps_first_10s_count"], Some(20.0));
        assert_eq!(metrics["double_leg_jumps_mid_10s_count"], None);
        assert_eq!(metrics["double_leg_jumps_last_10s_count"], None);
        assert_eq!(metrics["double_leg_jumps_dropoff_pct"], None);
    }
}
