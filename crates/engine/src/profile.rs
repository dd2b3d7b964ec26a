//! Profile assembler: one pass from raw test records to a snapshot
//! payload.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::diff;
use crate::discipline::Discipline;
use crate::latest::GroupedRecords;
use crate::metrics;
use crate::models::{
    MetricMap, PreviousProfile, ProfileInputs, ProfileSnapshotData, Sources, TestRecord,
};

/// Computes a new profile snapshot payload from a player's complete
/// test-record set.
///
/// The caller fetches the records and the most recent prior snapshot
/// (if any) before invoking this; the engine itself performs no I/O
/// and never fails. Exactly one latest record per discipline feeds
/// that discipline's calculator; disciplines with no record contribute
/// nothing. Records with an unrecognized test name are kept in
/// `raw_tests` but produce no metrics.
pub fn compute_profile(
    records: &[TestRecord],
    computed_at: DateTime<Utc>,
    previous: Option<&PreviousProfile>,
) -> ProfileSnapshotData {
    let grouped = GroupedRecords::from_records(records);

    let mut inputs = ProfileInputs::default();
    let mut metrics_map = MetricMap::new();
    let mut latest_test_refs = BTreeMap::new();

    for (test_name, record) in grouped.latest_per_group() {
        let Some(discipline) = Discipline::from_name(test_name) else {
            warn!(test_name, "skipping test records with unknown discipline");
            continue;
        };
        metrics::compute(discipline, &record.scores, &mut inputs, &mut metrics_map);
        latest_test_refs.insert(discipline.as_str().to_string(), record.id);
    }

    let comparisons = previous.map(|prev| diff::compare(&metrics_map, prev));

    info!(
        tests_total = records.len(),
        disciplines = latest_test_refs.len(),
        metric_count = metrics_map.len(),
        compared = comparisons.is_some(),
        "assembled profile snapshot"
    );

    ProfileSnapshotData {
        computed_at,
        sources: Sources {
            tests_total: records.len(),
            latest_test_refs,
        },
        raw_tests: records.to_vec(),
        inputs,
        metrics: metrics_map,
        comparisons,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;
    use uuid::Uuid;

    fn record(test_name: &str, test_date: &str, created_at: &str, scores: serde_json::Value) -> TestRecord {
        TestRecord {
            id: Uuid::new_v4(),
            player_id: Uuid::new_v4(),
            test_name: test_name.to_string(),
            test_date: test_date.parse::<NaiveDate>().unwrap(),
            scores: scores.as_object().unwrap().clone(),
            created_at: created_at.parse().unwrap(),
        }
    }

    fn now() -> DateTime<Utc> {
        "2024-03-01T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_empty_record_set_yields_empty_payload() {
        let snapshot = compute_profile(&[], now(), None);

        assert_eq!(snapshot.computed_at, now());
        assert_eq!(snapshot.sources.tests_total, 0);
        assert!(snapshot.sources.latest_test_refs.is_empty());
        assert!(snapshot.raw_tests.is_empty());
        assert!(snapshot.metrics.is_empty());
        assert!(snapshot.comparisons.is_none());
        assert!(snapshot.inputs.juggling.is_none());
    }

    #[test]
    fn test_only_latest_record_per_discipline_feeds_metrics() {
        let records = vec![
            record(
                "1v1",
                "2024-01-10",
                "2024-01-10T10:00:00Z",
                json!({ "rounds": [1, 1, 1, 1] }),
            ),
            record(
                "1v1",
                "2024-02-01",
                "2024-02-01T10:00:00Z",
                json!({ "rounds": [3, 2, 3, 1] }),
            ),
        ];

        let snapshot = compute_profile(&records, now(), None);

        // metrics come from the February record alone, never averaged
        assert_eq!(snapshot.metrics["one_v_one_total_score"], Some(9.0));
        assert_eq!(snapshot.sources.latest_test_refs["1v1"], records[1].id);
        assert_eq!(snapshot.sources.tests_total, 2);
        assert_eq!(snapshot.raw_tests.len(), 2);
    }

    #[test]
    fn test_unknown_discipline_is_kept_raw_but_contributes_nothing() {
        let records = vec![
            record(
                "Juggling",
                "2024-01-10",
                "2024-01-10T10:00:00Z",
                json!({ "attempt_1": 12, "attempt_2": 30, "attempt_3": 8, "attempt_4": 25 }),
            ),
            record(
                "Underwater Basket Weaving",
                "2024-01-11",
                "2024-01-11T10:00:00Z",
                json!({ "depth": 3 }),
            ),
        ];

        let snapshot = compute_profile(&records, now(), None);

        assert_eq!(snapshot.raw_tests.len(), 2);
        assert_eq!(snapshot.sources.latest_test_refs.len(), 1);
        assert!(snapshot.metrics.keys().all(|k| k.starts_with("juggling_")));
    }

    #[test]
    fn test_comparisons_present_only_with_previous_snapshot() {
        let records = vec![record(
            "Core Plank",
            "2024-02-01",
            "2024-02-01T10:00:00Z",
            json!({ "hold_seconds": 90, "good_form": 1 }),
        )];

        let without = compute_profile(&records, now(), None);
        assert!(without.comparisons.is_none());

        let previous = PreviousProfile {
            id: Uuid::new_v4(),
            metrics: [("core_plank_hold_seconds".to_string(), Some(60.0))]
                .into_iter()
                .collect(),
        };
        let with = compute_profile(&records, now(), Some(&previous));
        let comparisons = with.comparisons.unwrap();

        assert_eq!(comparisons.previous_profile_id, previous.id);
        // every metric key has a (possibly null) comparison entry
        for key in with.metrics.keys() {
            assert!(comparisons.deltas.contains_key(key));
            assert!(comparisons.pct_changes.contains_key(key));
        }
        assert_eq!(comparisons.deltas["core_plank_hold_seconds"], Some(30.0));
        assert_eq!(comparisons.pct_changes["core_plank_hold_seconds"], Some(50.0));
        assert_eq!(comparisons.deltas["core_plank_good_form"], None);
    }

    #[test]
    fn test_inputs_are_stored_per_discipline() {
        let records = vec![
            record(
                "Shot Power",
                "2024-02-01",
                "2024-02-01T10:00:00Z",
                json!({
                    "strong_1": 60, "strong_2": 62, "strong_3": 58, "strong_4": 64,
                    "weak_1": 40, "weak_2": 42, "weak_3": 44, "weak_4": 42,
                }),
            ),
            record(
                "Skill Moves",
                "2024-02-01",
                "2024-02-01T10:00:00Z",
                json!({ "move_1": 4, "move_name_1": "Stepover" }),
            ),
        ];

        let snapshot = compute_profile(&records, now(), None);

        let trials = snapshot.inputs.shot_power.unwrap();
        assert_eq!(trials.strong, vec![Some(60.0), Some(62.0), Some(58.0), Some(64.0)]);
        let moves = snapshot.inputs.skill_moves.unwrap();
        assert_eq!(moves.moves[0].name, "Stepover");
        assert!(snapshot.inputs.one_v_one.is_none());
    }

    #[test]
    fn test_snapshot_serialization_omits_absent_sections() {
        let snapshot = compute_profile(&[], now(), None);
        let json = serde_json::to_value(&snapshot).unwrap();

        assert!(json.get("comparisons").is_none());
        assert_eq!(json["inputs"], json!({}));
        assert_eq!(json["sources"]["tests_total"], json!(0));
    }

    #[test]
    fn test_null_metrics_serialize_as_present_nulls() {
        let records = vec![record(
            "Figure 8",
            "2024-02-01",
            "2024-02-01T10:00:00Z",
            json!({ "weak": 9 }),
        )];
        let snapshot = compute_profile(&records, now(), None);
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["metrics"]["figure8_weak_count"], json!(9.0));
        // strong was never recorded: the key is present with null
        assert_eq!(json["metrics"]["figure8_strong_count"], json!(null));
    }
}
