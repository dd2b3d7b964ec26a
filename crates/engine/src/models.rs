use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::normalize::MoveEntry;

/// Free-form score payload as authored, keyed by field name.
pub type ScoreMap = serde_json::Map<String, serde_json::Value>;

/// Flat map of metric name to nullable value. A `None` value is a
/// present-but-null metric; an absent discipline contributes no keys.
pub type MetricMap = BTreeMap<String, Option<f64>>;

/// One recorded evaluation event for a player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestRecord {
    pub id: Uuid,
    pub player_id: Uuid,
    pub test_name: String,
    /// Logical date of the evaluation, not the entry time.
    pub test_date: NaiveDate,
    pub scores: ScoreMap,
    /// Entry timestamp, used only to break same-day ties.
    pub created_at: DateTime<Utc>,
}

/// The prior snapshot reference the caller supplies for trend
/// comparison: its id and its computed metrics, nothing more.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviousProfile {
    pub id: Uuid,
    pub metrics: MetricMap,
}

/// The full payload of one profile snapshot, persisted append-only by
/// the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSnapshotData {
    pub computed_at: DateTime<Utc>,
    pub sources: Sources,
    /// Verbatim copy of every input test record, kept for audit and
    /// for downstream consumers that ground on raw data.
    pub raw_tests: Vec<TestRecord>,
    pub inputs: ProfileInputs,
    pub metrics: MetricMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparisons: Option<Comparisons>,
}

/// Provenance of a computation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sources {
    pub tests_total: usize,
    /// Discipline name to the id of the record selected as latest.
    pub latest_test_refs: BTreeMap<String, Uuid>,
}

/// Per-key trend of the new metrics against the previous snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparisons {
    pub previous_profile_id: Uuid,
    pub deltas: MetricMap,
    pub pct_changes: MetricMap,
}

/// Normalized per-discipline inputs. A discipline with no latest test
/// record stays `None` and is omitted from the serialized payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileInputs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shot_power: Option<PairedTrialsInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serve_distance: Option<PairedTrialsInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub figure8: Option<FigureEightInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passing_gates: Option<PassingGatesInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_v_one: Option<RoundsInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub juggling: Option<JugglingInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skill_moves: Option<MovesInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub five_ten_five: Option<TrialTimesInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reaction_sprint: Option<ReactionSprintInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub single_leg_hop: Option<SingleLegHopInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub double_leg_jumps: Option<DoubleLegJumpsInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ankle_dorsiflexion: Option<AnkleDorsiflexionInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub core_plank: Option<CorePlankInput>,
}

/// Four strong-side and four weak-side trials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairedTrialsInput {
    pub strong: Vec<Option<f64>>,
    pub weak: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureEightInput {
    pub strong: Option<f64>,
    pub weak: Option<f64>,
    pub both: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassingGatesInput {
    pub strong_hits: Option<f64>,
    pub weak_hits: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundsInput {
    pub rounds: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JugglingInput {
    pub attempts: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovesInput {
    pub moves: Vec<MoveEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialTimesInput {
    pub trials: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionSprintInput {
    pub reaction: Vec<Option<f64>>,
    pub total: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleLegHopInput {
    pub left: Vec<Option<f64>>,
    pub right: Vec<Option<f64>>,
}

/// Cumulative jump counts at the 10s, 20s and 30s marks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoubleLegJumpsInput {
    pub count_10s: Option<f64>,
    pub count_20s: Option<f64>,
    pub count_30s: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnkleDorsiflexionInput {
    pub left: Option<f64>,
    pub right: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorePlankInput {
    pub hold_seconds: Option<f64>,
    pub good_form: Option<f64>,
}
