//! Player performance profile engine.
//!
//! Pure, synchronous computation from a player's raw skill-test
//! records to an immutable profile-snapshot payload: normalize the two
//! historical score encodings, pick the latest record per discipline,
//! derive per-discipline metrics, and diff against the previous
//! snapshot. Storage and presentation live with the caller.

pub mod diff;
pub mod discipline;
pub mod error;
pub mod latest;
pub mod metrics;
pub mod models;
pub mod normalize;
pub mod numeric;
pub mod profile;

pub use discipline::Discipline;
pub use error::{EngineError, Result};
pub use models::{
    Comparisons, MetricMap, PreviousProfile, ProfileInputs, ProfileSnapshotData, ScoreMap,
    Sources, TestRecord,
};
pub use profile::compute_profile;
