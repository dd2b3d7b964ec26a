//! Collapses the two historical score encodings into one canonical shape.
//!
//! Round-based and named-entry disciplines exist in two encodings: the
//! current array form (`"rounds"` / `"moves"`) and the legacy flat form
//! with indexed keys (`round_3`, `move_2` + `move_name_2`). The array
//! form wins whenever it is present. Every other discipline carries a
//! small fixed set of named fields coerced one by one via `num_field`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::ScoreMap;
use crate::numeric;

/// Defensive size limit on round lists.
pub const MAX_ROUNDS: usize = 50;
/// Defensive size limit on named-entry lists.
pub const MAX_MOVES: usize = 50;

const ROUNDS_FIELD: &str = "rounds";
const ROUND_KEY_PREFIX: &str = "round_";
const MOVES_FIELD: &str = "moves";
const MOVE_KEY_PREFIX: &str = "move_";
const MOVE_NAME_KEY_PREFIX: &str = "move_name_";

/// One named sub-skill entry with its rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveEntry {
    pub name: String,
    pub score: Option<f64>,
}

/// Coerces a single fixed score field.
pub fn num_field(scores: &ScoreMap, key: &str) -> Option<f64> {
    scores.get(key).and_then(numeric::to_finite)
}

/// Normalizes a round-based payload into an ordered list of nullable
/// scores. Legacy indices that are absent produce no element.
pub fn round_scores(scores: &ScoreMap) -> Vec<Option<f64>> {
    if let Some(Value::Array(rounds)) = scores.get(ROUNDS_FIELD) {
        return rounds.iter().take(MAX_ROUNDS).map(numeric::to_finite).collect();
    }

    let mut indexed: Vec<(u32, Option<f64>)> = scores
        .iter()
        .filter_map(|(key, value)| {
            let suffix = key.strip_prefix(ROUND_KEY_PREFIX)?;
            let index: u32 = suffix.parse().ok()?;
            Some((index, numeric::to_finite(value)))
        })
        .collect();
    indexed.sort_by_key(|(index, _)| *index);
    indexed
        .into_iter()
        .take(MAX_ROUNDS)
        .map(|(_, score)| score)
        .collect()
}

/// Normalizes a named-entry payload into an ordered list of
/// `MoveEntry` values.
///
/// In the legacy form, an entry whose name is absent/blank and whose
/// score does not coerce is dropped entirely; a one-sided entry is
/// kept.
pub fn move_entries(scores: &ScoreMap) -> Vec<MoveEntry> {
    if let Some(Value::Array(moves)) = scores.get(MOVES_FIELD) {
        return moves
            .iter()
            .take(MAX_MOVES)
            .map(|entry| {
                let name = entry
                    .get("name")
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|n| !n.is_empty())
                    .unwrap_or("Move")
                    .to_string();
                let score = entry.get("score").and_then(numeric::to_finite);
                MoveEntry { name, score }
            })
            .collect();
    }

    let mut indexed: Vec<(u32, MoveEntry)> = Vec::new();
    for (key, value) in scores {
        let Some(suffix) = key.strip_prefix(MOVE_KEY_PREFIX) else {
            continue;
        };
        // `move_name_<n>` keys also match the score prefix; the numeric
        // parse rejects them.
        let Ok(index) = suffix.parse::<u32>() else {
            continue;
        };
        let score = numeric::to_finite(value);
        let name = scores
            .get(&format!("{MOVE_NAME_KEY_PREFIX}{index}"))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|n| !n.is_empty());
        match name {
            Some(name) => indexed.push((index, MoveEntry { name: name.to_string(), score })),
            None if score.is_none() => {}
            None => indexed.push((
                index,
                MoveEntry {
                    name: format!("Move {index}"),
                    score,
                },
            )),
        }
    }
    indexed.sort_by_key(|(index, _)| *index);
    indexed
        .into_iter()
        .take(MAX_MOVES)
        .map(|(_, entry)| entry)
        .collect()
}
