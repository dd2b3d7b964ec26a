use crate::models::{Comparisons, MetricMap, PreviousProfile};
use crate::numeric;

/// Diffs the freshly computed metrics against a previous snapshot's
/// metrics.
///
/// Both output maps carry exactly the keys of `current`; a key the
/// previous snapshot never computed yields `None` entries. Keys that
/// only the previous snapshot had are not carried forward.
pub fn compare(current: &MetricMap, previous: &PreviousProfile) -> Comparisons {
    let mut deltas = MetricMap::new();
    let mut pct_changes = MetricMap::new();

    for (key, &value) in current {
        let prev = previous.metrics.get(key).copied().flatten();
        deltas.insert(key.clone(), numeric::delta(value, prev));
        pct_changes.insert(key.clone(), numeric::percent_change(value, prev));
    }

    Comparisons {
        previous_profile_id: previous.id,
        deltas,
        pct_changes,
    }
}
