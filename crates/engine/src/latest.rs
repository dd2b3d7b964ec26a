use std::collections::BTreeMap;

use crate::models::TestRecord;

/// A player's test records grouped by discipline name, each group
/// sorted newest first.
///
/// Ordering within a group is a deterministic total order: `test_date`
/// descending, then `created_at` descending. Any remaining ties keep
/// their input order (stable sort).
pub struct GroupedRecords<'a> {
    groups: BTreeMap<&'a str, Vec<&'a TestRecord>>,
}

impl<'a> GroupedRecords<'a> {
    pub fn from_records(records: &'a [TestRecord]) -> Self {
        let mut groups: BTreeMap<&str, Vec<&TestRecord>> = BTreeMap::new();
        for record in records {
            groups.entry(record.test_name.as_str()).or_default().push(record);
        }
        for group in groups.values_mut() {
            group.sort_by(|a, b| {
                b.test_date
                    .cmp(&a.test_date)
                    .then_with(|| b.created_at.cmp(&a.created_at))
            });
        }
        Self { groups }
    }

    /// The single latest record for a discipline name, if any exists.
    pub fn latest(&self, test_name: &str) -> Option<&'a TestRecord> {
        self.groups.get(test_name).and_then(|group| group.first().copied())
    }

    /// Iterates the latest record of every discipline name present.
    pub fn latest_per_group(&self) -> impl Iterator<Item = (&'a str, &'a TestRecord)> + '_ {
        self.groups
            .iter()
            .filter_map(|(name, group)| group.first().map(|record| (*name, *record)))
    }

    /// Full grouped history, newest first within each group.
    pub fn groups(&self) -> &BTreeMap<&'a str, Vec<&'a TestRecord>> {
        &self.groups
    }
}
