//! Average request duration per resource.
//!
//! Built from three stages that can be used on their own:
//!
//! 1. [`group_by_resource`] - collect total and count per resource name
//! 2. [`rank_by_mean`] - compute means and sort them, highest first
//! 3. [`take_top`] - keep the first N entries
//!
//! [`average_duration_by_resource`] chains the three.

use std::collections::HashMap;

use crate::record::Record;

/// Running totals for one resource name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceGroup {
    pub name: String,
    /// Sum of durations; wide enough that no run of `u64` durations overflows it.
    pub total_millis: u128,
    pub count: u64,
}

impl ResourceGroup {
    /// Arithmetic mean of the grouped durations.
    pub fn mean(&self) -> f64 {
        self.total_millis as f64 / self.count as f64
    }
}

/// Resource name to mean duration, in ranking order.
///
/// Iteration follows the order the entries were ranked in, so the first entry
/// is the resource with the highest mean.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceAverages {
    entries: Vec<(String, f64)>,
}

impl ResourceAverages {
    /// Number of resources in the report
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mean duration for a resource, if it made it into the report.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, mean)| *mean)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate `(name, mean)` pairs in ranking order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, mean)| (n.as_str(), *mean))
    }

    /// Resource names in ranking order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }
}

impl From<Vec<(String, f64)>> for ResourceAverages {
    fn from(entries: Vec<(String, f64)>) -> Self {
        Self { entries }
    }
}

impl IntoIterator for ResourceAverages {
    type Item = (String, f64);
    type IntoIter = std::vec::IntoIter<(String, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Group records by exact resource name, in first-seen order.
pub fn group_by_resource(records: &[Record]) -> Vec<ResourceGroup> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<ResourceGroup> = Vec::new();

    for record in records {
        let name = record.resource_name();
        let slot = *index.entry(name).or_insert_with(|| {
            groups.push(ResourceGroup {
                name: name.to_string(),
                total_millis: 0,
                count: 0,
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.total_millis += u128::from(record.duration_millis());
        group.count += 1;
    }

    groups
}

/// Compute each group's mean and sort by it, highest first.
///
/// The sort is stable: resources with equal means keep their input order.
pub fn rank_by_mean(groups: Vec<ResourceGroup>) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = groups
        .into_iter()
        .map(|group| {
            let mean = group.mean();
            (group.name, mean)
        })
        .collect();

    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

/// Keep the first `limit` entries. `None` keeps everything.
pub fn take_top<T>(mut ranked: Vec<T>, limit: Option<usize>) -> Vec<T> {
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    ranked
}

/// Average duration per resource, highest first, at most `limit` entries.
pub fn average_duration_by_resource(records: &[Record], limit: Option<usize>) -> ResourceAverages {
    let groups = group_by_resource(records);
    let ranked = rank_by_mean(groups);
    take_top(ranked, limit).into()
}
