//! Merging per-chunk results into one label → score mapping.
//!
//! The canonical sequence is every record in chunk order, then within-chunk order.
//! It is stable-sorted by score descending, ties broken by label ascending (byte
//! order), and folded into a map. A label seen more than once keeps the slot of its
//! first sorted occurrence but takes the value of its last, so for duplicates the
//! lowest-sorted score wins.

#[cfg(test)]
mod tests;

use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::scoring::{ScoreRecord, ScoredChunkResult};

/// Ordered, key-unique mapping from label to score.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedMapping {
    entries: Vec<(String, f64)>,
}

impl AggregatedMapping {
    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Score stored for `label`.
    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, score)| *score)
    }

    /// Labels in mapping order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    /// `(label, score)` pairs in mapping order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(l, s)| (l.as_str(), *s))
    }
}

impl Serialize for AggregatedMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, score) in &self.entries {
            map.serialize_entry(label, score)?;
        }
        map.end()
    }
}

/// Score descending, then label ascending. NaN compares equal to everything.
pub fn compare_records(a: &ScoreRecord, b: &ScoreRecord) -> Ordering {
    b.confidence_score
        .partial_cmp(&a.confidence_score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.word.cmp(&b.word))
}

/// Flattens `results` in chunk order and stable-sorts with [`compare_records`].
pub fn sorted_records<I>(results: I) -> Vec<ScoreRecord>
where
    I: IntoIterator<Item = ScoredChunkResult>,
{
    let mut records: Vec<ScoreRecord> = results.into_iter().flatten().collect();
    records.sort_by(compare_records);
    records
}

/// Builds the final mapping from per-chunk results given in chunk order.
pub fn aggregate<I>(results: I) -> AggregatedMapping
where
    I: IntoIterator<Item = ScoredChunkResult>,
{
    let records = sorted_records(results);

    let mut positions: HashMap<String, usize> = HashMap::with_capacity(records.len());
    let mut entries: Vec<(String, f64)> = Vec::with_capacity(records.len());

    for record in records {
        match positions.entry(record.word) {
            Entry::Occupied(slot) => {
                entries[*slot.get()].1 = record.confidence_score;
            }
            Entry::Vacant(slot) => {
                entries.push((slot.key().clone(), record.confidence_score));
                slot.insert(entries.len() - 1);
            }
        }
    }

    AggregatedMapping { entries }
}
