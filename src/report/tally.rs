use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::models::options::{PROJECT_SIZE_BUCKETS, USES_REBATES};
use crate::models::SurveyResponse;

/// Insertion-ordered count per key. Serializes as a JSON object.
///
/// Keys are indexed by position so counting is O(1) per value.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    entries: Vec<(String, u64)>,
    index: HashMap<String, usize>,
}

impl PartialEq for Tally {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for Tally {}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tally whose key set is fixed up front, every key starting at zero.
    pub fn with_keys(keys: &[&str]) -> Self {
        let mut tally = Self::new();
        for key in keys {
            if !tally.index.contains_key(*key) {
                tally.index.insert((*key).to_string(), tally.entries.len());
                tally.entries.push(((*key).to_string(), 0));
            }
        }
        tally
    }

    /// Count `key`, adding it at the end if unseen.
    pub fn increment(&mut self, key: &str) {
        if !self.increment_existing(key) {
            self.index.insert(key.to_string(), self.entries.len());
            self.entries.push((key.to_string(), 1));
        }
    }

    /// Count `key` only if it is already tracked. Returns whether it was.
    pub fn increment_existing(&mut self, key: &str) -> bool {
        match self.index.get(key) {
            Some(&pos) => {
                self.entries[pos].1 += 1;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: &str) -> u64 {
        self.index.get(key).map_or(0, |&pos| self.entries[pos].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), *c))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Tally {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, count) in &self.entries {
            map.serialize_entry(key, count)?;
        }
        map.end()
    }
}

/// Dashboard statistics over the whole collection.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tallies {
    pub total: usize,
    pub uses: Tally,
    pub barriers_count: Tally,
    pub by_state: Tally,
    pub who_files_count: Tally,
    pub avg_project_buckets: Tally,
}

/// Single pass over `records`. `uses` and `avg_project_buckets` only count
/// their fixed keys; `by_state` and `who_files_count` skip empty values.
pub fn aggregate(records: &[SurveyResponse]) -> Tallies {
    let mut tallies = Tallies {
        total: records.len(),
        uses: Tally::with_keys(&USES_REBATES),
        barriers_count: Tally::new(),
        by_state: Tally::new(),
        who_files_count: Tally::new(),
        avg_project_buckets: Tally::with_keys(&PROJECT_SIZE_BUCKETS),
    };

    for record in records {
        tallies.uses.increment_existing(&record.uses_rebates);

        for barrier in &record.barriers {
            tallies.barriers_count.increment(barrier);
        }

        if !record.state.is_empty() {
            tallies.by_state.increment(&record.state);
        }

        if !record.who_files.is_empty() {
            tallies.who_files_count.increment(&record.who_files);
        }

        tallies
            .avg_project_buckets
            .increment_existing(&record.avg_project_size);
    }

    tallies
}
