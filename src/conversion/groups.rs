//! Grouping of corpus records by lemma
//!
//! Lemma keys keep first-seen insertion order and every group keeps its
//! entries in input order, so serializing a grouped corpus twice from the
//! same input yields identical output.

use crate::corpus::CollocationRecord;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One collocate/score pair under a lemma.
///
/// The field names are the output contract: every JSON entry is an object
/// with exactly the keys `assoc` and `info`, both string-valued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollocationEntry {
    pub assoc: String,
    pub info: String,
}

impl From<CollocationRecord> for CollocationEntry {
    fn from(record: CollocationRecord) -> Self {
        Self {
            assoc: record.collocate,
            info: record.score,
        }
    }
}

/// All entries recorded for one lemma, in input order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LemmaGroup {
    pub lemma: String,
    pub entries: Vec<CollocationEntry>,
}

/// Records grouped by lemma, lemmas in first-seen order.
///
/// Lemma values are opaque: case-sensitive and untrimmed, so `go` and
/// `Go ` are distinct groups.
#[derive(Debug, Clone, Default)]
pub struct GroupedCorpus {
    groups: Vec<LemmaGroup>,
    index: HashMap<String, usize>,
}

impl GroupedCorpus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to its lemma's group, creating the group on first sight
    pub fn push(&mut self, record: CollocationRecord) {
        match self.index.get(&record.lemma) {
            Some(&slot) => {
                self.groups[slot].entries.push(record.into());
            }
            None => {
                let lemma = record.lemma.clone();
                self.index.insert(lemma.clone(), self.groups.len());
                self.groups.push(LemmaGroup {
                    lemma,
                    entries: vec![record.into()],
                });
            }
        }
    }

    /// Number of distinct lemmas
    pub fn lemma_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of entries across all groups
    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Look up a lemma's entries
    pub fn get(&self, lemma: &str) -> Option<&[CollocationEntry]> {
        self.index
            .get(lemma)
            .map(|&slot| self.groups[slot].entries.as_slice())
    }

    /// Iterate groups in first-seen lemma order
    pub fn iter(&self) -> impl Iterator<Item = &LemmaGroup> {
        self.groups.iter()
    }
}

impl Serialize for GroupedCorpus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.lemma, &group.entries)?;
        }
        map.end()
    }
}
