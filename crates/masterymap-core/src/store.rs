//! Per-learner mastery table.
//!
//! One row per [`SubTopicKey`]. Rows are only written through
//! [`crate::merge`]; everything else gets shared references.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::curriculum::SubTopicKey;

/// Latest observation for one subtopic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryRecord {
    pub key: SubTopicKey,
    /// Always within 0..=100.
    pub raw_score: u8,
    pub last_observed_at: DateTime<Utc>,
    pub decay_rate_per_day: f64,
}

/// Keyed table of mastery records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MasteryStore {
    records: HashMap<SubTopicKey, MasteryRecord>,
}

impl MasteryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &SubTopicKey) -> Option<&MasteryRecord> {
        self.records.get(key)
    }

    pub fn contains(&self, key: &SubTopicKey) -> bool {
        self.records.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &MasteryRecord> {
        self.records.values()
    }

    /// Flat snapshot of every record, sorted by key.
    pub fn rows(&self) -> Vec<MasteryRecord> {
        let mut rows: Vec<MasteryRecord> = self.records.values().cloned().collect();
        rows.sort_by(|a, b| a.key.cmp(&b.key));
        rows
    }

    pub(crate) fn get_mut(&mut self, key: &SubTopicKey) -> Option<&mut MasteryRecord> {
        self.records.get_mut(key)
    }

    pub(crate) fn insert(&mut self, record: MasteryRecord) {
        self.records.insert(record.key.clone(), record);
    }
}
