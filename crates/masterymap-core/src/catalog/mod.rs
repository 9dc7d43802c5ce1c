//! Curriculum catalog.
//!
//! The catalog records which (grade, subject, topic, subtopic) combinations
//! belong to the curriculum. It is loaded once at startup and only read
//! afterwards; whether a learner has been assessed on an entry is the
//! [`MasteryStore`](crate::store::MasteryStore)'s business, not the catalog's.

mod builtin;

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::curriculum::{Grade, Subject, SubTopicKey};
use crate::error::CatalogError;

pub use builtin::BUILTIN_CURRICULUM;

/// One curriculum node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub grade: Grade,
    pub subject: Subject,
    pub topic: String,
    pub sub_topic: String,
    /// Decay rate applied when a record for this node is first created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decay_rate_per_day: Option<f64>,
}

impl CatalogEntry {
    pub fn new(
        grade: Grade,
        subject: Subject,
        topic: impl Into<String>,
        sub_topic: impl Into<String>,
    ) -> Self {
        Self {
            grade,
            subject,
            topic: topic.into(),
            sub_topic: sub_topic.into(),
            decay_rate_per_day: None,
        }
    }

    pub fn with_decay_rate(mut self, rate: f64) -> Self {
        self.decay_rate_per_day = Some(rate);
        self
    }

    pub fn key(&self) -> SubTopicKey {
        SubTopicKey::new(self.grade, self.subject, &self.topic, &self.sub_topic)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let invalid = |message: &str| CatalogError::InvalidEntry {
            entry: self.key().to_string(),
            message: message.to_string(),
        };

        if self.topic.trim().is_empty() {
            return Err(invalid("topic is empty"));
        }
        if self.sub_topic.trim().is_empty() {
            return Err(invalid("subTopic is empty"));
        }
        if let Some(rate) = self.decay_rate_per_day {
            if !rate.is_finite() || rate < 0.0 {
                return Err(invalid("decayRatePerDay must be a finite value >= 0"));
            }
        }
        Ok(())
    }
}

/// Wrapper for reading catalogs from TOML
#[derive(Serialize, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    entries: Vec<CatalogEntry>,
}

/// Read-only registry of curriculum nodes, in load order.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeCatalog {
    entries: Vec<CatalogEntry>,
    index: HashMap<SubTopicKey, usize>,
}

impl KnowledgeCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog containing the bundled Grade 1-12 curriculum.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (grade, subject, topic, sub_topic) in BUILTIN_CURRICULUM {
            let entry = CatalogEntry::new(*grade, *subject, *topic, *sub_topic);
            catalog.insert(entry);
        }
        catalog
    }

    /// Parse a catalog document made of `[[entries]]` tables.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        let mut catalog = Self::new();
        catalog.load(file.entries)?;
        Ok(catalog)
    }

    /// Read and parse a catalog document from disk.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Add entries to the catalog.
    ///
    /// The batch is validated as a whole before anything is inserted.
    /// Entries whose key is already present are skipped, so loading the
    /// same data twice is a no-op. Returns the number of entries added.
    pub fn load(&mut self, entries: impl IntoIterator<Item = CatalogEntry>) -> Result<usize, CatalogError> {
        let entries: Vec<CatalogEntry> = entries.into_iter().collect();
        for entry in &entries {
            entry.validate()?;
        }

        let mut added = 0;
        for entry in entries {
            if self.insert(entry) {
                added += 1;
            }
        }
        Ok(added)
    }

    fn insert(&mut self, entry: CatalogEntry) -> bool {
        let key = entry.key();
        if let Some(&idx) = self.index.get(&key) {
            if self.entries[idx] != entry {
                tracing::warn!(%key, "conflicting catalog definition ignored; first definition wins");
            }
            return false;
        }
        self.index.insert(key, self.entries.len());
        self.entries.push(entry);
        true
    }

    /// Grades that have at least one entry.
    pub fn grades(&self) -> BTreeSet<Grade> {
        self.entries.iter().map(|e| e.grade).collect()
    }

    /// Subjects taught in `grade`. Empty for a grade with no entries.
    pub fn subjects_for(&self, grade: Grade) -> BTreeSet<Subject> {
        self.entries
            .iter()
            .filter(|e| e.grade == grade)
            .map(|e| e.subject)
            .collect()
    }

    /// Entries for one grade and subject, in load order.
    pub fn entries_for(&self, grade: Grade, subject: Subject) -> impl Iterator<Item = &CatalogEntry> {
        self.entries
            .iter()
            .filter(move |e| e.grade == grade && e.subject == subject)
    }

    /// `(topic, subTopic)` pairs for one grade and subject, in load order.
    pub fn points_for(&self, grade: Grade, subject: Subject) -> Vec<(&str, &str)> {
        self.entries_for(grade, subject)
            .map(|e| (e.topic.as_str(), e.sub_topic.as_str()))
            .collect()
    }

    pub fn contains(&self, key: &SubTopicKey) -> bool {
        self.index.contains_key(key)
    }

    pub fn entry(&self, key: &SubTopicKey) -> Option<&CatalogEntry> {
        self.index.get(key).map(|&idx| &self.entries[idx])
    }

    /// All entries in load order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
