//! Read-side views over the catalog and mastery store.
//!
//! Queries are catalog-driven: a record only shows up once its key is in
//! the catalog for the requested grade. Effective scores and tiers are
//! computed at call time and nothing here mutates the store.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogEntry, KnowledgeCatalog};
use crate::curriculum::{Grade, Subject};
use crate::decay::DecayModel;
use crate::error::ValidationError;
use crate::status::MasteryStatus;
use crate::store::{MasteryRecord, MasteryStore};

/// Subject restriction for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubjectFilter {
    #[default]
    All,
    Only(Subject),
}

impl SubjectFilter {
    pub fn matches(&self, subject: Subject) -> bool {
        match self {
            SubjectFilter::All => true,
            SubjectFilter::Only(only) => *only == subject,
        }
    }
}

impl From<Subject> for SubjectFilter {
    fn from(subject: Subject) -> Self {
        SubjectFilter::Only(subject)
    }
}

impl FromStr for SubjectFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(SubjectFilter::All)
        } else {
            s.parse().map(SubjectFilter::Only)
        }
    }
}

impl fmt::Display for SubjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubjectFilter::All => f.write_str("All"),
            SubjectFilter::Only(subject) => subject.fmt(f),
        }
    }
}

/// A view request from the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MasteryQuery {
    pub grade: Grade,
    #[serde(default)]
    pub subject: SubjectFilter,
    /// Case-insensitive substring matched against topic and subtopic.
    #[serde(default)]
    pub search: String,
}

impl MasteryQuery {
    pub fn new(grade: Grade) -> Self {
        Self {
            grade,
            subject: SubjectFilter::All,
            search: String::new(),
        }
    }

    pub fn subject(mut self, subject: impl Into<SubjectFilter>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    fn needle(&self) -> Option<String> {
        let trimmed = self.search.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }

    fn selects(&self, entry: &CatalogEntry, needle: Option<&str>) -> bool {
        entry.grade == self.grade
            && self.subject.matches(entry.subject)
            && needle.map_or(true, |n| {
                entry.topic.to_lowercase().contains(n) || entry.sub_topic.to_lowercase().contains(n)
            })
    }
}

/// A mastery record annotated with its read-time score and tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewRecord {
    #[serde(flatten)]
    pub record: MasteryRecord,
    pub effective_score: f64,
    pub status: MasteryStatus,
}

impl ViewRecord {
    pub fn topic(&self) -> &str {
        &self.record.key.topic
    }

    pub fn sub_topic(&self) -> &str {
        &self.record.key.sub_topic
    }

    /// Effective score rounded for display.
    pub fn display_score(&self) -> u8 {
        self.effective_score.round() as u8
    }
}

/// Query result: subjects in declaration order, records in catalog order.
pub type SubjectView = BTreeMap<Subject, Vec<ViewRecord>>;

/// Tier counts over a set of view records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierSummary {
    pub total: usize,
    pub critical: usize,
    pub review: usize,
    pub mastered: usize,
    pub average_effective_score: Option<f64>,
}

/// Composes catalog, store and decay model into read-only views.
pub struct QueryEngine<'a> {
    catalog: &'a KnowledgeCatalog,
    store: &'a MasteryStore,
    decay: DecayModel,
}

impl<'a> QueryEngine<'a> {
    pub fn new(catalog: &'a KnowledgeCatalog, store: &'a MasteryStore, decay: DecayModel) -> Self {
        Self { catalog, store, decay }
    }

    /// Annotate a single record as of `now`.
    pub fn view(&self, record: &MasteryRecord, now: DateTime<Utc>) -> ViewRecord {
        let effective_score = self.decay.effective_score(record, now);
        ViewRecord {
            record: record.clone(),
            effective_score,
            status: MasteryStatus::classify(effective_score),
        }
    }

    fn selected<'q>(&'q self, query: &'q MasteryQuery) -> impl Iterator<Item = &'a CatalogEntry> + 'q {
        let needle = query.needle();
        self.catalog
            .entries()
            .iter()
            .filter(move |entry| query.selects(entry, needle.as_deref()))
    }

    /// Assessed catalog entries matching `query`, grouped by subject.
    ///
    /// Subjects left with no records are omitted.
    pub fn query(&self, query: &MasteryQuery, now: DateTime<Utc>) -> SubjectView {
        let mut view = SubjectView::new();
        for entry in self.selected(query) {
            if let Some(record) = self.store.get(&entry.key()) {
                view.entry(entry.subject)
                    .or_default()
                    .push(self.view(record, now));
            }
        }
        view
    }

    /// Catalog entries matching `query` that have no record yet.
    pub fn unassessed(&self, query: &MasteryQuery) -> BTreeMap<Subject, Vec<CatalogEntry>> {
        let mut result: BTreeMap<Subject, Vec<CatalogEntry>> = BTreeMap::new();
        for entry in self.selected(query) {
            if !self.store.contains(&entry.key()) {
                result.entry(entry.subject).or_default().push(entry.clone());
            }
        }
        result
    }
}

/// Group records by topic, keeping the order topics are first seen in.
pub fn group_by_topic(records: &[ViewRecord]) -> IndexMap<String, Vec<ViewRecord>> {
    let mut groups: IndexMap<String, Vec<ViewRecord>> = IndexMap::new();
    for record in records {
        groups
            .entry(record.topic().to_string())
            .or_default()
            .push(record.clone());
    }
    groups
}

/// Count tiers and average effective score.
pub fn summarize<'r>(records: impl IntoIterator<Item = &'r ViewRecord>) -> TierSummary {
    let mut summary = TierSummary::default();
    let mut total_score = 0.0;

    for record in records {
        summary.total += 1;
        total_score += record.effective_score;
        match record.status {
            MasteryStatus::Critical => summary.critical += 1,
            MasteryStatus::Review => summary.review += 1,
            MasteryStatus::Mastered => summary.mastered += 1,
        }
    }

    if summary.total > 0 {
        summary.average_effective_score = Some(total_score / summary.total as f64);
    }
    summary
}
