//! Mastery engine facade.
//!
//! Owns the catalog, the mastery store and the decay settings for one
//! learner. Writes go through `&mut self` (one batch at a time, never
//! re-entrant); reads take `&self` and always see fully merged records.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;

use crate::catalog::{CatalogEntry, KnowledgeCatalog};
use crate::config::Config;
use crate::curriculum::{Grade, Subject, SubTopicKey};
use crate::decay::{DecayConfig, DecayModel};
use crate::error::{CatalogError, Result};
use crate::events::MasteryEvent;
use crate::ingest::AcademicAnalysis;
use crate::merge::{self, AssessmentEvent, MergeOutcome, MergeResult, MergeSummary};
use crate::query::{self, MasteryQuery, QueryEngine, SubjectFilter, SubjectView, ViewRecord};
use crate::store::MasteryStore;

pub struct MasteryEngine {
    catalog: KnowledgeCatalog,
    store: MasteryStore,
    decay: DecayConfig,
    pending_events: Vec<MasteryEvent>,
}

/// Decay rate for a newly created record: the catalog entry's own rate if
/// it sets one, otherwise the configured default.
fn decay_rate_for(catalog: &KnowledgeCatalog, default_rate: f64, key: &SubTopicKey) -> f64 {
    catalog
        .entry(key)
        .and_then(|entry| entry.decay_rate_per_day)
        .unwrap_or(default_rate)
}

impl MasteryEngine {
    pub fn new(catalog: KnowledgeCatalog, decay: DecayConfig) -> Self {
        Self {
            catalog,
            store: MasteryStore::new(),
            decay,
            pending_events: Vec::new(),
        }
    }

    /// Engine over the bundled curriculum with default decay settings.
    pub fn with_builtin_catalog() -> Self {
        Self::new(KnowledgeCatalog::builtin(), DecayConfig::default())
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let catalog = config.build_catalog()?;
        tracing::debug!(entries = catalog.len(), mode = ?config.decay.mode, "engine configured");
        Ok(Self::new(catalog, config.decay.clone()))
    }

    pub fn catalog(&self) -> &KnowledgeCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &MasteryStore {
        &self.store
    }

    pub fn decay_model(&self) -> DecayModel {
        DecayModel::from_config(&self.decay)
    }

    /// Add catalog entries. Re-loading identical data is a no-op.
    pub fn load_catalog(&mut self, entries: impl IntoIterator<Item = CatalogEntry>) -> Result<usize, CatalogError> {
        let added = self.catalog.load(entries)?;
        if added > 0 {
            tracing::info!(added, total = self.catalog.len(), "catalog entries loaded");
            self.pending_events.push(MasteryEvent::CatalogLoaded {
                added,
                total: self.catalog.len(),
                at: Utc::now(),
            });
        }
        Ok(added)
    }

    /// Merge a batch of observations; one result per event, in order.
    pub fn submit_assessments(&mut self, events: &[AssessmentEvent]) -> Vec<MergeResult> {
        let catalog = &self.catalog;
        let default_rate = self.decay.default_rate_per_day;
        let results = merge::merge(&mut self.store, events, |key| {
            decay_rate_for(catalog, default_rate, key)
        });

        for (event, result) in events.iter().zip(&results) {
            if result.outcome != MergeOutcome::Accepted || !result.changed {
                continue;
            }
            // accepted scores are already known to be within 0..=100
            let raw_score = event.score.clamp(0, 100) as u8;
            let notification = match result.previous_score {
                None => MasteryEvent::RecordCreated {
                    key: event.key.clone(),
                    raw_score,
                    observed_at: event.observed_at,
                },
                Some(previous_score) => MasteryEvent::RecordUpdated {
                    key: event.key.clone(),
                    previous_score,
                    raw_score,
                    observed_at: event.observed_at,
                },
            };
            self.pending_events.push(notification);
        }

        let summary = MergeSummary::from_results(&results);
        tracing::info!(
            accepted = summary.accepted,
            ignored_stale = summary.ignored_stale,
            rejected_invalid = summary.rejected_invalid,
            "merged assessment batch"
        );
        results
    }

    /// Merge every scored subtopic of a homework analysis.
    pub fn submit_analysis(
        &mut self,
        grade: Grade,
        analysis: &AcademicAnalysis,
        observed_at: DateTime<Utc>,
    ) -> Vec<MergeResult> {
        let events = analysis.to_events(grade, observed_at);
        self.submit_assessments(&events)
    }

    pub fn query_engine(&self) -> QueryEngine<'_> {
        QueryEngine::new(&self.catalog, &self.store, self.decay_model())
    }

    /// Heatmap view as of now.
    pub fn query(&self, grade: Grade, subject: SubjectFilter, search: &str) -> SubjectView {
        let request = MasteryQuery::new(grade).subject(subject).search(search);
        self.query_at(&request, Utc::now())
    }

    /// Heatmap view as of `now`.
    pub fn query_at(&self, request: &MasteryQuery, now: DateTime<Utc>) -> SubjectView {
        self.query_engine().query(request, now)
    }

    /// Catalog entries matching `request` with no record yet.
    pub fn unassessed(&self, request: &MasteryQuery) -> BTreeMap<Subject, Vec<CatalogEntry>> {
        self.query_engine().unassessed(request)
    }

    pub fn group_by_topic(records: &[ViewRecord]) -> IndexMap<String, Vec<ViewRecord>> {
        query::group_by_topic(records)
    }

    /// Take all change notifications queued since the last call.
    pub fn drain_events(&mut self) -> Vec<MasteryEvent> {
        std::mem::take(&mut self.pending_events)
    }
}

impl Default for MasteryEngine {
    fn default() -> Self {
        Self::with_builtin_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::MasteryStatus;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 17, 9, 0, 0).unwrap()
    }

    fn quadratic() -> SubTopicKey {
        SubTopicKey::new(Grade::Grade9, Subject::Math, "Algebra", "Quadratic Equations")
    }

    fn event(key: SubTopicKey, score: i32, observed_at: DateTime<Utc>) -> AssessmentEvent {
        AssessmentEvent { key, score, observed_at }
    }

    #[test]
    fn test_new_record_uses_catalog_rate() {
        let mut engine = MasteryEngine::new(KnowledgeCatalog::new(), DecayConfig::default());
        engine
            .load_catalog([CatalogEntry::new(Grade::Grade9, Subject::Math, "Algebra", "Quadratic Equations")
                .with_decay_rate(2.5)])
            .unwrap();

        engine.submit_assessments(&[event(quadratic(), 70, t0())]);
        assert_eq!(engine.store().get(&quadratic()).unwrap().decay_rate_per_day, 2.5);
    }

    #[test]
    fn test_uncatalogued_record_uses_default_rate() {
        let mut engine = MasteryEngine::with_builtin_catalog();
        let key = SubTopicKey::new(Grade::Grade9, Subject::Math, "Algebra", "Completing the Square");

        let results = engine.submit_assessments(&[event(key.clone(), 70, t0())]);
        assert_eq!(results[0].outcome, MergeOutcome::Accepted);
        assert_eq!(engine.store().get(&key).unwrap().decay_rate_per_day, 0.1);

        // stored, but not surfaced until the catalog knows it
        let view = engine.query_at(&MasteryQuery::new(Grade::Grade9).search("square"), t0());
        assert!(view.is_empty());

        engine
            .load_catalog([CatalogEntry::new(Grade::Grade9, Subject::Math, "Algebra", "Completing the Square")])
            .unwrap();
        let view = engine.query_at(&MasteryQuery::new(Grade::Grade9).search("square"), t0());
        assert_eq!(view[&Subject::Math].len(), 1);
    }

    #[test]
    fn test_notifications_for_created_and_updated() {
        let mut engine = MasteryEngine::with_builtin_catalog();
        engine.submit_assessments(&[
            event(quadratic(), 55, t0()),
            event(quadratic(), 92, t0() + Duration::hours(2)),
            event(quadratic(), 10, t0() - Duration::hours(2)),
            event(quadratic(), 120, t0()),
        ]);

        let events = engine.drain_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], MasteryEvent::RecordCreated { raw_score: 55, .. }));
        assert!(matches!(
            events[1],
            MasteryEvent::RecordUpdated { previous_score: 55, raw_score: 92, .. }
        ));
        assert!(engine.drain_events().is_empty());
    }

    #[test]
    fn test_resubmitted_event_is_silent() {
        let mut engine = MasteryEngine::with_builtin_catalog();
        let e = event(quadratic(), 70, t0());

        engine.submit_assessments(&[e.clone()]);
        assert_eq!(engine.drain_events().len(), 1);

        let results = engine.submit_assessments(&[e]);
        assert_eq!(results[0].outcome, MergeOutcome::Accepted);
        assert!(engine.drain_events().is_empty());
        assert_eq!(engine.store().get(&quadratic()).unwrap().raw_score, 70);
    }

    #[test]
    fn test_catalog_reload_is_silent() {
        let mut engine = MasteryEngine::new(KnowledgeCatalog::new(), DecayConfig::default());
        let entries = vec![CatalogEntry::new(Grade::Grade3, Subject::Science, "Nature", "Plants")];

        assert_eq!(engine.load_catalog(entries.clone()).unwrap(), 1);
        assert_eq!(engine.load_catalog(entries).unwrap(), 0);

        let events = engine.drain_events();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], MasteryEvent::CatalogLoaded { added: 1, total: 1, .. }));
    }

    #[test]
    fn test_submit_analysis() {
        let mut engine = MasteryEngine::with_builtin_catalog();
        let analysis = AcademicAnalysis::from_json(
            r#"{
                "subject": "Chemistry",
                "knowledgeMapping": [
                    { "topic": "Substances", "subTopic": "Acids and Bases", "masteryScore": 48 },
                    { "topic": "Matter", "subTopic": "Periodic Table", "masteryScore": 130 }
                ]
            }"#,
        )
        .unwrap();

        let results = engine.submit_analysis(Grade::Grade9, &analysis, t0());
        assert_eq!(results[0].outcome, MergeOutcome::Accepted);
        assert_eq!(results[1].outcome, MergeOutcome::RejectedInvalid);

        let view = engine.query_at(&MasteryQuery::new(Grade::Grade9).subject(Subject::Chemistry), t0());
        let chemistry = &view[&Subject::Chemistry];
        assert_eq!(chemistry.len(), 1);
        assert_eq!(chemistry[0].status, MasteryStatus::Critical);
    }

    #[test]
    fn test_from_config_off_mode() {
        let mut config = Config::default();
        config.decay.mode = crate::decay::DecayMode::Off;
        let mut engine = MasteryEngine::from_config(&config).unwrap();

        engine.submit_assessments(&[event(quadratic(), 90, t0())]);
        let view = engine.query_at(&MasteryQuery::new(Grade::Grade9), t0() + Duration::days(365));
        assert_eq!(view[&Subject::Math][0].effective_score, 90.0);
    }
}
