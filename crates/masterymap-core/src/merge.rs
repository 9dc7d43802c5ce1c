//! Upsert of external observations into the mastery store.
//!
//! Conflicts are resolved by observation time, not arrival order: an event
//! replaces the stored record only if it was observed at or after the
//! stored observation. Scoring requests finish in any order, and the final
//! table depends only on the newest observation per key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::curriculum::SubTopicKey;
use crate::store::{MasteryRecord, MasteryStore};

/// Highest valid score.
pub const MAX_SCORE: i32 = 100;

/// Scored observation of one subtopic, produced by an external scorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentEvent {
    pub key: SubTopicKey,
    /// Unvalidated; anything outside 0..=100 is rejected on merge.
    pub score: i32,
    pub observed_at: DateTime<Utc>,
}

/// What happened to a single event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MergeOutcome {
    Accepted,
    IgnoredStale,
    RejectedInvalid,
}

impl MergeOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            MergeOutcome::Accepted => "accepted",
            MergeOutcome::IgnoredStale => "ignored-stale",
            MergeOutcome::RejectedInvalid => "rejected-invalid",
        }
    }
}

/// Per-event merge result, positionally aligned with the input batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeResult {
    pub key: SubTopicKey,
    pub outcome: MergeOutcome,
    /// Raw score held before an accepted update; `None` when the record was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_score: Option<u8>,
    /// False when an accepted event matched the stored record exactly.
    #[serde(default)]
    pub changed: bool,
}

impl MergeResult {
    pub fn created(&self) -> bool {
        self.outcome == MergeOutcome::Accepted && self.previous_score.is_none()
    }
}

/// Outcome counts for a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeSummary {
    pub accepted: usize,
    pub ignored_stale: usize,
    pub rejected_invalid: usize,
}

impl MergeSummary {
    pub fn from_results(results: &[MergeResult]) -> Self {
        results.iter().fold(Self::default(), |mut acc, r| {
            match r.outcome {
                MergeOutcome::Accepted => acc.accepted += 1,
                MergeOutcome::IgnoredStale => acc.ignored_stale += 1,
                MergeOutcome::RejectedInvalid => acc.rejected_invalid += 1,
            }
            acc
        })
    }
}

/// Apply one event.
///
/// `decay_rate_for` supplies the decay rate for records created by this
/// event; updates keep the rate the record already has.
pub fn merge_one<F>(store: &mut MasteryStore, event: &AssessmentEvent, decay_rate_for: F) -> MergeResult
where
    F: Fn(&SubTopicKey) -> f64,
{
    let result = |outcome, previous_score, changed| MergeResult {
        key: event.key.clone(),
        outcome,
        previous_score,
        changed,
    };

    let score = match u8::try_from(event.score) {
        Ok(score) if event.score <= MAX_SCORE => score,
        _ => {
            tracing::warn!(key = %event.key, score = event.score, "rejecting assessment with out-of-range score");
            return result(MergeOutcome::RejectedInvalid, None, false);
        }
    };

    match store.get_mut(&event.key) {
        Some(existing) if event.observed_at < existing.last_observed_at => {
            tracing::debug!(
                key = %event.key,
                observed_at = %event.observed_at,
                stored_at = %existing.last_observed_at,
                "ignoring stale assessment"
            );
            result(MergeOutcome::IgnoredStale, None, false)
        }
        Some(existing) => {
            let previous = existing.raw_score;
            if previous == score && existing.last_observed_at == event.observed_at {
                tracing::debug!(key = %event.key, score, "assessment already applied");
                return result(MergeOutcome::Accepted, Some(previous), false);
            }
            existing.raw_score = score;
            existing.last_observed_at = event.observed_at;
            tracing::debug!(key = %event.key, previous, score, "updated mastery record");
            result(MergeOutcome::Accepted, Some(previous), true)
        }
        None => {
            let decay_rate_per_day = decay_rate_for(&event.key);
            store.insert(MasteryRecord {
                key: event.key.clone(),
                raw_score: score,
                last_observed_at: event.observed_at,
                decay_rate_per_day,
            });
            tracing::debug!(key = %event.key, score, decay_rate_per_day, "created mastery record");
            result(MergeOutcome::Accepted, None, true)
        }
    }
}

/// Apply a batch in order, one result per event.
///
/// A rejected or stale event never aborts the rest of the batch.
pub fn merge<F>(store: &mut MasteryStore, events: &[AssessmentEvent], decay_rate_for: F) -> Vec<MergeResult>
where
    F: Fn(&SubTopicKey) -> f64,
{
    events
        .iter()
        .map(|event| merge_one(store, event, &decay_rate_for))
        .collect()
}
