use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::curriculum::SubTopicKey;

/// Every accepted change to the engine produces an Event.
/// The presentation layer polls for events via `MasteryEngine::drain_events`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MasteryEvent {
    /// First observation for a subtopic.
    RecordCreated {
        key: SubTopicKey,
        raw_score: u8,
        observed_at: DateTime<Utc>,
    },
    /// A newer observation replaced the stored one.
    RecordUpdated {
        key: SubTopicKey,
        previous_score: u8,
        raw_score: u8,
        observed_at: DateTime<Utc>,
    },
    /// Catalog entries were added.
    CatalogLoaded {
        added: usize,
        total: usize,
        at: DateTime<Utc>,
    },
}

impl MasteryEvent {
    /// The subtopic this event concerns, if any.
    pub fn key(&self) -> Option<&SubTopicKey> {
        match self {
            MasteryEvent::RecordCreated { key, .. } | MasteryEvent::RecordUpdated { key, .. } => Some(key),
            MasteryEvent::CatalogLoaded { .. } => None,
        }
    }
}
