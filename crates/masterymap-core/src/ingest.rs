//! Homework-analysis payloads from the scoring service.
//!
//! The scoring service looks at a photographed worksheet and returns the
//! subject, an error attribution and a list of scored subtopics. Only the
//! scored subtopics feed the mastery store; the rest is carried through for
//! the presentation layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::curriculum::{Grade, Subject, SubTopicKey};
use crate::error::Result;
use crate::merge::AssessmentEvent;

/// Root cause the scorer assigned to the learner's mistakes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorType {
    Foundational,
    Misinterpretation,
    Careless,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorAttribution {
    #[serde(rename = "type")]
    pub kind: ErrorType,
    #[serde(default)]
    pub explanation: String,
}

/// One scored subtopic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeMapping {
    pub topic: String,
    pub sub_topic: String,
    pub mastery_score: i32,
}

/// Analysis of a single homework submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AcademicAnalysis {
    pub subject: Subject,
    #[serde(default)]
    pub ocr_text: String,
    #[serde(default)]
    pub error_attribution: Option<ErrorAttribution>,
    #[serde(default)]
    pub knowledge_mapping: Vec<KnowledgeMapping>,
}

impl AcademicAnalysis {
    /// Parse the scorer's JSON payload.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// One assessment per scored subtopic, keyed under `grade` and the
    /// analysis subject. Scores pass through unvalidated.
    pub fn to_events(&self, grade: Grade, observed_at: DateTime<Utc>) -> Vec<AssessmentEvent> {
        self.knowledge_mapping
            .iter()
            .map(|m| AssessmentEvent {
                key: SubTopicKey::new(grade, self.subject, &m.topic, &m.sub_topic),
                score: m.mastery_score,
                observed_at,
            })
            .collect()
    }
}
