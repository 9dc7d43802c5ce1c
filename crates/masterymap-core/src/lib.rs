//! # masterymap Core Library
//!
//! This library tracks how well a learner has mastered each subtopic of a
//! school curriculum. Scored observations come from an external homework
//! scorer; the engine merges them, decays them over time and serves
//! filtered heatmap views to a presentation layer. The `masterymap` CLI is a
//! thin layer over the same library.
//!
//! ## Architecture
//!
//! - **Catalog**: read-only Grade 1-12 curriculum registry, loaded once
//! - **Store**: one mastery record per subtopic, written only by merges
//! - **Merge**: latest-observation-wins upsert, safe for out-of-order batches
//! - **Decay / Status**: pure read-time scoring and tier classification
//! - **Query**: grade/subject/search filtering and topic grouping
//!
//! ## Key Components
//!
//! - [`MasteryEngine`]: Facade owning catalog, store and decay settings
//! - [`KnowledgeCatalog`]: Curriculum registry
//! - [`QueryEngine`]: Read-only heatmap views
//! - [`Config`]: Engine configuration management

pub mod catalog;
pub mod config;
pub mod curriculum;
pub mod decay;
pub mod engine;
pub mod error;
pub mod events;
pub mod ingest;
pub mod merge;
pub mod query;
pub mod status;
pub mod store;

pub use catalog::{CatalogEntry, KnowledgeCatalog};
pub use config::Config;
pub use curriculum::{Grade, Subject, SubTopicKey};
pub use decay::{DecayConfig, DecayMode, DecayModel};
pub use engine::MasteryEngine;
pub use error::{CatalogError, ConfigError, CoreError, ValidationError};
pub use events::MasteryEvent;
pub use ingest::{AcademicAnalysis, ErrorAttribution, ErrorType, KnowledgeMapping};
pub use merge::{AssessmentEvent, MergeOutcome, MergeResult, MergeSummary};
pub use query::{
    group_by_topic, summarize, MasteryQuery, QueryEngine, SubjectFilter, SubjectView, TierSummary,
    ViewRecord,
};
pub use status::MasteryStatus;
pub use store::{MasteryRecord, MasteryStore};
