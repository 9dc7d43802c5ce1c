pub mod catalog;
pub mod config;
pub mod query;
pub mod submit;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use masterymap_core::error::{ConfigError, CoreError};
use masterymap_core::{AcademicAnalysis, AssessmentEvent, Config, Grade, MasteryEngine, MergeResult};

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Settings shared by every subcommand.
pub struct Context {
    config_path: Option<PathBuf>,
}

impl Context {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self { config_path }
    }

    pub fn config_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.config_path {
            Some(path) => Ok(path.clone()),
            None => Config::default_path(),
        }
    }

    pub fn load_config(&self) -> Result<Config, ConfigError> {
        Config::load_from(&self.config_path()?)
    }

    pub fn engine(&self) -> Result<MasteryEngine, CoreError> {
        MasteryEngine::from_config(&self.load_config()?)
    }
}

/// Read a JSON array of assessment events.
pub fn read_events(path: &Path) -> Result<Vec<AssessmentEvent>, CoreError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn read_analysis(path: &Path) -> Result<AcademicAnalysis, CoreError> {
    let content = std::fs::read_to_string(path)?;
    AcademicAnalysis::from_json(&content)
}

/// Merge event files, then analysis files, in command-line order.
pub fn ingest(
    engine: &mut MasteryEngine,
    event_files: &[PathBuf],
    analysis_files: &[PathBuf],
    grade: Option<Grade>,
    observed_at: DateTime<Utc>,
) -> Result<Vec<MergeResult>, Box<dyn std::error::Error>> {
    let mut results = Vec::new();
    for path in event_files {
        let events = read_events(path)?;
        tracing::debug!(path = %path.display(), count = events.len(), "read assessment events");
        results.extend(engine.submit_assessments(&events));
    }

    if analysis_files.is_empty() {
        return Ok(results);
    }
    let grade = grade.ok_or("--analysis needs --grade")?;
    for path in analysis_files {
        let analysis = read_analysis(path)?;
        results.extend(engine.submit_analysis(grade, &analysis, observed_at));
    }
    Ok(results)
}
