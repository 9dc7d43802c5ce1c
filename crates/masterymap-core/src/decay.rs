//! Time-based mastery decay.
//!
//! A stored score is a point-in-time observation. Without reinforcement it
//! fades linearly at the record's `decay_rate_per_day`, floored at zero.
//! Decay only ever lowers a score.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::store::MasteryRecord;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// How effective scores are derived from raw scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecayMode {
    /// `raw - rate * days`, clamped to 0..=100
    #[default]
    Linear,
    /// Report raw scores unchanged
    Off,
}

/// Configuration for decay behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecayConfig {
    #[serde(default)]
    pub mode: DecayMode,
    /// Rate given to new records whose catalog entry does not set one
    #[serde(default = "default_rate_per_day")]
    pub default_rate_per_day: f64,
}

fn default_rate_per_day() -> f64 {
    0.1
}

impl Default for DecayConfig {
    fn default() -> Self {
        Self {
            mode: DecayMode::Linear,
            default_rate_per_day: default_rate_per_day(),
        }
    }
}

/// Fractional days from `from` to `to`; zero if `to` is not after `from`.
pub fn days_elapsed(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let millis = (to - from).num_milliseconds();
    if millis <= 0 {
        0.0
    } else {
        millis as f64 / MILLIS_PER_DAY
    }
}

/// Pure decay calculator.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecayModel {
    mode: DecayMode,
}

impl DecayModel {
    pub fn new(mode: DecayMode) -> Self {
        Self { mode }
    }

    pub fn from_config(config: &DecayConfig) -> Self {
        Self::new(config.mode)
    }

    pub fn mode(&self) -> DecayMode {
        self.mode
    }

    /// Decay-adjusted score at `now`, in 0.0..=100.0 and never above the raw score.
    pub fn effective_score(&self, record: &MasteryRecord, now: DateTime<Utc>) -> f64 {
        let raw = f64::from(record.raw_score);
        match self.mode {
            DecayMode::Off => raw,
            DecayMode::Linear => {
                // hand-built records may carry a negative rate
                let rate = record.decay_rate_per_day.max(0.0);
                let decayed = raw - rate * days_elapsed(record.last_observed_at, now);
                decayed.clamp(0.0, 100.0)
            }
        }
    }
}
