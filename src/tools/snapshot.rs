//! Intake snapshot input
//!
//! The plain data handed over by the persistence layer: a resolved profile,
//! the supplement definitions and the full intake history.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{IntakeRecord, Supplement, UserProfile};

/// Report tooling error types
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid value '{value}' for {name}")]
    InvalidSetting { name: String, value: String },
}

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Everything the engine needs to analyse one user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeSnapshot {
    pub profile: UserProfile,
    #[serde(default)]
    pub supplements: Vec<Supplement>,
    #[serde(default)]
    pub records: Vec<IntakeRecord>,
}

impl IntakeSnapshot {
    pub fn from_json(json: &str) -> ReportResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a snapshot from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> ReportResult<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let snapshot = Self::from_json(&contents)?;
        tracing::info!(
            "Loaded snapshot for {}: {} supplements, {} intake records",
            snapshot.profile.name,
            snapshot.supplements.len(),
            snapshot.records.len()
        );
        Ok(snapshot)
    }
}
