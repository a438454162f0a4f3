//! Source-credibility dataset loading and domain lookup.
//!
//! The dataset is a JSON document `{"data": [...]}` of source profiles,
//! refreshed on an external schedule. Loaded once per session, read-only
//! after that.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use veridex_core::errors::CredibilityError;
use veridex_core::models::SourceProfile;

#[derive(Deserialize)]
struct DatasetFile {
    data: Vec<SourceProfile>,
}

/// In-memory credibility dataset with first-match substring lookup.
#[derive(Debug, Clone, Default)]
pub struct SourceDataset {
    profiles: Vec<SourceProfile>,
}

impl SourceDataset {
    /// Strict loader: missing or unparseable files are errors.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CredibilityError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|_| CredibilityError::DatasetMissing {
            path: path.display().to_string(),
        })?;
        let file: DatasetFile =
            serde_json::from_str(&raw).map_err(|e| CredibilityError::DatasetParse {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        debug!(profiles = file.data.len(), "credibility dataset loaded");
        Ok(Self {
            profiles: file.data,
        })
    }

    /// Degrading loader: any failure yields an empty dataset, so every
    /// lookup misses and every article falls back to the neutral score.
    /// Logged, never fatal.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(dataset) => dataset,
            Err(e) => {
                warn!(error = %e, "credibility dataset unavailable, scoring degrades to neutral");
                Self::default()
            }
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from in-memory profiles. Fixture and test helper.
    pub fn from_profiles(profiles: Vec<SourceProfile>) -> Self {
        Self { profiles }
    }

    /// First profile in dataset order whose stored source URL contains the
    /// registrable domain as a case-insensitive substring. Insertion order
    /// is the only tie-break.
    pub fn lookup(&self, registrable_domain: &str) -> Option<&SourceProfile> {
        if registrable_domain.is_empty() {
            return None;
        }
        let needle = registrable_domain.to_lowercase();
        self.profiles
            .iter()
            .find(|p| p.source_url.to_lowercase().contains(&needle))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
