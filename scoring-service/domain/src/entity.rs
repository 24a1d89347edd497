use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vocal_features::{FeatureSet, ScoreCard};

/// A file produced or consumed by one of the external audio tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioArtifact {
    pub path: PathBuf,
}

impl AudioArtifact {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling path the transcriber writes its text output to (`<file>.txt`).
    pub fn transcript_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(".txt");
        PathBuf::from(name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub transcript: String,
    pub features: FeatureSet,
    pub score_card: ScoreCard,
}
