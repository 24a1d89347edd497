use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("audio conversion failed: {0}")]
    ConversionFailure(String),

    #[error("duration probe failed: {0}")]
    DurationProbeFailure(String),

    #[error("transcription failed: {0}")]
    TranscriptionFailure(String),

    #[error("transcript file not found: {0}")]
    MissingTranscriptFile(String),

    #[error("request workspace error: {0}")]
    Workspace(String),
}

impl DomainError {
    pub fn conversion(message: impl Into<String>) -> Self {
        Self::ConversionFailure(message.into())
    }

    pub fn duration_probe(message: impl Into<String>) -> Self {
        Self::DurationProbeFailure(message.into())
    }

    pub fn transcription(message: impl Into<String>) -> Self {
        Self::TranscriptionFailure(message.into())
    }

    pub fn workspace(message: impl Into<String>) -> Self {
        Self::Workspace(message.into())
    }
}
