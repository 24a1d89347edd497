use async_trait::async_trait;

use crate::{AudioArtifact, DomainError};

#[async_trait]
pub trait AudioTranscoderPort: Send + Sync {
    /// Converts `input` into a playback-standard waveform written at `output`.
    async fn convert(
        &self,
        input: &AudioArtifact,
        output: &AudioArtifact,
    ) -> Result<AudioArtifact, DomainError>;
}

#[async_trait]
pub trait DurationProbePort: Send + Sync {
    /// Returns the duration of `audio` in seconds.
    async fn probe(&self, audio: &AudioArtifact) -> Result<f64, DomainError>;
}

#[async_trait]
pub trait TranscriberPort: Send + Sync {
    async fn transcribe(&self, audio: &AudioArtifact) -> Result<String, DomainError>;
}
