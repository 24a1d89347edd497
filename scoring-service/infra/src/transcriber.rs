use std::ffi::OsString;
use std::io::ErrorKind;

use async_trait::async_trait;
use scoring_domain::{AudioArtifact, DomainError, TranscriberPort};

use crate::ToolRunner;

/// Runs the whisper.cpp command line tool and reads the `<wav>.txt` file it leaves beside the input.
pub struct WhisperCliTranscriber {
    binary: String,
    model_path: String,
    runner: ToolRunner,
}

impl WhisperCliTranscriber {
    pub fn new(binary: impl Into<String>, model_path: impl Into<String>, runner: ToolRunner) -> Self {
        Self {
            binary: binary.into(),
            model_path: model_path.into(),
            runner,
        }
    }
}

#[async_trait]
impl TranscriberPort for WhisperCliTranscriber {
    async fn transcribe(&self, audio: &AudioArtifact) -> Result<String, DomainError> {
        let args: [OsString; 5] = [
            "-m".into(),
            self.model_path.clone().into(),
            "-f".into(),
            audio.path().into(),
            "-otxt".into(),
        ];
        let result = self
            .runner
            .run(&self.binary, args)
            .await
            .map_err(|err| DomainError::transcription(err.to_string()))?;

        if !result.success() {
            return Err(DomainError::transcription(result.failure_summary()));
        }

        let transcript_path = audio.transcript_path();
        match tokio::fs::read_to_string(&transcript_path).await {
            Ok(text) => Ok(text.trim().to_string()),
            Err(err) if err.kind() == ErrorKind::NotFound => Err(
                DomainError::MissingTranscriptFile(transcript_path.display().to_string()),
            ),
            Err(err) => Err(DomainError::transcription(format!(
                "failed to read {}: {err}",
                transcript_path.display()
            ))),
        }
    }
}
