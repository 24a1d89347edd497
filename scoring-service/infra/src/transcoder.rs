use std::ffi::OsString;

use async_trait::async_trait;
use scoring_domain::{AudioArtifact, AudioTranscoderPort, DomainError};

use crate::ToolRunner;

/// Converts uploads to mono 16-bit PCM WAV with `ffmpeg`.
pub struct FfmpegTranscoder {
    binary: String,
    sample_rate_hz: u32,
    runner: ToolRunner,
}

impl FfmpegTranscoder {
    pub fn new(binary: impl Into<String>, sample_rate_hz: u32, runner: ToolRunner) -> Self {
        Self {
            binary: binary.into(),
            sample_rate_hz,
            runner,
        }
    }

    fn arguments(&self, input: &AudioArtifact, output: &AudioArtifact) -> Vec<OsString> {
        let mut args: Vec<OsString> = ["-hide_banner", "-loglevel", "error", "-y", "-i"]
            .into_iter()
            .map(OsString::from)
            .collect();
        args.push(input.path().into());
        args.extend(
            [
                "-ar".to_string(),
                self.sample_rate_hz.to_string(),
                "-ac".to_string(),
                "1".to_string(),
                "-c:a".to_string(),
                "pcm_s16le".to_string(),
            ]
            .map(OsString::from),
        );
        args.push(output.path().into());
        args
    }
}

#[async_trait]
impl AudioTranscoderPort for FfmpegTranscoder {
    async fn convert(
        &self,
        input: &AudioArtifact,
        output: &AudioArtifact,
    ) -> Result<AudioArtifact, DomainError> {
        let result = self
            .runner
            .run(&self.binary, self.arguments(input, output))
            .await
            .map_err(|err| DomainError::conversion(err.to_string()))?;

        if !result.success() {
            return Err(DomainError::conversion(result.failure_summary()));
        }
        if !output.path().is_file() {
            return Err(DomainError::conversion(format!(
                "`{}` produced no output at {}",
                self.binary,
                output.path().display()
            )));
        }

        Ok(output.clone())
    }
}
