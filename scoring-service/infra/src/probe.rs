use std::ffi::OsString;

use async_trait::async_trait;
use scoring_domain::{AudioArtifact, DomainError, DurationProbePort};

use crate::ToolRunner;

/// Reads the container duration reported by `ffprobe`.
pub struct FfprobeDurationProbe {
    binary: String,
    runner: ToolRunner,
}

impl FfprobeDurationProbe {
    pub fn new(binary: impl Into<String>, runner: ToolRunner) -> Self {
        Self {
            binary: binary.into(),
            runner,
        }
    }
}

#[async_trait]
impl DurationProbePort for FfprobeDurationProbe {
    async fn probe(&self, audio: &AudioArtifact) -> Result<f64, DomainError> {
        let args: [OsString; 7] = [
            "-v".into(),
            "error".into(),
            "-show_entries".into(),
            "format=duration".into(),
            "-of".into(),
            "default=noprint_wrappers=1:nokey=1".into(),
            audio.path().as_os_str().to_os_string(),
        ];
        let result = self
            .runner
            .run(&self.binary, args)
            .await
            .map_err(|err| DomainError::duration_probe(err.to_string()))?;

        if !result.success() {
            return Err(DomainError::duration_probe(result.failure_summary()));
        }
        parse_duration(&result.stdout)
    }
}

fn parse_duration(stdout: &str) -> Result<f64, DomainError> {
    let raw = stdout.trim();
    let seconds: f64 = raw
        .parse()
        .map_err(|_| DomainError::duration_probe(format!("unparsable duration `{raw}`")))?;

    if !seconds.is_finite() || seconds < 0.0 {
        return Err(DomainError::duration_probe(format!(
            "duration out of range `{raw}`"
        )));
    }
    Ok(seconds)
}


#[cfg(all(test, unix))]
mod process_tests {
    use std::time::Duration;

    use scoring_domain::{AudioArtifact, DomainError, DurationProbePort};
    use serial_test::serial;

    use super::FfprobeDurationProbe;
    use crate::{test_support::script, ToolRunner};

    fn probe(binary: String) -> FfprobeDurationProbe {
        FfprobeDurationProbe::new(binary, ToolRunner::new(Duration::from_secs(5)))
    }

    #[tokio::test]
    #[serial]
    async fn reads_duration_from_stdout() {
        let dir = tempfile::tempdir().expect("temp dir");
        let binary = script(dir.path(), "ffprobe", "echo 31.25");

        let seconds = probe(binary)
            .probe(&AudioArtifact::new(dir.path().join("a.wav")))
            .await
            .expect("probes");

        assert_eq!(seconds, 31.25);
    }

    #[tokio::test]
    #[serial]
    async fn non_zero_exit_is_a_probe_failure() {
        let dir = tempfile::tempdir().expect("temp dir");
        let binary = script(dir.path(), "ffprobe", "echo 31.25\nexit 1");

        let error = probe(binary)
            .probe(&AudioArtifact::new(dir.path().join("a.wav")))
            .await
            .expect_err("fails");

        assert!(matches!(error, DomainError::DurationProbeFailure(_)));
    }
}
