use scoring_domain::DomainError;
use thiserror::Error;

use crate::CommandError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl From<ApplicationError> for CommandError {
    fn from(error: ApplicationError) -> Self {
        match error {
            ApplicationError::Domain(err) => {
                CommandError::infrastructure(domain_error_code(&err), err.to_string())
            }
        }
    }
}

fn domain_error_code(error: &DomainError) -> &'static str {
    match error {
        DomainError::ConversionFailure(_) => "conversion_failure",
        DomainError::DurationProbeFailure(_) => "duration_probe_failure",
        DomainError::TranscriptionFailure(_) => "transcription_failure",
        DomainError::MissingTranscriptFile(_) => "missing_transcript_file",
        DomainError::Workspace(_) => "workspace_error",
    }
}

#[cfg(test)]
mod tests {
    use scoring_domain::DomainError;

    use super::ApplicationError;
    use crate::CommandError;

    #[test]
    fn collaborator_failures_become_infrastructure_errors() {
        let error: CommandError =
            ApplicationError::from(DomainError::transcription("exit status 1")).into();

        assert!(matches!(error, CommandError::Infrastructure { .. }));
        assert_eq!(error.code(), "transcription_failure");
        assert_eq!(error.message(), "transcription failed: exit status 1");
    }
}
