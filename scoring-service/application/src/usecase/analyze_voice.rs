use std::sync::Arc;

use async_trait::async_trait;
use scoring_domain::{
    AnalysisReport, AudioTranscoderPort, DomainError, DurationProbePort, TranscriberPort,
};

use crate::{
    AnalyzeVoiceRequest, AnalyzeVoiceResponse, ApplicationError, FeatureSummary,
    RequestWorkspace, WorkspaceFactory,
};

#[async_trait]
pub trait AnalyzeVoiceUseCase: Send + Sync {
    async fn analyze(
        &self,
        request: AnalyzeVoiceRequest,
    ) -> Result<AnalyzeVoiceResponse, ApplicationError>;
}

pub struct AnalyzeVoiceUseCaseImpl {
    transcoder: Arc<dyn AudioTranscoderPort>,
    duration_probe: Arc<dyn DurationProbePort>,
    transcriber: Arc<dyn TranscriberPort>,
    workspaces: WorkspaceFactory,
}

impl AnalyzeVoiceUseCaseImpl {
    pub fn new(
        transcoder: Arc<dyn AudioTranscoderPort>,
        duration_probe: Arc<dyn DurationProbePort>,
        transcriber: Arc<dyn TranscriberPort>,
        workspaces: WorkspaceFactory,
    ) -> Self {
        Self {
            transcoder,
            duration_probe,
            transcriber,
            workspaces,
        }
    }

    async fn run_pipeline(
        &self,
        workspace: &RequestWorkspace,
        request: &AnalyzeVoiceRequest,
    ) -> Result<AnalysisReport, DomainError> {
        let upload = workspace
            .store_upload(&request.audio, request.file_name.as_deref())
            .await?;
        let wav = self
            .transcoder
            .convert(&upload, &workspace.converted_artifact())
            .await?;
        tracing::debug!(workspace_id = %workspace.id(), wav = %wav.path().display(), "audio converted");

        let duration_seconds = self.duration_probe.probe(&wav).await?;
        tracing::debug!(workspace_id = %workspace.id(), duration_seconds, "audio duration probed");

        let transcript = self.transcriber.transcribe(&wav).await?;
        tracing::debug!(
            workspace_id = %workspace.id(),
            transcript_chars = transcript.chars().count(),
            "audio transcribed"
        );

        let (features, score_card) = vocal_features::analyze(&transcript, duration_seconds);
        Ok(AnalysisReport {
            transcript,
            features,
            score_card,
        })
    }
}

#[async_trait]
impl AnalyzeVoiceUseCase for AnalyzeVoiceUseCaseImpl {
    async fn analyze(
        &self,
        request: AnalyzeVoiceRequest,
    ) -> Result<AnalyzeVoiceResponse, ApplicationError> {
        let workspace = self.workspaces.create()?;
        tracing::debug!(
            workspace_id = %workspace.id(),
            upload_bytes = request.audio.len(),
            file_name = request.file_name.as_deref().unwrap_or("unnamed"),
            "starting voice analysis"
        );

        let outcome = self.run_pipeline(&workspace, &request).await;
        let workspace_id = workspace.id();
        if let Err(err) = workspace.close() {
            tracing::warn!(%workspace_id, error = %err, "request workspace cleanup failed");
        }
        let report = outcome?;

        tracing::debug!(
            %workspace_id,
            total_words = report.features.total_words,
            filler_count = report.features.filler_count,
            penalties = ?report.score_card.penalties,
            score = report.score_card.score,
            "voice analysis completed"
        );

        Ok(AnalyzeVoiceResponse {
            features: FeatureSummary::from(&report.features),
            score: report.score_card.score,
            transcript: report.transcript,
        })
    }
}
