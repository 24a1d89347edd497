use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Error};
use axum::Router;
use scoring_application::{
    AnalyzeVoiceUseCase, AnalyzeVoiceUseCaseImpl, ScoringCommandService, WorkspaceFactory,
};
use scoring_configuration::{AppConfig, ServerConfig};
use scoring_domain::{AudioTranscoderPort, DurationProbePort, TranscriberPort};
use scoring_http_server::{create_router, serve_http, AppState};
use scoring_infra::{FfmpegTranscoder, FfprobeDurationProbe, ToolRunner, WhisperCliTranscriber};

pub async fn build_and_run(config: AppConfig, server_config: ServerConfig) -> Result<(), Error> {
    let app = Application::new(config)?;
    app.run(server_config).await
}

pub struct Application {
    pub config: AppConfig,
    pub state: AppState,
}

impl Application {
    pub fn new(config: AppConfig) -> Result<Self, Error> {
        let tools = &config.service.tools;
        tracing::info!(
            ffmpeg = %tools.ffmpeg_path,
            ffprobe = %tools.ffprobe_path,
            whisper = %tools.whisper_path,
            model_path = %tools.whisper_model_path,
            timeout_ms = tools.timeout_ms,
            "initializing voice scoring application"
        );
        if !Path::new(&tools.whisper_model_path).is_file() {
            tracing::warn!(
                model_path = %tools.whisper_model_path,
                "whisper model not found; transcription requests will fail until it is installed"
            );
        }
        if let Some(root) = &config.service.workspace.root_dir {
            if !root.is_dir() {
                return Err(anyhow!(
                    "workspace root `{}` is not a directory",
                    root.display()
                ));
            }
        }

        let runner = ToolRunner::new(Duration::from_millis(tools.timeout_ms.max(1)));
        let transcoder: Arc<dyn AudioTranscoderPort> = Arc::new(FfmpegTranscoder::new(
            tools.ffmpeg_path.clone(),
            tools.sample_rate_hz,
            runner.clone(),
        ));
        let duration_probe: Arc<dyn DurationProbePort> = Arc::new(FfprobeDurationProbe::new(
            tools.ffprobe_path.clone(),
            runner.clone(),
        ));
        let transcriber: Arc<dyn TranscriberPort> = Arc::new(WhisperCliTranscriber::new(
            tools.whisper_path.clone(),
            tools.whisper_model_path.clone(),
            runner,
        ));

        let usecase: Arc<dyn AnalyzeVoiceUseCase> = Arc::new(AnalyzeVoiceUseCaseImpl::new(
            transcoder,
            duration_probe,
            transcriber,
            WorkspaceFactory::new(config.service.workspace.root_dir.clone()),
        ));
        let command_service = Arc::new(ScoringCommandService::new(usecase));
        let state = AppState::new(command_service);

        Ok(Self { config, state })
    }

    pub fn router(&self) -> Router {
        create_router(self.state.clone(), self.config.service.upload.max_bytes)
    }

    pub async fn run(self, server_config: ServerConfig) -> Result<(), Error> {
        tracing::info!(
            host = %server_config.host,
            port = server_config.port,
            "starting voice scoring HTTP server"
        );

        serve_http(self.router(), &server_config)
            .await
            .map_err(|err| anyhow!("server startup failed: {err}"))
    }
}
