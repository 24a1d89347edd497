use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;
use validator::Validate;

use super::{Command, CommandError, CommandHandler};
use crate::{AnalyzeVoiceRequest, AnalyzeVoiceResponse, AnalyzeVoiceUseCase};

#[derive(Debug, Clone)]
pub struct AnalyzeVoiceCommand {
    id: Uuid,
    pub request: AnalyzeVoiceRequest,
}

impl AnalyzeVoiceCommand {
    pub fn new(request: AnalyzeVoiceRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            request,
        }
    }
}

impl Command for AnalyzeVoiceCommand {
    type Result = AnalyzeVoiceResponse;

    fn command_type(&self) -> &'static str {
        "analyze_voice"
    }

    fn command_id(&self) -> Uuid {
        self.id
    }

    fn validate(&self) -> Result<(), CommandError> {
        self.request
            .validate()
            .map_err(|err| CommandError::validation("invalid_request", err.to_string()))
    }
}

pub struct AnalyzeVoiceCommandHandler {
    usecase: Arc<dyn AnalyzeVoiceUseCase>,
}

impl AnalyzeVoiceCommandHandler {
    pub fn new(usecase: Arc<dyn AnalyzeVoiceUseCase>) -> Self {
        Self { usecase }
    }
}

#[async_trait]
impl CommandHandler<AnalyzeVoiceCommand> for AnalyzeVoiceCommandHandler {
    async fn handle(
        &self,
        command: AnalyzeVoiceCommand,
    ) -> Result<AnalyzeVoiceResponse, CommandError> {
        self.usecase
            .analyze(command.request)
            .await
            .map_err(CommandError::from)
    }
}
