use std::sync::Arc;

use super::{AnalyzeVoiceCommand, AnalyzeVoiceCommandHandler, Command, CommandError, CommandHandler};
use crate::{AnalyzeVoiceResponse, AnalyzeVoiceUseCase};

/// Entry point the transport layer dispatches commands through.
pub struct ScoringCommandService {
    analyze_voice: Arc<dyn CommandHandler<AnalyzeVoiceCommand>>,
}

impl ScoringCommandService {
    pub fn new(usecase: Arc<dyn AnalyzeVoiceUseCase>) -> Self {
        Self::with_handler(Arc::new(AnalyzeVoiceCommandHandler::new(usecase)))
    }

    pub fn with_handler(analyze_voice: Arc<dyn CommandHandler<AnalyzeVoiceCommand>>) -> Self {
        Self { analyze_voice }
    }

    pub async fn analyze_voice(
        &self,
        command: AnalyzeVoiceCommand,
    ) -> Result<AnalyzeVoiceResponse, CommandError> {
        execute(self.analyze_voice.as_ref(), command).await
    }
}

async fn execute<C: Command>(
    handler: &dyn CommandHandler<C>,
    command: C,
) -> Result<C::Result, CommandError> {
    let command_type = command.command_type();
    let command_id = command.command_id();

    if let Err(error) = command.validate() {
        tracing::warn!(%command_id, command_type, error = %error, "command rejected");
        return Err(error);
    }

    tracing::debug!(%command_id, command_type, "executing command");
    let result = handler.handle(command).await;
    if let Err(error) = &result {
        tracing::debug!(%command_id, command_type, code = error.code(), "command failed");
    }
    result
}
