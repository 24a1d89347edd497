mod analyze_voice;
mod error;
mod service;

pub use analyze_voice::{AnalyzeVoiceCommand, AnalyzeVoiceCommandHandler};
pub use error::CommandError;
pub use service::ScoringCommandService;

use async_trait::async_trait;
use uuid::Uuid;

pub trait Command: Send + 'static {
    type Result: Send;

    fn command_type(&self) -> &'static str;
    fn command_id(&self) -> Uuid;
    fn validate(&self) -> Result<(), CommandError>;
}

#[async_trait]
pub trait CommandHandler<C: Command>: Send + Sync {
    async fn handle(&self, command: C) -> Result<C::Result, CommandError>;
}
