pub mod command;
pub mod dto;
pub mod error;
pub mod usecase;
pub mod workspace;

pub use command::*;
pub use dto::*;
pub use error::*;
pub use usecase::{AnalyzeVoiceUseCase, AnalyzeVoiceUseCaseImpl};
pub use workspace::{RequestWorkspace, WorkspaceFactory};
