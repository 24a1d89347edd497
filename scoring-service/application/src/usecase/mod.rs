mod analyze_voice;

pub use analyze_voice::{AnalyzeVoiceUseCase, AnalyzeVoiceUseCaseImpl};
