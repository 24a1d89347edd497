mod analyze_voice;

pub use analyze_voice::{AnalyzeVoiceRequest, AnalyzeVoiceResponse, FeatureSummary};
