use serde::{Deserialize, Serialize};
use validator::Validate;
use vocal_features::FeatureSet;

#[derive(Clone, Deserialize, Validate)]
pub struct AnalyzeVoiceRequest {
    /// Only used to pick the stored extension; any value is accepted.
    pub file_name: Option<String>,
    #[validate(length(min = 1, message = "audio_file must contain at least one byte"))]
    pub audio: Vec<u8>,
}

impl std::fmt::Debug for AnalyzeVoiceRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyzeVoiceRequest")
            .field("file_name", &self.file_name)
            .field("audio_bytes", &self.audio.len())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeVoiceResponse {
    pub transcript: String,
    pub features: FeatureSummary,
    pub score: u32,
}

/// Response view of a [`FeatureSet`]; fractional values rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureSummary {
    pub duration_seconds: f64,
    pub speech_rate_wpm: f64,
    pub lexical_diversity: f64,
    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
    pub filler_count: usize,
    pub repetition_ratio: f64,
}

impl From<&FeatureSet> for FeatureSummary {
    fn from(features: &FeatureSet) -> Self {
        Self {
            duration_seconds: round2(features.duration_seconds),
            speech_rate_wpm: round2(features.speech_rate_wpm),
            lexical_diversity: round2(features.lexical_diversity),
            avg_word_length: round2(features.avg_word_length),
            avg_sentence_length: round2(features.avg_sentence_length),
            filler_count: features.filler_count,
            repetition_ratio: round2(features.repetition_ratio),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
