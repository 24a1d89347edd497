//! Transcript features and the communication quality score derived from them.
//!
//! Everything here is pure: no I/O, no shared state, safe to call from any task.

pub mod features;
pub mod normalizer;
pub mod scorer;

pub use features::{extract_features, FeatureSet, FILLER_VOCABULARY};
pub use normalizer::{normalize, NormalizedTranscript};
pub use scorer::{score, Penalty, PenaltyCategory, ScoreCard, MAX_SCORE};

/// Normalizes `transcript`, extracts its features against `duration_seconds` and scores them.
pub fn analyze(transcript: &str, duration_seconds: f64) -> (FeatureSet, ScoreCard) {
    let normalized = normalize(transcript);
    let features = extract_features(&normalized, duration_seconds);
    let card = score(&features);
    (features, card)
}
