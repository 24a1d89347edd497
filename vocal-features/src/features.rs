use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::NormalizedTranscript;

/// Disfluencies counted by [`FeatureSet::filler_count`]. Multi-word entries match contiguous tokens.
pub const FILLER_VOCABULARY: &[&str] = &["um", "uh", "like", "you know"];

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureSet {
    pub total_words: usize,
    pub unique_words: usize,
    pub duration_seconds: f64,
    pub speech_rate_wpm: f64,
    pub lexical_diversity: f64,
    pub avg_word_length: f64,
    pub avg_sentence_length: f64,
    pub filler_count: usize,
    pub repetition_ratio: f64,
}

pub fn extract_features(transcript: &NormalizedTranscript, duration_seconds: f64) -> FeatureSet {
    let tokens = &transcript.tokens;
    let total_words = tokens.len();
    let duration_seconds = duration_seconds.max(0.0);
    let duration_minutes = duration_seconds / 60.0;

    let speech_rate_wpm = if duration_minutes > 0.0 {
        total_words as f64 / duration_minutes
    } else {
        0.0
    };

    let unique_words = tokens.iter().map(String::as_str).collect::<HashSet<_>>().len();
    let (lexical_diversity, avg_word_length) = if total_words > 0 {
        let characters: usize = tokens.iter().map(|token| token.chars().count()).sum();
        (
            unique_words as f64 / total_words as f64,
            characters as f64 / total_words as f64,
        )
    } else {
        (0.0, 0.0)
    };

    let avg_sentence_length = if transcript.sentences.is_empty() {
        0.0
    } else {
        total_words as f64 / transcript.sentences.len() as f64
    };

    let repetition_ratio = if total_words > 0 {
        1.0 - lexical_diversity
    } else {
        0.0
    };

    FeatureSet {
        total_words,
        unique_words,
        duration_seconds,
        speech_rate_wpm,
        lexical_diversity,
        avg_word_length,
        avg_sentence_length,
        filler_count: count_fillers(tokens),
        repetition_ratio,
    }
}

fn count_fillers(tokens: &[String]) -> usize {
    FILLER_VOCABULARY
        .iter()
        .map(|filler| {
            let phrase: Vec<&str> = filler.split_whitespace().collect();
            tokens
                .windows(phrase.len())
                .filter(|window| window.iter().zip(&phrase).all(|(token, word)| token == word))
                .count()
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::extract_features;
    use crate::normalize;

    #[test]
    fn zero_duration_yields_zero_speech_rate() {
        let features = extract_features(&normalize("one two three"), 0.0);
        assert_eq!(features.speech_rate_wpm, 0.0);
        assert_eq!(features.total_words, 3);
    }

    #[test]
    fn speech_rate_scales_with_duration() {
        let features = extract_features(&normalize("one two three four five six"), 30.0);
        assert_relative_eq!(features.speech_rate_wpm, 12.0);
    }

    #[test]
    fn diversity_and_repetition_are_complementary() {
        let features = extract_features(&normalize("go go go stop"), 10.0);
        assert_eq!(features.unique_words, 2);
        assert_relative_eq!(features.lexical_diversity, 0.5);
        assert_relative_eq!(features.lexical_diversity + features.repetition_ratio, 1.0);
    }

    #[test]
    fn diversity_ignores_case() {
        let features = extract_features(&normalize("Word word WORD"), 10.0);
        assert_eq!(features.unique_words, 1);
    }

    #[test]
    fn word_length_counts_characters_not_bytes() {
        let features = extract_features(&normalize("été ça"), 10.0);
        assert_relative_eq!(features.avg_word_length, 2.5);
    }

    #[test]
    fn sentence_length_uses_period_split() {
        let features = extract_features(&normalize("one two three. four five. six"), 10.0);
        assert_relative_eq!(features.avg_sentence_length, 2.0);
    }

    #[test]
    fn single_word_fillers_match_whole_tokens() {
        let features = extract_features(&normalize("Um I like likes uh um, like"), 10.0);
        assert_eq!(features.filler_count, 4);
    }

    #[test]
    fn you_know_matches_as_a_bigram() {
        let features = extract_features(&normalize("you know it is, You Know, you know"), 10.0);
        assert_eq!(features.filler_count, 2);
    }

    #[test]
    fn you_know_split_by_other_words_is_not_counted() {
        let features = extract_features(&normalize("you really know"), 10.0);
        assert_eq!(features.filler_count, 0);
    }

    #[test]
    fn negative_duration_is_treated_as_zero() {
        let features = extract_features(&normalize("hello"), -3.0);
        assert_eq!(features.duration_seconds, 0.0);
        assert_eq!(features.speech_rate_wpm, 0.0);
    }
}
