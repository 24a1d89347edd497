use serde::{Deserialize, Serialize};

use crate::FeatureSet;

pub const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PenaltyCategory {
    SpeechRate,
    LexicalDiversity,
    SentenceLength,
    WordLength,
    FillerUsage,
    Repetition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Penalty {
    pub category: PenaltyCategory,
    pub points: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreCard {
    pub score: u32,
    /// Penalties in the order they were applied.
    pub penalties: Vec<Penalty>,
}

/// Applies the threshold ladders to unrounded features. At most one penalty per category.
pub fn score(features: &FeatureSet) -> ScoreCard {
    let rules: [(PenaltyCategory, u32); 6] = [
        (
            PenaltyCategory::SpeechRate,
            ladder(features.speech_rate_wpm, &[(90.0, 20), (110.0, 10)]),
        ),
        (
            PenaltyCategory::LexicalDiversity,
            ladder(features.lexical_diversity, &[(0.4, 20), (0.5, 10)]),
        ),
        (
            PenaltyCategory::SentenceLength,
            ladder(features.avg_sentence_length, &[(5.0, 15)]),
        ),
        (
            PenaltyCategory::WordLength,
            ladder(features.avg_word_length, &[(3.0, 10)]),
        ),
        (
            PenaltyCategory::FillerUsage,
            if features.filler_count > 3 { 10 } else { 0 },
        ),
        (
            PenaltyCategory::Repetition,
            if features.repetition_ratio > 0.5 { 10 } else { 0 },
        ),
    ];

    let penalties: Vec<Penalty> = rules
        .into_iter()
        .filter(|(_, points)| *points > 0)
        .map(|(category, points)| Penalty { category, points })
        .collect();
    let deducted: u32 = penalties.iter().map(|penalty| penalty.points).sum();

    ScoreCard {
        score: MAX_SCORE.saturating_sub(deducted),
        penalties,
    }
}

/// First step whose bound is strictly above `value` wins; steps are ordered by bound.
fn ladder(value: f64, steps: &[(f64, u32)]) -> u32 {
    steps
        .iter()
        .find(|(bound, _)| value < *bound)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::{score, PenaltyCategory, MAX_SCORE};
    use crate::FeatureSet;

    fn strong() -> FeatureSet {
        FeatureSet {
            total_words: 40,
            unique_words: 30,
            duration_seconds: 20.0,
            speech_rate_wpm: 120.0,
            lexical_diversity: 0.75,
            avg_word_length: 4.5,
            avg_sentence_length: 10.0,
            filler_count: 1,
            repetition_ratio: 0.25,
        }
    }

    #[test]
    fn strong_features_keep_full_score() {
        let card = score(&strong());
        assert_eq!(card.score, MAX_SCORE);
        assert!(card.penalties.is_empty());
    }

    #[test]
    fn band_edges_carry_no_penalty() {
        let features = FeatureSet {
            speech_rate_wpm: 110.0,
            lexical_diversity: 0.5,
            avg_sentence_length: 5.0,
            avg_word_length: 3.0,
            filler_count: 3,
            repetition_ratio: 0.5,
            ..strong()
        };
        assert_eq!(score(&features).score, MAX_SCORE);
    }

    #[test]
    fn speech_rate_ladder_is_exclusive() {
        let slow = FeatureSet { speech_rate_wpm: 89.9, ..strong() };
        let moderate = FeatureSet { speech_rate_wpm: 95.0, ..strong() };
        assert_eq!(score(&slow).score, 80);
        assert_eq!(score(&moderate).score, 90);
    }

    #[test]
    fn lexical_diversity_ladder_is_exclusive() {
        let poor = FeatureSet { lexical_diversity: 0.3, ..strong() };
        let fair = FeatureSet { lexical_diversity: 0.45, ..strong() };
        assert_eq!(score(&poor).score, 80);
        assert_eq!(score(&fair).score, 90);
    }

    #[test]
    fn penalties_are_reported_in_rule_order() {
        let features = FeatureSet {
            speech_rate_wpm: 50.0,
            filler_count: 7,
            repetition_ratio: 0.6,
            lexical_diversity: 0.4,
            ..strong()
        };
        let card = score(&features);
        let categories: Vec<_> = card.penalties.iter().map(|p| p.category).collect();
        assert_eq!(
            categories,
            vec![
                PenaltyCategory::SpeechRate,
                PenaltyCategory::LexicalDiversity,
                PenaltyCategory::FillerUsage,
                PenaltyCategory::Repetition,
            ]
        );
        assert_eq!(card.score, 100 - 20 - 10 - 10 - 10);
    }

    #[test]
    fn every_penalty_at_once_stays_in_bounds() {
        let features = FeatureSet {
            speech_rate_wpm: 0.0,
            lexical_diversity: 0.0,
            avg_sentence_length: 0.0,
            avg_word_length: 0.0,
            filler_count: 10,
            repetition_ratio: 0.9,
            ..strong()
        };
        let card = score(&features);
        assert_eq!(card.penalties.len(), 6);
        assert_eq!(card.score, 15);
        assert!(card.score <= MAX_SCORE);
    }
}
