use approx::assert_relative_eq;
use vocal_features::{analyze, PenaltyCategory, MAX_SCORE};

#[test]
fn pangram_over_a_minute_is_penalized_for_slow_speech() {
    let (features, card) = analyze("the quick brown fox jumps over the lazy dog", 60.0);

    assert_eq!(features.total_words, 9);
    assert_eq!(features.unique_words, 8);
    assert_relative_eq!(features.speech_rate_wpm, 9.0);
    assert_relative_eq!(features.lexical_diversity, 8.0 / 9.0);
    assert_relative_eq!(features.repetition_ratio, 1.0 / 9.0, epsilon = 1e-12);
    assert_relative_eq!(features.avg_sentence_length, 9.0);
    assert_eq!(features.filler_count, 0);

    assert_eq!(card.penalties.len(), 1);
    assert_eq!(card.penalties[0].category, PenaltyCategory::SpeechRate);
    assert_eq!(card.score, 80);
}

#[test]
fn empty_transcript_scores_only_zero_value_penalties() {
    let (features, card) = analyze("", 30.0);

    assert_eq!(features.total_words, 0);
    assert_eq!(features.speech_rate_wpm, 0.0);
    assert_eq!(features.lexical_diversity, 0.0);
    assert_eq!(features.avg_word_length, 0.0);
    assert_eq!(features.avg_sentence_length, 0.0);
    assert_eq!(features.filler_count, 0);
    assert_eq!(features.repetition_ratio, 0.0);
    assert_eq!(card.score, 35);
}

#[test]
fn heavy_filler_usage_costs_ten_points() {
    let transcript = "Um the committee reviewed quarterly budget projections carefully. \
                      like um several analysts questioned revenue assumptions yesterday. \
                      like um everyone agreed on revised targets afterwards";
    let (features, card) = analyze(transcript, 12.0);

    assert_eq!(features.total_words, 24);
    assert_eq!(features.filler_count, 5);
    assert_relative_eq!(features.speech_rate_wpm, 120.0);
    assert_eq!(card.penalties.len(), 1);
    assert_eq!(card.penalties[0].category, PenaltyCategory::FillerUsage);
    assert_eq!(card.score, 90);
}

#[test]
fn repeated_analysis_is_identical() {
    let transcript = "So, you know, we shipped it. It worked. Mostly.";
    assert_eq!(analyze(transcript, 7.5), analyze(transcript, 7.5));
}

#[test]
fn score_and_ratios_stay_in_bounds_across_inputs() {
    let transcripts = [
        "",
        "a",
        "a a a a a a a a",
        "um uh like um uh like you know you know",
        "Extraordinarily articulate presentations demonstrate considerable preparation.",
    ];
    for transcript in transcripts {
        for duration in [0.0, 0.5, 3.0, 60.0, 3600.0] {
            let (features, card) = analyze(transcript, duration);
            assert!(card.score <= MAX_SCORE);
            assert!((0.0..=1.0).contains(&features.lexical_diversity));
            assert!((0.0..=1.0).contains(&features.repetition_ratio));
            if features.total_words > 0 {
                assert_relative_eq!(
                    features.lexical_diversity + features.repetition_ratio,
                    1.0,
                    epsilon = 1e-12
                );
            }
        }
    }
}
