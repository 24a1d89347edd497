#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NormalizedTranscript {
    /// Lower-cased, whitespace separated words in transcript order.
    pub tokens: Vec<String>,
    /// Period separated fragments of the original text, blank fragments dropped.
    pub sentences: Vec<String>,
}

impl NormalizedTranscript {
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

pub fn normalize(transcript: &str) -> NormalizedTranscript {
    let tokens = transcript
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    let sentences = transcript
        .split('.')
        .filter(|fragment| !fragment.trim().is_empty())
        .map(str::to_string)
        .collect();

    NormalizedTranscript { tokens, sentences }
}
