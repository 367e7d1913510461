use tome_core::Sentiment;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Scores the polarity of a string.
pub trait SentimentAnalyzer {
    fn polarity(&self, text: &str) -> Sentiment;

    /// Score a token list by joining it with spaces.
    fn polarity_of_tokens(&self, tokens: &[String]) -> Sentiment {
        self.polarity(&tokens.join(" "))
    }
}

/// VADER lexicon and rule set.
///
/// Covers the full valence lexicon plus boosters, capitalisation emphasis,
/// "but" shifts, and the three-word negation window.
pub struct LexiconAnalyzer {
    vader: SentimentIntensityAnalyzer<'static>,
}

impl LexiconAnalyzer {
    pub fn new() -> Self {
        Self {
            vader: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for LexiconAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentAnalyzer for LexiconAnalyzer {
    fn polarity(&self, text: &str) -> Sentiment {
        if text.trim().is_empty() {
            return Sentiment::default();
        }
        let scores = self.vader.polarity_scores(text);
        let score = |key: &str| scores.get(key).copied().unwrap_or(0.0);
        Sentiment {
            negative: round3(score("neg")),
            neutral: round3(score("neu")),
            positive: round3(score("pos")),
            compound: round4(score("compound")),
        }
    }
}

fn round3(x: f64) -> f64 {
    (x * 1000.0).round() / 1000.0
}

fn round4(x: f64) -> f64 {
    (x * 10000.0).round() / 10000.0
}
