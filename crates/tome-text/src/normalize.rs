/// Characters stripped from both ends of every whitespace-separated piece.
///
/// The ASCII punctuation set. Digits, letters, and anything inside a word
/// (`well-known`, `don't`) are left alone.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

fn is_punctuation(c: char) -> bool {
    PUNCTUATION.contains(c)
}

/// Turns raw body text into an ordered sequence of tokens.
pub struct Normalizer;

impl Normalizer {
    /// Lowercase, split on whitespace, strip edge punctuation, drop empties.
    pub fn normalize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split_whitespace()
            .map(|piece| piece.trim_matches(is_punctuation))
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }
}
