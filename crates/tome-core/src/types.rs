use serde::{Deserialize, Serialize};
use std::fmt;

/// A document in the run catalog: a title plus where its raw text comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSpec {
    pub title: String,
    pub url: String,
    /// Cache file name; defaults to `<title>.txt`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache_key: Option<String>,
}

impl SourceSpec {
    pub fn new(title: &str, url: &str) -> Self {
        Self {
            title: title.to_string(),
            url: url.to_string(),
            cache_key: None,
        }
    }

    /// The cache key used to look up or store this document's raw text.
    pub fn cache_key(&self) -> String {
        self.cache_key
            .clone()
            .unwrap_or_else(|| format!("{}.txt", self.title))
    }
}

/// A token with its occurrence count in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequentTerm {
    pub term: String,
    pub count: u32,
}

/// A token with its TF-IDF score in one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredTerm {
    pub term: String,
    pub score: f64,
}

/// Polarity of a piece of text.
///
/// `compound` is normalized to [-1, 1]; the three proportions sum to 1
/// (or are all zero for text with no scorable words).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Sentiment {
    pub negative: f64,
    pub neutral: f64,
    pub positive: f64,
    pub compound: f64,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "neg: {:.3}, neu: {:.3}, pos: {:.3}, compound: {:.4}",
            self.negative, self.neutral, self.positive, self.compound
        )
    }
}

/// Run mode of the batch driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Most frequent tokens per document.
    Frequency,
    /// Highest TF-IDF tokens per document against the whole corpus.
    Tfidf,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frequency => "frequency",
            Self::Tfidf => "tfidf",
        }
    }

    /// Suffix used for word-cloud artifacts, e.g. `Frankenstein_wf`.
    pub fn artifact_suffix(&self) -> &'static str {
        match self {
            Self::Frequency => "wf",
            Self::Tfidf => "tfidf",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
