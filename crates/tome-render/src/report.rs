use tome_core::{FrequentTerm, Mode, ScoredTerm, Sentiment};

/// Selected terms for one document.
#[derive(Debug, Clone, PartialEq)]
pub enum Ranking {
    Frequent(Vec<FrequentTerm>),
    Scored(Vec<ScoredTerm>),
}

impl Ranking {
    pub fn terms(&self) -> Vec<String> {
        match self {
            Self::Frequent(terms) => terms.iter().map(|t| t.term.clone()).collect(),
            Self::Scored(terms) => terms.iter().map(|t| t.term.clone()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Frequent(terms) => terms.len(),
            Self::Scored(terms) => terms.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Output for one successfully processed document.
#[derive(Debug, Clone)]
pub struct DocumentReport {
    pub title: String,
    pub ranking: Ranking,
    /// Sentiment of the selected terms joined with spaces.
    pub selection_sentiment: Sentiment,
    /// Sentiment of the whole body text (frequency mode only).
    pub document_sentiment: Option<Sentiment>,
}

/// A document that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub title: String,
    pub reason: String,
}

/// Everything a run produces, in catalog order.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub mode: Mode,
    /// K in frequency mode, N in tfidf mode.
    pub limit: usize,
    pub fingerprint: Option<String>,
    pub documents: Vec<DocumentReport>,
    pub failures: Vec<Failure>,
}

impl RunReport {
    pub fn new(mode: Mode, limit: usize) -> Self {
        Self {
            mode,
            limit,
            fingerprint: None,
            documents: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn fail(&mut self, title: &str, reason: impl ToString) {
        self.failures.push(Failure {
            title: title.to_string(),
            reason: reason.to_string(),
        });
    }

    /// True when every document failed.
    pub fn all_failed(&self) -> bool {
        self.documents.is_empty() && !self.failures.is_empty()
    }
}
