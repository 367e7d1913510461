use crate::corpus::{Corpus, Member};
use tome_core::{Result, TomeError};

/// Token → TF-IDF score for one document, in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreTable {
    entries: Vec<(String, f64)>,
}

impl ScoreTable {
    pub fn get(&self, term: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(t, _)| t == term)
            .map(|(_, s)| *s)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(t, s)| (t.as_str(), *s))
    }
}

impl FromIterator<(String, f64)> for ScoreTable {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// TF-IDF scorer over a frozen corpus.
///
/// tf  = count(w, d) / len(d)
/// idf = ln(N / (1 + df(w)))
///
/// The smoothing makes idf zero or negative for terms found in most documents.
pub struct TfidfScorer<'c> {
    corpus: &'c Corpus,
}

impl<'c> TfidfScorer<'c> {
    pub fn new(corpus: &'c Corpus) -> Self {
        Self { corpus }
    }

    /// Term frequency of `term` in `member`.
    pub fn tf(&self, term: &str, member: &Member) -> Result<f64> {
        if member.is_empty() {
            return Err(TomeError::EmptyVocabulary(format!(
                "{}: empty resampled sequence",
                member.title
            )));
        }
        Ok(member.counts.count(term) as f64 / member.len() as f64)
    }

    /// Inverse document frequency of `term` across the corpus.
    pub fn idf(&self, term: &str) -> f64 {
        let n = self.corpus.len() as f64;
        let df = self.corpus.doc_frequency(term) as f64;
        (n / (1.0 + df)).ln()
    }

    /// Score every distinct term of the member titled `title`.
    pub fn score_document(&self, title: &str) -> Result<ScoreTable> {
        let member = self.corpus.member(title).ok_or_else(|| {
            TomeError::Config(format!("{title} is not a member of the corpus"))
        })?;
        self.score_member(member)
    }

    pub fn score_member(&self, member: &Member) -> Result<ScoreTable> {
        let mut table = Vec::with_capacity(member.counts.len());
        for (term, _) in member.counts.iter() {
            let score = self.tf(term, member)? * self.idf(term);
            table.push((term.to_string(), score));
        }
        Ok(ScoreTable { entries: table })
    }
}
