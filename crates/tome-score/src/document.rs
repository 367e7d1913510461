use crate::histogram::Histogram;
use crate::topk::{TopKSelector, WeightedResampler};
use tome_core::{FrequentTerm, Result, TomeError};
use tome_text::{Normalizer, StopFilter, StopWords};
use tracing::debug;

/// One document and everything derived from its body text.
///
/// Built in one pass by [`Document::prepare`] and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Document {
    title: String,
    body: String,
    tokens: Vec<String>,
    histogram: Histogram,
    resampled: Vec<String>,
}

impl Document {
    /// Normalize, stop-filter, count, and resample `body` down to its `k` most
    /// frequent tokens.
    ///
    /// Fails with `EmptyVocabulary` when nothing survives filtering, so no
    /// document with an empty corpus member can reach scoring.
    pub fn prepare(title: &str, body: String, stop_words: &StopWords, k: usize) -> Result<Self> {
        let normalized = Normalizer::normalize(&body);
        let tokens = StopFilter::new(stop_words).filter(&normalized);
        let histogram = Histogram::from_tokens(&tokens);

        if histogram.is_empty() {
            return Err(TomeError::EmptyVocabulary(format!(
                "{title}: no tokens left after stop-word filtering"
            )));
        }

        let top = TopKSelector::new(k).select(&histogram);
        let resampled = WeightedResampler::resample(&top, &histogram);

        if resampled.is_empty() {
            return Err(TomeError::EmptyVocabulary(format!(
                "{title}: resampled sequence is empty (k = {k})"
            )));
        }

        debug!(
            title,
            tokens = tokens.len(),
            distinct = histogram.len(),
            resampled = resampled.len(),
            "prepared document"
        );

        Ok(Self {
            title: title.to_string(),
            body,
            tokens,
            histogram,
            resampled,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body text the document was built from.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Stop-filtered tokens in source order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    /// The top-K resampled sequence contributed to the corpus.
    pub fn resampled(&self) -> &[String] {
        &self.resampled
    }

    /// The `n` most frequent tokens with their counts.
    pub fn top_terms(&self, n: usize) -> Vec<FrequentTerm> {
        TopKSelector::new(n)
            .select(&self.histogram)
            .into_iter()
            .map(|(term, count)| FrequentTerm {
                term: term.to_string(),
                count,
            })
            .collect()
    }
}
