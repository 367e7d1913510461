use crate::tfidf::ScoreTable;
use std::cmp::Ordering;
use tome_core::ScoredTerm;

/// Orders a score table and keeps the top `n` entries.
pub struct Ranker {
    n: usize,
}

impl Ranker {
    pub fn new(n: usize) -> Self {
        Self { n }
    }

    /// Score descending. Equal scores keep the table's order, then fall back
    /// to lexical token order.
    pub fn rank(&self, table: &ScoreTable) -> Vec<ScoredTerm> {
        let mut ranked: Vec<(usize, &str, f64)> = table
            .iter()
            .enumerate()
            .map(|(i, (term, score))| (i, term, score))
            .collect();

        ranked.sort_by(|a, b| {
            b.2.partial_cmp(&a.2)
                .unwrap_or(Ordering::Equal)
                .then(a.0.cmp(&b.0))
                .then_with(|| a.1.cmp(b.1))
        });

        ranked
            .into_iter()
            .take(self.n)
            .map(|(_, term, score)| ScoredTerm {
                term: term.to_string(),
                score,
            })
            .collect()
    }
}
