//! Term statistics: histograms, top-K resampling, TF-IDF scoring, ranking,
//! and sentiment.

pub mod corpus;
pub mod document;
pub mod histogram;
pub mod rank;
pub mod sentiment;
pub mod tfidf;
pub mod topk;

pub use corpus::{Corpus, CorpusBuilder, Member};
pub use document::Document;
pub use histogram::Histogram;
pub use rank::Ranker;
pub use sentiment::{LexiconAnalyzer, SentimentAnalyzer};
pub use tfidf::{ScoreTable, TfidfScorer};
pub use topk::{TopKSelector, WeightedResampler};

#[cfg(test)]
mod tests {
    use super::*;
    use tome_text::StopWords;

    fn prepare(title: &str, body: &str, k: usize) -> Document {
        Document::prepare(title, body.to_string(), &StopWords::english(), k).unwrap()
    }

    #[test]
    fn end_to_end_ranking() {
        let docs = [
            prepare("Monster", "creature creature creature fire ice night", 3),
            prepare("Garden", "serpent serpent fruit garden night night", 3),
            prepare("Voyage", "ice ice ship sailor night", 3),
        ];

        let mut builder = CorpusBuilder::new(docs.iter().map(|d| d.title()));
        for doc in &docs {
            builder.add_document(doc).unwrap();
        }
        let corpus = builder.freeze().unwrap();
        let scorer = TfidfScorer::new(&corpus);

        let table = scorer.score_document("Monster").unwrap();
        let ranked = Ranker::new(2).rank(&table);
        assert_eq!(ranked.len(), 2);
        // creature is unique to Monster and dominates its tf
        assert_eq!(ranked[0].term, "creature");
        assert!(ranked[0].score > 0.0);
    }

    #[test]
    fn sum_of_histogram_matches_filtered_length() {
        let doc = prepare("H", "It was a dark and stormy night; the rain fell in torrents.", 100);
        assert_eq!(doc.histogram().total(), doc.tokens().len() as u64);
    }
}
