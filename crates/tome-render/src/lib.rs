//! JSONL, human-readable, and word-cloud output.

mod cloud;
mod human;
mod jsonl;
mod report;

pub use cloud::{CloudRenderer, ImageRenderer, WeightFileRenderer};
pub use human::HumanWriter;
pub use jsonl::JsonlWriter;
pub use report::{DocumentReport, Failure, Ranking, RunReport};

#[cfg(test)]
mod tests {
    use super::*;
    use tome_core::{FrequentTerm, Mode, ScoredTerm, Sentiment};

    fn tfidf_report() -> RunReport {
        let mut report = RunReport::new(Mode::Tfidf, 2);
        report.fingerprint = Some("ab".repeat(32));
        report.documents.push(DocumentReport {
            title: "Frankenstein".to_string(),
            ranking: Ranking::Scored(vec![
                ScoredTerm { term: "elizabeth".to_string(), score: 0.012345678912345 },
                ScoredTerm { term: "clerval".to_string(), score: 0.01 },
            ]),
            selection_sentiment: Sentiment::default(),
            document_sentiment: None,
        });
        report.fail("Paradise_Lost", "source unavailable: timeout");
        report
    }

    fn frequency_report() -> RunReport {
        let mut report = RunReport::new(Mode::Frequency, 2);
        report.documents.push(DocumentReport {
            title: "Frankenstein".to_string(),
            ranking: Ranking::Frequent(vec![
                FrequentTerm { term: "man".to_string(), count: 130 },
                FrequentTerm { term: "life".to_string(), count: 114 },
            ]),
            selection_sentiment: Sentiment::default(),
            document_sentiment: Some(Sentiment {
                negative: 0.1,
                neutral: 0.7,
                positive: 0.2,
                compound: 0.99,
            }),
        });
        report
    }

    // --- JsonlWriter ---

    #[test]
    fn jsonl_every_line_is_json() {
        let output = JsonlWriter::render(&tfidf_report()).unwrap();
        let lines: Vec<&str> = output.trim().lines().collect();
        assert_eq!(lines.len(), 4);
        for line in &lines {
            let parsed: Result<serde_json::Value, _> = serde_json::from_str(line);
            assert!(parsed.is_ok(), "Invalid JSON: {line}");
        }
    }

    #[test]
    fn jsonl_header_and_footer() {
        let output = JsonlWriter::render(&tfidf_report()).unwrap();
        let lines: Vec<&str> = output.trim().lines().collect();

        let header: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(header["Version"], "1");
        assert_eq!(header["Mode"], "tfidf");
        assert_eq!(header["Limit"], 2);
        assert_eq!(header["Fingerprint"].as_str().unwrap().len(), 64);

        let footer: serde_json::Value = serde_json::from_str(lines[3]).unwrap();
        assert_eq!(footer["TotalDocuments"], 2);
        assert_eq!(footer["FailedDocuments"], 1);
    }

    #[test]
    fn jsonl_document_and_failure_entries() {
        let output = JsonlWriter::render(&tfidf_report()).unwrap();
        let lines: Vec<&str> = output.trim().lines().collect();

        let doc: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(doc["Title"], "Frankenstein");
        assert_eq!(doc["Scored"][0]["term"], "elizabeth");
        assert!(doc.get("Frequent").is_none());
        assert!(doc.get("DocumentSentiment").is_none());

        let failure: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
        assert_eq!(failure["Title"], "Paradise_Lost");
        assert!(failure["Error"].as_str().unwrap().contains("unavailable"));
    }

    #[test]
    fn jsonl_frequency_mode_has_counts() {
        let output = JsonlWriter::render(&frequency_report()).unwrap();
        let lines: Vec<&str> = output.trim().lines().collect();
        let header: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert!(header.get("Fingerprint").is_none());
        let doc: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(doc["Frequent"][1]["count"], 114);
        assert_eq!(doc["DocumentSentiment"]["compound"], 0.99);
    }

    // --- HumanWriter ---

    #[test]
    fn human_tfidf_lists_scores() {
        let output = HumanWriter::render(&tfidf_report()).unwrap();
        assert!(output.contains("Top 2 Words in Frankenstein with TF-IDF Scores:"));
        assert!(output.contains("\tWord: elizabeth, TF-IDF: 0.0123456789\n"));
        assert!(output.contains("elizabeth, clerval"));
        assert!(output.contains("Failed documents:\n  Paradise_Lost: source unavailable"));
    }

    #[test]
    fn human_whole_scores_keep_a_decimal() {
        let mut report = RunReport::new(Mode::Tfidf, 3);
        report.documents.push(DocumentReport {
            title: "Monster".to_string(),
            ranking: Ranking::Scored(vec![
                ScoredTerm { term: "creature".to_string(), score: 1.0 },
                ScoredTerm { term: "ice".to_string(), score: 0.0 },
                ScoredTerm { term: "night".to_string(), score: -0.25 },
            ]),
            selection_sentiment: Sentiment::default(),
            document_sentiment: None,
        });
        let output = HumanWriter::render(&report).unwrap();
        assert!(output.contains("\tWord: creature, TF-IDF: 1.0\n"));
        assert!(output.contains("\tWord: ice, TF-IDF: 0.0\n"));
        assert!(output.contains("\tWord: night, TF-IDF: -0.25\n"));
    }

    #[test]
    fn human_frequency_includes_document_sentiment() {
        let output = HumanWriter::render(&frequency_report()).unwrap();
        assert!(output.contains("Top 2 Words in Frankenstein:\nman, life\n"));
        assert!(output.contains("Sentiment of Frankenstein:\nneg: 0.100"));
        assert!(!output.contains("TF-IDF"));
        assert!(!output.contains("Failed documents"));
    }

    // --- RunReport ---

    #[test]
    fn run_report_all_failed() {
        let mut report = RunReport::new(Mode::Tfidf, 5);
        assert!(!report.all_failed());
        report.fail("A", "boom");
        assert!(report.all_failed());
        assert!(!tfidf_report().all_failed());
    }

    #[test]
    fn ranking_terms() {
        let report = frequency_report();
        assert_eq!(report.documents[0].ranking.terms(), vec!["man", "life"]);
        assert_eq!(report.documents[0].ranking.len(), 2);
    }

    // --- WeightFileRenderer ---

    #[test]
    fn cloud_writes_weighted_words() {
        let dir = tempfile::tempdir().unwrap();
        let words: Vec<String> = ["sea", "ship", "sea", "ice", "sea", "ship"]
            .iter()
            .map(|w| w.to_string())
            .collect();

        let path = WeightFileRenderer::new(dir.path())
            .render(&words, "Voyage_wf")
            .unwrap();
        assert_eq!(path, dir.path().join("Voyage_wf.json"));

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["name"], "Voyage_wf");
        assert_eq!(json["words"][0]["word"], "sea");
        assert_eq!(json["words"][0]["count"], 3);
        assert_eq!(json["words"][0]["weight"], 1.0);
        assert_eq!(json["words"][2]["word"], "ice");
    }

    // --- ImageRenderer ---

    #[test]
    fn cloud_image_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let words: Vec<String> = ["ocean", "whale", "ocean", "harpoon", "ocean", "whale"]
            .iter()
            .map(|w| w.to_string())
            .collect();

        let path = ImageRenderer::new(&dir.path().join("clouds"))
            .size(200, 100)
            .render(&words, "Voyage_tfidf")
            .unwrap();
        assert_eq!(path, dir.path().join("clouds").join("Voyage_tfidf.png"));

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"\x89PNG\r\n\x1a\n"));
    }

    #[test]
    fn cloud_image_rejects_empty_word_list() {
        let dir = tempfile::tempdir().unwrap();
        let err = ImageRenderer::new(dir.path()).render(&[], "Empty").unwrap_err();
        assert!(err.to_string().contains("no words"));
        assert!(!dir.path().join("Empty.png").exists());
    }

    #[test]
    fn cloud_empty_word_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = WeightFileRenderer::new(&dir.path().join("nested"))
            .render(&[], "Empty")
            .unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(json["words"].as_array().unwrap().is_empty());
    }
}
