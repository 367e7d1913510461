use crate::report::{Ranking, RunReport};
use serde::Serialize;
use std::io::Write;
use tome_core::{FrequentTerm, ScoredTerm, Sentiment};

/// Writes a run report as JSON lines: header, one line per document, one line
/// per failure, footer.
pub struct JsonlWriter;

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Header<'a> {
    version: &'a str,
    mode: &'a str,
    limit: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    fingerprint: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct DocumentEntry<'a> {
    title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    frequent: Option<&'a [FrequentTerm]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    scored: Option<&'a [ScoredTerm]>,
    selection_sentiment: Sentiment,
    #[serde(skip_serializing_if = "Option::is_none")]
    document_sentiment: Option<Sentiment>,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct FailureEntry<'a> {
    title: &'a str,
    error: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Footer {
    total_documents: usize,
    failed_documents: usize,
}

impl JsonlWriter {
    pub fn render(report: &RunReport) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        Self::write_to(&mut buf, report)?;
        Ok(String::from_utf8(buf)?)
    }

    pub fn write_to(writer: &mut dyn Write, report: &RunReport) -> anyhow::Result<()> {
        let header = Header {
            version: "1",
            mode: report.mode.as_str(),
            limit: report.limit,
            fingerprint: report.fingerprint.as_deref(),
        };
        serde_json::to_writer(&mut *writer, &header)?;
        writeln!(writer)?;

        for doc in &report.documents {
            let (frequent, scored) = match &doc.ranking {
                Ranking::Frequent(terms) => (Some(terms.as_slice()), None),
                Ranking::Scored(terms) => (None, Some(terms.as_slice())),
            };
            let entry = DocumentEntry {
                title: &doc.title,
                frequent,
                scored,
                selection_sentiment: doc.selection_sentiment,
                document_sentiment: doc.document_sentiment,
            };
            serde_json::to_writer(&mut *writer, &entry)?;
            writeln!(writer)?;
        }

        for failure in &report.failures {
            let entry = FailureEntry {
                title: &failure.title,
                error: &failure.reason,
            };
            serde_json::to_writer(&mut *writer, &entry)?;
            writeln!(writer)?;
        }

        let footer = Footer {
            total_documents: report.documents.len() + report.failures.len(),
            failed_documents: report.failures.len(),
        };
        serde_json::to_writer(&mut *writer, &footer)?;
        writeln!(writer)?;

        Ok(())
    }
}
