use crate::report::{Ranking, RunReport};
use std::io::Write;
use tome_core::Mode;

/// Writes a run report as plain text for a terminal.
pub struct HumanWriter;

impl HumanWriter {
    pub fn render(report: &RunReport) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        Self::write_to(&mut buf, report)?;
        Ok(String::from_utf8(buf)?)
    }

    pub fn write_to(w: &mut dyn Write, report: &RunReport) -> anyhow::Result<()> {
        let n = report.limit;

        if report.mode == Mode::Tfidf {
            for doc in &report.documents {
                writeln!(w, "Top {n} Words in {} with TF-IDF Scores:", doc.title)?;
                if let Ranking::Scored(terms) = &doc.ranking {
                    for t in terms {
                        writeln!(w, "\tWord: {}, TF-IDF: {}", t.term, score10(t.score))?;
                    }
                }
                writeln!(w)?;
            }
            writeln!(w)?;
        }

        for doc in &report.documents {
            writeln!(w, "Top {n} Words in {}:", doc.title)?;
            writeln!(w, "{}", doc.ranking.terms().join(", "))?;
            writeln!(w)?;
            writeln!(w, "Sentiment of Top {n} Words in {}:", doc.title)?;
            writeln!(w, "{}", doc.selection_sentiment)?;
            writeln!(w)?;
            if let Some(sentiment) = &doc.document_sentiment {
                writeln!(w, "Sentiment of {}:", doc.title)?;
                writeln!(w, "{sentiment}")?;
                writeln!(w)?;
            }
            writeln!(w)?;
        }

        if !report.failures.is_empty() {
            writeln!(w, "Failed documents:")?;
            for f in &report.failures {
                writeln!(w, "  {}: {}", f.title, f.reason)?;
            }
        }

        Ok(())
    }
}

/// Round to ten decimals. Whole values keep one decimal place (`0.0`).
fn score10(x: f64) -> String {
    let rounded = (x * 1e10).round() / 1e10;
    if rounded.fract() == 0.0 {
        format!("{rounded:.1}")
    } else {
        rounded.to_string()
    }
}
