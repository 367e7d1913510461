//! Batch driver: fetch, prepare, score, and collect a report per document.

use crate::config::RunConfig;
use rayon::prelude::*;
use tome_core::{Mode, Result, SourceSpec};
use tome_render::{CloudRenderer, DocumentReport, Ranking, RunReport};
use tome_score::{CorpusBuilder, Document, Ranker, SentimentAnalyzer, TfidfScorer};
use tome_source::{BoilerplateStripper, TextSource};
use tracing::{info, warn};

pub struct Pipeline<'a> {
    config: &'a RunConfig,
    source: &'a (dyn TextSource + Sync),
    stripper: BoilerplateStripper,
    analyzer: &'a dyn SentimentAnalyzer,
    cloud: Option<&'a dyn CloudRenderer>,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        config: &'a RunConfig,
        source: &'a (dyn TextSource + Sync),
        analyzer: &'a dyn SentimentAnalyzer,
    ) -> Self {
        Self {
            config,
            source,
            stripper: BoilerplateStripper::gutenberg(),
            analyzer,
            cloud: None,
        }
    }

    pub fn stripper(mut self, stripper: BoilerplateStripper) -> Self {
        self.stripper = stripper;
        self
    }

    pub fn cloud(mut self, cloud: Option<&'a dyn CloudRenderer>) -> Self {
        self.cloud = cloud;
        self
    }

    pub fn run(&self) -> RunReport {
        match self.config.mode {
            Mode::Frequency => self.run_frequency(),
            Mode::Tfidf => self.run_tfidf(),
        }
    }

    /// Fetch and prepare every catalog document. Results keep catalog order.
    pub fn prepare_all(&self) -> Vec<(String, Result<Document>)> {
        let (config, source, stripper) = (self.config, self.source, &self.stripper);
        config
            .documents
            .par_iter()
            .map(|spec| (spec.title.clone(), prepare(config, source, stripper, spec)))
            .collect()
    }

    fn run_frequency(&self) -> RunReport {
        let mut report = RunReport::new(Mode::Frequency, self.config.limit());

        for (title, prepared) in self.prepare_all() {
            let doc = match prepared {
                Ok(doc) => doc,
                Err(e) => {
                    warn!(title = %title, error = %e, "document failed");
                    report.fail(&title, e);
                    continue;
                }
            };

            let top = doc.top_terms(self.config.top_k);
            let ranking = Ranking::Frequent(top);
            let selection_sentiment = self.analyzer.polarity_of_tokens(&ranking.terms());
            let document_sentiment = self.analyzer.polarity(doc.body());
            self.render_cloud(doc.tokens(), &title, Mode::Frequency);

            report.documents.push(DocumentReport {
                title,
                ranking,
                selection_sentiment,
                document_sentiment: Some(document_sentiment),
            });
        }

        report
    }

    fn run_tfidf(&self) -> RunReport {
        let mut report = RunReport::new(Mode::Tfidf, self.config.limit());
        let prepared = self.prepare_all();

        let mut builder = CorpusBuilder::new(prepared.iter().map(|(t, _)| t.as_str()));
        for (title, result) in &prepared {
            let added = match result {
                Ok(doc) => builder.add_document(doc).map_err(|e| e.to_string()),
                Err(e) => Err(e.to_string()),
            };
            if let Err(reason) = added {
                warn!(title = %title, error = %reason, "document excluded from corpus");
                if let Err(e) = builder.exclude(title, &reason) {
                    warn!(title = %title, error = %e, "could not exclude document");
                }
                report.fail(title, reason);
            }
        }

        let corpus = match builder.freeze() {
            Ok(corpus) => corpus,
            Err(e) => {
                warn!(error = %e, "nothing to score");
                return report;
            }
        };
        report.fingerprint = Some(corpus.fingerprint().to_string());

        let scorer = TfidfScorer::new(&corpus);
        let ranker = Ranker::new(self.config.top_n);
        for member in corpus.members() {
            let table = match scorer.score_member(member) {
                Ok(table) => table,
                Err(e) => {
                    report.fail(&member.title, e);
                    continue;
                }
            };
            let ranked = ranker.rank(&table);
            info!(title = %member.title, scored = table.len(), "ranked");

            let ranking = Ranking::Scored(ranked);
            let terms = ranking.terms();
            let selection_sentiment = self.analyzer.polarity_of_tokens(&terms);
            self.render_cloud(&terms, &member.title, Mode::Tfidf);

            report.documents.push(DocumentReport {
                title: member.title.clone(),
                ranking,
                selection_sentiment,
                document_sentiment: None,
            });
        }

        report
    }

    fn render_cloud(&self, words: &[String], title: &str, mode: Mode) {
        let Some(cloud) = self.cloud else {
            return;
        };
        let name = format!("{title}_{}", mode.artifact_suffix());
        match cloud.render(words, &name) {
            Ok(path) => info!(path = %path.display(), "word cloud written"),
            Err(e) => warn!(title = %title, error = %e, "word cloud failed"),
        }
    }
}

fn prepare(
    config: &RunConfig,
    source: &(dyn TextSource + Sync),
    stripper: &BoilerplateStripper,
    spec: &SourceSpec,
) -> Result<Document> {
    let body = tome_source::body_text(source, stripper, &spec.url, &spec.cache_key())?;
    Document::prepare(&spec.title, body, &config.stop_words, config.top_k)
}
