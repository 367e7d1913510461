use crate::document::Document;
use crate::histogram::Histogram;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use tome_core::{Result, TomeError};
use tracing::{debug, info};

/// Resampled sequence of one document, as held by the corpus.
#[derive(Debug, Clone)]
pub struct Member {
    pub title: String,
    pub tokens: Vec<String>,
    pub counts: Histogram,
}

impl Member {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

enum Slot {
    Pending,
    Filled(Member),
    Excluded(String),
}

/// Collects corpus members for a fixed, declared set of titles.
///
/// Every declared title must be filled or excluded before [`freeze`](Self::freeze)
/// succeeds. That is the barrier between per-document preparation and scoring.
pub struct CorpusBuilder {
    slots: Vec<(String, Slot)>,
}

impl CorpusBuilder {
    /// Declare the corpus membership up front, in output order.
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            slots: titles
                .into_iter()
                .map(|t| (t.into(), Slot::Pending))
                .collect(),
        }
    }

    /// Add a prepared document's resampled sequence.
    pub fn add_document(&mut self, doc: &Document) -> Result<()> {
        self.fill(doc.title(), doc.resampled().to_vec())
    }

    /// Fill a declared title with its resampled sequence.
    pub fn fill(&mut self, title: &str, tokens: Vec<String>) -> Result<()> {
        if tokens.is_empty() {
            return Err(TomeError::EmptyVocabulary(format!(
                "{title}: cannot add an empty sequence to the corpus"
            )));
        }
        let slot = self.slot_mut(title)?;
        let counts = Histogram::from_tokens(&tokens);
        *slot = Slot::Filled(Member {
            title: title.to_string(),
            tokens,
            counts,
        });
        Ok(())
    }

    /// Drop a declared title from the corpus, recording why.
    pub fn exclude(&mut self, title: &str, reason: &str) -> Result<()> {
        let slot = self.slot_mut(title)?;
        debug!(title, reason, "excluded from corpus");
        *slot = Slot::Excluded(reason.to_string());
        Ok(())
    }

    fn slot_mut(&mut self, title: &str) -> Result<&mut Slot> {
        let (_, slot) = self
            .slots
            .iter_mut()
            .find(|(t, _)| t == title)
            .ok_or_else(|| TomeError::Config(format!("{title} is not a declared corpus title")))?;
        if !matches!(slot, Slot::Pending) {
            return Err(TomeError::Config(format!(
                "{title} was already added to the corpus"
            )));
        }
        Ok(slot)
    }

    /// Titles that were excluded, with their reasons.
    pub fn excluded(&self) -> Vec<(&str, &str)> {
        self.slots
            .iter()
            .filter_map(|(t, s)| match s {
                Slot::Excluded(reason) => Some((t.as_str(), reason.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Close membership and compute document frequencies.
    pub fn freeze(self) -> Result<Corpus> {
        let pending: Vec<&str> = self
            .slots
            .iter()
            .filter(|(_, s)| matches!(s, Slot::Pending))
            .map(|(t, _)| t.as_str())
            .collect();
        if !pending.is_empty() {
            return Err(TomeError::CorpusNotFrozen(format!(
                "still waiting on {}",
                pending.join(", ")
            )));
        }

        let members: Vec<Member> = self
            .slots
            .into_iter()
            .filter_map(|(_, s)| match s {
                Slot::Filled(member) => Some(member),
                _ => None,
            })
            .collect();
        if members.is_empty() {
            return Err(TomeError::EmptyVocabulary(
                "corpus has no members to score".to_string(),
            ));
        }

        let corpus = Corpus::from_members(members);
        info!(
            documents = corpus.len(),
            vocabulary = corpus.doc_frequencies.len(),
            "corpus frozen"
        );
        Ok(corpus)
    }
}

/// A frozen set of corpus members with precomputed document frequencies.
#[derive(Debug)]
pub struct Corpus {
    members: Vec<Member>,
    doc_frequencies: HashMap<String, usize>,
    fingerprint: String,
}

impl Corpus {
    fn from_members(members: Vec<Member>) -> Self {
        let mut doc_frequencies: HashMap<String, usize> = HashMap::new();
        for member in &members {
            for (term, _) in member.counts.iter() {
                *doc_frequencies.entry(term.to_string()).or_default() += 1;
            }
        }
        let fingerprint = fingerprint(&members);
        Self {
            members,
            doc_frequencies,
            fingerprint,
        }
    }

    /// Number of documents, `N` in the IDF formula.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn member(&self, title: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.title == title)
    }

    /// Number of members containing `term` at least once.
    pub fn doc_frequency(&self, term: &str) -> usize {
        self.doc_frequencies.get(term).copied().unwrap_or(0)
    }

    /// Hex SHA-256 over member titles and lengths.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

fn fingerprint(members: &[Member]) -> String {
    let mut entries: Vec<String> = members
        .iter()
        .map(|m| format!("{}:{}", m.title, m.len()))
        .collect();
    entries.sort();

    let mut hasher = Sha256::new();
    hasher.update(entries.join("\n").as_bytes());
    let hash: [u8; 32] = hasher.finalize().into();
    hash.iter().map(|b| format!("{b:02x}")).collect()
}
