//! Run configuration: compiled defaults, an optional TOML catalog, and
//! command-line overrides, in increasing priority.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tome_core::{Mode, Result, SourceSpec, TomeError};
use tome_text::StopWords;

/// Frequent words reported per document in frequency mode.
pub const DEFAULT_FREQUENCY_K: usize = 50;
/// Vocabulary kept per document before TF-IDF scoring.
pub const DEFAULT_TFIDF_K: usize = 500;
/// Scored words reported per document in tfidf mode.
pub const DEFAULT_TFIDF_N: usize = 50;

const DEFAULT_DOCUMENTS: &[(&str, &str)] = &[
    ("Frankenstein", "http://www.gutenberg.org/cache/epub/84/pg84.txt"),
    ("Paradise_Lost", "http://www.gutenberg.org/cache/epub/20/pg20.txt"),
    ("The_Romance_of_Lust", "http://www.gutenberg.org/cache/epub/30254/pg30254.txt"),
];

/// The documents to process plus optional tuning, as read from TOML.
///
/// ```toml
/// top_k = 500
/// top_n = 25
/// extra_stop_words = ["thou", "thee"]
///
/// [[document]]
/// title = "Frankenstein"
/// url = "http://www.gutenberg.org/cache/epub/84/pg84.txt"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub top_k: Option<usize>,
    pub top_n: Option<usize>,
    pub extra_stop_words: Vec<String>,
    #[serde(rename = "document")]
    pub documents: Vec<SourceSpec>,
}

impl Catalog {
    /// The compiled-in catalog.
    pub fn builtin() -> Self {
        Self {
            documents: DEFAULT_DOCUMENTS
                .iter()
                .map(|(title, url)| SourceSpec::new(title, url))
                .collect(),
            ..Self::default()
        }
    }

    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| TomeError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| TomeError::Config(format!("{}: {e}", path.display())))?;
        toml::from_str(&text).map_err(|e| TomeError::Config(format!("{}: {e}", path.display())))
    }
}

/// Command-line values that take priority over the catalog.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub top_k: Option<usize>,
    pub top_n: Option<usize>,
    pub extra_stop_words: Vec<String>,
    pub cache_dir: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub no_cloud: bool,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub mode: Mode,
    pub top_k: usize,
    pub top_n: usize,
    pub documents: Vec<SourceSpec>,
    pub stop_words: StopWords,
    pub cache_dir: PathBuf,
    /// Word-cloud output directory; `None` disables rendering.
    pub cloud_dir: Option<PathBuf>,
}

impl RunConfig {
    pub fn resolve(mode: Mode, catalog: Catalog, overrides: &Overrides) -> Result<Self> {
        let default_k = match mode {
            Mode::Frequency => DEFAULT_FREQUENCY_K,
            Mode::Tfidf => DEFAULT_TFIDF_K,
        };
        let top_k = overrides.top_k.or(catalog.top_k).unwrap_or(default_k);
        let top_n = overrides.top_n.or(catalog.top_n).unwrap_or(DEFAULT_TFIDF_N);

        let stop_words = StopWords::english()
            .with_extra(&catalog.extra_stop_words)
            .with_extra(&overrides.extra_stop_words);

        let cloud_dir = if overrides.no_cloud {
            None
        } else {
            Some(overrides.out_dir.clone().unwrap_or_else(|| PathBuf::from(".")))
        };

        let config = Self {
            mode,
            top_k,
            top_n,
            documents: catalog.documents,
            stop_words,
            cache_dir: overrides
                .cache_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(tome_source::DEFAULT_CACHE_DIR)),
            cloud_dir,
        };
        config.validate()?;
        Ok(config)
    }

    /// Number of terms reported per document.
    pub fn limit(&self) -> usize {
        match self.mode {
            Mode::Frequency => self.top_k,
            Mode::Tfidf => self.top_n,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(TomeError::Config("top_k must be at least 1".to_string()));
        }
        if self.top_n == 0 {
            return Err(TomeError::Config("top_n must be at least 1".to_string()));
        }
        if self.documents.is_empty() {
            return Err(TomeError::Config("catalog has no documents".to_string()));
        }
        let mut seen = HashSet::new();
        for doc in &self.documents {
            if doc.title.is_empty() {
                return Err(TomeError::Config("document title is empty".to_string()));
            }
            if !seen.insert(doc.title.as_str()) {
                return Err(TomeError::Config(format!(
                    "duplicate document title {}",
                    doc.title
                )));
            }
        }
        Ok(())
    }
}
